use super::draft::CourseDraft;
use crate::domain::common::AggregateRoot;
use crate::enums::CourseStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор учебного курса (последовательный номер, начиная с 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(pub u32);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Учебный курс, опубликованный предприятием
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub organization: String,
    pub location: String,
    /// Дата начала в формате date picker'а (YYYY-MM-DD), может быть пустой
    pub start_date: String,
    pub end_date: String,
    pub target_audience: String,
    /// Стоимость в VND, 0 = бесплатно
    pub fee: u64,
    pub max_students: u32,
    pub registered_students: u32,
    pub status: CourseStatus,
    pub description: String,
    pub instructor: String,
    pub objectives: Vec<String>,
}

impl Course {
    /// Создать курс из черновика формы.
    ///
    /// Новый курс всегда открыт для набора и не имеет записанных слушателей;
    /// пустые цели обучения отбрасываются.
    pub fn from_draft(id: CourseId, draft: &CourseDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            organization: draft.organization.clone(),
            location: draft.location.clone(),
            start_date: draft.start_date.clone(),
            end_date: draft.end_date.clone(),
            target_audience: draft.target_audience.clone(),
            fee: draft.fee,
            max_students: draft.max_students,
            registered_students: 0,
            status: CourseStatus::Recruiting,
            description: draft.description.clone(),
            instructor: draft.instructor.clone(),
            objectives: draft.cleaned_objectives(),
        }
    }

    /// Ключ поиска: совпадение по названию или организации без учёта регистра
    pub fn matches_query(&self, folded_query: &str) -> bool {
        folded_query.is_empty()
            || self.name.to_lowercase().contains(folded_query)
            || self.organization.to_lowercase().contains(folded_query)
    }
}

impl AggregateRoot for Course {
    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "training_course"
    }

    fn list_name() -> &'static str {
        "Danh sách khóa đào tạo"
    }
}
