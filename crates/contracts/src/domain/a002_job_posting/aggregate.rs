use crate::domain::common::AggregateRoot;
use crate::enums::JobStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор вакансии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub u32);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Вакансия предприятия. Только демонстрационные данные, без создания и правки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub location: String,
    /// Вилка зарплаты свободным текстом, например "15-25 triệu"
    pub salary: String,
    pub applicants: u32,
    pub status: JobStatus,
    pub posted_date: String,
}

impl AggregateRoot for Job {
    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "job_posting"
    }

    fn list_name() -> &'static str {
        "Danh sách tin tuyển dụng"
    }
}
