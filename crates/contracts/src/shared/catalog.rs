use crate::domain::a001_training_course::{Course, CourseDraft, CourseFilter, CourseId};

/// Каталог курсов в памяти. Записи хранятся в порядке добавления.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Id следующего курса: количество + 1.
    ///
    /// Удаления нет, поэтому номер совпадает с позицией в списке.
    pub fn next_id(&self) -> CourseId {
        CourseId(self.courses.len() as u32 + 1)
    }

    /// Создать курс из черновика и добавить в конец каталога
    pub fn create(&mut self, draft: &CourseDraft) -> Course {
        let course = Course::from_draft(self.next_id(), draft);
        self.courses.push(course.clone());
        course
    }

    pub fn filtered(&self, filter: &CourseFilter) -> Vec<Course> {
        filter.apply(&self.courses).into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_training_course::CourseDraftField;
    use crate::enums::CourseStatus;
    use crate::shared::portal_seed::PortalSeed;

    fn seeded() -> CourseCatalog {
        CourseCatalog::new(PortalSeed::embedded().unwrap().courses)
    }

    #[test]
    fn test_create_assigns_count_plus_one() {
        let mut catalog = seeded();
        let before = catalog.len();

        let created = catalog.create(&CourseDraft::blank());

        assert_eq!(created.id, CourseId(before as u32 + 1));
        assert_eq!(catalog.len(), before + 1);
        assert_eq!(catalog.courses().last(), Some(&created));
    }

    #[test]
    fn test_create_ignores_draft_lifecycle() {
        let mut catalog = CourseCatalog::default();
        let mut draft = CourseDraft::blank();
        draft.set_field(CourseDraftField::Name, "Test");
        draft.set_field(CourseDraftField::Organization, "Org1");
        draft.objectives = vec![String::new(), String::new()];

        let created = catalog.create(&draft);

        assert_eq!(created.id, CourseId(1));
        assert_eq!(created.name, "Test");
        assert_eq!(created.organization, "Org1");
        assert_eq!(created.registered_students, 0);
        assert_eq!(created.status, CourseStatus::Recruiting);
        assert!(created.objectives.is_empty());
    }

    #[test]
    fn test_create_preserves_insertion_order() {
        let mut catalog = seeded();
        let first = catalog.create(&CourseDraft::blank());
        let second = catalog.create(&CourseDraft::blank());
        let ids: Vec<u32> = catalog.courses().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2, first.id.0, second.id.0]);
        assert_eq!(catalog.get(second.id), Some(&second));
    }

    #[test]
    fn test_filtered_seed_scenario() {
        let catalog = seeded();
        let visible = catalog.filtered(&CourseFilter::new("quản lý", "recruiting"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Quản lý dự án");
    }
}
