use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_training_course::{CourseDraft, CourseDraftField};
use contracts::shared::PortalAction;
use leptos::prelude::*;

/// ViewModel формы создания курса.
///
/// Черновик хранится в `PortalState`, модель только читает его
/// и отправляет действия.
#[derive(Clone, Copy)]
pub struct CourseCreateViewModel {
    portal: AppGlobalContext,
    /// Количество строк целей, ключи строк в `<For>`
    pub objective_count: Memo<usize>,
}

impl CourseCreateViewModel {
    pub fn new(portal: AppGlobalContext) -> Self {
        let objective_count = Memo::new(move |_| portal.with_state(|s| s.draft.objectives.len()));
        Self {
            portal,
            objective_count,
        }
    }

    pub fn with_draft<R>(&self, f: impl FnOnce(&CourseDraft) -> R) -> R {
        self.portal.with_state(|s| f(&s.draft))
    }

    pub fn field_value(&self, field: CourseDraftField) -> String {
        self.with_draft(|d| d.field_value(field))
    }

    pub fn objective_value(&self, index: usize) -> String {
        self.with_draft(|d| d.objectives.get(index).cloned().unwrap_or_default())
    }

    pub fn is_last_objective(&self, index: usize) -> bool {
        self.with_draft(|d| d.is_last_objective(index))
    }

    pub fn set_field(&self, field: CourseDraftField, raw: String) {
        self.portal
            .dispatch(PortalAction::EditDraftField(field, raw));
    }

    pub fn set_objective(&self, index: usize, value: String) {
        self.portal
            .dispatch(PortalAction::EditObjective { index, value });
    }

    pub fn add_objective_after(&self, index: usize) {
        self.portal.dispatch(PortalAction::AddObjectiveAfter(index));
    }

    pub fn cancel(&self) {
        self.portal.dispatch(PortalAction::CancelCreateCourse);
    }

    pub fn submit(&self) {
        self.portal.dispatch(PortalAction::SubmitCourse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::{ActiveView, PortalSeed};
    use leptos::reactive::owner::Owner;

    fn open_form() -> (AppGlobalContext, CourseCreateViewModel) {
        let portal = AppGlobalContext::new(PortalSeed::embedded().unwrap());
        portal.navigate(ActiveView::CreateCourse);
        (portal, CourseCreateViewModel::new(portal))
    }

    fn course_count(portal: &AppGlobalContext) -> usize {
        portal.with_state(|s| s.catalog.len())
    }

    #[test]
    fn test_cancel_does_not_create_course() {
        Owner::new().with(|| {
            let (portal, vm) = open_form();
            vm.set_field(CourseDraftField::Name, "Nháp".into());

            vm.cancel();

            assert_eq!(course_count(&portal), 2);
            assert_eq!(portal.active_view(), ActiveView::Courses);
            assert_eq!(vm.field_value(CourseDraftField::Name), "");
        });
    }

    #[test]
    fn test_editing_rows_does_not_create_course() {
        Owner::new().with(|| {
            let (portal, vm) = open_form();
            vm.set_objective(0, "Agile".into());
            vm.add_objective_after(0);

            assert_eq!(vm.objective_count.get(), 2);
            assert!(vm.is_last_objective(1));
            assert_eq!(course_count(&portal), 2);
            assert_eq!(portal.active_view(), ActiveView::CreateCourse);
        });
    }

    #[test]
    fn test_submit_creates_exactly_one_course() {
        Owner::new().with(|| {
            let (portal, vm) = open_form();
            vm.set_field(CourseDraftField::Name, "Test".into());
            vm.set_field(CourseDraftField::Fee, "12.5".into());

            vm.submit();

            assert_eq!(course_count(&portal), 3);
            let created = portal.with_state(|s| s.catalog.courses().last().cloned()).unwrap();
            assert_eq!(created.name, "Test");
            assert_eq!(created.fee, 12);
            assert_eq!(portal.active_view(), ActiveView::Courses);
        });
    }
}
