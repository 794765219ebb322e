//! Состояние приложения и переходы по действиям пользователя.
//!
//! Каждое действие выполняется одним синхронным переходом `PortalState::apply`.
//! UI-слой хранит `PortalState` в сигнале и вызывает `apply` внутри `update`.

use super::catalog::CourseCatalog;
use super::portal_seed::{CompanyProfile, DashboardPlaceholders, PortalSeed};
use crate::domain::a001_training_course::{
    Course, CourseDraft, CourseDraftField, CourseFilter, CourseId, StatusFilter,
};
use crate::domain::a002_job_posting::Job;

/// Сколько записей показывать в блоках "недавние" на дашборде
pub const DASHBOARD_RECENT_LIMIT: usize = 3;

/// Основной экран портала
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Courses,
    Jobs,
    CreateCourse,
}

impl ActiveView {
    /// Код экрана для URL (?view=...)
    pub fn code(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "dashboard",
            ActiveView::Courses => "courses",
            ActiveView::Jobs => "jobs",
            ActiveView::CreateCourse => "create-course",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "Dashboard",
            ActiveView::Courses => "Quản lý đào tạo",
            ActiveView::Jobs => "Quản lý tuyển dụng",
            ActiveView::CreateCourse => "Đăng khóa đào tạo",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dashboard" => Some(ActiveView::Dashboard),
            "courses" => Some(ActiveView::Courses),
            "jobs" => Some(ActiveView::Jobs),
            "create-course" => Some(ActiveView::CreateCourse),
            _ => None,
        }
    }

    /// Вкладки навигационной панели. Форма создания открывается кнопками.
    pub fn nav_tabs() -> [ActiveView; 3] {
        [ActiveView::Dashboard, ActiveView::Courses, ActiveView::Jobs]
    }
}

/// Действие пользователя
#[derive(Debug, Clone, PartialEq)]
pub enum PortalAction {
    Navigate(ActiveView),
    SetSearchQuery(String),
    SetStatusFilter(String),
    OpenCourseDetail(CourseId),
    CloseCourseDetail,
    EditDraftField(CourseDraftField, String),
    EditObjective { index: usize, value: String },
    AddObjectiveAfter(usize),
    CancelCreateCourse,
    SubmitCourse,
}

/// Сводка для карточек дашборда
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub active_postings: u32,
    pub interested_candidates: u32,
    pub course_count: usize,
    pub hired: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortalState {
    pub active_view: ActiveView,
    pub catalog: CourseCatalog,
    jobs: Vec<Job>,
    pub draft: CourseDraft,
    pub filter: CourseFilter,
    pub selected_course: Option<CourseId>,
    pub company: CompanyProfile,
    placeholders: DashboardPlaceholders,
}

impl Default for PortalState {
    fn default() -> Self {
        Self::from_seed(PortalSeed::default())
    }
}

impl PortalState {
    pub fn from_seed(seed: PortalSeed) -> Self {
        Self {
            active_view: ActiveView::default(),
            catalog: CourseCatalog::new(seed.courses),
            jobs: seed.jobs,
            draft: CourseDraft::blank(),
            filter: CourseFilter::default(),
            selected_course: None,
            company: seed.company,
            placeholders: seed.dashboard,
        }
    }

    /// Применить действие. Возвращает созданный курс для `SubmitCourse`.
    pub fn apply(&mut self, action: PortalAction) -> Option<Course> {
        match action {
            PortalAction::Navigate(view) => self.active_view = view,
            PortalAction::SetSearchQuery(query) => self.filter.query = query,
            PortalAction::SetStatusFilter(code) => {
                self.filter.status = StatusFilter::from_code(&code)
            }
            PortalAction::OpenCourseDetail(id) => self.selected_course = Some(id),
            PortalAction::CloseCourseDetail => self.selected_course = None,
            PortalAction::EditDraftField(field, raw) => self.draft.set_field(field, &raw),
            PortalAction::EditObjective { index, value } => {
                self.draft.set_objective(index, &value)
            }
            PortalAction::AddObjectiveAfter(index) => {
                self.draft.append_objective_after(index);
            }
            PortalAction::CancelCreateCourse => {
                self.draft = CourseDraft::blank();
                self.active_view = ActiveView::Courses;
            }
            PortalAction::SubmitCourse => {
                let created = self.catalog.create(&self.draft);
                self.active_view = ActiveView::Courses;
                self.draft = CourseDraft::blank();
                return Some(created);
            }
        }
        None
    }

    /// Курсы, видимые в списке с текущим поиском и фильтром
    pub fn visible_courses(&self) -> Vec<Course> {
        self.catalog.filtered(&self.filter)
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.selected_course.and_then(|id| self.catalog.get(id))
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn recent_courses(&self, limit: usize) -> Vec<Course> {
        self.catalog.courses().iter().take(limit).cloned().collect()
    }

    pub fn recent_jobs(&self, limit: usize) -> Vec<Job> {
        self.jobs.iter().take(limit).cloned().collect()
    }

    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary {
            active_postings: self.placeholders.active_postings,
            interested_candidates: self.placeholders.interested_candidates,
            course_count: self.catalog.len(),
            hired: self.placeholders.hired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CourseStatus;

    fn seeded() -> PortalState {
        PortalState::from_seed(PortalSeed::embedded().unwrap())
    }

    fn fill_draft(state: &mut PortalState, name: &str, org: &str) {
        state.apply(PortalAction::EditDraftField(CourseDraftField::Name, name.into()));
        state.apply(PortalAction::EditDraftField(
            CourseDraftField::Organization,
            org.into(),
        ));
    }

    #[test]
    fn test_initial_state() {
        let state = seeded();
        assert_eq!(state.active_view, ActiveView::Dashboard);
        assert_eq!(state.selected_course, None);
        assert_eq!(state.draft, CourseDraft::blank());
        assert_eq!(state.visible_courses().len(), 2);
    }

    #[test]
    fn test_navigation_reaches_every_view() {
        let mut state = seeded();
        for view in [
            ActiveView::Jobs,
            ActiveView::CreateCourse,
            ActiveView::Courses,
            ActiveView::Dashboard,
        ] {
            state.apply(PortalAction::Navigate(view));
            assert_eq!(state.active_view, view);
        }
    }

    #[test]
    fn test_submit_creates_course_and_resets_form() {
        let mut state = seeded();
        state.apply(PortalAction::Navigate(ActiveView::CreateCourse));
        fill_draft(&mut state, "Test", "Org1");
        state.apply(PortalAction::AddObjectiveAfter(0));
        state.apply(PortalAction::EditDraftField(CourseDraftField::Fee, "abc".into()));

        let before = state.catalog.len();
        let created = state.apply(PortalAction::SubmitCourse).unwrap();

        assert_eq!(created.id, CourseId(before as u32 + 1));
        assert_eq!(created.name, "Test");
        assert_eq!(created.fee, 0);
        assert!(created.objectives.is_empty());
        assert_eq!(created.status, CourseStatus::Recruiting);
        assert_eq!(state.active_view, ActiveView::Courses);
        assert_eq!(state.draft, CourseDraft::blank());
        assert_eq!(state.dashboard_summary().course_count, before + 1);
    }

    #[test]
    fn test_objective_rows_flow_into_created_course() {
        let mut state = seeded();
        state.apply(PortalAction::EditObjective {
            index: 0,
            value: "Agile".into(),
        });
        state.apply(PortalAction::AddObjectiveAfter(0));
        state.apply(PortalAction::AddObjectiveAfter(1));
        state.apply(PortalAction::EditObjective {
            index: 2,
            value: "Scrum".into(),
        });
        assert_eq!(state.draft.objectives.len(), 3);

        let created = state.apply(PortalAction::SubmitCourse).unwrap();
        assert_eq!(created.objectives, vec!["Agile", "Scrum"]);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut state = seeded();
        state.apply(PortalAction::Navigate(ActiveView::CreateCourse));
        fill_draft(&mut state, "Draft", "Org");

        state.apply(PortalAction::CancelCreateCourse);

        assert_eq!(state.draft, CourseDraft::blank());
        assert_eq!(state.active_view, ActiveView::Courses);
        assert_eq!(state.catalog.len(), 2);
    }

    #[test]
    fn test_search_scenario_on_seed() {
        let mut state = seeded();
        state.apply(PortalAction::Navigate(ActiveView::Courses));
        state.apply(PortalAction::SetSearchQuery("quản lý".into()));
        state.apply(PortalAction::SetStatusFilter("recruiting".into()));

        let visible = state.visible_courses();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Quản lý dự án");

        state.apply(PortalAction::SetStatusFilter("ongoing".into()));
        assert!(state.visible_courses().is_empty());
    }

    #[test]
    fn test_detail_open_and_close_leaves_list_untouched() {
        let mut state = seeded();
        state.apply(PortalAction::Navigate(ActiveView::Courses));
        let courses_before = state.catalog.clone();

        state.apply(PortalAction::OpenCourseDetail(CourseId(2)));
        assert_eq!(
            state.selected_course().map(|c| c.name.as_str()),
            Some("Quản lý dự án")
        );
        assert_eq!(state.active_view, ActiveView::Courses);

        state.apply(PortalAction::CloseCourseDetail);
        assert_eq!(state.selected_course, None);
        assert_eq!(state.catalog, courses_before);
    }

    #[test]
    fn test_dashboard_counters_are_placeholders_except_courses() {
        let state = seeded();
        let summary = state.dashboard_summary();
        assert_eq!(summary.active_postings, 12);
        assert_eq!(summary.interested_candidates, 84);
        assert_eq!(summary.hired, 23);
        assert_eq!(summary.course_count, 2);
        assert_eq!(state.recent_jobs(DASHBOARD_RECENT_LIMIT).len(), 3);
        assert_eq!(state.recent_courses(DASHBOARD_RECENT_LIMIT).len(), 2);
    }

    #[test]
    fn test_view_codes_round_trip() {
        for view in [
            ActiveView::Dashboard,
            ActiveView::Courses,
            ActiveView::Jobs,
            ActiveView::CreateCourse,
        ] {
            assert_eq!(ActiveView::from_code(view.code()), Some(view));
        }
        assert_eq!(ActiveView::from_code("settings"), None);
    }
}
