pub mod global_context;
pub mod header;

use crate::dashboards::d400_portal_overview::ui::PortalDashboard;
use crate::domain::a001_training_course::ui::create::CourseCreateForm;
use crate::domain::a001_training_course::ui::details::CourseDetails;
use crate::domain::a001_training_course::ui::list::CourseList;
use crate::domain::a002_job_posting::ui::list::JobList;
use contracts::shared::ActiveView;
use global_context::use_portal;
use header::{Header, NavBar};
use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |               Header                     |
/// +------------------------------------------+
/// |               NavBar                     |
/// +------------------------------------------+
/// |     active view (one of four screens)    |
/// +------------------------------------------+
///   + course details overlay when selected
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let portal = use_portal();

    // Initialize router integration. This runs once when the component is created.
    portal.init_router_integration();

    // Экран пересоздаётся только при смене вида, не при вводе в форме
    let active_view = Memo::new(move |_| portal.active_view());
    let has_selection = move || portal.with_state(|s| s.selected_course().is_some());

    view! {
        <div class="app-layout">
            <Header />
            <NavBar />

            <main class="app-main">
                {move || match active_view.get() {
                    ActiveView::Dashboard => view! { <PortalDashboard /> }.into_any(),
                    ActiveView::Courses => view! { <CourseList /> }.into_any(),
                    ActiveView::Jobs => view! { <JobList /> }.into_any(),
                    ActiveView::CreateCourse => view! { <CourseCreateForm /> }.into_any(),
                }}
            </main>

            <Show when=has_selection>
                <CourseDetails />
            </Show>
        </div>
    }
}
