use crate::layout::global_context::use_portal;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::InertRowActions;
use crate::shared::components::ui::CourseStatusBadge;
use crate::shared::date_utils::format_date_range;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_enrollment, format_fee};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_training_course::{Course, StatusFilter};
use contracts::domain::common::AggregateRoot;
use contracts::shared::{ActiveView, PortalAction};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Card, Input, Select};

#[derive(Clone, Debug, PartialEq)]
pub struct CourseRow {
    pub course: Course,
    pub period: String,
    pub enrollment: String,
    pub fee: String,
}

impl From<Course> for CourseRow {
    fn from(course: Course) -> Self {
        Self {
            period: format_date_range(&course.start_date, &course.end_date),
            enrollment: format_enrollment(course.registered_students, course.max_students),
            fee: format_fee(course.fee),
            course,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CourseList() -> impl IntoView {
    let portal = use_portal();

    // Поля поиска живут в своих сигналах и пробрасываются в состояние портала
    let (initial_query, initial_status) =
        portal.state.with_untracked(|s| (s.filter.query.clone(), s.filter.status.code()));
    let query = RwSignal::new(initial_query);
    let status = RwSignal::new(initial_status);

    Effect::new(move |_| portal.dispatch(PortalAction::SetSearchQuery(query.get())));
    Effect::new(move |_| portal.dispatch(PortalAction::SetStatusFilter(status.get())));

    let rows = Memo::new(move |_| {
        portal
            .with_state(|s| s.visible_courses())
            .into_iter()
            .map(CourseRow::from)
            .collect::<Vec<_>>()
    });

    let page_id = format!("{}--{}", Course::full_name(), PAGE_CAT_LIST);

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <PageHeader
                title="Quản lý khóa đào tạo"
                subtitle="Quản lý tất cả các khóa đào tạo của doanh nghiệp"
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| portal.navigate(ActiveView::CreateCourse)
                >
                    {icon("plus")}
                    "Đăng khóa mới"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Card>
                    <div class="filter-panel">
                        <div class="filter-panel__search">
                            <span class="filter-panel__search-icon">{icon("search")}</span>
                            <Input
                                value=query
                                placeholder="Tìm kiếm theo tên khóa học hoặc đơn vị tổ chức..."
                            />
                        </div>
                        <div class="filter-panel__status">
                            <Select value=status>
                                {StatusFilter::options().into_iter().map(|(code, label)| view! {
                                    <option value=code>{label}</option>
                                }).collect_view()}
                            </Select>
                        </div>
                    </div>
                </Card>

                <Card>
                    <div class="panel__header">
                        <h3 class="panel__title">
                            {move || format!("{} ({})", Course::list_name(), rows.get().len())}
                        </h3>
                    </div>
                    <div class="list">
                        <For
                            each=move || rows.get()
                            key=|row| row.course.id
                            children=move |row: CourseRow| {
                                let id = row.course.id;
                                view! {
                                    <div class="list__row">
                                        <div class="list__main">
                                            <div class="list__title-line">
                                                <h4 class="list__title">{row.course.name.clone()}</h4>
                                                <CourseStatusBadge code=row.course.status.code() />
                                            </div>
                                            <div class="list__meta-grid">
                                                <span>{icon("building")}{row.course.organization.clone()}</span>
                                                <span>{icon("map-pin")}{row.course.location.clone()}</span>
                                                <span>{icon("calendar")}{row.period.clone()}</span>
                                                <span>{icon("users")}{row.enrollment.clone()}</span>
                                            </div>
                                            <div class="list__meta-line">
                                                <span>{icon("target")}{row.course.target_audience.clone()}</span>
                                                <span>{icon("dollar")}{row.fee.clone()}</span>
                                            </div>
                                        </div>
                                        <InertRowActions
                                            on_view=Callback::new(move |_| {
                                                portal.dispatch(PortalAction::OpenCourseDetail(id))
                                            })
                                        />
                                    </div>
                                }
                            }
                        />
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}
