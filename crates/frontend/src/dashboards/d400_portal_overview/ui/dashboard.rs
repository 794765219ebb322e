use crate::layout::global_context::use_portal;
use crate::shared::components::row_actions::InertRowActions;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{CourseStatusBadge, JobStatusBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::shared::portal_state::DASHBOARD_RECENT_LIMIT;
use contracts::shared::ActiveView;
use leptos::prelude::*;
use thaw::Card;

/// Стартовый экран: счётчики, недавние курсы и вакансии, быстрые действия
#[component]
pub fn PortalDashboard() -> impl IntoView {
    let portal = use_portal();
    let summary = Memo::new(move |_| portal.with_state(|s| s.dashboard_summary()));
    let recent_courses = move || portal.with_state(|s| s.recent_courses(DASHBOARD_RECENT_LIMIT));
    let recent_jobs = move || portal.with_state(|s| s.recent_jobs(DASHBOARD_RECENT_LIMIT));

    view! {
        <PageFrame page_id="d400_portal_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">"Chào mừng đến với Cổng Doanh nghiệp"</h2>
                    <p class="page__subtitle">
                        "Quản lý tuyển dụng và đào tạo nhân tài cho doanh nghiệp của bạn"
                    </p>
                </div>
            </div>

            <div class="page__content">
                // Три счётчика из четырёх: заглушки демо-данных
                <div class="stat-grid">
                    <StatCard
                        label="Tin tuyển dụng đang đăng"
                        icon_name="file-text"
                        accent="blue"
                        value=Signal::derive(move || summary.get().active_postings as u64)
                    />
                    <StatCard
                        label="Ứng viên quan tâm"
                        icon_name="users"
                        accent="green"
                        value=Signal::derive(move || summary.get().interested_candidates as u64)
                    />
                    <StatCard
                        label="Khóa đào tạo"
                        icon_name="graduation-cap"
                        accent="purple"
                        value=Signal::derive(move || summary.get().course_count as u64)
                    />
                    <StatCard
                        label="Đã tuyển dụng"
                        icon_name="briefcase"
                        accent="orange"
                        value=Signal::derive(move || summary.get().hired as u64)
                    />
                </div>

                <div class="dashboard-columns">
                    <Card>
                        <div class="panel__header">
                            <h3 class="panel__title">"Khóa đào tạo gần đây"</h3>
                            <button
                                class="link-button"
                                on:click=move |_| portal.navigate(ActiveView::Courses)
                            >
                                "Xem tất cả"
                                {icon("chevron-right")}
                            </button>
                        </div>
                        <div class="panel__body">
                            {move || recent_courses().into_iter().map(|course| view! {
                                <div class="recent-row">
                                    <div class="recent-row__main">
                                        <h4 class="recent-row__title">{course.name}</h4>
                                        <div class="recent-row__meta">
                                            <span>{icon("map-pin")}{course.organization}</span>
                                            <span>
                                                {icon("users")}
                                                {format!("{} ứng viên", course.registered_students)}
                                            </span>
                                        </div>
                                    </div>
                                    <div class="recent-row__aside">
                                        <CourseStatusBadge code=course.status.code() />
                                        <InertRowActions />
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </Card>

                    <Card>
                        <div class="panel__header">
                            <h3 class="panel__title">"Tin tuyển dụng của bạn"</h3>
                            <button
                                class="link-button"
                                on:click=move |_| portal.navigate(ActiveView::Jobs)
                            >
                                "Xem tất cả"
                                {icon("chevron-right")}
                            </button>
                        </div>
                        <div class="panel__body">
                            {move || recent_jobs().into_iter().map(|job| view! {
                                <div class="recent-row">
                                    <div class="recent-row__main">
                                        <h4 class="recent-row__title">{job.title}</h4>
                                        <div class="recent-row__meta">
                                            <span>{icon("map-pin")}{job.location}</span>
                                            <span>{icon("dollar")}{job.salary}</span>
                                        </div>
                                    </div>
                                    <div class="recent-row__aside">
                                        <JobStatusBadge status=job.status />
                                        <InertRowActions />
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </Card>
                </div>

                <Card>
                    <div class="panel__header">
                        <h3 class="panel__title">"Thao tác nhanh"</h3>
                    </div>
                    <div class="quick-actions">
                        <button
                            class="quick-action"
                            on:click=move |_| portal.navigate(ActiveView::CreateCourse)
                        >
                            <div class="quick-action__icon quick-action__icon--blue">{icon("plus")}</div>
                            <h4>"Đăng khóa đào tạo mới"</h4>
                            <p>"Tạo khóa đào tạo mới"</p>
                        </button>
                        <button
                            class="quick-action"
                            on:click=move |_| portal.navigate(ActiveView::Courses)
                        >
                            <div class="quick-action__icon quick-action__icon--green">{icon("search")}</div>
                            <h4>"Tìm khóa đào tạo"</h4>
                            <p>"Tìm kiếm nhân tài phù hợp"</p>
                        </button>
                        // Отчёты пока не реализованы
                        <button class="quick-action">
                            <div class="quick-action__icon quick-action__icon--orange">{icon("bar-chart")}</div>
                            <h4>"Báo cáo"</h4>
                            <p>"Xem báo cáo tuyển dụng"</p>
                        </button>
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}
