use crate::layout::global_context::use_portal;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::InertRowActions;
use crate::shared::components::ui::JobStatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_job_posting::Job;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Card};

/// Список вакансий. Только просмотр: создание и правка не подключены.
#[component]
pub fn JobList() -> impl IntoView {
    let portal = use_portal();
    let jobs = Memo::new(move |_| portal.with_state(|s| s.jobs().to_vec()));

    let page_id = format!("{}--{}", Job::full_name(), PAGE_CAT_LIST);

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <PageHeader
                title="Quản lý tin tuyển dụng"
                subtitle="Quản lý tất cả các tin tuyển dụng của doanh nghiệp"
            >
                <Button appearance=ButtonAppearance::Primary>
                    {icon("plus")}
                    "Đăng tin mới"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Card>
                    <div class="panel__header">
                        <h3 class="panel__title">
                            {move || format!("{} ({})", Job::list_name(), jobs.get().len())}
                        </h3>
                    </div>
                    <div class="list">
                        <For
                            each=move || jobs.get()
                            key=|job| job.id
                            children=move |job: Job| view! { <JobRow job=job /> }
                        />
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}

#[component]
fn JobRow(job: Job) -> impl IntoView {
    view! {
        <div class="list__row">
            <div class="list__main">
                <div class="list__title-line">
                    <h4 class="list__title">{job.title}</h4>
                    <JobStatusBadge status=job.status />
                </div>
                <div class="list__meta-line">
                    <span>{icon("map-pin")}{job.location}</span>
                    <span>{icon("dollar")}{job.salary}</span>
                    <span>{icon("users")}{format!("{} ứng viên", job.applicants)}</span>
                    <span>{icon("calendar")}{format!("Đăng ngày: {}", format_date(&job.posted_date))}</span>
                </div>
            </div>
            <InertRowActions />
        </div>
    }
}
