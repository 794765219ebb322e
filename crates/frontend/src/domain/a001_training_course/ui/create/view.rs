use super::view_model::CourseCreateViewModel;
use crate::layout::global_context::use_portal;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_training_course::{Course, CourseDraftField};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Card};

#[component]
pub fn CourseCreateForm() -> impl IntoView {
    let vm = CourseCreateViewModel::new(use_portal());

    let page_id = format!("{}--{}", Course::full_name(), PAGE_CAT_DETAIL);

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_DETAIL>
            <PageHeader
                title="Đăng khóa đào tạo mới"
                subtitle="Tạo và đăng khóa đào tạo cho nhân viên hoặc cộng đồng"
            >
                {()}
            </PageHeader>

            <div class="page__content">
                <Card>
                    // Без <form>: курс создаётся только кнопкой отправки
                    <div class="details-form">
                        <div class="form-grid">
                            <DraftInput vm=vm field=CourseDraftField::Name label="Tên khóa học *" placeholder="VD: Kỹ năng lãnh đạo hiệu quả" />
                            <DraftInput vm=vm field=CourseDraftField::Organization label="Đơn vị tổ chức *" placeholder="VD: Trung tâm Đào tạo ABC" />
                            <DraftInput vm=vm field=CourseDraftField::Location label="Địa điểm *" placeholder="VD: Hà Nội, Online" />
                            <DraftInput vm=vm field=CourseDraftField::TargetAudience label="Đối tượng tham gia *" placeholder="VD: Nhân viên mới, Quản lý cấp trung" />
                            <DraftInput vm=vm field=CourseDraftField::StartDate label="Ngày bắt đầu *" input_type="date" />
                            <DraftInput vm=vm field=CourseDraftField::EndDate label="Ngày kết thúc *" input_type="date" />
                            <DraftInput vm=vm field=CourseDraftField::Fee label="Học phí (VND)" input_type="number" placeholder="0 = Miễn phí" />
                            <DraftInput vm=vm field=CourseDraftField::MaxStudents label="Số lượng học viên tối đa *" input_type="number" placeholder="VD: 30" />
                        </div>

                        <DraftInput vm=vm field=CourseDraftField::Instructor label="Giảng viên *" placeholder="VD: ThS. Nguyễn Văn A" />

                        <div class="form-group">
                            <label for="course-description">"Mô tả khóa học *"</label>
                            <textarea
                                id="course-description"
                                rows="4"
                                placeholder="Mô tả chi tiết về nội dung và lợi ích của khóa học..."
                                prop:value=move || vm.field_value(CourseDraftField::Description)
                                on:input=move |ev| vm.set_field(CourseDraftField::Description, event_target_value(&ev))
                            ></textarea>
                        </div>

                        <div class="form-group">
                            <label>"Mục tiêu đào tạo"</label>
                            <For
                                each=move || 0..vm.objective_count.get()
                                key=|index| *index
                                children=move |index| view! { <ObjectiveRow vm=vm index=index /> }
                            />
                        </div>

                        <div class="form-actions">
                            <Button on_click=move |_| vm.cancel()>"Hủy"</Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm.submit()
                            >
                                "Đăng khóa đào tạo"
                            </Button>
                        </div>
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}

#[component]
fn DraftInput(
    vm: CourseCreateViewModel,
    field: CourseDraftField,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    let min = field.is_numeric().then_some("0");

    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type
                min=min
                placeholder=placeholder
                prop:value=move || vm.field_value(field)
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn ObjectiveRow(vm: CourseCreateViewModel, index: usize) -> impl IntoView {
    view! {
        <div class="objective-row">
            <input
                type="text"
                placeholder=format!("Mục tiêu {}", index + 1)
                prop:value=move || vm.objective_value(index)
                on:input=move |ev| vm.set_objective(index, event_target_value(&ev))
            />
            <Show when=move || vm.is_last_objective(index)>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.add_objective_after(index)
                >
                    {icon("plus")}
                </Button>
            </Show>
        </div>
    }
}
