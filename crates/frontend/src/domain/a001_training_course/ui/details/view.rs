use crate::layout::global_context::use_portal;
use crate::shared::components::ui::CourseStatusBadge;
use crate::shared::date_utils::format_date_range;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::number_format::{format_enrollment, format_fee};
use contracts::domain::a001_training_course::Course;
use contracts::shared::PortalAction;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Space};

#[component]
pub fn CourseDetails() -> impl IntoView {
    let portal = use_portal();
    let on_close = Callback::new(move |_| portal.dispatch(PortalAction::CloseCourseDetail));

    move || {
        portal
            .with_state(|s| s.selected_course().cloned())
            .map(|course| view! { <CourseDetailsCard course=course on_close=on_close /> })
    }
}

#[component]
fn CourseDetailsCard(course: Course, on_close: Callback<()>) -> impl IntoView {
    let period = format_date_range(&course.start_date, &course.end_date);
    let enrollment = format_enrollment(course.registered_students, course.max_students);

    view! {
        <Modal title=course.name.clone() subtitle="Chi tiết khóa đào tạo" on_close=on_close>
            <div class="details-grid">
                <div>
                    <h3 class="details-section__title">"Thông tin cơ bản"</h3>
                    <DetailLine icon_name="building" label="Đơn vị tổ chức:" value=course.organization.clone() />
                    <DetailLine icon_name="map-pin" label="Địa điểm:" value=course.location.clone() />
                    <DetailLine icon_name="calendar" label="Thời gian:" value=period />
                    <DetailLine icon_name="target" label="Đối tượng:" value=course.target_audience.clone() />
                    <DetailLine icon_name="dollar" label="Học phí:" value=format_fee(course.fee) />
                    <DetailLine icon_name="users" label="Tình trạng đăng ký:" value=enrollment />
                </div>

                <div>
                    <h3 class="details-section__title">"Chi tiết khóa học"</h3>
                    <div class="details-field">
                        <span class="details-field__label">"Giảng viên:"</span>
                        <p class="details-field__value">{course.instructor.clone()}</p>
                    </div>
                    <div class="details-field">
                        <span class="details-field__label">"Mô tả:"</span>
                        <p class="details-field__text">{course.description.clone()}</p>
                    </div>
                    <div class="details-field">
                        <span class="details-field__label">"Mục tiêu đào tạo:"</span>
                        <ul class="objective-list">
                            {course.objectives.iter().map(|objective| view! {
                                <li class="objective-list__item">{objective.clone()}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <CourseStatusBadge code=course.status.code() large=true />
                // Действия-заглушки: связи с организатором и списка слушателей нет
                <Space>
                    <Button appearance=ButtonAppearance::Secondary>"Liên hệ đơn vị"</Button>
                    <Button appearance=ButtonAppearance::Primary>"Xem danh sách học viên"</Button>
                </Space>
            </div>
        </Modal>
    }
}

#[component]
fn DetailLine(icon_name: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="details-line">
            <span class="details-line__icon">{icon(icon_name)}</span>
            <div>
                <span class="details-field__label">{label}</span>
                <p class="details-field__value">{value}</p>
            </div>
        </div>
    }
}
