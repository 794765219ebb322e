use contracts::enums::{course_status_label, course_status_tone, JobStatus, StatusTone};
use leptos::prelude::*;

/// Бейдж статуса курса. Неизвестный код показывается нейтральным бейджем.
#[component]
pub fn CourseStatusBadge(
    /// Код статуса: "recruiting", "ongoing", "completed"
    #[prop(into)]
    code: String,
    /// Крупный вариант для карточки курса
    #[prop(optional)]
    large: bool,
) -> impl IntoView {
    let tone = course_status_tone(&code);
    let label = course_status_label(&code);
    view! { <ToneBadge tone=tone large=large>{label}</ToneBadge> }
}

#[component]
pub fn JobStatusBadge(status: JobStatus) -> impl IntoView {
    view! { <ToneBadge tone=status.tone()>{status.display_name()}</ToneBadge> }
}

#[component]
fn ToneBadge(tone: StatusTone, #[prop(optional)] large: bool, children: Children) -> impl IntoView {
    let class = format!(
        "badge {}{}",
        tone.css_modifier(),
        if large { " badge--large" } else { "" }
    );
    view! { <span class=class>{children()}</span> }
}
