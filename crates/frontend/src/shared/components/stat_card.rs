use crate::shared::icons::icon;
use crate::shared::number_format::format_thousands;
use leptos::prelude::*;

/// Карточка счётчика на дашборде
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Icon colour modifier: "blue", "green", "purple", "orange"
    accent: &'static str,
    #[prop(into)]
    value: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || format_thousands(value.get())}</div>
            </div>
            <div class=format!("stat-card__icon stat-card__icon--{accent}")>
                {icon(icon_name)}
            </div>
        </div>
    }
}
