use leptos::prelude::*;

/// PageHeader component - title block with action buttons on the right
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: Option<String>,

    /// Action buttons (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h2 class="page__title">{title}</h2>
                {subtitle.map(|s| view! { <p class="page__subtitle">{s}</p> })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
