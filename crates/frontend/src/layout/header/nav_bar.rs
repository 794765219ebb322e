use crate::layout::global_context::use_portal;
use contracts::shared::ActiveView;
use leptos::prelude::*;

/// Вкладки основных экранов
#[component]
pub fn NavBar() -> impl IntoView {
    let portal = use_portal();

    view! {
        <nav class="main-nav-bar">
            <ul>
                {ActiveView::nav_tabs().into_iter().map(|view| {
                    view! {
                        <li
                            class="main-nav-bar__item"
                            class:main-nav-bar__item--active=move || portal.active_view() == view
                            on:click=move |_| portal.navigate(view)
                        >
                            {view.title()}
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
