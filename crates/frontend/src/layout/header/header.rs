use crate::layout::global_context::use_portal;
use crate::shared::icons::icon;
use contracts::shared::ActiveView;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn Header() -> impl IntoView {
    let portal = use_portal();
    let company = portal.with_state(|s| s.company.clone());

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <div class="header__logo">{icon("building")}</div>
                <div>
                    <h1 class="header__title">{company.portal_title}</h1>
                    <p class="header__subtitle">{company.name}</p>
                </div>
            </div>
            <div class="header__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| portal.navigate(ActiveView::CreateCourse)
                >
                    {icon("plus")}
                    "Đăng khóa đào tạo"
                </Button>
                <span class="header__email">{company.contact_email}</span>
                // Выход не реализован: аутентификации нет
                <button class="button button--ghost" aria-label="Đăng xuất">
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
