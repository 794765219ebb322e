use crate::shared::icons::icon;
use leptos::prelude::*;

/// Кнопки "просмотр" и "правка" строки без действия.
///
/// `on_view` подключает просмотр; правка записей не реализована.
#[component]
pub fn InertRowActions(#[prop(optional)] on_view: Option<Callback<()>>) -> impl IntoView {
    view! {
        <div class="row-actions">
            <button
                class="button button--icon"
                title="Xem chi tiết"
                on:click=move |_| {
                    if let Some(cb) = on_view {
                        cb.run(());
                    }
                }
            >
                {icon("eye")}
            </button>
            <button class="button button--icon" title="Chỉnh sửa">{icon("edit")}</button>
        </div>
    }
}
