use crate::shared::icons::icon;
use leptos::prelude::*;

/// Модальное окно поверх текущего экрана.
///
/// Закрывается только кнопкой закрытия: клик по подложке и Escape
/// окно не закрывают.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Optional line under the title
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{title}</h2>
                        {subtitle.map(|s| view! { <p class="modal-subtitle">{s}</p> })}
                    </div>
                    <button
                        class="button button--icon modal__close"
                        aria-label="Đóng"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
