//! Корневая обёртка экранов портала.
//!
//! Ставит на корневой элемент `id` вида `"{aggregate}--{category}"`
//! и атрибут `data-page-category`.

use super::page_standard::*;
use leptos::prelude::*;

/// Класс зависит от категории: `page`, `page page--detail`, `page page--dashboard`.
#[component]
pub fn PageFrame(
    /// Например `"a001_training_course--list"`
    #[prop(into)]
    page_id: String,
    /// Одна из констант PAGE_CAT_*
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(&page_id), "bad page id: {page_id}");

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
