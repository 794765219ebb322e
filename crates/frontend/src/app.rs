use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use contracts::shared::PortalSeed;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let seed = PortalSeed::embedded().unwrap_or_else(|e| {
        log::error!("failed to load portal seed: {:#}", e);
        PortalSeed::default()
    });

    // Provide the portal state to the whole app via context.
    provide_context(AppGlobalContext::new(seed));

    view! {
        <Shell />
    }
}
