use contracts::shared::{ActiveView, PortalAction, PortalSeed, PortalState};
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Имя параметра URL с кодом текущего экрана
const VIEW_QUERY_PARAM: &str = "view";

/// Глобальное состояние портала, доступное через context.
///
/// Все изменения идут через `dispatch`: одно действие, один синхронный
/// переход `PortalState::apply`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub state: RwSignal<PortalState>,
}

impl AppGlobalContext {
    pub fn new(seed: PortalSeed) -> Self {
        Self {
            state: RwSignal::new(PortalState::from_seed(seed)),
        }
    }

    pub fn dispatch(&self, action: PortalAction) {
        log::debug!("dispatch: {:?}", action);
        let mut created = None;
        self.state.update(|state| created = state.apply(action));
        if let Some(course) = created {
            log::info!("course #{} '{}' created", course.id.0, course.name);
        }
    }

    pub fn navigate(&self, view: ActiveView) {
        self.dispatch(PortalAction::Navigate(view));
    }

    pub fn active_view(&self) -> ActiveView {
        self.state.with(|s| s.active_view)
    }

    /// Чтение состояния с отслеживанием зависимостей
    pub fn with_state<R>(&self, f: impl FnOnce(&PortalState) -> R) -> R {
        self.state.with(f)
    }

    /// Синхронизация текущего экрана с `?view=...`.
    ///
    /// При старте читает экран из URL, затем переписывает URL через
    /// `replaceState`, не добавляя записей в историю.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match params.get(VIEW_QUERY_PARAM).map(|code| (code, ActiveView::from_code(code))) {
            Some((_, Some(view))) => self.navigate(view),
            Some((code, None)) => log::warn!("unknown view '{}' in URL, staying on dashboard", code),
            None => {}
        }

        let this = *self;
        let active_view = Memo::new(move |_| this.active_view());
        Effect::new(move |_| {
            let view = active_view.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                VIEW_QUERY_PARAM.to_string(),
                view.code().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // replaceState только при реальном изменении адреса
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

/// Получить контекст портала
pub fn use_portal() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
