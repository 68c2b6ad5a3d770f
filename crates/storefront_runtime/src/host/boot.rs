use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::StorefrontHostContext, reducer::CatalogAction};

pub(super) fn install_boot(host: StorefrontHostContext, dispatch: Callback<CatalogAction>) {
    create_effect(move |_| {
        logging::log!("storefront booting on {} host", host.host_strategy_name());
        dispatch.call(CatalogAction::RequestLoad);

        let pwa = host.pwa_service();
        if host.capabilities().install_prompt.is_available() {
            pwa.watch_install_prompt(std::rc::Rc::new(move || {
                dispatch.call(CatalogAction::InstallPromptAvailable);
            }));
        }

        if host.capabilities().service_worker.is_available() {
            let url = host.config().service_worker_url.clone();
            spawn_local(async move {
                match pwa.register_service_worker(&url).await {
                    Ok(()) => logging::log!("service worker registered: {url}"),
                    Err(err) => logging::warn!("service worker registration failed: {err}"),
                }
            });
        }

        if let Some((load_time_ms, user_agent)) = page_load_timing() {
            dispatch.call(CatalogAction::PageLoaded {
                load_time_ms,
                user_agent,
            });
        }
    });
}

fn page_load_timing() -> Option<(u64, String)> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(performance) = window.performance() {
                let load_time_ms = performance.now().round().max(0.0) as u64;
                let user_agent = window.navigator().user_agent().unwrap_or_default();
                return Some((load_time_ms, user_agent));
            }
        }
    }
    None
}
