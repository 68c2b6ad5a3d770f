#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use leptos::{logging, spawn_local};

use crate::host::StorefrontHostContext;

/// DOM id of the header search field.
pub(crate) const SEARCH_INPUT_ID: &str = "storefront-search";

pub(super) fn notify(host: StorefrontHostContext, message: String) {
    spawn_local(async move {
        if let Err(err) = host.notification_service().notify(&message).await {
            logging::warn!("notification dispatch failed: {err}");
        }
    });
}

pub(super) fn lock_body_scroll(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            logging::warn!("body scroll lock update failed");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = locked;
}

pub(super) fn focus_search_input() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(SEARCH_INPUT_ID))
        else {
            return;
        };
        let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        let _ = input.focus();
        input.select();
    }
}

/// Whether the page is scrolled to the very top.
pub(crate) fn page_at_top() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(scroll_y) = web_sys::window().and_then(|window| window.scroll_y().ok()) {
            return scroll_y <= 0.0;
        }
    }
    true
}
