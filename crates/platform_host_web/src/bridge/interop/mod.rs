//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the service adapters.

use std::rc::Rc;

use platform_host::InstallOutcome;
use serde_json::Value;

use super::FetchResponse;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_text(url: &str) -> Result<FetchResponse, String> {
    imp::fetch_text(url).await
}

pub fn gtag_event(name: &str, payload: &Value) -> Result<bool, String> {
    imp::gtag_event(name, payload)
}

pub fn alert(message: &str) -> Result<(), String> {
    imp::alert(message)
}

pub fn watch_install_prompt(on_available: Rc<dyn Fn()>) {
    imp::watch_install_prompt(on_available)
}

pub async fn prompt_install() -> Result<Option<InstallOutcome>, String> {
    imp::prompt_install().await
}

pub async fn register_service_worker(script_url: &str) -> Result<(), String> {
    imp::register_service_worker(script_url).await
}
