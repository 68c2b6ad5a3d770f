use super::*;
use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
let deferredPrompt = null;

export function jsGtagEvent(name, payload) {
  if (typeof gtag !== 'function') {
    return false;
  }
  gtag('event', name, payload);
  return true;
}

export function jsWatchInstallPrompt(onAvailable) {
  window.addEventListener('beforeinstallprompt', (event) => {
    event.preventDefault();
    deferredPrompt = event;
    onAvailable();
  });
}

export async function jsPromptInstall() {
  if (!deferredPrompt) {
    return null;
  }
  const pending = deferredPrompt;
  deferredPrompt = null;
  pending.prompt();
  const choice = await pending.userChoice;
  return choice && choice.outcome ? choice.outcome : 'dismissed';
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsGtagEvent, catch)]
    fn js_gtag_event(name: &str, payload: JsValue) -> Result<bool, JsValue>;
    #[wasm_bindgen(js_name = jsWatchInstallPrompt)]
    fn js_watch_install_prompt(on_available: &Function);
    #[wasm_bindgen(js_name = jsPromptInstall)]
    fn js_prompt_install() -> Promise;
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn browser_window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window is unavailable".to_string())
}

pub async fn fetch_text(url: &str) -> Result<FetchResponse, String> {
    let window = browser_window()?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error_to_string)?;
    let response: web_sys::Response = response.dyn_into().map_err(js_error_to_string)?;
    let status = response.status();
    let ok = response.ok();
    let body = JsFuture::from(response.text().map_err(js_error_to_string)?)
        .await
        .map_err(js_error_to_string)?
        .as_string()
        .unwrap_or_default();
    Ok(FetchResponse { status, ok, body })
}

pub fn gtag_event(name: &str, payload: &Value) -> Result<bool, String> {
    let payload = payload
        .serialize(&Serializer::json_compatible())
        .map_err(|err| err.to_string())?;
    js_gtag_event(name, payload).map_err(js_error_to_string)
}

pub fn alert(message: &str) -> Result<(), String> {
    browser_window()?
        .alert_with_message(message)
        .map_err(js_error_to_string)
}

pub fn watch_install_prompt(on_available: Rc<dyn Fn()>) {
    let callback = Closure::<dyn Fn()>::new(move || on_available());
    js_watch_install_prompt(callback.as_ref().unchecked_ref());
    // The listener lives for the whole page session.
    callback.forget();
}

pub async fn prompt_install() -> Result<Option<InstallOutcome>, String> {
    let outcome = JsFuture::from(js_prompt_install())
        .await
        .map_err(js_error_to_string)?;
    if outcome.is_null() || outcome.is_undefined() {
        return Ok(None);
    }
    Ok(Some(match outcome.as_string().as_deref() {
        Some("accepted") => InstallOutcome::Accepted,
        _ => InstallOutcome::Dismissed,
    }))
}

pub async fn register_service_worker(script_url: &str) -> Result<(), String> {
    let window = browser_window()?;
    let navigator = window.navigator();
    let supported = Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))
        .map_err(js_error_to_string)?;
    if !supported {
        return Err("service workers are not supported in this browser".to_string());
    }
    JsFuture::from(navigator.service_worker().register(script_url))
        .await
        .map(|_| ())
        .map_err(js_error_to_string)
}
