use super::*;

fn unsupported() -> String {
    "browser APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_text(_url: &str) -> Result<FetchResponse, String> {
    Err(unsupported())
}

pub fn gtag_event(_name: &str, _payload: &Value) -> Result<bool, String> {
    Ok(false)
}

pub fn alert(_message: &str) -> Result<(), String> {
    Ok(())
}

pub fn watch_install_prompt(_on_available: Rc<dyn Fn()>) {}

pub async fn prompt_install() -> Result<Option<InstallOutcome>, String> {
    Ok(None)
}

pub async fn register_service_worker(_script_url: &str) -> Result<(), String> {
    Err(unsupported())
}
