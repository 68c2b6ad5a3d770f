//! Browser capability bridge for `platform_host_web` service adapters.
//!
//! Calls route through `interop`, which selects the wasm implementation or a non-wasm shim so the
//! adapters above compile and test on the native target.

mod interop;

pub use interop::{
    alert, fetch_text, gtag_event, prompt_install, register_service_worker, watch_install_prompt,
};

/// Status and body of a completed HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Whether the status is in the 2xx range.
    pub ok: bool,
    /// Response body text.
    pub body: String,
}
