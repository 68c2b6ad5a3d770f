//! Analytics sink forwarding to a page-level `gtag` function when one is installed.

use platform_host::AnalyticsSink;
use serde_json::Value;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser analytics sink. Events are skipped when `gtag` is not defined; bridge failures are
/// reported to the caller.
pub struct WebAnalyticsSink;

impl AnalyticsSink for WebAnalyticsSink {
    fn track(&self, name: &str, payload: &Value) -> Result<(), String> {
        bridge::gtag_event(name, payload)
            .map(|_forwarded| ())
            .map_err(|err| format!("gtag event `{name}` failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_gtag_is_not_an_error() {
        assert_eq!(
            WebAnalyticsSink.track("page_load_time", &json!({ "load_time": 120 })),
            Ok(())
        );
    }
}
