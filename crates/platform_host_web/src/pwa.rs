//! Install-prompt capture and service-worker registration for browser hosts.

use std::rc::Rc;

use platform_host::{InstallOutcome, PwaFuture, PwaService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser PWA adapter. The deferred install prompt is held on the JS side of the bridge.
pub struct WebPwaService;

impl PwaService for WebPwaService {
    fn watch_install_prompt(&self, on_available: Rc<dyn Fn()>) {
        bridge::watch_install_prompt(on_available);
    }

    fn prompt_install<'a>(&'a self) -> PwaFuture<'a, Result<Option<InstallOutcome>, String>> {
        Box::pin(bridge::prompt_install())
    }

    fn register_service_worker<'a>(
        &'a self,
        script_url: &'a str,
    ) -> PwaFuture<'a, Result<(), String>> {
        Box::pin(bridge::register_service_worker(script_url))
    }
}
