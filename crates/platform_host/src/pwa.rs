//! Progressive-web-app host contracts: install prompt and service worker.

use std::{future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`PwaService`].
pub type PwaFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// User response to the install prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The user installed the app.
    Accepted,
    /// The user declined or closed the prompt.
    Dismissed,
}

/// Host service for install-prompt capture and service-worker registration.
pub trait PwaService {
    /// Starts listening for the platform's deferred install prompt; `on_available` runs each
    /// time one is captured.
    fn watch_install_prompt(&self, on_available: Rc<dyn Fn()>);

    /// Shows the captured install prompt and resolves with the user's choice.
    ///
    /// Resolves to `Ok(None)` when no prompt has been captured.
    fn prompt_install<'a>(&'a self) -> PwaFuture<'a, Result<Option<InstallOutcome>, String>>;

    /// Registers the service worker script at `script_url`.
    fn register_service_worker<'a>(
        &'a self,
        script_url: &'a str,
    ) -> PwaFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// PWA service for targets without install prompts or service workers.
pub struct NoopPwaService;

impl PwaService for NoopPwaService {
    fn watch_install_prompt(&self, _on_available: Rc<dyn Fn()>) {}

    fn prompt_install<'a>(&'a self) -> PwaFuture<'a, Result<Option<InstallOutcome>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn register_service_worker<'a>(
        &'a self,
        _script_url: &'a str,
    ) -> PwaFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}
