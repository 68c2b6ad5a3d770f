//! Host-side runtime helpers for executing reducer effects and bootstrapping platform services.
//!
//! Effect execution, timers, and browser queries stay behind [`StorefrontHostContext`] so the
//! reducer remains pure and the service bundle can be swapped for headless adapters in tests.

mod boot;
mod catalog_effects;
mod effects;
mod host_ui;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{
    AnalyticsSink, CatalogSource, HostCapabilities, HostServices, NotificationService, PwaService,
};

use crate::{
    config::StorefrontConfig, reducer::CatalogAction, reducer::RuntimeEffect,
    runtime_context::StorefrontRuntimeContext,
};

pub(crate) use host_ui::{page_at_top, SEARCH_INPUT_ID};

#[derive(Clone)]
/// Host service bundle and configuration for storefront runtime side effects.
pub struct StorefrontHostContext {
    services: HostServices,
    config: &'static StorefrontConfig,
}

impl StorefrontHostContext {
    /// Wraps an injected service bundle with the built-in storefront configuration.
    pub fn new(services: HostServices) -> Self {
        Self::with_config(services, StorefrontConfig::builtin())
    }

    /// Wraps an injected service bundle with an explicit configuration.
    pub fn with_config(services: HostServices, config: &'static StorefrontConfig) -> Self {
        Self { services, config }
    }

    /// Returns the configured catalog source.
    pub fn catalog_source(&self) -> Rc<dyn CatalogSource> {
        self.services.catalog.clone()
    }

    /// Returns the configured analytics sink.
    pub fn analytics_sink(&self) -> Rc<dyn AnalyticsSink> {
        self.services.analytics.clone()
    }

    /// Returns the configured notification service.
    pub fn notification_service(&self) -> Rc<dyn NotificationService> {
        self.services.notifications.clone()
    }

    /// Returns the configured install-prompt/service-worker service.
    pub fn pwa_service(&self) -> Rc<dyn PwaService> {
        self.services.pwa.clone()
    }

    /// Returns the host capability snapshot.
    pub fn capabilities(&self) -> HostCapabilities {
        self.services.capabilities
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Returns the storefront configuration.
    pub fn config(&self) -> &'static StorefrontConfig {
        self.config
    }

    /// Installs boot side effects: initial load, service worker, install prompt, and load timing.
    pub fn install_boot(&self, dispatch: Callback<CatalogAction>) {
        boot::install_boot(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: StorefrontRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }
}
