use std::rc::Rc;

use platform_host::{HostCapabilities, HostServices, HostStrategy};

use crate::{WebAnalyticsSink, WebCatalogSource, WebNotificationService, WebPwaService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Returns the capability snapshot for the selected host strategy.
pub const fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities::browser(),
        HostStrategy::Headless => HostCapabilities::headless(),
    }
}

/// Builds the browser host service bundle consumed by the storefront runtime.
///
/// Off wasm the same adapters are returned; their bridge calls degrade to no-ops or transport
/// errors.
pub fn build_host_services() -> HostServices {
    HostServices {
        catalog: Rc::new(WebCatalogSource),
        analytics: Rc::new(WebAnalyticsSink),
        notifications: Rc::new(WebNotificationService),
        pwa: Rc::new(WebPwaService),
        capabilities: host_capabilities(),
        host_strategy: selected_host_strategy(),
    }
}
