//! Shared host-bundle and capability models for browser and headless composition.

use std::rc::Rc;

use crate::{
    AnalyticsSink, CatalogSource, MemoryCatalogSource, NoopAnalyticsSink, NoopNotificationService,
    NoopPwaService, NotificationService, PwaService,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Native composition with in-memory or no-op adapters (tests, non-wasm builds).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not supported on the active host.
    Unavailable,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Host capability snapshot exposed to runtime wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Analytics backend availability.
    pub analytics: CapabilityStatus,
    /// Deferred install prompt availability.
    pub install_prompt: CapabilityStatus,
    /// Service worker registration availability.
    pub service_worker: CapabilityStatus,
    /// Blocking notification availability.
    pub notifications: CapabilityStatus,
}

impl HostCapabilities {
    /// Browser-default capability posture.
    pub const fn browser() -> Self {
        Self {
            analytics: CapabilityStatus::Available,
            install_prompt: CapabilityStatus::Available,
            service_worker: CapabilityStatus::Available,
            notifications: CapabilityStatus::Available,
        }
    }

    /// Headless capability posture.
    pub const fn headless() -> Self {
        Self {
            analytics: CapabilityStatus::Unavailable,
            install_prompt: CapabilityStatus::Unavailable,
            service_worker: CapabilityStatus::Unavailable,
            notifications: CapabilityStatus::Unavailable,
        }
    }
}

/// Runtime-selected host service bundle injected into the storefront runtime.
///
/// Environment-specific adapter selection happens before this bundle reaches
/// `storefront_runtime`, which keeps the runtime free of browser API details.
#[derive(Clone)]
pub struct HostServices {
    /// Catalog document source.
    pub catalog: Rc<dyn CatalogSource>,
    /// Analytics event sink.
    pub analytics: Rc<dyn AnalyticsSink>,
    /// Blocking notification service.
    pub notifications: Rc<dyn NotificationService>,
    /// Install prompt and service worker service.
    pub pwa: Rc<dyn PwaService>,
    /// Host availability snapshot.
    pub capabilities: HostCapabilities,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a headless bundle around `catalog` with no-op analytics, notifications, and PWA.
    pub fn headless(catalog: Rc<dyn CatalogSource>) -> Self {
        Self {
            catalog,
            analytics: Rc::new(NoopAnalyticsSink),
            notifications: Rc::new(NoopNotificationService),
            pwa: Rc::new(NoopPwaService),
            capabilities: HostCapabilities::headless(),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::headless(Rc::new(MemoryCatalogSource::with_books(Vec::new())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_bundle_reports_headless_posture() {
        let services = HostServices::default();
        assert_eq!(services.host_strategy.as_str(), "headless");
        assert!(!services.capabilities.analytics.is_available());
        assert!(HostCapabilities::browser().install_prompt.is_available());
    }
}
