//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the catalog source, analytics,
//! notifications, and PWA services. JS interop lives under `bridge/`, which swaps in a non-wasm
//! shim so the adapters build and test natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host service bundle factory.
pub mod adapters;
pub mod analytics;
mod bridge;
pub mod catalog;
pub mod notifications;
pub mod pwa;

pub use adapters::{
    build_host_services, host_capabilities, host_strategy_name, selected_host_strategy,
};
pub use analytics::WebAnalyticsSink;
pub use catalog::WebCatalogSource;
pub use notifications::WebNotificationService;
pub use pwa::WebPwaService;
