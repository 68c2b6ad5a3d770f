//! Storefront runtime: catalog state, reducer, projections, and the Leptos UI that renders them.
//!
//! State transitions live in [`reduce_storefront`]; side effects are queued as [`RuntimeEffect`]
//! values and executed by the host layer against an injected [`platform_host::HostServices`]
//! bundle.

pub mod analytics;
pub mod card;
pub mod components;
pub mod config;
pub mod detail;
pub mod effect_executor;
pub mod filter;
pub mod gesture;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;

#[cfg(test)]
mod fixtures;

pub use analytics::AnalyticsEvent;
pub use card::{BadgeKind, BookCardModel};
pub use components::StorefrontShell;
pub use config::StorefrontConfig;
pub use detail::{BookDetailModel, DetailRow};
pub use gesture::PullToRefresh;
pub use host::StorefrontHostContext;
pub use model::*;
pub use reducer::{reduce_storefront, CatalogAction, ReducerError, RuntimeEffect};
pub use runtime_context::{use_storefront_runtime, StorefrontProvider, StorefrontRuntimeContext};
