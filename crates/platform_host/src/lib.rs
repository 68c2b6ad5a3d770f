//! Typed host-domain contracts and shared models used across the storefront runtime and browser
//! adapters.
//!
//! This crate is the API-first boundary for platform services. It owns the book record model and
//! catalog document parsing, plus the catalog-source, analytics, notification, and PWA service
//! traits. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod analytics;
pub mod catalog;
pub mod host;
pub mod notifications;
pub mod pwa;

pub use analytics::{AnalyticsSink, MemoryAnalyticsSink, NoopAnalyticsSink, TrackedEvent};
pub use catalog::service::{CatalogFuture, CatalogSource, MemoryCatalogSource};
pub use catalog::types::{parse_catalog_document, Book, BookId, CatalogDocument, CatalogLoadError};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use notifications::{
    MemoryNotificationService, NoopNotificationService, NotificationFuture, NotificationService,
};
pub use pwa::{InstallOutcome, NoopPwaService, PwaFuture, PwaService};
