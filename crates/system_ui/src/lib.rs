//! Shared UI primitive library for the storefront.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the storefront stylesheet. Feature components should compose these primitives instead of
//! emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Banner, BannerPlacement, Button, ButtonSize, ButtonVariant, Card, Cluster, EmptyState,
    Grid, Heading, LayoutAlign, LayoutGap, LayoutJustify, LinkButton, ModalOverlay, Stack, Text,
    TextField, TextRole, TextTone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Banner, BannerPlacement, Button, ButtonSize, ButtonVariant, Card, Cluster,
        EmptyState, Grid, Heading, LayoutAlign, LayoutGap, LayoutJustify, LinkButton,
        ModalOverlay, Stack, Text, TextField, TextRole, TextTone,
    };
}
