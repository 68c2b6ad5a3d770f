use leptos::{logging, set_timeout, spawn_local};

use crate::{
    host::StorefrontHostContext, reducer::CatalogAction, runtime_context::StorefrontRuntimeContext,
};

/// Loads the catalog and reports the outcome after the configured reveal delay.
pub(super) fn fetch_catalog(host: StorefrontHostContext, runtime: StorefrontRuntimeContext) {
    spawn_local(async move {
        let config = host.config();
        let action = match host.catalog_source().load_catalog(&config.data_url).await {
            Ok(books) => {
                logging::log!("catalog loaded: {} books", books.len());
                CatalogAction::CatalogLoaded { books }
            }
            Err(err) => {
                logging::warn!("catalog load failed: {err}");
                CatalogAction::CatalogLoadFailed {
                    message: err.to_string(),
                }
            }
        };

        if matches!(action, CatalogAction::CatalogLoaded { .. }) && config.reveal_delay_ms > 0 {
            set_timeout(
                move || runtime.dispatch_action(action),
                config.reveal_delay(),
            );
        } else {
            runtime.dispatch_action(action);
        }
    });
}
