//! Runtime-effect dispatch for the storefront host boundary.

use leptos::{logging, set_timeout, spawn_local};
use platform_host::AnalyticsSink;

use crate::{
    analytics::AnalyticsEvent,
    host::{catalog_effects, host_ui, StorefrontHostContext},
    reducer::{CatalogAction, RuntimeEffect},
    runtime_context::StorefrontRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: StorefrontHostContext,
    runtime: StorefrontRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::FetchCatalog => catalog_effects::fetch_catalog(host, runtime),
        RuntimeEffect::Notify(message) => host_ui::notify(host, message),
        RuntimeEffect::Track(event) => {
            track_event(host.analytics_sink().as_ref(), &event);
        }
        RuntimeEffect::LockBodyScroll(locked) => host_ui::lock_body_scroll(locked),
        RuntimeEffect::ScheduleModalRemoval(book_id) => {
            set_timeout(
                move || runtime.dispatch_action(CatalogAction::FinishCloseDetail(book_id)),
                host.config().modal_exit(),
            );
        }
        RuntimeEffect::ScheduleOfflineBannerHide(token) => {
            set_timeout(
                move || runtime.dispatch_action(CatalogAction::HideOfflineBanner { token }),
                host.config().offline_banner(),
            );
        }
        RuntimeEffect::PromptInstall => {
            spawn_local(async move {
                match host.pwa_service().prompt_install().await {
                    Ok(Some(outcome)) => logging::log!("install prompt outcome: {outcome:?}"),
                    Ok(None) => logging::log!("install prompt no longer available"),
                    Err(err) => logging::warn!("install prompt failed: {err}"),
                }
            });
        }
        RuntimeEffect::FocusSearchInput => host_ui::focus_search_input(),
    }
}

/// Logs `event` and forwards it to `sink`. Returns whether the sink accepted it.
pub(super) fn track_event(sink: &dyn AnalyticsSink, event: &AnalyticsEvent) -> bool {
    let payload = event.payload();
    logging::log!("analytics {}: {payload}", event.name());
    match sink.track(event.name(), &payload) {
        Ok(()) => true,
        Err(err) => {
            logging::warn!("analytics forward failed: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryAnalyticsSink;
    use serde_json::Value;

    use super::*;

    struct RejectingSink;

    impl AnalyticsSink for RejectingSink {
        fn track(&self, name: &str, _payload: &Value) -> Result<(), String> {
            Err(format!("gtag event `{name}` failed: blocked"))
        }
    }

    fn page_load() -> AnalyticsEvent {
        AnalyticsEvent::PageLoadTime {
            load_time: 42,
            user_agent: "test-agent".to_string(),
        }
    }

    #[test]
    fn sink_failures_are_reported_not_swallowed() {
        assert!(!track_event(&RejectingSink, &page_load()));
    }

    #[test]
    fn accepted_events_reach_the_sink() {
        let sink = MemoryAnalyticsSink::default();
        assert!(track_event(&sink, &page_load()));
        assert_eq!(sink.events()[0].name, "page_load_time");
    }
}
