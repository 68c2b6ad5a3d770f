//! Storefront UI composition: header navigation, gallery, detail overlay, and banners.

mod banners;
mod book_card;
mod contact;
mod detail_modal;
mod gallery;
mod navigation;

use leptos::*;

use self::{
    banners::{InstallBanner, OfflineBanner},
    detail_modal::DetailModal,
    gallery::Gallery,
    navigation::{CategoryNav, SearchBar},
};

use crate::{
    card::BookCardModel,
    config::StorefrontConfig,
    detail::BookDetailModel,
    gesture::PullToRefresh,
    host::page_at_top,
    model::{ModalState, StorefrontState},
    reducer::CatalogAction,
    runtime_context::{use_storefront_runtime, StorefrontRuntimeContext},
};
use system_ui::prelude::*;

fn is_search_shortcut(ev: &web_sys::KeyboardEvent) -> bool {
    (ev.ctrl_key() || ev.meta_key()) && ev.key().eq_ignore_ascii_case("f")
}

fn install_keyboard_shortcuts(runtime: StorefrontRuntimeContext) {
    let keydown_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        if ev.key() == "Escape" {
            if matches!(runtime.state.get_untracked().modal, ModalState::Open(_)) {
                ev.prevent_default();
                runtime.dispatch_action(CatalogAction::CloseDetail);
            }
            return;
        }
        if is_search_shortcut(&ev) {
            ev.prevent_default();
            runtime.dispatch_action(CatalogAction::FocusSearch);
        }
    });
    on_cleanup(move || keydown_listener.remove());
}

fn install_connectivity_listeners(runtime: StorefrontRuntimeContext) {
    let online_listener = window_event_listener(ev::online, move |_| {
        logging::log!("connection restored");
        runtime.dispatch_action(CatalogAction::ConnectivityChanged { online: true });
    });
    let offline_listener = window_event_listener(ev::offline, move |_| {
        logging::log!("connection lost");
        runtime.dispatch_action(CatalogAction::ConnectivityChanged { online: false });
    });
    on_cleanup(move || {
        online_listener.remove();
        offline_listener.remove();
    });
}

fn install_pull_to_refresh(runtime: StorefrontRuntimeContext, threshold_px: i32) {
    let gesture = store_value(PullToRefresh::new(threshold_px));

    let start_listener = window_event_listener(ev::touchstart, move |ev| {
        if let Some(touch) = ev.touches().get(0) {
            gesture.update_value(|gesture| gesture.touch_start(touch.client_y()));
        }
    });
    let move_listener = window_event_listener(ev::touchmove, move |ev| {
        let Some(touch) = ev.changed_touches().get(0) else {
            return;
        };
        let pulling = gesture
            .try_update_value(|gesture| gesture.touch_move(touch.client_y(), page_at_top()))
            .unwrap_or(false);
        if pulling {
            ev.prevent_default();
        }
    });
    let end_listener = window_event_listener(ev::touchend, move |_| {
        let refresh = gesture
            .try_update_value(|gesture| gesture.touch_end(page_at_top()))
            .unwrap_or(false);
        if refresh {
            logging::log!("pull to refresh triggered");
            runtime.dispatch_action(CatalogAction::PullRefresh);
        }
    });
    on_cleanup(move || {
        start_listener.remove();
        move_listener.remove();
        end_listener.remove();
    });
}

fn install_error_monitor(runtime: StorefrontRuntimeContext) {
    let error_listener = window_event_listener(ev::error, move |ev| {
        let message = ev.message();
        logging::error!("uncaught script error: {message}");
        runtime.dispatch_action(CatalogAction::ClientError {
            message,
            filename: ev.filename(),
            line: ev.lineno(),
        });
    });
    on_cleanup(move || error_listener.remove());
}

#[component]
/// Full storefront surface. Must be rendered inside [`crate::StorefrontProvider`].
pub fn StorefrontShell(
    /// Heading shown in the page header.
    #[prop(into, default = "Toko Buku".to_string())]
    title: String,
    /// Tagline under the heading.
    #[prop(optional, into)]
    tagline: Option<String>,
) -> impl IntoView {
    let runtime = use_storefront_runtime();
    let config = runtime.host.get_value().config();
    let state = runtime.state;

    install_keyboard_shortcuts(runtime);
    install_connectivity_listeners(runtime);
    install_pull_to_refresh(runtime, config.pull_refresh_threshold_px);
    install_error_monitor(runtime);

    view! {
        <div
            id="storefront-root"
            class="storefront"
            data-ui-primitive="true"
            data-ui-kind="storefront-root"
            data-online=move || state.get().online.to_string()
        >
            <OfflineBanner state=state />
            <header class="storefront-header">
                <Stack gap=LayoutGap::Sm>
                    <Heading>{title}</Heading>
                    {tagline.map(|tagline| view! {
                        <Text role=TextRole::Caption tone=TextTone::Secondary>{tagline}</Text>
                    })}
                    <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Between>
                        <CategoryNav runtime=runtime nav=config.nav.clone() />
                        <SearchBar runtime=runtime debounce=config.search_debounce() />
                    </Cluster>
                </Stack>
            </header>
            <main class="storefront-main">
                <Gallery runtime=runtime config=config />
            </main>
            <DetailModal runtime=runtime placeholder_base=config.placeholder_base.clone() />
            <InstallBanner runtime=runtime />
        </div>
    }
}
