use super::*;

#[component]
pub(super) fn OfflineBanner(state: RwSignal<StorefrontState>) -> impl IntoView {
    view! {
        <Show when=move || state.with(|state| state.offline_banner_visible) fallback=|| ()>
            <Banner placement=BannerPlacement::Top tone=TextTone::Danger id="offline-message">
                "📡 Koneksi internet terputus. Beberapa fitur mungkin tidak tersedia."
            </Banner>
        </Show>
    }
}

#[component]
pub(super) fn InstallBanner(runtime: StorefrontRuntimeContext) -> impl IntoView {
    let install = Callback::new(move |_| runtime.dispatch_action(CatalogAction::InstallRequested));
    let dismiss = Callback::new(move |_| runtime.dispatch_action(CatalogAction::DismissInstall));

    view! {
        <Show
            when=move || runtime.state.with(|state| state.install_banner_visible)
            fallback=|| ()
        >
            <Banner placement=BannerPlacement::Bottom id="install-banner">
                <Text>"📱 Tambahkan ke layar utama untuk akses cepat!"</Text>
                <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Center>
                    <Button variant=ButtonVariant::Primary size=ButtonSize::Sm on_click=install>
                        "Install"
                    </Button>
                    <Button variant=ButtonVariant::Quiet size=ButtonSize::Sm on_click=dismiss>
                        "Nanti"
                    </Button>
                </Cluster>
            </Banner>
        </Show>
    }
}
