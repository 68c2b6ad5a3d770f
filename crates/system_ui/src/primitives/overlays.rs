use super::*;

#[component]
/// Full-viewport modal overlay with a centered content panel.
///
/// `on_dismiss` fires for the close control and for clicks that land on the backdrop itself;
/// clicks inside the panel never dismiss. While `closing` is true the overlay carries
/// `data-ui-state="closing"` so the stylesheet can run the exit animation.
pub fn ModalOverlay(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] closing: MaybeSignal<bool>,
    on_dismiss: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-modal-overlay", layout_class)
            data-ui-primitive="true"
            data-ui-kind="modal-overlay"
            data-ui-state=move || if closing.get() { "closing" } else { "open" }
            on:click=move |ev: MouseEvent| {
                let on_backdrop = match (ev.target(), ev.current_target()) {
                    (Some(target), Some(current)) => target == current,
                    _ => false,
                };
                if on_backdrop {
                    on_dismiss.call(());
                }
            }
        >
            <div
                class="ui-modal-panel"
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                data-ui-slot="panel"
            >
                <Button
                    layout_class="ui-modal-close"
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    aria_label="Tutup"
                    ui_slot="close"
                    on_click=Callback::new(move |_| on_dismiss.call(()))
                >
                    "×"
                </Button>
                {children()}
            </div>
        </div>
    }
}

#[component]
/// Viewport-pinned transient banner.
pub fn Banner(
    #[prop(default = BannerPlacement::Top)] placement: BannerPlacement,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-banner", layout_class)
            id=id
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="banner"
            data-ui-placement=placement.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}
