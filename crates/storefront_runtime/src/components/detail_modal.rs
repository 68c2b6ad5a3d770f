use super::book_card::CoverImage;
use super::*;

#[component]
pub(super) fn DetailModal(
    runtime: StorefrontRuntimeContext,
    placeholder_base: String,
) -> impl IntoView {
    let detail = create_memo(move |_| {
        runtime.state.with(|state| {
            state
                .modal_book()
                .map(|book| BookDetailModel::project(book, &placeholder_base))
        })
    });
    let closing = Signal::derive(move || {
        runtime
            .state
            .with(|state| matches!(state.modal, ModalState::Closing(_)))
    });
    let dismiss = Callback::new(move |()| runtime.dispatch_action(CatalogAction::CloseDetail));

    move || {
        detail.get().map(|detail| {
            let id = detail.id;
            let aria_label = detail.title.clone();
            let buy_disabled = !detail.buy_enabled;
            let on_buy =
                Callback::new(move |_| runtime.dispatch_action(CatalogAction::PurchaseClicked(id)));
            view! {
                <ModalOverlay
                    layout_class="detail-modal"
                    aria_label=aria_label
                    closing=closing
                    on_dismiss=dismiss
                >
                    <CoverImage
                        src=detail.image_url
                        fallback=detail.fallback_image_url
                        alt=detail.image_alt
                        layout_class="modal-image"
                    />
                    <Heading>{detail.title}</Heading>
                    <dl class="detail-rows">
                        {detail
                            .rows
                            .into_iter()
                            .map(|row| view! {
                                <div class="detail-row">
                                    <dt>{row.label}":"</dt>
                                    <dd>{row.value}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                    <Stack gap=LayoutGap::Sm ui_slot="description">
                        <h3>"Deskripsi:"</h3>
                        <Text>{detail.description}</Text>
                    </Stack>
                    <Cluster justify=LayoutJustify::Between ui_slot="purchase">
                        <div class="price-container">
                            <span class="price">{detail.price}</span>
                            {detail.original_price.map(|original| view! {
                                <s class="original-price">{original}</s>
                            })}
                        </div>
                        <LinkButton
                            href=detail.buy_url
                            new_tab=true
                            size=ButtonSize::Md
                            ui_slot="buy"
                            disabled=buy_disabled
                            on_click=on_buy
                        >
                            "🛒 Beli Sekarang"
                        </LinkButton>
                    </Cluster>
                </ModalOverlay>
            }
        })
    }
}
