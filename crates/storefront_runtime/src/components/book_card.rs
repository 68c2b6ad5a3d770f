use super::*;
use crate::card::BadgeKind;

#[component]
pub(super) fn CoverImage(
    src: String,
    fallback: String,
    alt: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let current = create_rw_signal(src);
    view! {
        <img
            class=layout_class.unwrap_or("book-cover")
            src=move || current.get()
            alt=alt
            loading="lazy"
            on:error=move |_| {
                if current.get_untracked() != fallback {
                    current.set(fallback.clone());
                }
            }
        />
    }
}

#[component]
pub(super) fn BookCard(runtime: StorefrontRuntimeContext, card: BookCardModel) -> impl IntoView {
    let BookCardModel {
        id,
        title,
        byline,
        price,
        original_price,
        short_description,
        image_url,
        fallback_image_url,
        image_alt,
        buy_url,
        buy_enabled,
        badges,
        entrance_delay,
    } = card;

    let card_style = format!("animation-delay: {entrance_delay};");
    let buy_disabled = !buy_enabled;
    let on_buy =
        Callback::new(move |_| runtime.dispatch_action(CatalogAction::PurchaseClicked(id)));
    let on_detail =
        Callback::new(move |_| runtime.dispatch_action(CatalogAction::OpenDetail(id)));

    view! {
        <Card layout_class="book-card" ui_slot="book-card" style=card_style>
            <div class="top-section">
                <div class="image-area">
                    {badges
                        .into_iter()
                        .map(|badge: BadgeKind| view! {
                            <Badge tone=badge.tone() ui_slot=badge.slot()>{badge.label()}</Badge>
                        })
                        .collect_view()}
                    <CoverImage src=image_url fallback=fallback_image_url alt=image_alt />
                </div>
                <div class="details-area">
                    <h3 class="book-title">{title}</h3>
                    <Text role=TextRole::Caption tone=TextTone::Secondary ui_slot="author">{byline}</Text>
                    <div class="price-container">
                        <span class="price">{price}</span>
                        {original_price.map(|original| view! { <s class="original-price">{original}</s> })}
                    </div>
                    <Cluster gap=LayoutGap::Sm ui_slot="card-actions">
                        <LinkButton
                            href=buy_url
                            new_tab=true
                            size=ButtonSize::Sm
                            ui_slot="buy"
                            disabled=buy_disabled
                            on_click=on_buy
                        >
                            "🛒 Beli"
                        </LinkButton>
                        <Button
                            variant=ButtonVariant::Standard
                            size=ButtonSize::Sm
                            ui_slot="detail"
                            on_click=on_detail
                        >
                            "📋 Detail"
                        </Button>
                    </Cluster>
                </div>
            </div>
            <div class="bottom-section">
                <h4>"Deskripsi Singkat"</h4>
                <Text>{short_description}</Text>
            </div>
        </Card>
    }
}
