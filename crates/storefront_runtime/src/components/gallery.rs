use super::*;
use crate::model::GalleryView;

use super::{book_card::BookCard, contact::ContactPanel};

/// Owned, comparable gallery content so the view only re-renders when the visible set changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum GalleryContent {
    Loading,
    Failed,
    Contact,
    Empty,
    Books(Vec<BookCardModel>),
}

pub(super) fn gallery_content(state: &StorefrontState, placeholder_base: &str) -> GalleryContent {
    match state.gallery_view() {
        GalleryView::Loading => GalleryContent::Loading,
        GalleryView::Failed => GalleryContent::Failed,
        GalleryView::Contact => GalleryContent::Contact,
        GalleryView::Empty => GalleryContent::Empty,
        GalleryView::Books(books) => GalleryContent::Books(
            books
                .into_iter()
                .enumerate()
                .map(|(index, book)| BookCardModel::project(book, index, placeholder_base))
                .collect(),
        ),
    }
}

#[component]
pub(super) fn Gallery(
    runtime: StorefrontRuntimeContext,
    config: &'static StorefrontConfig,
) -> impl IntoView {
    let content = create_memo(move |_| {
        runtime
            .state
            .with(|state| gallery_content(state, &config.placeholder_base))
    });

    let contact = &config.contact;
    let retry = Callback::new(move |_| runtime.dispatch_action(CatalogAction::RequestLoad));
    let reset = Callback::new(move |_| runtime.dispatch_action(CatalogAction::ResetToAll));

    view! {
        <section id="book-gallery" class="gallery" aria-live="polite" data-ui-slot="gallery">
            {move || match content.get() {
                GalleryContent::Loading => view! {
                    <EmptyState layout_class="gallery-loading" tone=TextTone::Secondary role="status">
                        "📚 Memuat koleksi buku terbaik..."
                    </EmptyState>
                }
                .into_view(),
                GalleryContent::Failed => view! {
                    <EmptyState layout_class="gallery-error" tone=TextTone::Danger role="alert">
                        <Heading>"😕 Maaf, terjadi kesalahan"</Heading>
                        <Text>
                            "Tidak dapat memuat koleksi buku. Silakan periksa koneksi internet Anda dan coba lagi."
                        </Text>
                        <Button variant=ButtonVariant::Primary ui_slot="retry" on_click=retry>
                            "🔄 Coba Lagi"
                        </Button>
                    </EmptyState>
                }
                .into_view(),
                GalleryContent::Contact => view! {
                    <ContactPanel runtime=runtime contact=contact />
                }
                .into_view(),
                GalleryContent::Empty => view! {
                    <EmptyState layout_class="gallery-empty">
                        <Heading>"📚 Tidak ada buku ditemukan"</Heading>
                        <Text>"Maaf, tidak ada buku yang tersedia untuk kategori ini."</Text>
                        <Button variant=ButtonVariant::Primary ui_slot="reset" on_click=reset>
                            "📖 Lihat Semua Buku"
                        </Button>
                    </EmptyState>
                }
                .into_view(),
                GalleryContent::Books(cards) => view! {
                    <Grid layout_class="book-grid" id="book-grid">
                        {cards
                            .into_iter()
                            .map(|card| view! { <BookCard runtime=runtime card=card /> })
                            .collect_view()}
                    </Grid>
                }
                .into_view(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        fixtures::book,
        model::{LoadStatus, NavSelection},
    };

    #[test]
    fn content_projects_cards_in_catalog_order() {
        let state = StorefrontState {
            books: vec![
                book(1, "Negeri 5 Menara", "Ahmad Fuadi", "fiksi"),
                book(2, "Filosofi Teras", "Henry Manampiring", "non-fiksi"),
            ],
            load: LoadStatus::Ready,
            ..StorefrontState::default()
        };
        let GalleryContent::Books(cards) = gallery_content(&state, "p") else {
            panic!("expected cards");
        };
        let ids = cards.iter().map(|card| card.id.0).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(cards[1].entrance_delay, "0.1s");
    }

    #[test]
    fn content_follows_view_precedence() {
        let state = StorefrontState {
            selection: NavSelection::parse("puisi"),
            books: vec![book(1, "Negeri 5 Menara", "Ahmad Fuadi", "fiksi")],
            load: LoadStatus::Ready,
            ..StorefrontState::default()
        };
        assert_eq!(gallery_content(&state, "p"), GalleryContent::Empty);
        assert_eq!(
            gallery_content(&StorefrontState::default(), "p"),
            GalleryContent::Loading
        );
    }
}
