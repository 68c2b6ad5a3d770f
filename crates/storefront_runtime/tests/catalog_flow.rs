use futures::executor::block_on;
use platform_host::{
    parse_catalog_document, AnalyticsSink, Book, BookId, CatalogLoadError, CatalogSource,
    MemoryAnalyticsSink, MemoryCatalogSource, MemoryNotificationService, NotificationService,
};
use pretty_assertions::assert_eq;
use storefront_runtime::{
    filter::{filter_by_category, search},
    reduce_storefront, BookCardModel, CatalogAction, CategoryKey, GalleryView, NavSelection,
    RuntimeEffect, StorefrontState,
};

const CATALOG: &str = r#"{
  "books": [
    {
      "id": 1, "title": "Laskar Pelangi", "author": "Andrea Hirata", "price": "Rp 85.000",
      "originalPrice": "Rp 100.000", "discount": "15%", "category": "fiksi",
      "bestseller": true, "new": true, "stock": 12, "image": "img/laskar.jpg",
      "link": "https://shop.example/laskar", "publisher": "Bentang", "year": 2005,
      "pages": 529, "isbn": "979-3062-79-7", "rating": 4.8,
      "short_description": "Sepuluh anak Belitung.",
      "description": "Kisah persahabatan di sekolah Muhammadiyah."
    },
    {
      "id": 2, "title": "Cantik Itu Luka", "author": "Eka Kurniawan", "price": "Rp 125.000",
      "category": "fiksi", "stock": 0, "image": "img/cantik.jpg",
      "link": "https://shop.example/cantik", "publisher": "Gramedia", "year": "2002",
      "pages": "505", "isbn": "978-602-03-1258-3", "rating": "4.6",
      "short_description": "Saga keluarga.", "description": "Dewi Ayu dan kota Halimunda."
    },
    {
      "id": 3, "title": "Resep Rumahan", "author": "Ana Putri", "price": "Rp 60.000",
      "category": "non-fiksi", "new": true, "stock": 3, "image": "img/resep.jpg",
      "link": "https://shop.example/resep", "publisher": "Gramedia", "year": "2021",
      "pages": "180", "isbn": "978-602-06-0000-1", "rating": "4.2",
      "short_description": "Masakan sehari-hari.", "description": "Kumpulan resep keluarga."
    }
  ]
}"#;

/// Drives reducer effects against in-memory services, standing in for the browser host.
struct Harness {
    state: StorefrontState,
    catalog: MemoryCatalogSource,
    analytics: MemoryAnalyticsSink,
    notifications: MemoryNotificationService,
}

impl Harness {
    fn new(catalog: MemoryCatalogSource) -> Self {
        Self {
            state: StorefrontState::default(),
            catalog,
            analytics: MemoryAnalyticsSink::default(),
            notifications: MemoryNotificationService::default(),
        }
    }

    fn dispatch(&mut self, action: CatalogAction) {
        let effects = reduce_storefront(&mut self.state, action).expect("reduce");
        for effect in effects {
            match effect {
                RuntimeEffect::FetchCatalog => {
                    let action = match block_on(self.catalog.load_catalog("books.json")) {
                        Ok(books) => CatalogAction::CatalogLoaded { books },
                        Err(err) => CatalogAction::CatalogLoadFailed {
                            message: err.to_string(),
                        },
                    };
                    self.dispatch(action);
                }
                RuntimeEffect::Notify(message) => {
                    block_on(self.notifications.notify(&message)).expect("notify");
                }
                RuntimeEffect::Track(event) => {
                    self.analytics
                        .track(event.name(), &event.payload())
                        .expect("track");
                }
                _ => {}
            }
        }
    }

    fn shown_ids(&self) -> Vec<u64> {
        match self.state.gallery_view() {
            GalleryView::Books(books) => books.iter().map(|book| book.id.0).collect(),
            _ => Vec::new(),
        }
    }
}

fn books() -> Vec<Book> {
    parse_catalog_document(CATALOG).expect("catalog parses")
}

fn loaded_harness() -> Harness {
    let mut harness = Harness::new(MemoryCatalogSource::with_books(books()));
    harness.dispatch(CatalogAction::RequestLoad);
    harness
}

#[test]
fn filtering_all_is_idempotent_for_every_key() {
    let books = books();
    let all = filter_by_category(&books, &CategoryKey::All);
    for key in ["all", "bestseller", "new", "fiksi", "non-fiksi", "komik"] {
        let key = CategoryKey::parse(key);
        let once = filter_by_category(&books, &key);
        let twice = filter_by_category(once.iter().copied(), &key);
        assert_eq!(once, twice);
    }
    assert_eq!(filter_by_category(all.iter().copied(), &CategoryKey::All), all);
}

#[test]
fn stock_controls_buy_action_on_every_card() {
    for (index, book) in books().iter().enumerate() {
        let card = BookCardModel::project(book, index, "https://placeholder.example");
        assert_eq!(card.buy_enabled, book.stock > 0, "book {}", book.id);
    }
}

#[test]
fn fully_flagged_book_shows_three_badges() {
    let books = books();
    let card = BookCardModel::project(&books[0], 0, "https://placeholder.example");
    let labels = card
        .badges
        .iter()
        .map(|badge| badge.label())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["-15%", "🔥 BESTSELLER", "✨ BARU"]);
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let books = books();
    let ids = |query: &str| {
        search(&books, query)
            .iter()
            .map(|book| book.id)
            .collect::<Vec<_>>()
    };
    assert_eq!(ids("ANA"), vec![BookId(3)]);
    assert_eq!(ids("halimunda"), vec![BookId(2)]);
    assert_eq!(ids("laskar"), vec![BookId(1)]);
}

#[test]
fn failed_load_retries_through_the_single_retry_action() {
    let mut harness = Harness::new(MemoryCatalogSource::failing(CatalogLoadError::Status(503)));
    harness.dispatch(CatalogAction::RequestLoad);
    assert_eq!(harness.state.gallery_view(), GalleryView::Failed);
    assert_eq!(harness.catalog.request_count(), 1);

    harness.dispatch(CatalogAction::RequestLoad);
    assert_eq!(harness.catalog.request_count(), 2);
    assert_eq!(harness.state.gallery_view(), GalleryView::Failed);
}

#[test]
fn empty_category_resets_to_full_list() {
    let mut harness = loaded_harness();
    harness.dispatch(CatalogAction::SelectNav(NavSelection::parse("komik")));
    assert_eq!(harness.state.gallery_view(), GalleryView::Empty);

    harness.dispatch(CatalogAction::ResetToAll);
    assert_eq!(harness.shown_ids(), vec![1, 2, 3]);
}

#[test]
fn unknown_detail_notifies_exactly_once() {
    let mut harness = loaded_harness();
    let before = harness.state.clone();

    harness.dispatch(CatalogAction::OpenDetail(BookId(404)));

    assert_eq!(harness.state, before);
    assert_eq!(harness.notifications.delivered(), vec!["Buku tidak ditemukan!"]);
    assert!(harness.analytics.events().is_empty());
}

#[test]
fn detail_and_purchase_emit_analytics_events() {
    let mut harness = loaded_harness();
    harness.dispatch(CatalogAction::OpenDetail(BookId(1)));
    harness.dispatch(CatalogAction::PurchaseClicked(BookId(1)));

    let names = harness
        .analytics
        .events()
        .into_iter()
        .map(|event| event.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["book_view", "purchase_click"]);
    assert_eq!(
        harness.analytics.events()[1].payload["book_price"],
        "Rp 85.000"
    );
}

#[test]
fn contact_panel_and_back_to_catalog() {
    let mut harness = loaded_harness();
    harness.dispatch(CatalogAction::SelectNav(NavSelection::Contact));
    assert_eq!(harness.state.gallery_view(), GalleryView::Contact);

    harness.dispatch(CatalogAction::SelectNav(NavSelection::parse("all")));
    assert_eq!(harness.shown_ids(), vec![1, 2, 3]);
}
