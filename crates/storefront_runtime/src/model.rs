//! Storefront state model: navigation selection, load lifecycle, detail overlay, and banners.

use platform_host::{Book, BookId};

use crate::filter::{filter_by_category, search};

/// Reserved navigation key that swaps the gallery for the contact panel.
pub const CONTACT_NAV_KEY: &str = "contact";

/// Category filter key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    /// Every book.
    All,
    /// Books flagged as bestsellers.
    Bestseller,
    /// Books flagged as new arrivals.
    New,
    /// Books whose `category` equals the key.
    Named(String),
}

impl CategoryKey {
    /// Parses a raw category key. Unknown keys become [`CategoryKey::Named`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "all" => Self::All,
            "bestseller" => Self::Bestseller,
            "new" => Self::New,
            other => Self::Named(other.to_string()),
        }
    }

    /// Stable key string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Bestseller => "bestseller",
            Self::New => "new",
            Self::Named(name) => name,
        }
    }
}

impl Default for CategoryKey {
    fn default() -> Self {
        Self::All
    }
}

/// The single active navigation control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavSelection {
    /// A catalog view filtered by category.
    Catalog(CategoryKey),
    /// The static contact panel.
    Contact,
}

impl NavSelection {
    /// Parses a navigation key, honoring the reserved contact key.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == CONTACT_NAV_KEY {
            Self::Contact
        } else {
            Self::Catalog(CategoryKey::parse(raw))
        }
    }

    /// Stable key string matching the navigation config.
    pub fn key(&self) -> &str {
        match self {
            Self::Catalog(category) => category.as_str(),
            Self::Contact => CONTACT_NAV_KEY,
        }
    }
}

impl Default for NavSelection {
    fn default() -> Self {
        Self::Catalog(CategoryKey::All)
    }
}

/// Catalog load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No load has been requested yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The catalog holds the result of the latest successful load.
    Ready,
    /// The latest load failed.
    Failed {
        /// Diagnostic message for logs; the UI shows fixed copy.
        message: String,
    },
}

/// Detail overlay lifecycle. At most one overlay exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// No overlay.
    #[default]
    Closed,
    /// Overlay showing the given book.
    Open(BookId),
    /// Overlay playing its exit animation before removal.
    Closing(BookId),
}

impl ModalState {
    /// Book shown by the overlay, while it exists.
    pub fn book_id(self) -> Option<BookId> {
        match self {
            Self::Closed => None,
            Self::Open(id) | Self::Closing(id) => Some(id),
        }
    }
}

/// What the gallery container currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView<'a> {
    /// A load is pending.
    Loading,
    /// The latest load failed; offers one retry action.
    Failed,
    /// The static contact panel.
    Contact,
    /// The filter produced no books; offers one reset-to-all action.
    Empty,
    /// Books to render, in catalog order.
    Books(Vec<&'a Book>),
}

/// Complete storefront state owned by the runtime provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontState {
    /// Catalog in source order; replaced wholesale on each successful load.
    pub books: Vec<Book>,
    /// Active navigation control.
    pub selection: NavSelection,
    /// Free-text search query; empty when inactive.
    pub query: String,
    /// Bumped on every navigation change, so searches typed before it are dropped.
    pub nav_epoch: u64,
    /// Load lifecycle.
    pub load: LoadStatus,
    /// Detail overlay lifecycle.
    pub modal: ModalState,
    /// Last known connectivity.
    pub online: bool,
    /// Whether the offline banner is showing.
    pub offline_banner_visible: bool,
    /// Generation of the latest offline banner, so stale hide timers are ignored.
    pub offline_banner_token: u64,
    /// Whether the install banner is showing.
    pub install_banner_visible: bool,
}

impl Default for StorefrontState {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            selection: NavSelection::default(),
            query: String::new(),
            nav_epoch: 0,
            load: LoadStatus::Idle,
            modal: ModalState::Closed,
            online: true,
            offline_banner_visible: false,
            offline_banner_token: 0,
            install_banner_visible: false,
        }
    }
}

impl StorefrontState {
    /// Looks up a book by identifier.
    pub fn find_book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Book shown in the detail overlay, if any.
    pub fn modal_book(&self) -> Option<&Book> {
        self.modal.book_id().and_then(|id| self.find_book(id))
    }

    /// Navigation key to highlight. None while a search query overrides the category.
    pub fn active_nav_key(&self) -> Option<&str> {
        if self.query.trim().is_empty() {
            Some(self.selection.key())
        } else {
            None
        }
    }

    /// Derives the gallery content from the current state without mutating the catalog.
    pub fn gallery_view(&self) -> GalleryView<'_> {
        let category = match &self.selection {
            NavSelection::Contact => return GalleryView::Contact,
            NavSelection::Catalog(category) => category,
        };
        match self.load {
            LoadStatus::Idle | LoadStatus::Loading => return GalleryView::Loading,
            LoadStatus::Failed { .. } => return GalleryView::Failed,
            LoadStatus::Ready => {}
        }

        let books = if self.query.trim().is_empty() {
            filter_by_category(&self.books, category)
        } else {
            search(&self.books, &self.query)
        };
        if books.is_empty() {
            GalleryView::Empty
        } else {
            GalleryView::Books(books)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys_round_trip_through_their_strings() {
        for raw in ["all", "bestseller", "new", "fiksi"] {
            assert_eq!(CategoryKey::parse(raw).as_str(), raw);
        }
        assert_eq!(CategoryKey::parse(""), CategoryKey::All);
    }

    #[test]
    fn contact_key_is_reserved_for_navigation() {
        assert_eq!(NavSelection::parse("contact"), NavSelection::Contact);
        assert_eq!(
            NavSelection::parse("fiksi"),
            NavSelection::Catalog(CategoryKey::Named("fiksi".to_string()))
        );
        assert_eq!(NavSelection::Contact.key(), "contact");
    }

    #[test]
    fn gallery_shows_loading_until_first_load_completes() {
        let state = StorefrontState::default();
        assert_eq!(state.gallery_view(), GalleryView::Loading);
        assert!(state.books.is_empty());
    }

    #[test]
    fn contact_panel_wins_over_load_status() {
        let state = StorefrontState {
            selection: NavSelection::Contact,
            load: LoadStatus::Failed {
                message: "offline".to_string(),
            },
            ..StorefrontState::default()
        };
        assert_eq!(state.gallery_view(), GalleryView::Contact);
    }

    #[test]
    fn active_search_clears_the_nav_highlight() {
        let mut state = StorefrontState {
            selection: NavSelection::parse("fiksi"),
            ..StorefrontState::default()
        };
        assert_eq!(state.active_nav_key(), Some("fiksi"));

        state.query = "laskar".to_string();
        assert_eq!(state.active_nav_key(), None);

        state.query = "   ".to_string();
        assert_eq!(state.active_nav_key(), Some("fiksi"));
    }

    #[test]
    fn modal_state_exposes_book_while_closing() {
        assert_eq!(ModalState::Closing(BookId(3)).book_id(), Some(BookId(3)));
        assert_eq!(ModalState::Closed.book_id(), None);
    }
}
