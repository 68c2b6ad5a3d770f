//! Reducer actions, side-effect intents, and transition logic for the storefront runtime.

use platform_host::{Book, BookId};
use thiserror::Error;

use crate::{
    analytics::AnalyticsEvent,
    model::{CategoryKey, LoadStatus, ModalState, NavSelection, StorefrontState},
};

/// Notification shown when a detail lookup misses.
pub const BOOK_NOT_FOUND_MESSAGE: &str = "Buku tidak ditemukan!";

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_storefront`] to mutate [`StorefrontState`].
pub enum CatalogAction {
    /// Start a catalog load (boot or retry).
    RequestLoad,
    /// A load finished successfully.
    CatalogLoaded {
        /// Books in source order.
        books: Vec<Book>,
    },
    /// A load failed.
    CatalogLoadFailed {
        /// Diagnostic message.
        message: String,
    },
    /// Activate a navigation control.
    SelectNav(NavSelection),
    /// Return to the unfiltered catalog (empty-state action).
    ResetToAll,
    /// Replace the free-text query.
    Search {
        /// Raw query text.
        query: String,
        /// [`StorefrontState::nav_epoch`] when the query was typed. Stale searches are ignored.
        nav_epoch: u64,
    },
    /// Open the detail overlay for a book.
    OpenDetail(BookId),
    /// Begin closing the detail overlay.
    CloseDetail,
    /// Remove the overlay once its exit animation has finished.
    FinishCloseDetail(BookId),
    /// A buy link was followed.
    PurchaseClicked(BookId),
    /// Browser connectivity changed.
    ConnectivityChanged {
        /// Whether the browser is now online.
        online: bool,
    },
    /// Hide the offline banner shown under `token`.
    HideOfflineBanner {
        /// Banner generation the hide timer was scheduled for.
        token: u64,
    },
    /// The browser offered an install prompt.
    InstallPromptAvailable,
    /// The user accepted the install banner.
    InstallRequested,
    /// The user dismissed the install banner.
    DismissInstall,
    /// A pull-to-refresh gesture completed.
    PullRefresh,
    /// Keyboard shortcut requested the search field.
    FocusSearch,
    /// An uncaught script error reached the window.
    ClientError {
        /// Error message.
        message: String,
        /// Source file.
        filename: String,
        /// Source line.
        line: u32,
    },
    /// Boot finished; report page load timing.
    PageLoaded {
        /// Milliseconds since navigation start.
        load_time_ms: u64,
        /// Browser user agent.
        user_agent: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_storefront`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Fetch the catalog document and report back with a load action.
    FetchCatalog,
    /// Show a blocking user notification.
    Notify(String),
    /// Forward an analytics event.
    Track(AnalyticsEvent),
    /// Lock (`true`) or restore (`false`) page scrolling.
    LockBodyScroll(bool),
    /// Dispatch [`CatalogAction::FinishCloseDetail`] after the exit animation.
    ScheduleModalRemoval(BookId),
    /// Dispatch [`CatalogAction::HideOfflineBanner`] after the banner interval.
    ScheduleOfflineBannerHide(u64),
    /// Show the deferred browser install prompt.
    PromptInstall,
    /// Move keyboard focus into the search field.
    FocusSearchInput,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference missing records.
pub enum ReducerError {
    /// The referenced book is not in the catalog.
    #[error("book {0} not found")]
    BookNotFound(BookId),
}

/// Applies a [`CatalogAction`] to the storefront state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::BookNotFound`] when a purchase references a book that is not loaded.
/// Detail lookups that miss are not errors; they emit a notification instead.
pub fn reduce_storefront(
    state: &mut StorefrontState,
    action: CatalogAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        CatalogAction::RequestLoad | CatalogAction::PullRefresh => {
            begin_load(state, &mut effects);
        }
        CatalogAction::CatalogLoaded { books } => {
            state.books = books;
            state.load = LoadStatus::Ready;
            if let Some(id) = state.modal.book_id() {
                if state.find_book(id).is_none() {
                    state.modal = ModalState::Closed;
                    effects.push(RuntimeEffect::LockBodyScroll(false));
                }
            }
        }
        CatalogAction::CatalogLoadFailed { message } => {
            state.load = LoadStatus::Failed { message };
        }
        CatalogAction::SelectNav(selection) => {
            state.selection = selection;
            state.query.clear();
            state.nav_epoch += 1;
        }
        CatalogAction::ResetToAll => {
            state.selection = NavSelection::Catalog(CategoryKey::All);
            state.query.clear();
            state.nav_epoch += 1;
        }
        CatalogAction::Search { query, nav_epoch } => {
            if nav_epoch != state.nav_epoch {
                return Ok(effects);
            }
            if !query.trim().is_empty() && state.selection == NavSelection::Contact {
                state.selection = NavSelection::Catalog(CategoryKey::All);
            }
            state.query = query;
        }
        CatalogAction::OpenDetail(id) => match state.find_book(id) {
            Some(book) => {
                let event = AnalyticsEvent::book_view(book);
                let was_open = state.modal.book_id().is_some();
                state.modal = ModalState::Open(id);
                effects.push(RuntimeEffect::Track(event));
                if !was_open {
                    effects.push(RuntimeEffect::LockBodyScroll(true));
                }
            }
            None => effects.push(RuntimeEffect::Notify(BOOK_NOT_FOUND_MESSAGE.to_string())),
        },
        CatalogAction::CloseDetail => {
            if let ModalState::Open(id) = state.modal {
                state.modal = ModalState::Closing(id);
                effects.push(RuntimeEffect::ScheduleModalRemoval(id));
            }
        }
        CatalogAction::FinishCloseDetail(id) => {
            if state.modal == ModalState::Closing(id) {
                state.modal = ModalState::Closed;
                effects.push(RuntimeEffect::LockBodyScroll(false));
            }
        }
        CatalogAction::PurchaseClicked(id) => {
            let book = state.find_book(id).ok_or(ReducerError::BookNotFound(id))?;
            effects.push(RuntimeEffect::Track(AnalyticsEvent::purchase_click(book)));
        }
        CatalogAction::ConnectivityChanged { online } => {
            state.online = online;
            if online {
                state.offline_banner_visible = false;
                if state.books.is_empty() {
                    begin_load(state, &mut effects);
                }
            } else {
                state.offline_banner_token += 1;
                state.offline_banner_visible = true;
                effects.push(RuntimeEffect::ScheduleOfflineBannerHide(
                    state.offline_banner_token,
                ));
            }
        }
        CatalogAction::HideOfflineBanner { token } => {
            if token == state.offline_banner_token {
                state.offline_banner_visible = false;
            }
        }
        CatalogAction::InstallPromptAvailable => {
            state.install_banner_visible = true;
        }
        CatalogAction::InstallRequested => {
            state.install_banner_visible = false;
            effects.push(RuntimeEffect::PromptInstall);
        }
        CatalogAction::DismissInstall => {
            state.install_banner_visible = false;
        }
        CatalogAction::FocusSearch => {
            effects.push(RuntimeEffect::FocusSearchInput);
        }
        CatalogAction::ClientError {
            message,
            filename,
            line,
        } => {
            effects.push(RuntimeEffect::Track(AnalyticsEvent::JavascriptError {
                error_message: message,
                error_filename: filename,
                error_line: line,
            }));
        }
        CatalogAction::PageLoaded {
            load_time_ms,
            user_agent,
        } => {
            effects.push(RuntimeEffect::Track(AnalyticsEvent::PageLoadTime {
                load_time: load_time_ms,
                user_agent,
            }));
        }
    }
    Ok(effects)
}

fn begin_load(state: &mut StorefrontState, effects: &mut Vec<RuntimeEffect>) {
    if state.load == LoadStatus::Loading {
        return;
    }
    state.load = LoadStatus::Loading;
    effects.push(RuntimeEffect::FetchCatalog);
}
