//! Catalog-source service contracts and in-memory adapter.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

use super::types::{Book, CatalogLoadError};

/// Object-safe boxed future used by [`CatalogSource`].
pub type CatalogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that fetches and parses the catalog document.
pub trait CatalogSource {
    /// Requests the catalog document at `url` and returns the ordered book list.
    fn load_catalog<'a>(
        &'a self,
        url: &'a str,
    ) -> CatalogFuture<'a, Result<Vec<Book>, CatalogLoadError>>;
}

#[derive(Debug, Clone)]
/// In-memory catalog source returning a fixed outcome; counts how often it was asked.
pub struct MemoryCatalogSource {
    outcome: Result<Vec<Book>, CatalogLoadError>,
    requests: Rc<Cell<usize>>,
}

impl MemoryCatalogSource {
    /// Creates a source that always succeeds with `books`.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            outcome: Ok(books),
            requests: Rc::default(),
        }
    }

    /// Creates a source that always fails with `error`.
    pub fn failing(error: CatalogLoadError) -> Self {
        Self {
            outcome: Err(error),
            requests: Rc::default(),
        }
    }

    /// Number of load requests served so far.
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn load_catalog<'a>(
        &'a self,
        _url: &'a str,
    ) -> CatalogFuture<'a, Result<Vec<Book>, CatalogLoadError>> {
        Box::pin(async move {
            self.requests.set(self.requests.get() + 1);
            self.outcome.clone()
        })
    }
}
