//! Browser catalog source backed by `fetch`.

use platform_host::{parse_catalog_document, Book, CatalogFuture, CatalogLoadError, CatalogSource};

use crate::bridge::{self, FetchResponse};

#[derive(Debug, Clone, Copy, Default)]
/// Catalog source that fetches the catalog document over HTTP.
pub struct WebCatalogSource;

impl CatalogSource for WebCatalogSource {
    fn load_catalog<'a>(
        &'a self,
        url: &'a str,
    ) -> CatalogFuture<'a, Result<Vec<Book>, CatalogLoadError>> {
        Box::pin(async move {
            let response = bridge::fetch_text(url)
                .await
                .map_err(CatalogLoadError::Transport)?;
            books_from_response(response)
        })
    }
}

fn books_from_response(response: FetchResponse) -> Result<Vec<Book>, CatalogLoadError> {
    if !response.ok {
        return Err(CatalogLoadError::Status(response.status));
    }
    parse_catalog_document(&response.body)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn non_success_status_is_reported_before_parsing() {
        let err = books_from_response(FetchResponse {
            status: 503,
            ok: false,
            body: "{\"books\": []}".to_string(),
        })
        .expect_err("status failure");
        assert_eq!(err, CatalogLoadError::Status(503));
    }

    #[test]
    fn success_body_is_parsed_into_books() {
        let books = books_from_response(FetchResponse {
            status: 200,
            ok: true,
            body: r#"{"books":[{"id":4,"title":"T","author":"A","price":"1","category":"c"}]}"#
                .to_string(),
        })
        .expect("parse");
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn native_target_reports_transport_failure() {
        let err = block_on(WebCatalogSource.load_catalog("books.json")).expect_err("no fetch");
        assert!(matches!(err, CatalogLoadError::Transport(_)));
    }
}
