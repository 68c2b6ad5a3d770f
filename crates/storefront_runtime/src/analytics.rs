//! Analytics events emitted by the storefront.

use platform_host::Book;
use serde_json::{json, Value};

/// One analytics event with its payload fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    /// A book's detail overlay was opened.
    BookView {
        /// Book identifier.
        book_id: u64,
        /// Book title.
        book_title: String,
        /// Book category key.
        book_category: String,
    },
    /// A buy action was followed.
    PurchaseClick {
        /// Book identifier.
        book_id: u64,
        /// Book title.
        book_title: String,
        /// Price display string.
        book_price: String,
        /// Book category key.
        book_category: String,
    },
    /// Time from navigation start until the storefront booted.
    PageLoadTime {
        /// Milliseconds, rounded.
        load_time: u64,
        /// Browser user agent.
        user_agent: String,
    },
    /// An uncaught script error reached the window.
    JavascriptError {
        /// Error message.
        error_message: String,
        /// Source file.
        error_filename: String,
        /// Source line.
        error_line: u32,
    },
}

impl AnalyticsEvent {
    /// Builds a [`AnalyticsEvent::BookView`] for `book`.
    pub fn book_view(book: &Book) -> Self {
        Self::BookView {
            book_id: book.id.0,
            book_title: book.title.clone(),
            book_category: book.category.clone(),
        }
    }

    /// Builds a [`AnalyticsEvent::PurchaseClick`] for `book`.
    pub fn purchase_click(book: &Book) -> Self {
        Self::PurchaseClick {
            book_id: book.id.0,
            book_title: book.title.clone(),
            book_price: book.price.clone(),
            book_category: book.category.clone(),
        }
    }

    /// Wire event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BookView { .. } => "book_view",
            Self::PurchaseClick { .. } => "purchase_click",
            Self::PageLoadTime { .. } => "page_load_time",
            Self::JavascriptError { .. } => "javascript_error",
        }
    }

    /// Flat JSON payload.
    pub fn payload(&self) -> Value {
        match self {
            Self::BookView {
                book_id,
                book_title,
                book_category,
            } => json!({
                "book_id": book_id,
                "book_title": book_title,
                "book_category": book_category,
            }),
            Self::PurchaseClick {
                book_id,
                book_title,
                book_price,
                book_category,
            } => json!({
                "book_id": book_id,
                "book_title": book_title,
                "book_price": book_price,
                "book_category": book_category,
            }),
            Self::PageLoadTime {
                load_time,
                user_agent,
            } => json!({
                "load_time": load_time,
                "user_agent": user_agent,
            }),
            Self::JavascriptError {
                error_message,
                error_filename,
                error_line,
            } => json!({
                "error_message": error_message,
                "error_filename": error_filename,
                "error_line": error_line,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::book;

    #[test]
    fn purchase_click_carries_price_and_category() {
        let event = AnalyticsEvent::purchase_click(&book(9, "Pulang", "Tere Liye", "fiksi"));
        assert_eq!(event.name(), "purchase_click");
        assert_eq!(
            event.payload(),
            json!({
                "book_id": 9,
                "book_title": "Pulang",
                "book_price": "Rp 50.000",
                "book_category": "fiksi",
            })
        );
    }

    #[test]
    fn error_payload_uses_wire_field_names() {
        let event = AnalyticsEvent::JavascriptError {
            error_message: "boom".to_string(),
            error_filename: "app.js".to_string(),
            error_line: 12,
        };
        assert_eq!(event.name(), "javascript_error");
        assert_eq!(event.payload()["error_line"], json!(12));
    }
}
