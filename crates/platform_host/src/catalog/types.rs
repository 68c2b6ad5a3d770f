//! Book record model and catalog document parsing.

use std::fmt;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Stable identifier for one book record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only book record as published by the catalog document.
///
/// Display-oriented fields (`price`, `year`, `isbn`, ...) are held as strings because the source
/// document mixes JSON strings and numbers for them and they are only ever shown, never computed
/// on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique, stable identifier.
    pub id: BookId,
    /// Title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Price display string (for example `Rp 89.000`).
    #[serde(deserialize_with = "display_string")]
    pub price: String,
    /// Price before discount, shown struck through when present.
    #[serde(
        rename = "originalPrice",
        default,
        deserialize_with = "optional_display_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<String>,
    /// Discount label (for example `20%`).
    #[serde(
        default,
        deserialize_with = "optional_discount",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount: Option<String>,
    /// Category key the book is filed under.
    pub category: String,
    /// Bestseller flag.
    #[serde(default)]
    pub bestseller: bool,
    /// New-arrival flag.
    #[serde(rename = "new", default)]
    pub is_new: bool,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Cover image URL.
    #[serde(default)]
    pub image: String,
    /// Outbound purchase URL.
    #[serde(default)]
    pub link: String,
    /// Publisher name.
    #[serde(default)]
    pub publisher: String,
    /// Publication year.
    #[serde(default, deserialize_with = "display_string")]
    pub year: String,
    /// Page count.
    #[serde(default, deserialize_with = "display_string")]
    pub pages: String,
    /// ISBN.
    #[serde(default, deserialize_with = "display_string")]
    pub isbn: String,
    /// Rating out of five.
    #[serde(default, deserialize_with = "display_string")]
    pub rating: String,
    /// One-paragraph teaser shown on the card.
    #[serde(default)]
    pub short_description: String,
    /// Full description shown in the detail overlay.
    #[serde(default)]
    pub description: String,
}

impl Book {
    /// Returns whether at least one unit can be purchased.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Top-level catalog document shape: `{"books": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Book records in source order.
    pub books: Vec<Book>,
}

/// Failure modes when loading the catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLoadError {
    /// The request never produced a response (network down, CORS, aborted).
    Transport(String),
    /// The server answered with a non-success HTTP status.
    Status(u16),
    /// The response body was not a valid catalog document.
    Parse(String),
}

impl fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "catalog request failed: {message}"),
            Self::Status(status) => write!(f, "catalog request returned HTTP {status}"),
            Self::Parse(message) => write!(f, "catalog document is malformed: {message}"),
        }
    }
}

impl std::error::Error for CatalogLoadError {}

/// Parses a raw catalog document into its ordered book list.
///
/// # Errors
///
/// Returns [`CatalogLoadError::Parse`] when the payload is not valid JSON or does not match the
/// catalog document shape.
pub fn parse_catalog_document(raw: &str) -> Result<Vec<Book>, CatalogLoadError> {
    serde_json::from_str::<CatalogDocument>(raw)
        .map(|document| document.books)
        .map_err(|err| CatalogLoadError::Parse(err.to_string()))
}

fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

fn optional_display_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = display_string(deserializer)?;
    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

fn optional_discount<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) if number.as_f64() == Some(0.0) => Ok(None),
        other => optional_display_string(other).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"{
        "books": [
            {
                "id": 1,
                "title": "Laskar Pelangi",
                "author": "Andrea Hirata",
                "price": "Rp 89.000",
                "originalPrice": "Rp 110.000",
                "discount": "20%",
                "category": "fiksi",
                "bestseller": true,
                "new": false,
                "stock": 12,
                "image": "img/laskar.jpg",
                "link": "https://shop.example/laskar",
                "publisher": "Bentang Pustaka",
                "year": 2005,
                "pages": 529,
                "isbn": "978-979-3062-79-1",
                "rating": 4.8,
                "short_description": "Kisah sepuluh anak Belitung.",
                "description": "Novel tentang persahabatan dan pendidikan."
            },
            {
                "id": 2,
                "title": "Filosofi Teras",
                "author": "Henry Manampiring",
                "price": 98000,
                "category": "pengembangan-diri",
                "stock": 0
            }
        ]
    }"#;

    #[test]
    fn parses_books_in_source_order_with_mixed_display_fields() {
        let books = parse_catalog_document(SAMPLE).expect("parse sample");

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, BookId(1));
        assert_eq!(books[1].id, BookId(2));
        assert_eq!(books[0].year, "2005");
        assert_eq!(books[0].rating, "4.8");
        assert_eq!(books[0].original_price.as_deref(), Some("Rp 110.000"));
        assert_eq!(books[0].discount.as_deref(), Some("20%"));
        assert!(books[0].bestseller);
        assert!(!books[0].is_new);
        assert_eq!(books[1].price, "98000");
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let books = parse_catalog_document(SAMPLE).expect("parse sample");
        let sparse = &books[1];

        assert_eq!(sparse.original_price, None);
        assert_eq!(sparse.discount, None);
        assert!(!sparse.bestseller);
        assert!(!sparse.is_new);
        assert!(!sparse.in_stock());
        assert_eq!(sparse.isbn, "");
    }

    #[test]
    fn blank_discount_is_treated_as_absent() {
        let raw = r#"{"books":[{"id":3,"title":"T","author":"A","price":"1","category":"c","discount":""}]}"#;
        let books = parse_catalog_document(raw).expect("parse");
        assert_eq!(books[0].discount, None);
    }

    #[test]
    fn zero_numeric_discount_is_treated_as_absent() {
        let raw = r#"{"books":[
            {"id":4,"title":"T","author":"A","price":"1","category":"c","discount":0},
            {"id":5,"title":"U","author":"B","price":"1","category":"c","discount":15}
        ]}"#;
        let books = parse_catalog_document(raw).expect("parse");
        assert_eq!(books[0].discount, None);
        assert_eq!(books[1].discount.as_deref(), Some("15"));
    }

    #[test]
    fn malformed_documents_surface_parse_errors() {
        let err = parse_catalog_document("{\"items\": []}").expect_err("missing books key");
        assert!(matches!(err, CatalogLoadError::Parse(_)));

        let err = parse_catalog_document("not json").expect_err("not json");
        assert!(err.to_string().starts_with("catalog document is malformed"));
    }

    #[test]
    fn load_error_display_names_the_failure() {
        assert_eq!(
            CatalogLoadError::Status(404).to_string(),
            "catalog request returned HTTP 404"
        );
        assert_eq!(
            CatalogLoadError::Transport("offline".to_string()).to_string(),
            "catalog request failed: offline"
        );
    }

    #[test]
    fn new_flag_serializes_under_its_wire_name() {
        let books = parse_catalog_document(SAMPLE).expect("parse sample");
        let value = serde_json::to_value(&books[0]).expect("serialize");
        assert_eq!(value["new"], serde_json::json!(false));
        assert_eq!(value["originalPrice"], serde_json::json!("Rp 110.000"));
    }
}
