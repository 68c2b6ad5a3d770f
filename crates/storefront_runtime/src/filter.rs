//! Filter engine: derived views over the catalog by category key or free-text query.
//!
//! Every function borrows the catalog and returns a fresh vector of references; the catalog is
//! never reordered or mutated.

use platform_host::Book;

use crate::model::CategoryKey;

/// Returns whether `book` belongs to the view selected by `key`.
pub fn matches_category(book: &Book, key: &CategoryKey) -> bool {
    match key {
        CategoryKey::All => true,
        CategoryKey::Bestseller => book.bestseller,
        CategoryKey::New => book.is_new,
        CategoryKey::Named(name) => book.category == *name,
    }
}

/// Returns whether `book` matches an already lower-cased query on title, author, or description.
pub fn matches_query(book: &Book, needle: &str) -> bool {
    [&book.title, &book.author, &book.description]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filters `books` by category key, preserving order.
pub fn filter_by_category<'a, I>(books: I, key: &CategoryKey) -> Vec<&'a Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    books
        .into_iter()
        .filter(|book| matches_category(book, key))
        .collect()
}

/// Case-insensitive substring search across title, author, and description, preserving order.
///
/// Surrounding whitespace in `query` is ignored; an empty query matches every book.
pub fn search<'a, I>(books: I, query: &str) -> Vec<&'a Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    let needle = query.trim().to_lowercase();
    books
        .into_iter()
        .filter(|book| matches_query(book, &needle))
        .collect()
}
