//! Detail overlay projection.

use platform_host::{Book, BookId};

use crate::card::{cover_alt_text, placeholder_image_url};

/// One labelled attribute row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    /// Row label.
    pub label: &'static str,
    /// Row value.
    pub value: String,
}

/// Render-ready projection of the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetailModel {
    /// Book identifier.
    pub id: BookId,
    /// Title.
    pub title: String,
    /// Cover image URL.
    pub image_url: String,
    /// Placeholder used when the cover fails to load.
    pub fallback_image_url: String,
    /// Cover alt text.
    pub image_alt: String,
    /// Attribute rows in display order.
    pub rows: Vec<DetailRow>,
    /// Full description.
    pub description: String,
    /// Current price.
    pub price: String,
    /// Struck-through original price.
    pub original_price: Option<String>,
    /// Outbound purchase URL.
    pub buy_url: String,
    /// Whether the buy action is enabled.
    pub buy_enabled: bool,
}

/// Stock label: `"{n} tersedia"` or `"Habis"`.
pub fn stock_label(stock: u32) -> String {
    if stock > 0 {
        format!("{stock} tersedia")
    } else {
        "Habis".to_string()
    }
}

impl BookDetailModel {
    /// Projects every attribute of `book` for the overlay.
    pub fn project(book: &Book, placeholder_base: &str) -> Self {
        let publisher = if book.year.is_empty() {
            book.publisher.clone()
        } else {
            format!("{} ({})", book.publisher, book.year)
        };
        Self {
            id: book.id,
            title: book.title.clone(),
            image_url: book.image.clone(),
            fallback_image_url: placeholder_image_url(placeholder_base, &book.title),
            image_alt: cover_alt_text(&book.title),
            rows: vec![
                DetailRow {
                    label: "Penulis",
                    value: book.author.clone(),
                },
                DetailRow {
                    label: "Penerbit",
                    value: publisher,
                },
                DetailRow {
                    label: "Halaman",
                    value: book.pages.clone(),
                },
                DetailRow {
                    label: "ISBN",
                    value: book.isbn.clone(),
                },
                DetailRow {
                    label: "Rating",
                    value: format!("⭐ {}/5", book.rating),
                },
                DetailRow {
                    label: "Stok",
                    value: stock_label(book.stock),
                },
            ],
            description: book.description.clone(),
            price: book.price.clone(),
            original_price: book.original_price.clone(),
            buy_url: book.link.clone(),
            buy_enabled: book.in_stock(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::book;

    #[test]
    fn rows_cover_every_attribute_in_order() {
        let detail = BookDetailModel::project(&book(5, "Ayat-Ayat Cinta", "Habiburrahman", "fiksi"), "p");
        let labels = detail.rows.iter().map(|row| row.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["Penulis", "Penerbit", "Halaman", "ISBN", "Rating", "Stok"]
        );
        assert_eq!(detail.rows[1].value, "Gramedia (2020)");
        assert_eq!(detail.rows[4].value, "⭐ 4.5/5");
    }

    #[test]
    fn sold_out_books_disable_buy_and_read_habis() {
        let mut sample = book(6, "Dilan 1990", "Pidi Baiq", "fiksi");
        sample.stock = 0;
        let detail = BookDetailModel::project(&sample, "p");
        assert!(!detail.buy_enabled);
        assert_eq!(detail.rows[5].value, "Habis");
        assert_eq!(stock_label(4), "4 tersedia");
    }
}
