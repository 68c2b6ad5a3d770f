//! Gallery card projection.
//!
//! Turns a [`Book`] into everything the card markup needs so rendering rules (badges, buy state,
//! image fallback) are testable without a DOM.

use platform_host::{Book, BookId};
use system_ui::TextTone;

/// Marker shown on a card's corner. Badges are independent; any subset may appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeKind {
    /// Discount label, for example `20%`.
    Discount(String),
    /// Bestseller flag.
    Bestseller,
    /// New-arrival flag.
    New,
}

impl BadgeKind {
    /// Display label.
    pub fn label(&self) -> String {
        match self {
            Self::Discount(amount) => format!("-{amount}"),
            Self::Bestseller => "🔥 BESTSELLER".to_string(),
            Self::New => "✨ BARU".to_string(),
        }
    }

    /// Stable slot token for styling.
    pub fn slot(&self) -> &'static str {
        match self {
            Self::Discount(_) => "discount-badge",
            Self::Bestseller => "bestseller-badge",
            Self::New => "new-badge",
        }
    }

    /// Visual tone.
    pub fn tone(&self) -> TextTone {
        match self {
            Self::Discount(_) => TextTone::Danger,
            Self::Bestseller => TextTone::Warning,
            Self::New => TextTone::Success,
        }
    }
}

/// Badges for `book`, in discount / bestseller / new order.
pub fn badges_for(book: &Book) -> Vec<BadgeKind> {
    let mut badges = Vec::new();
    if let Some(discount) = book.discount.as_ref() {
        badges.push(BadgeKind::Discount(discount.clone()));
    }
    if book.bestseller {
        badges.push(BadgeKind::Bestseller);
    }
    if book.is_new {
        badges.push(BadgeKind::New);
    }
    badges
}

/// Alt text for a cover image.
pub fn cover_alt_text(title: &str) -> String {
    format!("Sampul buku {title}")
}

/// Deterministic placeholder image URL generated from a title.
pub fn placeholder_image_url(base: &str, title: &str) -> String {
    format!("{base}?text={}", encode_uri_component(title))
}

/// Percent-encodes `raw` with the same unreserved set as JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    encoded
}

/// Render-ready projection of one gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCardModel {
    /// Book identifier for the detail action.
    pub id: BookId,
    /// Title.
    pub title: String,
    /// Author line, already prefixed.
    pub byline: String,
    /// Current price.
    pub price: String,
    /// Struck-through original price.
    pub original_price: Option<String>,
    /// Card teaser.
    pub short_description: String,
    /// Cover image URL (loaded lazily).
    pub image_url: String,
    /// Placeholder used when the cover fails to load.
    pub fallback_image_url: String,
    /// Cover alt text.
    pub image_alt: String,
    /// Outbound purchase URL.
    pub buy_url: String,
    /// Whether the buy action is enabled.
    pub buy_enabled: bool,
    /// Corner badges.
    pub badges: Vec<BadgeKind>,
    /// Staggered entrance animation delay (CSS time).
    pub entrance_delay: String,
}

impl BookCardModel {
    /// Projects `book` at gallery position `index`.
    pub fn project(book: &Book, index: usize, placeholder_base: &str) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            byline: format!("oleh {}", book.author),
            price: book.price.clone(),
            original_price: book.original_price.clone(),
            short_description: book.short_description.clone(),
            image_url: book.image.clone(),
            fallback_image_url: placeholder_image_url(placeholder_base, &book.title),
            image_alt: cover_alt_text(&book.title),
            buy_url: book.link.clone(),
            buy_enabled: book.in_stock(),
            badges: badges_for(book),
            entrance_delay: format!("{:.1}s", index as f64 * 0.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::book;

    const BASE: &str = "https://via.placeholder.com/300x400/667eea/ffffff";

    #[test]
    fn buy_action_tracks_stock() {
        let mut sample = book(1, "Gadis Kretek", "Ratih Kumala", "fiksi");
        for (stock, enabled) in [(0, false), (1, true), (250, true)] {
            sample.stock = stock;
            assert_eq!(BookCardModel::project(&sample, 0, BASE).buy_enabled, enabled);
        }
    }

    #[test]
    fn all_three_badges_can_appear_together() {
        let mut sample = book(2, "Ronggeng Dukuh Paruk", "Ahmad Tohari", "fiksi");
        sample.discount = Some("15%".to_string());
        sample.bestseller = true;
        sample.is_new = true;

        let badges = badges_for(&sample);
        assert_eq!(
            badges,
            vec![
                BadgeKind::Discount("15%".to_string()),
                BadgeKind::Bestseller,
                BadgeKind::New
            ]
        );
        assert_eq!(badges[0].label(), "-15%");
    }

    #[test]
    fn plain_books_have_no_badges() {
        assert!(badges_for(&book(3, "Sapiens", "Yuval Noah Harari", "sejarah")).is_empty());
    }

    #[test]
    fn placeholder_url_encodes_title_like_encode_uri_component() {
        assert_eq!(
            placeholder_image_url(BASE, "Sang Pemimpi & Edensor"),
            format!("{BASE}?text=Sang%20Pemimpi%20%26%20Edensor")
        );
        assert_eq!(encode_uri_component("Café (2)"), "Caf%C3%A9%20(2)");
    }

    #[test]
    fn projection_carries_display_fields_and_stagger() {
        let mut sample = book(4, "Hujan", "Tere Liye", "fiksi");
        sample.original_price = Some("Rp 99.000".to_string());

        let card = BookCardModel::project(&sample, 3, BASE);
        assert_eq!(card.byline, "oleh Tere Liye");
        assert_eq!(card.image_alt, "Sampul buku Hujan");
        assert_eq!(card.original_price.as_deref(), Some("Rp 99.000"));
        assert_eq!(card.entrance_delay, "0.3s");
    }
}
