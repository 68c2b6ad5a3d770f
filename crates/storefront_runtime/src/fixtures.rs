//! Book fixtures shared by unit tests.

use platform_host::{Book, BookId};

pub(crate) fn book(id: u64, title: &str, author: &str, category: &str) -> Book {
    Book {
        id: BookId(id),
        title: title.to_string(),
        author: author.to_string(),
        price: "Rp 50.000".to_string(),
        original_price: None,
        discount: None,
        category: category.to_string(),
        bestseller: false,
        is_new: false,
        stock: 1,
        image: format!("img/{id}.jpg"),
        link: format!("https://shop.example/{id}"),
        publisher: "Gramedia".to_string(),
        year: "2020".to_string(),
        pages: "320".to_string(),
        isbn: "978-602-03-0000-0".to_string(),
        rating: "4.5".to_string(),
        short_description: String::new(),
        description: String::new(),
    }
}
