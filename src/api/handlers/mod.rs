//! HTTP request handlers for API endpoints.

pub mod books;
pub mod health;

pub use books::{create_book_handler, get_book_handler, list_books_handler};
pub use health::health_handler;
