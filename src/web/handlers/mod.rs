//! HTML template rendering handlers.

mod books;

pub use books::{BookListTemplate, BookResultTemplate, create_book_handler, list_books_handler};
