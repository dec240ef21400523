//! API route configuration.

use crate::api::handlers::{create_book_handler, get_book_handler, list_books_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Book API routes.
///
/// # Endpoints
///
/// - `GET  /books`      - List stored books
/// - `POST /books`      - Create a book (JSON body)
/// - `GET  /books/{id}` - Fetch a single book
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route("/books/{id}", get(get_book_handler))
}
