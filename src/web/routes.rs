//! Catalogue page route configuration.

use crate::state::AppState;
use crate::web::handlers::{create_book_handler, list_books_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Catalogue pages.
///
/// # Endpoints
///
/// - `GET  /`      - Book listing with the creation form
/// - `POST /books` - Form submission, renders the outcome page
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books_handler))
        .route("/books", post(create_book_handler))
}
