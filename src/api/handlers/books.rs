//! Handlers for the book endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Map, Value, json};

use crate::api::dto::book::{BookResponse, CreateBookResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::params::RequestParams;

/// Lists every stored book.
///
/// # Endpoint
///
/// `GET /api/books`
///
/// # Errors
///
/// Returns 500 Internal Server Error if storage cannot be read.
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookResponse>>, AppError> {
    let books = state.book_service.list_books().await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Returns a single book.
///
/// # Endpoint
///
/// `GET /api/books/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no book has this id.
pub async fn get_book_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BookResponse>, AppError> {
    let book = state.book_service.get_book(id).await?;
    Ok(Json(book.into()))
}

/// Runs the creation workflow on a JSON submission.
///
/// # Endpoint
///
/// `POST /api/books`
///
/// # Request Body
///
/// A flat object with the form fields. Numbers may be sent as JSON numbers
/// or strings:
///
/// ```json
/// {
///   "isbn": "9780441013593",
///   "title": "Dune",
///   "author": "Frank Herbert",
///   "publication_year": 1965,
///   "page_count": 412,
///   "available_copies": 2
/// }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: book stored
/// - **400 Bad Request**: the body is not a JSON object, or a field is
///   missing or not an integer
/// - **409 Conflict**: storage declined the insert
/// - **422 Unprocessable Entity**: validation failed, see `findings`
/// - **500 Internal Server Error**: storage error
pub async fn create_book_handler(
    State(state): State<AppState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateBookResponse>), AppError> {
    let Json(body) = body.map_err(|rejection| {
        AppError::bad_request(
            "Request body must be a JSON object",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let params = RequestParams::from_json(body);
    let outcome = state.book_service.create_book(&params).await;

    Ok((outcome.status_code(), Json(outcome.into())))
}
