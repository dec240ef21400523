//! Book catalogue pages: the listing with its creation form, and the
//! outcome page shown after a submission.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
};

use crate::domain::entities::Book;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::params::RequestParams;

/// Template for the catalogue listing.
///
/// Renders `templates/books/index.html` with the stored books bound as
/// `books`, followed by the creation form.
#[derive(Template, WebTemplate)]
#[template(path = "books/index.html")]
pub struct BookListTemplate {
    pub books: Vec<Book>,
}

/// Template for the submission outcome.
///
/// Renders `templates/books/result.html` with the outcome text bound as
/// `message`.
#[derive(Template, WebTemplate)]
#[template(path = "books/result.html")]
pub struct BookResultTemplate {
    pub message: String,
    pub success: bool,
}

/// Renders the catalogue listing.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// Returns [`AppError::Internal`] if storage cannot be read.
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<BookListTemplate, AppError> {
    let books = state.book_service.list_books().await?;
    Ok(BookListTemplate { books })
}

/// Handles the creation form and renders its outcome.
///
/// # Endpoint
///
/// `POST /books` with an `application/x-www-form-urlencoded` body.
///
/// The page is always rendered; the status code reflects the outcome
/// (201, 400, 409, 422 or 500). A body that cannot be read as a form is
/// treated as an empty submission.
pub async fn create_book_handler(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> (StatusCode, BookResultTemplate) {
    let params = match form {
        Ok(Form(form)) => RequestParams::from(form),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable form body");
            RequestParams::default()
        }
    };
    let outcome = state.book_service.create_book(&params).await;

    (
        outcome.status_code(),
        BookResultTemplate {
            message: outcome.message(),
            success: outcome.is_success(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_list_template_renders_books() {
        let template = BookListTemplate {
            books: vec![Book::new(
                3,
                "9780441013593".to_string(),
                "Dune".to_string(),
                "Frank Herbert".to_string(),
                1965,
                412,
                2,
                Utc::now(),
            )],
        };

        let html = template.render().unwrap();
        assert!(html.contains("Dune"));
        assert!(html.contains("Frank Herbert"));
        assert!(html.contains("9780441013593"));
        assert!(html.contains("name=\"available_copies\""));
    }

    #[test]
    fn test_list_template_empty() {
        let html = BookListTemplate { books: vec![] }.render().unwrap();
        assert!(html.contains("No books yet"));
    }

    #[test]
    fn test_result_template_escapes_message() {
        let html = BookResultTemplate {
            message: "Error: <script>".to_string(),
            success: false,
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("message error"));
    }
}
