//! DTOs for book endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::CreateOutcome;
use crate::domain::entities::Book;
use crate::domain::validation::ValidationFinding;

/// A stored book as returned by the API.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub page_count: i32,
    pub available_copies: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            isbn: book.isbn,
            title: book.title,
            author: book.author,
            publication_year: book.publication_year,
            page_count: book.page_count,
            available_copies: book.available_copies,
            created_at: book.created_at,
        }
    }
}

/// Result of a creation request.
///
/// `findings` lists every failed rule when `outcome` is `validation_failed`
/// and is empty otherwise.
#[derive(Debug, Serialize)]
pub struct CreateBookResponse {
    pub success: bool,
    pub outcome: &'static str,
    pub message: String,
    pub book: Option<BookResponse>,
    pub findings: Vec<ValidationFinding>,
}

impl From<CreateOutcome> for CreateBookResponse {
    fn from(outcome: CreateOutcome) -> Self {
        let success = outcome.is_success();
        let kind = outcome.kind();
        let message = outcome.message();

        let (book, findings) = match outcome {
            CreateOutcome::Created(book) => (Some(BookResponse::from(book)), Vec::new()),
            CreateOutcome::ValidationFailed(findings) => (None, findings),
            _ => (None, Vec::new()),
        };

        Self {
            success,
            outcome: kind,
            message,
            book,
            findings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ValidationRule;

    #[test]
    fn test_validation_outcome_serialization() {
        let outcome = CreateOutcome::ValidationFailed(vec![ValidationRule::Isbn.into()]);
        let json = serde_json::to_value(CreateBookResponse::from(outcome)).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["outcome"], "validation_failed");
        assert!(json["book"].is_null());
        assert_eq!(json["findings"][0]["rule"], "isbn");
        assert_eq!(json["findings"][0]["message"], "ISBN must have 13 digits.");
    }

    #[test]
    fn test_created_outcome_serialization() {
        let book = Book::new(
            9,
            "1234567890123".to_string(),
            "T".to_string(),
            "A".to_string(),
            2020,
            100,
            5,
            Utc::now(),
        );
        let json =
            serde_json::to_value(CreateBookResponse::from(CreateOutcome::Created(book))).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Book created successfully. ID: 9");
        assert_eq!(json["book"]["id"], 9);
        assert_eq!(json["findings"].as_array().unwrap().len(), 0);
    }
}
