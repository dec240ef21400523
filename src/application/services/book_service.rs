//! Book listing and the creation workflow.

use std::fmt;
use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Datelike, Local};
use serde_json::json;

use crate::domain::entities::Book;
use crate::domain::repositories::BookRepository;
use crate::domain::validation::{BookDraft, ValidationFinding};
use crate::error::AppError;
use crate::utils::params::{ParamError, RequestParams};

/// Submitted field names read by the creation workflow.
pub mod fields {
    pub const ISBN: &str = "isbn";
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const PUBLICATION_YEAR: &str = "publication_year";
    pub const PAGE_COUNT: &str = "page_count";
    pub const AVAILABLE_COPIES: &str = "available_copies";

    /// Fields that must all be present before anything is read.
    pub const REQUIRED: [&str; 6] = [
        ISBN,
        TITLE,
        AUTHOR,
        PUBLICATION_YEAR,
        PAGE_COUNT,
        AVAILABLE_COPIES,
    ];
}

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required data.";
pub const SAVE_FAILED_MESSAGE: &str = "Error saving the book.";
pub const INVALID_DATA_MESSAGE: &str = "Error saving the book. Invalid data:";
pub const CREATED_MESSAGE: &str = "Book created successfully. ID: ";

/// Result of one run of the creation workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The book was stored.
    Created(Book),
    /// At least one required field was not submitted.
    MissingFields,
    /// An integer field could not be read.
    InvalidInteger(ParamError),
    /// One or more business rules failed.
    ValidationFailed(Vec<ValidationFinding>),
    /// Storage declined the insert.
    PersistenceFailed,
    /// Storage reported an error.
    Unexpected(String),
}

impl CreateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }

    /// Stable machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            CreateOutcome::Created(_) => "created",
            CreateOutcome::MissingFields => "missing_fields",
            CreateOutcome::InvalidInteger(_) => "invalid_integer",
            CreateOutcome::ValidationFailed(_) => "validation_failed",
            CreateOutcome::PersistenceFailed => "persistence_failed",
            CreateOutcome::Unexpected(_) => "unexpected",
        }
    }

    /// Human-readable message shown on the result page.
    ///
    /// Validation findings follow the header, one per line.
    pub fn message(&self) -> String {
        match self {
            CreateOutcome::Created(book) => format!("{CREATED_MESSAGE}{}", book.id),
            CreateOutcome::MissingFields => MISSING_FIELDS_MESSAGE.to_string(),
            CreateOutcome::InvalidInteger(err) => format!("Error: {err}"),
            CreateOutcome::ValidationFailed(findings) => {
                let mut message = INVALID_DATA_MESSAGE.to_string();
                for finding in findings {
                    message.push('\n');
                    message.push_str(&finding.message);
                }
                message
            }
            CreateOutcome::PersistenceFailed => SAVE_FAILED_MESSAGE.to_string(),
            CreateOutcome::Unexpected(detail) => format!("Error: {detail}"),
        }
    }

    /// Validation findings, empty for every other variant.
    pub fn findings(&self) -> &[ValidationFinding] {
        match self {
            CreateOutcome::ValidationFailed(findings) => findings,
            _ => &[],
        }
    }

    /// HTTP status a rendered outcome is sent with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CreateOutcome::Created(_) => StatusCode::CREATED,
            CreateOutcome::MissingFields | CreateOutcome::InvalidInteger(_) => {
                StatusCode::BAD_REQUEST
            }
            CreateOutcome::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CreateOutcome::PersistenceFailed => StatusCode::CONFLICT,
            CreateOutcome::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for CreateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Service for listing and creating catalogue entries.
///
/// Generic over the repository so tests can plug in mocks; the server uses
/// `BookService<dyn BookRepository>`.
pub struct BookService<R: BookRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: BookRepository + ?Sized> BookService<R> {
    /// Creates a new book service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every stored book ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.repository.list_all().await
    }

    /// Retrieves a single book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_book(&self, id: i64) -> Result<Book, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found", json!({ "id": id })))
    }

    /// Counts stored books.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_books(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Runs the creation workflow against the current local year.
    pub async fn create_book(&self, params: &RequestParams) -> CreateOutcome {
        self.create_book_in_year(params, Local::now().year()).await
    }

    /// Runs the creation workflow with an explicit current year.
    ///
    /// # Flow
    ///
    /// 1. All required fields must be present, otherwise `MissingFields`
    /// 2. Strings and integers are read; a bad integer gives `InvalidInteger`
    /// 3. Every rule runs; any failure gives `ValidationFailed` with all findings
    /// 4. The validated book is saved; `Ok(None)` from storage gives
    ///    `PersistenceFailed`, an error gives `Unexpected`
    pub async fn create_book_in_year(
        &self,
        params: &RequestParams,
        current_year: i32,
    ) -> CreateOutcome {
        let outcome = self.run_creation(params, current_year).await;

        match &outcome {
            CreateOutcome::Created(book) => {
                tracing::info!(book_id = book.id, isbn = %book.isbn, "book created");
            }
            CreateOutcome::Unexpected(detail) => {
                tracing::error!(error = %detail, "book creation failed");
            }
            other => {
                tracing::warn!(
                    outcome = other.kind(),
                    findings = other.findings().len(),
                    "book submission rejected"
                );
            }
        }
        metrics::counter!("book_submissions_total", "outcome" => outcome.kind()).increment(1);

        outcome
    }

    async fn run_creation(&self, params: &RequestParams, current_year: i32) -> CreateOutcome {
        if !params.has(&fields::REQUIRED) {
            return CreateOutcome::MissingFields;
        }

        let draft = match read_draft(params) {
            Ok(draft) => draft,
            Err(err) => return CreateOutcome::InvalidInteger(err),
        };

        let new_book = match draft.validate(current_year) {
            Ok(new_book) => new_book,
            Err(findings) => return CreateOutcome::ValidationFailed(findings),
        };

        match self.repository.save(new_book).await {
            Ok(Some(book)) => CreateOutcome::Created(book),
            Ok(None) => CreateOutcome::PersistenceFailed,
            Err(err) => CreateOutcome::Unexpected(err.to_string()),
        }
    }
}

fn read_draft(params: &RequestParams) -> Result<BookDraft, ParamError> {
    Ok(BookDraft {
        isbn: params.get_string(fields::ISBN)?,
        title: params.get_string(fields::TITLE)?,
        author: params.get_string(fields::AUTHOR)?,
        publication_year: params.get_int(fields::PUBLICATION_YEAR)?,
        page_count: params.get_int(fields::PAGE_COUNT)?,
        available_copies: params.get_int(fields::AVAILABLE_COPIES)?,
    })
}
