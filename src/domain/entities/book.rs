//! Book entity representing a catalogued title.

use chrono::{DateTime, Utc};

/// A persisted book record.
///
/// `id` is assigned by storage on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub page_count: i32,
    pub available_copies: i32,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Creates a new Book instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        isbn: String,
        title: String,
        author: String,
        publication_year: i32,
        page_count: i32,
        available_copies: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            isbn,
            title,
            author,
            publication_year,
            page_count,
            available_copies,
            created_at,
        }
    }

    /// Builds the persisted form of `new_book` once storage has assigned an id.
    pub fn from_new(id: i64, new_book: NewBook, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            isbn: new_book.isbn,
            title: new_book.title,
            author: new_book.author,
            publication_year: new_book.publication_year,
            page_count: new_book.page_count,
            available_copies: new_book.available_copies,
            created_at,
        }
    }
}

/// A validated book that has not been stored yet.
///
/// The creation workflow builds one only through
/// [`crate::domain::validation::BookDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub page_count: i32,
    pub available_copies: i32,
}
