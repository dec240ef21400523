//! PostgreSQL implementation of the book repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// PostgreSQL repository for book storage and retrieval.
///
/// Uses SQLx bound parameters for SQL injection protection.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    isbn: String,
    title: String,
    author: String,
    publication_year: i32,
    page_count: i32,
    available_copies: i32,
    created_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(r: BookRow) -> Self {
        Book::new(
            r.id,
            r.isbn,
            r.title,
            r.author,
            r.publication_year,
            r.page_count,
            r.available_copies,
            r.created_at,
        )
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn save(&self, new_book: NewBook) -> Result<Option<Book>, AppError> {
        // A duplicate ISBN inserts nothing and returns no row.
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (isbn, title, author, publication_year, page_count, available_copies)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (isbn) DO NOTHING
            RETURNING id, isbn, title, author, publication_year, page_count, available_copies, created_at
            "#,
        )
        .bind(&new_book.isbn)
        .bind(&new_book.title)
        .bind(&new_book.author)
        .bind(new_book.publication_year)
        .bind(new_book.page_count)
        .bind(new_book.available_copies)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, isbn, title, author, publication_year, page_count, available_copies, created_at
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, isbn, title, author, publication_year, page_count, available_copies, created_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
