//! In-process book repository.
//!
//! Keeps the catalogue in a `Vec` behind a mutex. Used when the service runs
//! with `STORAGE_BACKEND=memory` and by HTTP tests that need no database.
//! Mirrors the PostgreSQL table: ids start at 1 and ISBNs are unique.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: Vec<Book>,
}

/// Book repository backed by process memory.
#[derive(Default)]
pub struct MemoryBookRepository {
    table: Mutex<Table>,
}

impl MemoryBookRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        // Writes complete before the guard drops, so a poisoned table is still consistent.
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn save(&self, new_book: NewBook) -> Result<Option<Book>, AppError> {
        let mut table = self.lock();

        if table.rows.iter().any(|b| b.isbn == new_book.isbn) {
            return Ok(None);
        }

        table.next_id += 1;
        let book = Book::from_new(table.next_id, new_book, Utc::now());
        table.rows.push(book.clone());

        Ok(Some(book))
    }

    async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.lock().rows.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        Ok(self.lock().rows.iter().find(|b| b.id == id).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.lock().rows.len() as i64)
    }
}
