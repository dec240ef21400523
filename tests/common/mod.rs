#![allow(dead_code)]

use async_trait::async_trait;
use book_catalog::domain::entities::{Book, NewBook};
use book_catalog::domain::repositories::BookRepository;
use book_catalog::error::AppError;
use book_catalog::infrastructure::persistence::MemoryBookRepository;
use book_catalog::state::AppState;
use serde_json::json;
use std::sync::Arc;

pub const VALID_ISBN: &str = "9780441013593";

pub fn create_test_state() -> (AppState, Arc<MemoryBookRepository>) {
    let repo = Arc::new(MemoryBookRepository::new());
    let state = AppState::new(repo.clone());
    (state, repo)
}

pub async fn create_test_book(repo: &MemoryBookRepository, isbn: &str, title: &str) -> Book {
    repo.save(NewBook {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: "Frank Herbert".to_string(),
        publication_year: 1965,
        page_count: 412,
        available_copies: 2,
    })
    .await
    .unwrap()
    .unwrap()
}

/// A complete, valid form submission as key/value pairs.
pub fn valid_form() -> Vec<(&'static str, String)> {
    vec![
        ("isbn", VALID_ISBN.to_string()),
        ("title", "Dune".to_string()),
        ("author", "Frank Herbert".to_string()),
        ("publication_year", "1965".to_string()),
        ("page_count", "412".to_string()),
        ("available_copies", "2".to_string()),
    ]
}

/// `valid_form` with the given fields replaced.
pub fn form_with(overrides: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    let mut form = valid_form();
    for &(key, value) in overrides {
        if let Some(entry) = form.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value.to_string();
        }
    }
    form
}

/// `valid_form` without the given field.
pub fn form_without(field: &str) -> Vec<(&'static str, String)> {
    valid_form()
        .into_iter()
        .filter(|(k, _)| *k != field)
        .collect()
}

/// Repository whose every call fails, for exercising error paths.
pub struct FailingRepository;

#[async_trait]
impl BookRepository for FailingRepository {
    async fn save(&self, _new_book: NewBook) -> Result<Option<Book>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Book>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingRepository))
}
