//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::BookService;
use crate::domain::repositories::BookRepository;

#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService<dyn BookRepository>>,
}

impl AppState {
    /// Wires services on top of the given repository.
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_service: Arc::new(BookService::new(repository)),
        }
    }
}
