//! Business logic services for the application layer.

pub mod book_service;

pub use book_service::{BookService, CreateOutcome};
