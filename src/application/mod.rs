//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for the HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::book_service::BookService`] - Book listing and the creation workflow

pub mod services;
