//! Book repository implementations.
//!
//! - [`PgBookRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryBookRepository`] - in-process storage for local runs and tests

pub mod memory_book_repository;
pub mod pg_book_repository;

pub use memory_book_repository::MemoryBookRepository;
pub use pg_book_repository::PgBookRepository;
