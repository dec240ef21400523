//! Core domain entities.
//!
//! Entities are plain data structures without storage access. Creation input
//! lives in a separate struct:
//!
//! - [`NewBook`] - a validated book that has not been stored
//! - [`Book`] - a stored book with its assigned id

pub mod book;

pub use book::{Book, NewBook};
