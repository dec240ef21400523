//! Data Transfer Objects for API responses.

pub mod book;
pub mod health;
