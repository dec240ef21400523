//! Domain layer containing business entities and rules.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`validation`] - Rules a submission must pass before it is stored
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Workflows that combine these pieces live in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
pub mod validation;
