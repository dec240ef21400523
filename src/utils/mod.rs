//! Helpers shared by the HTTP layers and the admin CLI.
//!
//! - [`params`] - Typed access to submitted request parameters

pub mod params;

pub use params::{ParamError, RequestParams};
