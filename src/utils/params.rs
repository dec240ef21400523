//! Typed access to submitted request parameters.
//!
//! [`RequestParams`] wraps the key/value pairs of a form or JSON submission
//! and exposes a presence check plus string and integer accessors.

use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

/// Failure to read a single parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("parameter '{name}' is missing")]
    Missing { name: String },

    #[error("parameter '{name}' must be an integer, got '{value}'")]
    NotAnInteger { name: String, value: String },
}

/// Submitted parameters keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    values: HashMap<String, String>,
}

impl RequestParams {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Builds parameters from a flat JSON object.
    ///
    /// Strings are taken verbatim, other scalars by their JSON text.
    /// `null` values are treated as absent.
    pub fn from_json(object: Map<String, Value>) -> Self {
        let values = object
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(s) => Some((key, s)),
                other => Some((key, other.to_string())),
            })
            .collect();

        Self { values }
    }

    /// Returns true if every name in `names` was submitted.
    ///
    /// An empty value still counts as present.
    pub fn has(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.values.contains_key(*name))
    }

    /// Reads a parameter as a string.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Missing`] if the parameter was not submitted.
    pub fn get_string(&self, name: &str) -> Result<String, ParamError> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| ParamError::Missing {
                name: name.to_string(),
            })
    }

    /// Reads a parameter as an integer, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Missing`] if the parameter was not submitted and
    /// [`ParamError::NotAnInteger`] if it does not parse as an `i32`.
    pub fn get_int(&self, name: &str) -> Result<i32, ParamError> {
        let raw = self.get_string(name)?;

        raw.trim()
            .parse::<i32>()
            .map_err(|_| ParamError::NotAnInteger {
                name: name.to_string(),
                value: raw,
            })
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for RequestParams {
    fn from(values: HashMap<String, String>) -> Self {
        Self::new(values)
    }
}
