#![forbid(unsafe_code)]

//! The one error type this crate has: user-defined validation failure.
//!
//! Everything else in [`crate::input`] either succeeds or silently
//! clamps (see the crate-level docs) — validation is the sole place a
//! caller-supplied function gets to report a real failure.

use thiserror::Error;

/// A validator rejected a `TextInput`'s content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Build a validation error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable reason the content was rejected.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
