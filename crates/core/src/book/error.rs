//! Book error types.

use std::fmt;

use thiserror::Error;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Display name of the field (e.g. `Title`).
    pub field: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl FieldError {
    /// Error for a required field that was missing or empty.
    #[must_use]
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{field} is required, but was empty."),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Errors that can occur when accepting book input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// One or more fields failed validation.
    #[error("Invalid book: {}", join(.0))]
    Validation(Vec<FieldError>),
}

impl BookError {
    /// Returns one message per rejected field, in form order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors.iter().map(|e| e.message.clone()).collect(),
        }
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
