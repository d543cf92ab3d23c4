//! Error types for the form layer

use serde::Serialize;
use thiserror::Error;

/// Configuration and parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// A required option was not provided
    #[error("Missing required option: {0}")]
    MissingOption(String),

    /// An option has an unusable value
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Input is not a valid number
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    /// Input carries a prefix outside the supported set
    #[error("Unknown SI prefix: '{0}'")]
    UnknownPrefix(String),
}

/// Validation error raised while mapping submitted data back to the model
///
/// The error is attached to the logical `value` path of the compound field,
/// not to the compound field itself.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{path}: {message}")]
pub struct FieldError {
    /// Sub-field the error belongs to
    pub path: String,

    /// Rejected input, as submitted
    pub input: String,

    /// User-visible message
    pub message: String,
}

impl FieldError {
    /// Non-numeric mantissa submitted for the `value` sub-field
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self {
            path: crate::VALUE_FIELD.to_string(),
            input: input.into(),
            message: "This value is not a valid number.".to_string(),
        }
    }
}
