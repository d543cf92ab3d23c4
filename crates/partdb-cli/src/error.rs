//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Field configuration or parse error
    #[error("{0}")]
    Form(#[from] partdb_forms::FormError),

    /// Submitted value rejected by the field
    #[error("Invalid field input: {0}")]
    Field(#[from] partdb_forms::FieldError),

    /// Gatekeeper setup error
    #[error("Gatekeeper error: {0}")]
    Gatekeeper(#[from] partdb_gatekeeper::GatekeeperError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Line editor error
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Part failed validation
    #[error("Part rejected with {0} reason(s)")]
    Rejected(usize),
}

impl CliError {
    /// Whether the command already printed this error through the formatter.
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Field(_) | CliError::Rejected(_))
    }
}
