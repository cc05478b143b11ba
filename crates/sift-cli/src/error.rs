//! Error handling for the sift CLI.
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`) carry a hint for the user
//! - Shake failures keep the library error as their source
//!
//! At the process boundary [`cli_error_to_miette`] turns a `CliError` into a
//! `miette::Report`.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Walking, pruning or writing the module graph failed
    #[error(transparent)]
    Shake(#[from] sift_analysis::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file passed with --config doesn't exist
    #[error("Config file not found: {}\n\nHint: Run 'sift init' to create sift.config.json or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Shake(sift_analysis::Error::Walk(walk)) => {
            miette::miette!("Failed to walk the module graph: {}", walk)
        }
        CliError::Shake(sift_analysis::Error::Emit(emit)) => {
            miette::miette!(
                "Failed to emit pruned modules: {}\n\nHint: Check output directory permissions or use --layout preserve",
                emit
            )
        }
        _ => miette::miette!("{}", err),
    }
}
