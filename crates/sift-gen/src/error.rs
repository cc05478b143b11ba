//! Error types for parsing modules

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while turning source text into a tree
#[derive(Error, Debug, Diagnostic)]
pub enum GenError {
    /// Source text is not syntactically valid
    #[error("Parse failed: {context}{}", first_error(.diagnostics))]
    #[diagnostic(code(sift::gen::parse_failed))]
    ParseFailed {
        context: String,
        diagnostics: Vec<String>,
    },
}

fn first_error(diagnostics: &[String]) -> String {
    match diagnostics {
        [] => String::new(),
        [only] => format!(" - {}", only),
        [first, rest @ ..] => format!(" - {} (and {} more)", first, rest.len()),
    }
}

impl GenError {
    /// Create a ParseFailed error
    pub fn parse_failed(context: impl Into<String>, diagnostics: Vec<String>) -> Self {
        Self::ParseFailed {
            context: context.into(),
            diagnostics,
        }
    }
}

/// Result type for parse operations
pub type Result<T> = std::result::Result<T, GenError>;
