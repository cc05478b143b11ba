use sift_graph::RuntimeError;

use crate::emit::EmitError;
use crate::walker::WalkerError;

/// Error types for sift operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Runtime failure outside the walk and emit phases.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// Graph walk failed.
    #[error("Graph walk failed: {0}")]
    Walk(#[from] WalkerError),

    /// Prune or write phase failed.
    #[error("Emit failed: {0}")]
    Emit(#[from] EmitError),
}

/// Result type alias for sift operations.
pub type Result<T> = std::result::Result<T, Error>;
