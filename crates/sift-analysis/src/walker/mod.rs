//! Graph walker for dependency traversal.
//!
//! Performs a BFS over the static import graph, parsing every reachable
//! module once and reducing it to a [`ModuleRecord`] in a [`ShakeGraph`].

mod parser;
mod traversal;

use std::path::PathBuf;
use std::sync::Arc;

use sift_gen::GenError;
use sift_graph::{Runtime, RuntimeError, ShakeGraph};

use crate::config::ShakeConfig;

pub use parser::ModuleParser;

/// Error that can occur during graph walking.
#[derive(Debug, thiserror::Error)]
pub enum WalkerError {
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: RuntimeError,
    },

    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: GenError,
    },

    #[error("Maximum depth exceeded: {depth}")]
    MaxDepthExceeded { depth: usize },

    #[error("Too many modules processed: {count} modules (max: {max} allowed)")]
    TooManyModules { count: usize, max: usize },

    #[error("File too large: {path} is {size} bytes (max: {max} bytes)")]
    FileTooLarge { path: PathBuf, size: usize, max: usize },
}

/// Graph walker that traverses the dependency graph.
pub struct GraphWalker {
    config: ShakeConfig,
}

impl GraphWalker {
    pub fn new(config: ShakeConfig) -> Self {
        Self { config }
    }

    /// Walk the dependency graph starting from `entry`.
    pub async fn walk(
        &self,
        entry: PathBuf,
        runtime: Arc<dyn Runtime>,
    ) -> Result<ShakeGraph, WalkerError> {
        let traversal = traversal::Traversal::new(&self.config);
        traversal.traverse(entry, runtime).await
    }
}
