//! Configuration for a shake run.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sift_gen::FormatOptions;
use sift_graph::{BindingScope, PruneOptions, Runtime, UsageAnalysis};

/// Default maximum depth for graph traversal (DoS protection).
///
/// This provides a reasonable limit for very deep dependency trees.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Default maximum number of modules to process (DoS protection).
///
/// This prevents processing extremely large codebases that could cause
/// memory exhaustion or excessive processing time.
pub const DEFAULT_MAX_MODULES: usize = 100_000;

/// Maximum file size in bytes (10 MB).
///
/// Files larger than this will be rejected to prevent memory exhaustion.
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Maximum depth for graph traversal (DoS protection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaxDepth(pub usize);

impl MaxDepth {
    pub fn new(depth: usize) -> Self {
        Self(depth)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl Default for MaxDepth {
    fn default() -> Self {
        Self(DEFAULT_MAX_DEPTH)
    }
}

impl From<usize> for MaxDepth {
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}

/// How emitted files are placed under the output directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputLayout {
    /// Mirror each module's path relative to the deepest directory shared by
    /// every visited module.
    #[default]
    Preserve,
    /// Write every module as `out_dir/<basename>`. Two modules with the same
    /// basename are an error.
    Flatten,
}

impl fmt::Display for OutputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLayout::Preserve => write!(f, "preserve"),
            OutputLayout::Flatten => write!(f, "flatten"),
        }
    }
}

/// Configuration for [`crate::Shaker`].
#[derive(Debug, Clone)]
pub struct ShakeConfig {
    /// Entry module. Relative paths are resolved against `cwd`.
    pub entry: Option<PathBuf>,

    /// Directory the pruned modules are written to.
    ///
    /// Default: `dist`
    pub out_dir: PathBuf,

    /// How import bindings are judged as used.
    pub usage_analysis: UsageAnalysis,

    /// Which dependencies receive a used name.
    pub binding_scope: BindingScope,

    pub prune: PruneOptions,

    pub layout: OutputLayout,

    /// Code generation options for emitted modules.
    pub format: FormatOptions,

    /// Maximum depth for graph traversal (DoS protection).
    ///
    /// Default: `DEFAULT_MAX_DEPTH` (1000)
    pub max_depth: Option<usize>,

    /// Maximum number of modules to process (DoS protection).
    ///
    /// Default: `DEFAULT_MAX_MODULES` (100,000)
    pub max_modules: Option<usize>,

    /// Runtime for filesystem operations.
    pub runtime: Option<Arc<dyn Runtime>>,

    /// Current working directory.
    pub cwd: Option<PathBuf>,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            entry: None,
            out_dir: PathBuf::from("dist"),
            usage_analysis: UsageAnalysis::default(),
            binding_scope: BindingScope::default(),
            prune: PruneOptions::default(),
            layout: OutputLayout::default(),
            format: FormatOptions::default(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
            max_modules: Some(DEFAULT_MAX_MODULES),
            runtime: None,
            cwd: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_plain_algorithm() {
        let config = ShakeConfig::default();
        assert_eq!(config.usage_analysis, UsageAnalysis::Occurrence);
        assert_eq!(config.binding_scope, BindingScope::Shared);
        assert!(!config.prune.protect_exported_functions);
        assert_eq!(config.layout, OutputLayout::Preserve);
        assert_eq!(config.max_depth, Some(DEFAULT_MAX_DEPTH));
    }

    #[test]
    fn layout_round_trips_through_kebab_case() {
        assert_eq!(OutputLayout::Flatten.to_string(), "flatten");
        let layout: OutputLayout = serde_json::from_str("\"preserve\"").unwrap();
        assert_eq!(layout, OutputLayout::Preserve);
    }
}
