//! # sift-analysis
//!
//! Drives a tree-shaking run over an ES module graph:
//!
//! 1. **Walk**: BFS from the entry through static imports, parsing each
//!    reachable module once ([`walker`]).
//! 2. **Merge**: each module's used-set is the union of what its importers
//!    forward to it ([`sift_graph::ShakeGraph::merged_used_sets`]).
//! 3. **Emit**: prune every non-entry module with a non-empty used-set,
//!    regenerate and write it under the output directory ([`emit`]).
//!
//! All file access goes through [`sift_graph::Runtime`].
//!
//! ```rust,no_run
//! use sift_analysis::{OutputLayout, Shaker};
//!
//! # async fn example() -> sift_analysis::Result<()> {
//! let result = Shaker::new()
//!     .entry("src/main.js")
//!     .out_dir("dist")
//!     .layout(OutputLayout::Preserve)
//!     .shake()
//!     .await?;
//!
//! for (module, name) in result.removed() {
//!     println!("{}: removed {}", module.display(), name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod emit;
mod error;
pub mod result;
pub mod shaker;
pub mod walker;


pub use config::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_MODULES, MAX_FILE_SIZE, MaxDepth, OutputLayout, ShakeConfig,
};
pub use emit::{EmitError, ModuleOutcome};
pub use error::{Error, Result};
pub use result::{ShakeResult, ShakeStats};
pub use shaker::{Configured, Shaker, Unconfigured};
pub use walker::{GraphWalker, WalkerError};

pub use sift_gen::{FormatOptions, QuoteStyle};
pub use sift_graph::{BindingScope, NativeRuntime, PruneOptions, Runtime, UsageAnalysis};
