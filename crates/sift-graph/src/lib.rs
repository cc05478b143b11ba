//! # sift-graph
//!
//! Pure analysis for cross-module tree shaking.
//!
//! This crate holds everything that decides *what* to remove, without doing
//! any traversal or output itself:
//!
//! - [`symbol`]: per-module facts (import bindings, identifier occurrences,
//!   export set, top-level declarations)
//! - [`resolver`]: static import specifiers resolved to file paths
//! - [`usage`]: which imported names a module consumes, forwarded to its
//!   dependencies as used-sets
//! - [`prune`]: removal of unused top-level declarations and export
//!   specifiers
//! - [`graph`]: the module graph and the union of used-sets per module
//! - [`runtime`]: the file-system abstraction the driver crate reads and
//!   writes through
//!
//! ## Architecture
//!
//! ```text
//!   source ──parse──▶ Program ──▶ extract_symbols ──▶ ModuleSymbols
//!                        │                               │
//!                        ├──▶ resolve_dependencies       ▼
//!                        │                         analyze_usage ──▶ UsageReport
//!                        │                                               │
//!                        │          ShakeGraph::merged_used_sets ◀───────┘
//!                        │                       │
//!                        └──────▶ prune_program ◀┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sift_gen::{Allocator, FormatOptions, ParseOptions, generate, parse};
//! use sift_graph::{PruneOptions, UsedSet, extract_symbols, prune_program};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let allocator = Allocator::default();
//! let mut parsed = parse(
//!     &allocator,
//!     "export const a = 1;\nexport const b = 2;",
//!     ParseOptions::default(),
//! )?;
//! let symbols = extract_symbols(parsed.ast());
//! let used: UsedSet = ["a".to_string()].into_iter().collect();
//!
//! let report = prune_program(parsed.ast_mut(), &symbols, &used, &PruneOptions::default());
//! assert_eq!(report.removed_declarations, vec!["b"]);
//! assert_eq!(generate(parsed.ast(), &FormatOptions::default()).trim(), "export const a = 1;");
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod graph;
pub mod prune;
pub mod resolver;
pub mod runtime;
pub mod symbol;
pub mod usage;

pub use export::{DeclaratorBinding, ExportKind, ExportedSpecifier, TopLevelItem, classify};
pub use graph::{ModuleRecord, ShakeGraph};
pub use prune::{Decision, PruneOptions, PruneReport, Pruner, prune_program};
pub use resolver::{ResolvedDependencies, is_local_specifier, resolve_dependencies};
pub use symbol::{ImportBinding, ModuleSymbols, Occurrences, extract_symbols};
pub use usage::{
    BindingScope, UsageAnalysis, UsageReport, UsedSet, analyze_usage, propagate_scoped_usage,
    propagate_usage,
};

// Re-export runtime types
pub use runtime::{FileMetadata, NativeRuntime, Runtime, RuntimeError, RuntimeResult};

#[cfg(any(test, feature = "test-utils"))]
pub use runtime::test_utils::{MemoryRuntime, TestRuntime};
