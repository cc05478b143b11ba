//! Sift CLI - cross-module tree shaking from the command line.
//!
//! Exposes [`sift_analysis`] through a small command-line interface with
//! layered configuration and readable error messages.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `shake` and `init` implementations
//! - [`config`] - Defaults, `sift.config.json`, `SIFT_*` variables and flags, merged
//! - [`error`] - Error types with actionable hints
//! - [`logger`] - Structured logging with tracing
//!
//! # Example
//!
//! ```rust
//! use sift_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;

pub use config::SiftConfig;
pub use error::{CliError, ConfigError, Result};
