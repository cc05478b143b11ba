//! Command-line interface definition for sift.
//!
//! # Command Structure
//!
//! - `sift shake` - Tree-shake the graph reachable from an entry module
//! - `sift init` - Write a starter `sift.config.json`

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{Command, InitArgs, ShakeArgs};
pub use enums::*;

/// Sift - cross-module tree shaking for ES modules
#[derive(Parser, Debug)]
#[command(
    name = "sift",
    version,
    about = "Remove unused top-level declarations across an ES module graph",
    long_about = "Sift follows the static imports of an entry module, works out which\n\
                  exported names each importer actually uses, and writes every module\n\
                  with its unused top-level declarations and exports removed."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every module visited and every pruning decision.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
