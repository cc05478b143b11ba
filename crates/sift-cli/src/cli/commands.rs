use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available sift subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tree-shake the module graph reachable from an entry file
    ///
    /// Writes every visited module to the output directory. The entry is
    /// written whole; its dependencies lose the declarations and export
    /// specifiers no importer uses.
    Shake(ShakeArgs),

    /// Write a starter sift.config.json
    Init(InitArgs),
}

/// Arguments for the shake command
///
/// Every option left unset falls back to `sift.config.json`, then to
/// `SIFT_*` environment variables, then to the built-in default.
#[derive(Args, Debug, Default)]
pub struct ShakeArgs {
    /// Entry module
    ///
    /// Examples:
    ///   sift shake src/main.js
    ///   sift shake ./index.mjs --out-dir build
    #[arg(value_name = "ENTRY")]
    pub entry: Option<PathBuf>,

    /// Output directory for the pruned modules [default: dist]
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Path to a config file [default: ./sift.config.json when present]
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How an import is judged as used [default: occurrence]
    ///
    /// - occurrence: any identifier with the same name outside the import
    /// - scoped: a reference that resolves to the imported binding
    #[arg(long, value_enum)]
    pub usage: Option<UsageMode>,

    /// Which dependencies receive a used name [default: shared]
    ///
    /// - shared: every dependency receives every used imported name
    /// - per-dependency: a dependency only receives names imported from it
    #[arg(long, value_enum)]
    pub binding_scope: Option<ScopeMode>,

    /// Keep exported functions even when no importer uses them
    #[arg(long)]
    pub protect_exported_functions: bool,

    /// Output file placement [default: preserve]
    ///
    /// - preserve: mirror the directory structure of the input
    /// - flatten: write every module by basename (fails on duplicates)
    #[arg(long, value_enum)]
    pub layout: Option<LayoutMode>,

    /// Minify emitted modules
    #[arg(long)]
    pub minify: bool,

    /// Use single quotes in emitted string literals
    #[arg(long)]
    pub single_quote: bool,

    /// Maximum import depth to follow
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Maximum number of modules to visit
    #[arg(long, value_name = "N")]
    pub max_modules: Option<usize>,

    /// Working directory relative paths resolve against
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Entry module to put in the generated config
    #[arg(long, default_value = "src/index.js")]
    pub entry: PathBuf,

    /// Overwrite an existing sift.config.json
    #[arg(short, long)]
    pub force: bool,

    /// Directory to write the config into
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}
