//! Configuration system for sift with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment (`SIFT_*`) > File (`sift.config.json`) > Defaults
//!
//! Keys are snake_case everywhere so that `SIFT_OUT_DIR` and `"out_dir"`
//! address the same field.

mod loading;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use sift_analysis::{
    BindingScope, DEFAULT_MAX_DEPTH, DEFAULT_MAX_MODULES, FormatOptions, OutputLayout,
    PruneOptions, QuoteStyle, ShakeConfig, UsageAnalysis,
};

use crate::error::{ConfigError, Result};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "sift.config.json";

/// sift configuration - loaded from sift.config.json, the environment or CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiftConfig {
    /// Entry module (e.g., "src/index.js")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<PathBuf>,

    /// Output directory
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// How import usage is detected
    #[serde(default)]
    pub usage: UsageAnalysis,

    /// Which dependencies a used name is forwarded to
    #[serde(default)]
    pub binding_scope: BindingScope,

    /// Keep exported functions nobody imports
    #[serde(default)]
    pub protect_exported_functions: bool,

    /// Output file placement
    #[serde(default)]
    pub layout: OutputLayout,

    /// Minify emitted modules
    #[serde(default)]
    pub minify: bool,

    /// Emit single-quoted strings
    #[serde(default)]
    pub single_quote: bool,

    /// Maximum import depth to follow
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<usize>,

    /// Maximum number of modules to visit
    #[serde(default = "default_max_modules")]
    pub max_modules: Option<usize>,

    /// Working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_max_depth() -> Option<usize> {
    Some(DEFAULT_MAX_DEPTH)
}

fn default_max_modules() -> Option<usize> {
    Some(DEFAULT_MAX_MODULES)
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            entry: None,
            out_dir: default_out_dir(),
            usage: UsageAnalysis::default(),
            binding_scope: BindingScope::default(),
            protect_exported_functions: false,
            layout: OutputLayout::default(),
            minify: false,
            single_quote: false,
            max_depth: default_max_depth(),
            max_modules: default_max_modules(),
            cwd: None,
        }
    }
}

impl SiftConfig {
    /// Generate example sift.config.json content.
    pub fn example_config(entry: &Path) -> Result<String> {
        let example = Self {
            entry: Some(entry.to_path_buf()),
            ..Self::default()
        };
        Ok(serde_json::to_string_pretty(&example)?)
    }

    /// Translate into the library configuration.
    ///
    /// Fails when no entry module was given by any source.
    pub fn to_shake_config(&self) -> Result<ShakeConfig> {
        let entry = self.entry.clone().ok_or_else(|| ConfigError::MissingField {
            field: "entry".to_string(),
            hint: "Pass an entry module (sift shake src/index.js) or set \"entry\" in sift.config.json"
                .to_string(),
        })?;

        if self.max_depth == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_depth".to_string(),
                value: "0".to_string(),
                hint: "Use at least 1 so the entry's imports can be followed".to_string(),
            }
            .into());
        }

        Ok(ShakeConfig {
            entry: Some(entry),
            out_dir: self.out_dir.clone(),
            usage_analysis: self.usage,
            binding_scope: self.binding_scope,
            prune: PruneOptions {
                protect_exported_functions: self.protect_exported_functions,
            },
            layout: self.layout,
            format: FormatOptions {
                quote_style: if self.single_quote {
                    QuoteStyle::Single
                } else {
                    QuoteStyle::Double
                },
                minify: self.minify,
            },
            max_depth: self.max_depth,
            max_modules: self.max_modules,
            runtime: None,
            cwd: self.cwd.clone(),
        })
    }
}
