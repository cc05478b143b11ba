use crate::cli::ShakeArgs;
use crate::config::{CONFIG_FILE, SiftConfig};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Keys read from `SIFT_*` variables. Other `SIFT_` variables are ignored
/// rather than tripping `deny_unknown_fields`.
const ENV_KEYS: &[&str] = &[
    "entry",
    "out_dir",
    "usage",
    "binding_scope",
    "protect_exported_functions",
    "layout",
    "minify",
    "single_quote",
    "max_depth",
    "max_modules",
    "cwd",
];

/// Only the options given on the command line.
///
/// Unset options are skipped when serialized so they don't shadow lower
/// layers.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    entry: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    usage: Option<sift_analysis::UsageAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    binding_scope: Option<sift_analysis::BindingScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    protect_exported_functions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<sift_analysis::OutputLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    single_quote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_modules: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cwd: Option<PathBuf>,
}

impl From<&ShakeArgs> for CliOverrides {
    fn from(args: &ShakeArgs) -> Self {
        Self {
            entry: args.entry.clone(),
            out_dir: args.out_dir.clone(),
            usage: args.usage.map(Into::into),
            binding_scope: args.binding_scope.map(Into::into),
            protect_exported_functions: args.protect_exported_functions.then_some(true),
            layout: args.layout.map(Into::into),
            minify: args.minify.then_some(true),
            single_quote: args.single_quote.then_some(true),
            max_depth: args.max_depth,
            max_modules: args.max_modules,
            cwd: args.cwd.clone(),
        }
    }
}

impl SiftConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// `base_dir` is where `sift.config.json` is looked up when `--config`
    /// is not given.
    pub fn load(args: &ShakeArgs, base_dir: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match &args.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.clone()).into());
            }
            Some(path) => Some(path.clone()),
            None => {
                let default_path = base_dir.join(CONFIG_FILE);
                default_path.exists().then_some(default_path)
            }
        };

        if let Some(path) = config_file {
            figment = figment.merge(Json::file(path));
        }

        // Merge environment variables (SIFT_OUT_DIR, SIFT_LAYOUT, etc.)
        figment = figment.merge(Env::prefixed("SIFT_").only(ENV_KEYS));

        figment = figment.merge(Serialized::defaults(CliOverrides::from(args)));

        figment.extract().map_err(|e| {
            ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: e.to_string(),
                hint: format!("Check {} syntax and field types", CONFIG_FILE),
            }
            .into()
        })
    }
}
