//! Shake command implementation.
//!
//! Loads the layered configuration, runs the shaker and prints a summary.

use crate::cli::ShakeArgs;
use crate::commands::resolve_cwd;
use crate::config::SiftConfig;
use crate::error::{ConfigError, Result};
use sift_analysis::{ShakeResult, Shaker};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Execute the shake command.
///
/// # Process
///
/// 1. Load configuration (CLI > Env > File > Defaults)
/// 2. Check the entry module exists
/// 3. Walk, prune and emit
/// 4. Print the summary
///
/// # Errors
///
/// Returns errors for:
/// - Invalid or incomplete configuration
/// - A missing entry module
/// - Read, parse or write failures while shaking
pub async fn execute(args: ShakeArgs) -> Result<()> {
    let start_time = Instant::now();

    let base_dir = resolve_cwd(args.cwd.as_deref())?;
    let config = SiftConfig::load(&args, &base_dir)?;
    debug!(?config, "loaded configuration");

    let mut shake_config = config.to_shake_config()?;
    let cwd = resolve_cwd(shake_config.cwd.as_deref())?;
    shake_config.cwd = Some(cwd.clone());

    let entry = shake_config
        .entry
        .clone()
        .ok_or_else(|| ConfigError::MissingField {
            field: "entry".to_string(),
            hint: "Pass an entry module (sift shake src/index.js)".to_string(),
        })?;
    validate_entry(&entry, &cwd)?;

    let result = Shaker::from_config(shake_config).entry(entry).shake().await?;

    info!(
        "Shook {} modules in {:.2?}",
        result.stats.modules,
        start_time.elapsed()
    );
    print_summary(&result);
    Ok(())
}

fn validate_entry(entry: &Path, cwd: &Path) -> Result<()> {
    let path = if entry.is_absolute() {
        entry.to_path_buf()
    } else {
        cwd.join(entry)
    };

    if !path.is_file() {
        return Err(ConfigError::InvalidValue {
            field: "entry".to_string(),
            value: path.display().to_string(),
            hint: "The entry module must be an existing file".to_string(),
        }
        .into());
    }
    Ok(())
}

fn print_summary(result: &ShakeResult) {
    println!("{result}");
    for outcome in &result.modules {
        let marker = if outcome.is_entry {
            "entry"
        } else if outcome.pruned {
            "pruned"
        } else {
            "kept"
        };
        println!(
            "  {} -> {} [{}]",
            outcome.source_path.display(),
            outcome.output_path.display(),
            marker
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_entry_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        let err = validate_entry(Path::new("nope.js"), temp.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid value for 'entry'"));
    }

    #[test]
    fn directories_are_not_entries() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("src")).unwrap();
        assert!(validate_entry(Path::new("src"), temp.path()).is_err());
    }

    #[test]
    fn existing_entry_is_accepted() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("main.js"), "export const a = 1;").unwrap();
        assert!(validate_entry(Path::new("main.js"), temp.path()).is_ok());
    }
}
