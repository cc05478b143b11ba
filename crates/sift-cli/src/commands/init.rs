//! Init command implementation.
//!
//! Writes a starter `sift.config.json` holding every option at its default.

use crate::cli::InitArgs;
use crate::commands::resolve_cwd;
use crate::config::{CONFIG_FILE, SiftConfig};
use crate::error::{CliError, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Execute the init command.
///
/// # Errors
///
/// Returns errors when the config file already exists without `--force`,
/// or when it cannot be written.
pub async fn execute(args: InitArgs) -> Result<()> {
    let path = write_config(&args)?;
    info!("Created {}", path.display());
    println!("Wrote {}", path.display());
    Ok(())
}

fn write_config(args: &InitArgs) -> Result<PathBuf> {
    let dir = resolve_cwd(args.cwd.as_deref())?;
    let path = dir.join(CONFIG_FILE);

    if path.exists() && !args.force {
        return Err(CliError::InvalidArgument(format!(
            "Config file already exists: {}\n\nHint: Use --force to overwrite it",
            path.display()
        )));
    }

    let content = SiftConfig::example_config(&args.entry)?;
    fs::create_dir_all(&dir)?;
    fs::write(&path, content + "\n")?;
    Ok(path)
}
