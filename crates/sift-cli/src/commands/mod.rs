//! Command implementations for the sift CLI.
//!
//! - [`shake`] - Tree-shake the graph reachable from an entry module
//! - [`init`] - Write a starter configuration file
//!
//! Each command provides an `execute` function that takes the parsed
//! command arguments and returns a Result.

pub mod init;
pub mod shake;

pub use init::execute as init_execute;
pub use shake::execute as shake_execute;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Resolve the directory commands operate in: `--cwd` when given (relative
/// to the process directory), the process directory otherwise.
pub(crate) fn resolve_cwd(explicit: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    Ok(match explicit {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current.join(dir),
        None => current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_cwd_is_kept() {
        let dir = std::env::temp_dir();
        assert_eq!(resolve_cwd(Some(&dir)).unwrap(), dir);
    }

    #[test]
    fn relative_cwd_joins_the_process_directory() {
        let resolved = resolve_cwd(Some(Path::new("project"))).unwrap();
        assert_eq!(resolved, std::env::current_dir().unwrap().join("project"));
    }
}
