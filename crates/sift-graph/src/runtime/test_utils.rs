//! Test utilities for sift-graph.
//!
//! - `TestRuntime`: A simple filesystem runtime for testing that wraps `std::fs`
//! - `MemoryRuntime`: An in-memory runtime that records every write

// Test utilities are allowed to use std::fs since they only run on native platforms
#![allow(clippy::disallowed_methods)]

use super::{FileMetadata, Runtime, RuntimeError, RuntimeResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Simple test runtime that wraps std::fs for native tests.
///
/// Tests use real filesystem access in a temporary directory (via
/// `tempfile::TempDir`) rather than mocks.
///
/// ```rust,ignore
/// use tempfile::TempDir;
/// use sift_graph::runtime::test_utils::TestRuntime;
///
/// let temp = TempDir::new().unwrap();
/// let runtime = TestRuntime::new(temp.path().to_path_buf());
/// ```
#[derive(Debug)]
pub struct TestRuntime {
    cwd: PathBuf,
}

impl TestRuntime {
    /// Create a new test runtime with the specified working directory.
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }
}

#[async_trait]
impl Runtime for TestRuntime {
    async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RuntimeError::FileNotFound(path.to_path_buf())
            } else {
                RuntimeError::Io(e.to_string())
            }
        })
    }

    async fn write_file(&self, path: &Path, content: &[u8]) -> RuntimeResult<()> {
        std::fs::write(path, content).map_err(|e| RuntimeError::Io(e.to_string()))
    }

    async fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RuntimeError::FileNotFound(path.to_path_buf())
            } else {
                RuntimeError::Io(e.to_string())
            }
        })?;
        Ok(FileMetadata {
            size: metadata.len(),
            is_file: metadata.is_file(),
            is_dir: metadata.is_dir(),
        })
    }

    async fn create_dir(&self, path: &Path, recursive: bool) -> RuntimeResult<()> {
        if recursive {
            std::fs::create_dir_all(path).map_err(|e| RuntimeError::Io(e.to_string()))
        } else {
            std::fs::create_dir(path).map_err(|e| RuntimeError::Io(e.to_string()))
        }
    }

    fn get_cwd(&self) -> RuntimeResult<PathBuf> {
        Ok(self.cwd.clone())
    }
}

/// In-memory runtime backed by a path → contents map.
///
/// Useful for walker tests that need to assert on exactly which files were
/// written without touching the disk.
#[derive(Debug, Default)]
pub struct MemoryRuntime {
    cwd: PathBuf,
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
}

impl MemoryRuntime {
    /// Create an empty in-memory runtime rooted at `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            files: Mutex::new(BTreeMap::new()),
        }
    }

    /// Seed a file.
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.into(), content.as_bytes().to_vec());
        self
    }

    /// Read a file back as UTF-8, if present.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

#[async_trait]
impl Runtime for MemoryRuntime {
    async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
            .cloned()
            .ok_or_else(|| RuntimeError::FileNotFound(path.to_path_buf()))
    }

    async fn write_file(&self, path: &Path, content: &[u8]) -> RuntimeResult<()> {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    async fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata> {
        let files = self.files.lock().unwrap_or_else(|e| e.into_inner());
        let bytes = files
            .get(path)
            .ok_or_else(|| RuntimeError::FileNotFound(path.to_path_buf()))?;
        Ok(FileMetadata {
            size: bytes.len() as u64,
            is_dir: false,
            is_file: true,
        })
    }

    async fn create_dir(&self, _path: &Path, _recursive: bool) -> RuntimeResult<()> {
        Ok(())
    }

    fn get_cwd(&self) -> RuntimeResult<PathBuf> {
        Ok(self.cwd.clone())
    }
}
