//! Module parsing logic for graph walking.
//!
//! This module reads a file, parses it and reduces the tree to the owned
//! facts the prune phase needs. The tree itself is dropped with its arena.

use std::path::Path;

use sift_gen::{Allocator, ParseOptions, parse};
use sift_graph::{
    ModuleRecord, Runtime, RuntimeError, UsageAnalysis, analyze_usage, extract_symbols,
    resolve_dependencies,
};
use tracing::{debug, warn};

use super::WalkerError;
use crate::config::MAX_FILE_SIZE;

/// Module parser that reads and analyzes files.
pub struct ModuleParser {
    usage_analysis: UsageAnalysis,
}

impl ModuleParser {
    pub fn new(usage_analysis: UsageAnalysis) -> Self {
        Self { usage_analysis }
    }

    /// Process a module file: read, parse and extract facts.
    pub async fn process_module(
        &self,
        path: &Path,
        runtime: &dyn Runtime,
        depth: usize,
        is_entry: bool,
    ) -> Result<ModuleRecord, WalkerError> {
        let source = self.read_file(path, runtime).await?;
        self.analyze(path, source, depth, is_entry)
    }

    /// Read a file from the filesystem with size validation.
    ///
    /// This method enforces MAX_FILE_SIZE to prevent memory exhaustion.
    async fn read_file(&self, path: &Path, runtime: &dyn Runtime) -> Result<String, WalkerError> {
        // Check file size before reading
        if let Ok(metadata) = runtime.metadata(path).await {
            if metadata.size > MAX_FILE_SIZE as u64 {
                return Err(WalkerError::FileTooLarge {
                    path: path.to_path_buf(),
                    size: metadata.size as usize,
                    max: MAX_FILE_SIZE,
                });
            }
        }

        let bytes = runtime
            .read_file(path)
            .await
            .map_err(|e| WalkerError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            })?;

        // Double-check size after reading (in case metadata was unavailable)
        if bytes.len() > MAX_FILE_SIZE {
            return Err(WalkerError::FileTooLarge {
                path: path.to_path_buf(),
                size: bytes.len(),
                max: MAX_FILE_SIZE,
            });
        }

        String::from_utf8(bytes).map_err(|e| WalkerError::ReadFile {
            path: path.to_path_buf(),
            source: RuntimeError::Other(format!("Invalid UTF-8: {}", e)),
        })
    }

    fn analyze(
        &self,
        path: &Path,
        source: String,
        depth: usize,
        is_entry: bool,
    ) -> Result<ModuleRecord, WalkerError> {
        let allocator = Allocator::default();
        let parsed = parse(
            &allocator,
            &source,
            ParseOptions::from_path(&path.to_string_lossy()),
        )
        .map_err(|e| WalkerError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let program = parsed.ast();
        let symbols = extract_symbols(program);
        let module_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let dependencies = resolve_dependencies(program, module_dir);
        let usage = analyze_usage(self.usage_analysis, program, &symbols);

        for specifier in &dependencies.external {
            warn!(module = %path.display(), specifier = %specifier, "skipping bare import");
        }
        debug!(
            module = %path.display(),
            dependencies = dependencies.paths.len(),
            used_imports = usage.used.len(),
            "analyzed module"
        );

        drop(parsed);
        Ok(ModuleRecord {
            path: path.to_path_buf(),
            source,
            is_entry,
            depth,
            symbols,
            dependencies,
            usage,
        })
    }
}
