//! Prune and emit phase.
//!
//! Every module in the walked graph is re-parsed from its source, pruned
//! with its merged used-set (the entry and modules nobody forwards a name to
//! are left whole), regenerated and written under the output directory.

mod layout;

pub use layout::{common_ancestor, plan_outputs};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sift_gen::{Allocator, GenError, ParseOptions, generate, parse};
use sift_graph::{
    ModuleRecord, PruneReport, Runtime, RuntimeError, ShakeGraph, UsedSet, prune_program,
};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::config::ShakeConfig;

/// Error that can occur while pruning and writing modules.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Failed to re-parse '{path}': {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: GenError,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: RuntimeError,
    },

    #[error("Output collision: '{first}' and '{second}' both map to '{target}'")]
    OutputCollision {
        target: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Write task failed: {0}")]
    Task(String),
}

/// What was emitted for one module.
#[derive(Debug, Clone)]
pub struct ModuleOutcome {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub is_entry: bool,
    /// Whether the pruner ran on this module.
    pub pruned: bool,
    /// Merged used-set the module was pruned with.
    pub used: UsedSet,
    pub report: PruneReport,
    pub bytes: usize,
}

/// Prunes and writes every module of a graph.
pub struct Emitter<'a> {
    config: &'a ShakeConfig,
    out_dir: PathBuf,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a ShakeConfig, out_dir: PathBuf) -> Self {
        Self { config, out_dir }
    }

    /// Render every module, then write them all concurrently.
    ///
    /// All writes are awaited; if any fail the first failure is returned.
    pub async fn emit(
        &self,
        graph: &ShakeGraph,
        runtime: Arc<dyn Runtime>,
    ) -> Result<Vec<ModuleOutcome>, EmitError> {
        let targets = plan_outputs(
            graph.modules().map(|record| record.path.as_path()),
            &self.out_dir,
            self.config.layout,
        )?;
        let mut used_sets = graph.merged_used_sets(self.config.binding_scope);

        let mut outcomes = Vec::with_capacity(graph.len());
        let mut writes = JoinSet::new();

        for record in graph.modules() {
            let used = used_sets.swap_remove(&record.path).unwrap_or_default();
            let output_path = targets
                .get(&record.path)
                .cloned()
                .unwrap_or_else(|| self.out_dir.join(&record.path));

            let (code, report, pruned) = self.render(record, &used)?;
            outcomes.push(ModuleOutcome {
                source_path: record.path.clone(),
                output_path: output_path.clone(),
                is_entry: record.is_entry,
                pruned,
                used,
                report,
                bytes: code.len(),
            });

            let runtime = Arc::clone(&runtime);
            writes.spawn(async move {
                let result = write_output(runtime.as_ref(), &output_path, code.as_bytes()).await;
                (output_path, result)
            });
        }

        let mut first_error = None;
        while let Some(joined) = writes.join_next().await {
            let error = match joined {
                Ok((path, Ok(()))) => {
                    info!(path = %path.display(), "emitted");
                    continue;
                }
                Ok((path, Err(source))) => EmitError::Write { path, source },
                Err(e) => EmitError::Task(e.to_string()),
            };
            first_error.get_or_insert(error);
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(outcomes),
        }
    }

    fn render(
        &self,
        record: &ModuleRecord,
        used: &UsedSet,
    ) -> Result<(String, PruneReport, bool), EmitError> {
        let allocator = Allocator::default();
        let mut parsed = parse(
            &allocator,
            &record.source,
            ParseOptions::from_path(&record.path.to_string_lossy()),
        )
        .map_err(|e| EmitError::Render {
            path: record.path.clone(),
            source: e,
        })?;

        let prune = !record.is_entry && !used.is_empty();
        let report = if prune {
            let report =
                prune_program(parsed.ast_mut(), &record.symbols, used, &self.config.prune);
            debug!(
                module = %record.path.display(),
                removed = report.removed_declarations.len(),
                removed_specifiers = report.removed_specifiers.len(),
                "pruned module"
            );
            report
        } else {
            debug!(module = %record.path.display(), "emitting without pruning");
            PruneReport::default()
        };

        Ok((generate(parsed.ast(), &self.config.format), report, prune))
    }
}

async fn write_output(runtime: &dyn Runtime, path: &Path, content: &[u8]) -> Result<(), RuntimeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            runtime.create_dir(parent, true).await?;
        }
    }
    runtime.write_file(path, content).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputLayout;
    use crate::walker::GraphWalker;
    use sift_graph::MemoryRuntime;

    async fn shake(runtime: Arc<MemoryRuntime>, config: ShakeConfig) -> Vec<ModuleOutcome> {
        let graph = GraphWalker::new(config.clone())
            .walk(PathBuf::from("/p/main.js"), runtime.clone())
            .await
            .unwrap();
        Emitter::new(&config, PathBuf::from("/out"))
            .emit(&graph, runtime)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn prunes_dependencies_and_keeps_the_entry_whole() {
        let runtime = Arc::new(
            MemoryRuntime::new("/p")
                .with_file(
                    "/p/main.js",
                    "import { a } from './x.js';\nconst unused = 1;\nconsole.log(a);",
                )
                .with_file("/p/x.js", "export const a = 1;\nexport const b = 2;"),
        );

        let outcomes = shake(runtime.clone(), ShakeConfig::default()).await;

        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].pruned);
        assert!(outcomes[1].pruned);
        assert_eq!(outcomes[1].report.removed_declarations, vec!["b"]);

        let main = runtime.contents("/out/main.js").unwrap();
        assert!(main.contains("const unused = 1;"));
        let x = runtime.contents("/out/x.js").unwrap();
        assert!(x.contains("export const a = 1;"));
        assert!(!x.contains("b = 2"));
    }

    #[tokio::test]
    async fn module_with_empty_used_set_is_left_whole() {
        let runtime = Arc::new(
            MemoryRuntime::new("/p")
                .with_file("/p/main.js", "import { a } from './x.js';")
                .with_file("/p/x.js", "export const a = 1;\nconst b = 2;"),
        );

        let outcomes = shake(runtime.clone(), ShakeConfig::default()).await;

        assert!(!outcomes[1].pruned);
        assert!(runtime.contents("/out/x.js").unwrap().contains("const b = 2;"));
    }

    #[tokio::test]
    async fn flatten_collision_is_reported_before_writing() {
        let runtime = Arc::new(
            MemoryRuntime::new("/p")
                .with_file(
                    "/p/main.js",
                    "import { a } from './a/util.js';\nimport { b } from './b/util.js';",
                )
                .with_file("/p/a/util.js", "export const a = 1;")
                .with_file("/p/b/util.js", "export const b = 1;"),
        );
        let config = ShakeConfig {
            layout: OutputLayout::Flatten,
            ..ShakeConfig::default()
        };

        let graph = GraphWalker::new(config.clone())
            .walk(PathBuf::from("/p/main.js"), runtime.clone())
            .await
            .unwrap();
        let err = Emitter::new(&config, PathBuf::from("/out"))
            .emit(&graph, runtime.clone())
            .await
            .unwrap_err();

        assert!(matches!(err, EmitError::OutputCollision { .. }));
        assert!(runtime.contents("/out/main.js").is_none());
    }
}
