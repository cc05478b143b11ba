//! Builder API for a tree-shaking run.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use path_clean::PathClean;
use sift_gen::FormatOptions;
use sift_graph::{BindingScope, NativeRuntime, PruneOptions, Runtime, UsageAnalysis};
use tracing::info;

use crate::config::{MaxDepth, OutputLayout, ShakeConfig};
use crate::emit::Emitter;
use crate::error::{Error, Result};
use crate::result::{ShakeResult, ShakeStats};
use crate::walker::GraphWalker;

/// Typestate marker for a shaker without an entry module.
#[derive(Debug, Clone, Copy)]
pub struct Unconfigured;

/// Typestate marker for a shaker with an entry module.
#[derive(Debug, Clone, Copy)]
pub struct Configured;

/// Tree-shakes the module graph reachable from one entry file.
///
/// `shake()` only exists once an entry is set.
///
/// # Example
///
/// ```rust,no_run
/// use sift_analysis::Shaker;
///
/// # async fn example() -> sift_analysis::Result<()> {
/// let result = Shaker::new()
///     .entry("src/main.js")  // Transitions to Configured state
///     .out_dir("dist")
///     .shake()
///     .await?;
///
/// println!("{result}");
/// # Ok(())
/// # }
/// ```
pub struct Shaker<State = Unconfigured> {
    config: ShakeConfig,
    _state: PhantomData<State>,
}

impl Shaker<Unconfigured> {
    pub fn new() -> Self {
        Self::from_config(ShakeConfig::default())
    }

    /// Start from a prepared configuration. Its `entry`, if any, is kept
    /// but still has to be confirmed through [`Shaker::entry`].
    pub fn from_config(config: ShakeConfig) -> Self {
        Self {
            config,
            _state: PhantomData,
        }
    }

    /// Set the entry module.
    ///
    /// This transitions the shaker to the `Configured` state.
    pub fn entry(mut self, path: impl Into<PathBuf>) -> Shaker<Configured> {
        self.config.entry = Some(path.into());
        Shaker {
            config: self.config,
            _state: PhantomData,
        }
    }
}

impl Default for Shaker<Unconfigured> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State> Shaker<State> {
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.out_dir = dir.into();
        self
    }

    pub fn usage_analysis(mut self, analysis: UsageAnalysis) -> Self {
        self.config.usage_analysis = analysis;
        self
    }

    pub fn binding_scope(mut self, scope: BindingScope) -> Self {
        self.config.binding_scope = scope;
        self
    }

    /// Keep exported functions even when no importer uses them.
    pub fn protect_exported_functions(mut self, protect: bool) -> Self {
        self.config.prune = PruneOptions {
            protect_exported_functions: protect,
        };
        self
    }

    pub fn layout(mut self, layout: OutputLayout) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn format(mut self, format: FormatOptions) -> Self {
        self.config.format = format;
        self
    }

    /// Set maximum depth for graph traversal (DoS protection).
    ///
    /// Default: 1000
    pub fn max_depth(mut self, depth: Option<MaxDepth>) -> Self {
        self.config.max_depth = depth.map(|d| d.value());
        self
    }

    /// Set maximum number of modules to process (DoS protection).
    ///
    /// Default: 100,000
    pub fn max_modules(mut self, modules: Option<usize>) -> Self {
        self.config.max_modules = modules;
        self
    }

    /// Set the runtime for filesystem operations.
    ///
    /// Defaults to [`NativeRuntime`].
    pub fn runtime(mut self, runtime: Arc<dyn Runtime>) -> Self {
        self.config.runtime = Some(runtime);
        self
    }

    /// Set the directory relative entry and output paths resolve against.
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.config.cwd = Some(cwd.into());
        self
    }

    pub fn config(&self) -> &ShakeConfig {
        &self.config
    }
}

impl Shaker<Configured> {
    /// Walk, prune and emit.
    pub async fn shake(self) -> Result<ShakeResult> {
        let runtime = self.get_runtime();
        let cwd = match &self.config.cwd {
            Some(cwd) => cwd.clone(),
            None => runtime.get_cwd()?,
        };

        let entry = self
            .config
            .entry
            .as_deref()
            .map(|entry| absolutize(entry, &cwd))
            .ok_or_else(|| Error::InvalidConfig("no entry module set".to_string()))?;
        let out_dir = absolutize(&self.config.out_dir, &cwd);

        info!(entry = %entry.display(), out_dir = %out_dir.display(), "shaking");

        let walker = GraphWalker::new(self.config.clone());
        let graph = walker.walk(entry.clone(), Arc::clone(&runtime)).await?;

        let emitter = Emitter::new(&self.config, out_dir.clone());
        let modules = emitter.emit(&graph, runtime).await?;

        let mut external: Vec<String> = graph
            .modules()
            .flat_map(|record| record.dependencies.external.iter().cloned())
            .collect();
        external.sort();
        external.dedup();

        let stats = ShakeStats::from_outcomes(&modules, graph.edges().count());
        info!(
            modules = stats.modules,
            removed = stats.removed_declarations,
            "shake complete"
        );

        Ok(ShakeResult {
            entry,
            out_dir,
            modules,
            external,
            stats,
        })
    }

    fn get_runtime(&self) -> Arc<dyn Runtime> {
        match &self.config.runtime {
            Some(runtime) => Arc::clone(runtime),
            None => Arc::new(NativeRuntime::new()),
        }
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf().clean()
    } else {
        cwd.join(path).clean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_graph::MemoryRuntime;

    #[test]
    fn builder_collects_options() {
        let shaker = Shaker::new()
            .entry("src/main.js")
            .out_dir("build")
            .usage_analysis(UsageAnalysis::Scoped)
            .binding_scope(BindingScope::PerDependency)
            .protect_exported_functions(true)
            .layout(OutputLayout::Flatten)
            .max_depth(Some(MaxDepth::new(10)));

        let config = shaker.config();
        assert_eq!(config.entry.as_deref(), Some(Path::new("src/main.js")));
        assert_eq!(config.out_dir, PathBuf::from("build"));
        assert_eq!(config.usage_analysis, UsageAnalysis::Scoped);
        assert!(config.prune.protect_exported_functions);
        assert_eq!(config.max_depth, Some(10));
    }

    #[test]
    fn relative_paths_resolve_against_cwd() {
        assert_eq!(
            absolutize(Path::new("./src/../main.js"), Path::new("/p")),
            PathBuf::from("/p/main.js")
        );
        assert_eq!(
            absolutize(Path::new("/abs/x.js"), Path::new("/p")),
            PathBuf::from("/abs/x.js")
        );
    }

    #[tokio::test]
    async fn shake_runs_end_to_end_in_memory() {
        let runtime = Arc::new(
            MemoryRuntime::new("/p")
                .with_file(
                    "/p/src/main.js",
                    "import { a } from './x.js';\nimport React from 'react';\nconsole.log(a);",
                )
                .with_file("/p/src/x.js", "export const a = 1;\nexport function f() {}"),
        );

        let result = Shaker::new()
            .entry("src/main.js")
            .runtime(runtime.clone())
            .shake()
            .await
            .unwrap();

        assert_eq!(result.entry, PathBuf::from("/p/src/main.js"));
        assert_eq!(result.out_dir, PathBuf::from("/p/dist"));
        assert_eq!(result.external, vec!["react"]);
        assert_eq!(result.stats.removed_declarations, 1);
        let x = runtime.contents("/p/dist/x.js").unwrap();
        assert!(!x.contains("function f"));
    }
}
