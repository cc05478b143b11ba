//! BFS traversal logic for graph walking.
//!
//! This module contains the breadth-first search that discovers every module
//! reachable from the entry through static imports.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use sift_graph::{Runtime, ShakeGraph};
use tracing::debug;

use super::WalkerError;
use super::parser::ModuleParser;
use crate::config::ShakeConfig;

/// BFS traversal state and logic.
pub struct Traversal<'a> {
    config: &'a ShakeConfig,
    parser: ModuleParser,
}

impl<'a> Traversal<'a> {
    pub fn new(config: &'a ShakeConfig) -> Self {
        Self {
            config,
            parser: ModuleParser::new(config.usage_analysis),
        }
    }

    /// Perform BFS traversal of the dependency graph.
    ///
    /// Each module is visited once. An import of a module that is already
    /// visited or queued (including a back-edge of a cycle) only records the
    /// edge.
    pub async fn traverse(
        &self,
        entry: PathBuf,
        runtime: Arc<dyn Runtime>,
    ) -> Result<ShakeGraph, WalkerError> {
        let mut graph = ShakeGraph::new(entry.clone());
        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::new();
        let mut depth_map: FxHashMap<PathBuf, usize> = FxHashMap::default();

        queue.push_back((entry.clone(), 0));
        depth_map.insert(entry.clone(), 0);

        while let Some((current_path, depth)) = queue.pop_front() {
            // Check max depth
            if let Some(max_depth) = self.config.max_depth {
                if depth > max_depth {
                    return Err(WalkerError::MaxDepthExceeded { depth });
                }
            }

            // Check max modules
            if let Some(max_modules) = self.config.max_modules {
                if visited.len() >= max_modules {
                    return Err(WalkerError::TooManyModules {
                        count: visited.len(),
                        max: max_modules,
                    });
                }
            }

            if !visited.insert(current_path.clone()) {
                continue;
            }

            let record = self
                .parser
                .process_module(&current_path, runtime.as_ref(), depth, current_path == entry)
                .await?;

            for dependency in &record.dependencies.paths {
                if visited.contains(dependency) {
                    debug!(
                        from = %current_path.display(),
                        to = %dependency.display(),
                        "dependency already visited"
                    );
                    continue;
                }

                if !depth_map.contains_key(dependency) {
                    let new_depth = depth + 1;
                    depth_map.insert(dependency.clone(), new_depth);
                    queue.push_back((dependency.clone(), new_depth));
                }
            }

            graph.insert(record);
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_graph::MemoryRuntime;
    use std::path::Path;

    fn config() -> ShakeConfig {
        ShakeConfig::default()
    }

    async fn walk(runtime: MemoryRuntime, config: &ShakeConfig) -> Result<ShakeGraph, WalkerError> {
        Traversal::new(config)
            .traverse(PathBuf::from("/p/main.js"), Arc::new(runtime))
            .await
    }

    #[tokio::test]
    async fn visits_each_module_once() {
        let runtime = MemoryRuntime::new("/p")
            .with_file(
                "/p/main.js",
                "import { l } from './left.js';\nimport { r } from './right.js';",
            )
            .with_file("/p/left.js", "import { s } from './shared.js';")
            .with_file("/p/right.js", "import { s } from './shared.js';")
            .with_file("/p/shared.js", "export const s = 1;");

        let graph = walk(runtime, &config()).await.unwrap();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edges().count(), 4);
        let shared = graph.get(Path::new("/p/shared.js")).unwrap();
        assert_eq!(shared.depth, 2);
        assert!(!shared.is_entry);
        assert!(graph.get(Path::new("/p/main.js")).unwrap().is_entry);
    }

    #[tokio::test]
    async fn cycles_terminate() {
        let runtime = MemoryRuntime::new("/p")
            .with_file("/p/main.js", "import { b } from './b.js';\nexport const a = b;")
            .with_file("/p/b.js", "import { a } from './main.js';\nexport const b = a;");

        let graph = walk(runtime, &config()).await.unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edges().count(), 2);
    }

    #[tokio::test]
    async fn max_depth_is_enforced() {
        let runtime = MemoryRuntime::new("/p")
            .with_file("/p/main.js", "import { a } from './a.js';")
            .with_file("/p/a.js", "import { b } from './b.js';")
            .with_file("/p/b.js", "export const b = 1;");

        let config = ShakeConfig {
            max_depth: Some(1),
            ..config()
        };
        let err = walk(runtime, &config).await.unwrap_err();
        assert!(matches!(err, WalkerError::MaxDepthExceeded { depth: 2 }));
    }

    #[tokio::test]
    async fn max_modules_is_enforced() {
        let runtime = MemoryRuntime::new("/p")
            .with_file("/p/main.js", "import { a } from './a.js';")
            .with_file("/p/a.js", "export const a = 1;");

        let config = ShakeConfig {
            max_modules: Some(1),
            ..config()
        };
        let err = walk(runtime, &config).await.unwrap_err();
        assert!(matches!(err, WalkerError::TooManyModules { count: 1, max: 1 }));
    }

    #[tokio::test]
    async fn missing_dependency_fails_the_walk() {
        let runtime =
            MemoryRuntime::new("/p").with_file("/p/main.js", "import { a } from './gone.js';");

        let err = walk(runtime, &config()).await.unwrap_err();
        assert!(matches!(err, WalkerError::ReadFile { .. }));
    }
}
