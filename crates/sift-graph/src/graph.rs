//! Module graph produced by a walk and the merged used-sets derived from it.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::resolver::ResolvedDependencies;
use crate::symbol::ModuleSymbols;
use crate::usage::{BindingScope, UsageReport, UsedSet};

/// Everything the prune phase needs about one module.
///
/// The syntax tree itself is not kept: it lives in a per-module arena and is
/// rebuilt from `source` when the module is pruned.
#[derive(Debug, Clone)]
pub struct ModuleRecord {
    pub path: PathBuf,
    pub source: String,
    pub is_entry: bool,
    /// BFS distance from the entry.
    pub depth: usize,
    pub symbols: ModuleSymbols,
    pub dependencies: ResolvedDependencies,
    pub usage: UsageReport,
}

impl ModuleRecord {
    /// Names this module forwards to `dependency`.
    pub fn forwarded_to(&self, dependency: &Path, scope: BindingScope) -> UsedSet {
        match scope {
            BindingScope::Shared => self.usage.imported_names(),
            BindingScope::PerDependency => self.usage.imported_names_where(|specifier| {
                self.dependencies.path_for(specifier) == Some(dependency)
            }),
        }
    }
}

/// Every module reachable from the entry, keyed by resolved path in
/// discovery order.
#[derive(Debug, Clone)]
pub struct ShakeGraph {
    entry: PathBuf,
    modules: IndexMap<PathBuf, ModuleRecord>,
}

impl ShakeGraph {
    pub fn new(entry: impl Into<PathBuf>) -> Self {
        Self {
            entry: entry.into(),
            modules: IndexMap::new(),
        }
    }

    pub fn entry(&self) -> &Path {
        &self.entry
    }

    pub fn insert(&mut self, record: ModuleRecord) {
        self.modules.insert(record.path.clone(), record);
    }

    pub fn get(&self, path: &Path) -> Option<&ModuleRecord> {
        self.modules.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.modules.contains_key(path)
    }

    pub fn modules(&self) -> impl Iterator<Item = &ModuleRecord> + Clone {
        self.modules.values()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Import edges `(importer, dependency)` between modules in the graph.
    pub fn edges(&self) -> impl Iterator<Item = (&Path, &Path)> {
        let modules = &self.modules;
        modules.values().flat_map(move |record| {
            record
                .dependencies
                .paths
                .iter()
                .filter(move |dep| modules.contains_key(dep.as_path()))
                .map(move |dep| (record.path.as_path(), dep.as_path()))
        })
    }

    /// Union, per module, of the names forwarded along every incoming edge.
    ///
    /// Forwarded names depend only on the importer's own source, so a single
    /// pass over the edges is already the fixed point. Modules nobody
    /// forwards a name to (including the entry, unless it sits on a cycle)
    /// map to an empty set.
    pub fn merged_used_sets(&self, scope: BindingScope) -> IndexMap<PathBuf, UsedSet> {
        let mut merged: IndexMap<PathBuf, UsedSet> = self
            .modules
            .keys()
            .map(|path| (path.clone(), UsedSet::new()))
            .collect();

        for (importer, dependency) in self.edges() {
            let Some(record) = self.modules.get(importer) else {
                continue;
            };
            let forwarded = record.forwarded_to(dependency, scope);
            if let Some(set) = merged.get_mut(dependency) {
                set.extend(forwarded);
            }
        }

        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve_dependencies;
    use crate::symbol::extract_symbols;
    use crate::usage::propagate_usage;
    use sift_gen::{Allocator, ParseOptions, parse};

    fn record(path: &str, source: &str, is_entry: bool) -> ModuleRecord {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, source, ParseOptions::default()).unwrap();
        let symbols = extract_symbols(parsed.ast());
        let path = PathBuf::from(path);
        let dependencies = resolve_dependencies(parsed.ast(), path.parent().unwrap());
        let usage = propagate_usage(&symbols);
        ModuleRecord {
            path,
            source: source.to_string(),
            is_entry,
            depth: 0,
            symbols,
            dependencies,
            usage,
        }
    }

    fn names(set: &UsedSet) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    fn diamond() -> ShakeGraph {
        let mut graph = ShakeGraph::new("/p/main.js");
        graph.insert(record(
            "/p/main.js",
            "import { l } from './left.js';\nimport { r } from './right.js';\nl(); r();",
            true,
        ));
        graph.insert(record(
            "/p/left.js",
            "import { a } from './shared.js';\nexport const l = () => a;",
            false,
        ));
        graph.insert(record(
            "/p/right.js",
            "import { b } from './shared.js';\nimport { z } from './z.js';\nexport const r = () => b + z;",
            false,
        ));
        graph.insert(record(
            "/p/shared.js",
            "export const a = 1;\nexport const b = 2;\nexport const c = 3;",
            false,
        ));
        graph.insert(record("/p/z.js", "export const z = 0;", false));
        graph
    }

    #[test]
    fn diamond_merges_incoming_edges() {
        let merged = diamond().merged_used_sets(BindingScope::PerDependency);
        assert_eq!(names(&merged[Path::new("/p/shared.js")]), vec!["a", "b"]);
        assert_eq!(names(&merged[Path::new("/p/left.js")]), vec!["l"]);
        assert!(merged[Path::new("/p/main.js")].is_empty());
    }

    #[test]
    fn shared_scope_forwards_every_used_name() {
        let merged = diamond().merged_used_sets(BindingScope::Shared);
        assert_eq!(names(&merged[Path::new("/p/z.js")]), vec!["b", "z"]);
        assert_eq!(names(&merged[Path::new("/p/left.js")]), vec!["l", "r"]);
    }

    #[test]
    fn cycles_contribute_like_any_other_edge() {
        let mut graph = ShakeGraph::new("/p/a.js");
        graph.insert(record(
            "/p/a.js",
            "import { fromB } from './b.js';\nexport const fromA = 1;\nfromB();",
            true,
        ));
        graph.insert(record(
            "/p/b.js",
            "import { fromA } from './a.js';\nexport const fromB = () => fromA;",
            false,
        ));

        assert_eq!(graph.edges().count(), 2);
        let merged = graph.merged_used_sets(BindingScope::Shared);
        assert_eq!(names(&merged[Path::new("/p/a.js")]), vec!["fromA"]);
        assert_eq!(names(&merged[Path::new("/p/b.js")]), vec!["fromB"]);
    }

    #[test]
    fn module_iteration_can_be_restarted() {
        let graph = diamond();
        let modules = graph.modules();
        let first: Vec<_> = modules.clone().map(|m| m.path.clone()).collect();
        let second: Vec<_> = modules.map(|m| m.path.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), graph.len());
    }

    #[test]
    fn edges_to_modules_outside_the_graph_are_ignored() {
        let mut graph = ShakeGraph::new("/p/main.js");
        graph.insert(record("/p/main.js", "import { x } from './gone.js';\nx();", true));
        assert_eq!(graph.edges().count(), 0);
        assert_eq!(graph.merged_used_sets(BindingScope::Shared).len(), 1);
    }
}
