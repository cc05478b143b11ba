//! Static dependency resolution.
//!
//! Resolution is purely lexical: a relative or absolute specifier is joined
//! onto the importing module's directory and cleaned. No extension
//! inference, index files or package manifests are consulted.

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use oxc_ast::ast::{Program, Statement};
use path_clean::PathClean;

/// Dependencies of one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedDependencies {
    /// Distinct dependency paths in first-import order.
    pub paths: IndexSet<PathBuf>,
    /// Resolved path for every local specifier.
    pub by_specifier: IndexMap<String, PathBuf>,
    /// Bare specifiers (package names) that are not followed.
    pub external: IndexSet<String>,
}

impl ResolvedDependencies {
    /// Resolved path for a specifier, if it is local.
    pub fn path_for(&self, specifier: &str) -> Option<&Path> {
        self.by_specifier.get(specifier).map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Whether a specifier names a file rather than a package.
pub fn is_local_specifier(specifier: &str) -> bool {
    specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier == "."
        || specifier == ".."
        || Path::new(specifier).is_absolute()
}

/// Resolve a single specifier against the importing module's directory.
pub fn resolve_specifier(specifier: &str, module_dir: &Path) -> PathBuf {
    module_dir.join(specifier).clean()
}

/// Collect the files statically imported by `program`.
///
/// Only `import` declarations are followed; re-exports with a `from`
/// clause and dynamic `import()` calls are not.
pub fn resolve_dependencies(program: &Program<'_>, module_dir: &Path) -> ResolvedDependencies {
    let mut deps = ResolvedDependencies::default();

    for stmt in &program.body {
        let Statement::ImportDeclaration(import) = stmt else {
            continue;
        };
        let specifier = import.source.value.as_str();

        if !is_local_specifier(specifier) {
            deps.external.insert(specifier.to_string());
            continue;
        }

        let path = resolve_specifier(specifier, module_dir);
        deps.paths.insert(path.clone());
        deps.by_specifier.insert(specifier.to_string(), path);
    }

    deps
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_gen::{Allocator, ParseOptions, parse};

    fn deps_of(source: &str, dir: &str) -> ResolvedDependencies {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, source, ParseOptions::default()).unwrap();
        resolve_dependencies(parsed.ast(), Path::new(dir))
    }

    #[test]
    fn joins_relative_specifiers_onto_module_dir() {
        let deps = deps_of(
            "import { a } from './a.js';\nimport { b } from '../lib/b.js';",
            "/project/src",
        );
        let paths: Vec<_> = deps.paths.iter().cloned().collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/project/src/a.js"),
                PathBuf::from("/project/lib/b.js"),
            ]
        );
    }

    #[test]
    fn duplicate_imports_collapse() {
        let deps = deps_of(
            "import { a } from './a.js';\nimport { b } from './a.js';\nimport { c } from './sub/../a.js';",
            "/p",
        );
        assert_eq!(deps.paths.len(), 1);
        assert_eq!(deps.by_specifier.len(), 2);
        assert_eq!(deps.path_for("./sub/../a.js"), Some(Path::new("/p/a.js")));
    }

    #[test]
    fn bare_specifiers_are_external() {
        let deps = deps_of("import { h } from 'preact';\nimport './side.js';", "/p");
        assert!(deps.external.contains("preact"));
        assert_eq!(deps.paths.len(), 1);
    }

    #[test]
    fn reexports_are_not_followed() {
        let deps = deps_of("export { a } from './a.js';\nexport * from './b.js';", "/p");
        assert!(deps.is_empty());
    }

    #[test]
    fn absolute_specifiers_are_kept() {
        assert!(is_local_specifier("/abs/mod.js"));
        assert!(!is_local_specifier("lodash/fp"));
        assert_eq!(
            resolve_specifier("/abs/mod.js", Path::new("/p")),
            PathBuf::from("/abs/mod.js")
        );
    }
}
