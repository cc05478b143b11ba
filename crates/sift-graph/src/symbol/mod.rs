//! Per-module symbol facts.
//!
//! [`extract_symbols`] walks a module once and produces the four facts the
//! rest of the engine works from: import bindings, identifier occurrences,
//! the export set and the top-level declaration names.

mod extract;
mod occurrences;

pub use extract::extract_symbols;
pub use occurrences::Occurrences;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

/// A named import: `import { imported as local } from 'source'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportBinding {
    /// Identifier used inside the importing module.
    pub local: String,
    /// Name as exported by the dependency.
    pub imported: String,
    /// `imported` was written as a string literal (`import { "a-b" as c }`),
    /// so it is not among the module's identifier occurrences.
    pub imported_literal: bool,
    /// Module specifier of the import declaration.
    pub source: String,
}

/// Facts about one module, derived from its tree without mutating it.
#[derive(Debug, Clone, Default)]
pub struct ModuleSymbols {
    /// Named import bindings keyed by local name.
    pub bindings: IndexMap<String, ImportBinding>,
    /// Every identifier name in the tree, with its occurrence count.
    pub occurrences: Occurrences,
    /// Names exposed through named exports.
    pub exports: FxHashSet<String>,
    /// Names bound by top-level variable declarators and function declarations.
    pub declarations: FxHashSet<String>,
}

impl ModuleSymbols {
    /// Look up the binding for a local name.
    pub fn binding(&self, local: &str) -> Option<&ImportBinding> {
        self.bindings.get(local)
    }

    /// Every identifier mentioned by named import specifiers: each local
    /// name, plus the imported name unless it is a string literal.
    pub fn import_related_names(&self) -> FxHashSet<&str> {
        self.bindings
            .values()
            .flat_map(|b| {
                std::iter::once(b.local.as_str())
                    .chain((!b.imported_literal).then_some(b.imported.as_str()))
            })
            .collect()
    }

    /// Whether `name` is exposed by a named export of this module.
    pub fn is_exported(&self, name: &str) -> bool {
        self.exports.contains(name)
    }
}
