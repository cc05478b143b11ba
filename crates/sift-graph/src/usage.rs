//! Usage propagation from an importer to its dependencies.
//!
//! A module's own occurrence analysis decides which of its named imports it
//! actually consumes. Those bindings, translated back to the names the
//! dependency exports, become the used-set that drives the dependency's
//! pruning.

use std::collections::BTreeSet;

use oxc_ast::ast::Program;
use oxc_semantic::{SemanticBuilder, SymbolFlags};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::symbol::{ImportBinding, ModuleSymbols};

/// Names a caller consumes from a callee, ordered for stable output.
pub type UsedSet = BTreeSet<String>;

/// How an import binding is judged as used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageAnalysis {
    /// Name-based: any identifier occurrence outside the import specifiers
    /// counts, regardless of scope.
    #[default]
    Occurrence,
    /// Scope-resolved: the import's symbol needs at least one resolved
    /// reference.
    Scoped,
}

/// Which dependencies receive a used binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingScope {
    /// Every dependency receives every used imported name.
    #[default]
    Shared,
    /// A dependency only receives names imported from it.
    PerDependency,
}

/// The import bindings a module was found to use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageReport {
    pub used: Vec<ImportBinding>,
}

impl UsageReport {
    /// Imported names of every used binding.
    pub fn imported_names(&self) -> UsedSet {
        self.used.iter().map(|b| b.imported.clone()).collect()
    }

    /// Imported names of the used bindings whose specifier satisfies `from`.
    pub fn imported_names_where(&self, mut from: impl FnMut(&str) -> bool) -> UsedSet {
        self.used
            .iter()
            .filter(|b| from(&b.source))
            .map(|b| b.imported.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

/// Occurrence-based propagation.
///
/// Subtracts one occurrence per import specifier identifier (local, and
/// imported unless it is a string literal) from the module's occurrence
/// multiset; any local name still present is referenced somewhere outside
/// its import declaration.
pub fn propagate_usage(symbols: &ModuleSymbols) -> UsageReport {
    let mut remaining = symbols.occurrences.clone();
    for binding in symbols.bindings.values() {
        remaining.remove_one(&binding.local);
        if !binding.imported_literal {
            remaining.remove_one(&binding.imported);
        }
    }

    let used = symbols
        .bindings
        .values()
        .filter(|binding| remaining.contains(&binding.local))
        .cloned()
        .collect();

    UsageReport { used }
}

/// Scope-resolved propagation using OXC's semantic analysis.
pub fn propagate_scoped_usage(program: &Program<'_>, symbols: &ModuleSymbols) -> UsageReport {
    let semantic_ret = SemanticBuilder::new().build(program);
    let scoping = semantic_ret.semantic.scoping();
    let root = scoping.root_scope_id();

    let referenced: FxHashSet<&str> = scoping
        .symbol_ids()
        .filter(|&id| {
            scoping.symbol_flags(id).contains(SymbolFlags::Import)
                && scoping.symbol_scope_id(id) == root
                && !scoping.get_resolved_reference_ids(id).is_empty()
        })
        .map(|id| scoping.symbol_name(id))
        .collect();

    let used = symbols
        .bindings
        .values()
        .filter(|binding| referenced.contains(binding.local.as_str()))
        .cloned()
        .collect();

    UsageReport { used }
}

/// Run the configured analysis.
pub fn analyze_usage(
    analysis: UsageAnalysis,
    program: &Program<'_>,
    symbols: &ModuleSymbols,
) -> UsageReport {
    match analysis {
        UsageAnalysis::Occurrence => propagate_usage(symbols),
        UsageAnalysis::Scoped => propagate_scoped_usage(program, symbols),
    }
}
