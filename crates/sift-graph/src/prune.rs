//! Declaration-level pruning of a module tree.
//!
//! The pruner only ever touches top-level statements. For every statement
//! it derives a [`Decision`] from the statement's [`TopLevelItem`] shape and
//! then applies all decisions in one rewrite of the program body.
//!
//! Rules, given the module's export set `E` and used-set `U`:
//!
//! | Shape | Kept when |
//! |---|---|
//! | `export const a = ..` | `a ∈ E ∪ U`, then `a ∈ U` (the inner declaration is itself a top-level declaration) |
//! | `export function f` | `f ∈ U` |
//! | `export class C` | `C ∈ E ∪ U` |
//! | `export { a as b }` | per specifier, `b ∈ E ∪ U` |
//! | `const a = ..` | `a ∈ U` |
//! | `function f` | `f ∈ U` |
//!
//! Local names behind a surviving `export { .. }` list (without `from`) are
//! pinned and treated as used, so a kept export never refers to a removed
//! declaration. Destructuring declarators are never removed.

use oxc_ast::ast::{Declaration, Program, Statement};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::export::{DeclaratorBinding, ExportKind, TopLevelItem, classify};
use crate::symbol::ModuleSymbols;
use crate::usage::UsedSet;

/// Pruning knobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PruneOptions {
    /// Keep exported functions that appear in the export set even when no
    /// importer uses them. Off by default: an exported function survives
    /// only through usage.
    pub protect_exported_functions: bool,
}

/// What happened to a module during pruning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Declarations removed, in source order.
    pub removed_declarations: Vec<String>,
    /// Exported names removed from `export { .. }` lists.
    pub removed_specifiers: Vec<String>,
    /// Names bound by destructuring declarators that were left untouched.
    pub passthrough: Vec<String>,
}

impl PruneReport {
    pub fn is_unchanged(&self) -> bool {
        self.removed_declarations.is_empty() && self.removed_specifiers.is_empty()
    }
}

/// Outcome for a single top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Remove,
    /// Keep the statement with only the declarators marked `true`.
    RetainDeclarators(Vec<bool>),
    /// Keep the statement with only the export specifiers marked `true`.
    RetainSpecifiers(Vec<bool>),
}

impl Decision {
    /// An empty mask (`export {};`) has nothing to keep.
    fn from_mask(mask: Vec<bool>, wrap: fn(Vec<bool>) -> Decision) -> Decision {
        if mask.is_empty() {
            Decision::Remove
        } else if mask.iter().all(|&keep| keep) {
            Decision::Keep
        } else if mask.iter().all(|&keep| !keep) {
            Decision::Remove
        } else {
            wrap(mask)
        }
    }
}

/// Decides pruning for one module.
pub struct Pruner<'s> {
    exports: &'s FxHashSet<String>,
    used: &'s UsedSet,
    pinned: FxHashSet<String>,
    options: &'s PruneOptions,
}

impl<'s> Pruner<'s> {
    pub fn new(symbols: &'s ModuleSymbols, used: &'s UsedSet, options: &'s PruneOptions) -> Self {
        Self {
            exports: &symbols.exports,
            used,
            pinned: FxHashSet::default(),
            options,
        }
    }

    fn exported_or_used(&self, name: &str) -> bool {
        self.exports.contains(name) || self.used.contains(name)
    }

    fn used_or_pinned(&self, name: &str) -> bool {
        self.used.contains(name) || self.pinned.contains(name)
    }

    /// Pin the locals of every surviving `export { .. }` list.
    fn pin_exported_locals(&mut self, items: &[TopLevelItem]) {
        for item in items {
            if let TopLevelItem::Export(ExportKind::Specifiers {
                specifiers,
                source: None,
            }) = item
            {
                for spec in specifiers {
                    if self.exported_or_used(&spec.exported) {
                        self.pinned.insert(spec.local.clone());
                    }
                }
            }
        }
    }

    fn declarator_mask(
        &self,
        bindings: &[DeclaratorBinding],
        keep: impl Fn(&str) -> bool,
    ) -> Vec<bool> {
        bindings
            .iter()
            .map(|binding| match binding {
                DeclaratorBinding::Simple(name) => keep(name),
                DeclaratorBinding::Pattern(_) => true,
            })
            .collect()
    }

    /// Decide the fate of one classified statement.
    pub fn decide(&self, item: &TopLevelItem) -> Decision {
        match item {
            TopLevelItem::Export(ExportKind::Variables(bindings)) => Decision::from_mask(
                self.declarator_mask(bindings, |name| {
                    self.exported_or_used(name) && self.used_or_pinned(name)
                }),
                Decision::RetainDeclarators,
            ),
            TopLevelItem::Export(ExportKind::Function(name)) => {
                let protected = self.options.protect_exported_functions && self.exports.contains(name);
                if self.used_or_pinned(name) || protected {
                    Decision::Keep
                } else {
                    Decision::Remove
                }
            }
            TopLevelItem::Export(ExportKind::Class(name)) => {
                if self.exported_or_used(name) {
                    Decision::Keep
                } else {
                    Decision::Remove
                }
            }
            TopLevelItem::Export(ExportKind::Specifiers { specifiers, .. }) => Decision::from_mask(
                specifiers
                    .iter()
                    .map(|spec| self.exported_or_used(&spec.exported))
                    .collect(),
                Decision::RetainSpecifiers,
            ),
            TopLevelItem::Export(ExportKind::Opaque) | TopLevelItem::Other => Decision::Keep,
            TopLevelItem::Variables(bindings) => Decision::from_mask(
                self.declarator_mask(bindings, |name| self.used_or_pinned(name)),
                Decision::RetainDeclarators,
            ),
            TopLevelItem::Function(name) => {
                if self.used_or_pinned(name) {
                    Decision::Keep
                } else {
                    Decision::Remove
                }
            }
        }
    }
}

/// Rewrite `program` in place, dropping declarations and export specifiers
/// that are neither exported-and-referenced nor in `used`.
pub fn prune_program(
    program: &mut Program<'_>,
    symbols: &ModuleSymbols,
    used: &UsedSet,
    options: &PruneOptions,
) -> PruneReport {
    let items: Vec<TopLevelItem> = program.body.iter().map(classify).collect();

    let mut pruner = Pruner::new(symbols, used, options);
    pruner.pin_exported_locals(&items);

    let decisions: Vec<Decision> = items.iter().map(|item| pruner.decide(item)).collect();

    let mut report = PruneReport::default();
    for (item, decision) in items.iter().zip(&decisions) {
        record(&mut report, item, decision);
    }

    for (stmt, decision) in program.body.iter_mut().zip(&decisions) {
        match decision {
            Decision::RetainDeclarators(mask) => retain_declarators(stmt, mask),
            Decision::RetainSpecifiers(mask) => {
                if let Statement::ExportNamedDeclaration(export) = stmt {
                    let mut index = 0;
                    export.specifiers.retain(|_| {
                        let keep = mask[index];
                        index += 1;
                        keep
                    });
                }
            }
            Decision::Keep | Decision::Remove => {}
        }
    }

    let mut index = 0;
    program.body.retain(|_| {
        let keep = decisions[index] != Decision::Remove;
        index += 1;
        keep
    });

    report
}

fn retain_declarators(stmt: &mut Statement<'_>, mask: &[bool]) {
    let declarations = match stmt {
        Statement::VariableDeclaration(var) => &mut var.declarations,
        Statement::ExportNamedDeclaration(export) => match &mut export.declaration {
            Some(Declaration::VariableDeclaration(var)) => &mut var.declarations,
            _ => return,
        },
        _ => return,
    };

    let mut index = 0;
    declarations.retain(|_| {
        let keep = mask[index];
        index += 1;
        keep
    });
}

fn record(report: &mut PruneReport, item: &TopLevelItem, decision: &Decision) {
    let bindings = match item {
        TopLevelItem::Variables(bindings) | TopLevelItem::Export(ExportKind::Variables(bindings)) => {
            Some(bindings)
        }
        _ => None,
    };

    if let Some(bindings) = bindings {
        for (i, binding) in bindings.iter().enumerate() {
            let removed = match decision {
                Decision::Remove => true,
                Decision::RetainDeclarators(mask) => !mask[i],
                _ => false,
            };
            match binding {
                DeclaratorBinding::Simple(name) if removed => {
                    debug!(name = %name, "removing unused variable");
                    report.removed_declarations.push(name.clone());
                }
                DeclaratorBinding::Simple(_) => {}
                DeclaratorBinding::Pattern(names) => {
                    debug!(names = ?names, "destructuring declarator passed through");
                    report.passthrough.extend(names.iter().cloned());
                }
            }
        }
        return;
    }

    match (item, decision) {
        (
            TopLevelItem::Function(name)
            | TopLevelItem::Export(ExportKind::Function(name) | ExportKind::Class(name)),
            Decision::Remove,
        ) => {
            debug!(name = %name, "removing unused declaration");
            report.removed_declarations.push(name.clone());
        }
        (TopLevelItem::Export(ExportKind::Specifiers { specifiers, .. }), _) => {
            for (i, spec) in specifiers.iter().enumerate() {
                let removed = match decision {
                    Decision::Remove => true,
                    Decision::RetainSpecifiers(mask) => !mask[i],
                    _ => false,
                };
                if removed {
                    debug!(name = %spec.exported, "removing unused export specifier");
                    report.removed_specifiers.push(spec.exported.clone());
                }
            }
        }
        _ => {}
    }
}
