//! Single-pass symbol extraction over an OXC program.

use oxc_ast::ast::{
    BindingIdentifier, IdentifierName, IdentifierReference, ImportDeclarationSpecifier,
    LabelIdentifier, ModuleExportName, Program, Statement,
};
use oxc_ast_visit::Visit;

use super::{ImportBinding, ModuleSymbols, Occurrences};
use crate::export::{ExportKind, TopLevelItem, classify, export_name};

/// Counts every identifier in the tree: bindings, references, property
/// names, labels and import/export specifier names alike.
#[derive(Default)]
struct OccurrenceCollector {
    occurrences: Occurrences,
}

impl<'a> Visit<'a> for OccurrenceCollector {
    fn visit_identifier_reference(&mut self, it: &IdentifierReference<'a>) {
        self.occurrences.add(&it.name);
    }

    fn visit_binding_identifier(&mut self, it: &BindingIdentifier<'a>) {
        self.occurrences.add(&it.name);
    }

    fn visit_identifier_name(&mut self, it: &IdentifierName<'a>) {
        self.occurrences.add(&it.name);
    }

    fn visit_label_identifier(&mut self, it: &LabelIdentifier<'a>) {
        self.occurrences.add(&it.name);
    }
}

/// Derive [`ModuleSymbols`] from a parsed module.
pub fn extract_symbols(program: &Program<'_>) -> ModuleSymbols {
    let mut symbols = ModuleSymbols::default();

    let mut collector = OccurrenceCollector::default();
    collector.visit_program(program);
    symbols.occurrences = collector.occurrences;

    for stmt in &program.body {
        if let Statement::ImportDeclaration(import) = stmt {
            let source = import.source.value.to_string();
            for spec in import.specifiers.iter().flatten() {
                if let ImportDeclarationSpecifier::ImportSpecifier(named) = spec {
                    let local = named.local.name.to_string();
                    symbols.bindings.insert(
                        local.clone(),
                        ImportBinding {
                            local,
                            imported: export_name(&named.imported),
                            imported_literal: matches!(
                                named.imported,
                                ModuleExportName::StringLiteral(_)
                            ),
                            source: source.clone(),
                        },
                    );
                }
            }
            continue;
        }

        match classify(stmt) {
            TopLevelItem::Export(kind) => match kind {
                ExportKind::Variables(bindings) => {
                    for name in bindings.iter().flat_map(|b| b.names()) {
                        symbols.exports.insert(name.to_string());
                        symbols.declarations.insert(name.to_string());
                    }
                }
                ExportKind::Function(name) => {
                    symbols.exports.insert(name.clone());
                    symbols.declarations.insert(name);
                }
                ExportKind::Class(name) => {
                    symbols.exports.insert(name);
                }
                ExportKind::Specifiers { specifiers, .. } => {
                    symbols
                        .exports
                        .extend(specifiers.into_iter().map(|s| s.exported));
                }
                ExportKind::Opaque => {}
            },
            TopLevelItem::Variables(bindings) => {
                for name in bindings.iter().flat_map(|b| b.names()) {
                    symbols.declarations.insert(name.to_string());
                }
            }
            TopLevelItem::Function(name) => {
                symbols.declarations.insert(name);
            }
            TopLevelItem::Other => {}
        }
    }

    symbols
}
