//! Classification of top-level statements into prunable shapes.
//!
//! Every statement in a module body is reduced to a [`TopLevelItem`] once,
//! carrying owned names. The symbol extractor reads names from it and the
//! pruner matches on it exhaustively, so a new statement shape cannot be
//! handled by one and silently ignored by the other.

use oxc_ast::ast::{
    BindingPattern, BindingPatternKind, Declaration, ExportNamedDeclaration, ModuleExportName,
    Statement, VariableDeclaration,
};

/// Name bound by a single variable declarator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaratorBinding {
    /// `const a = ...`
    Simple(String),
    /// `const { a, b: [c] } = ...`; holds every bound name.
    ///
    /// Destructuring declarators are never pruned.
    Pattern(Vec<String>),
}

impl DeclaratorBinding {
    /// All names this declarator binds.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match self {
            DeclaratorBinding::Simple(name) => std::slice::from_ref(name),
            DeclaratorBinding::Pattern(names) => names,
        };
        names.iter().map(String::as_str)
    }
}

/// A specifier in `export { local as exported }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedSpecifier {
    pub local: String,
    pub exported: String,
}

/// Shape of a named export statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportKind {
    /// `export const a = 1, b = 2;`
    Variables(Vec<DeclaratorBinding>),
    /// `export function f() {}`
    Function(String),
    /// `export class C {}`: a declaration exported by its own name.
    Class(String),
    /// `export { a, b as c }` or `export { a } from './a.js'`
    Specifiers {
        specifiers: Vec<ExportedSpecifier>,
        source: Option<String>,
    },
    /// TypeScript-only declarations and other shapes passed through as-is.
    Opaque,
}

/// Shape of any top-level statement, as far as pruning is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevelItem {
    Export(ExportKind),
    /// Non-exported `var`/`let`/`const`.
    Variables(Vec<DeclaratorBinding>),
    /// Non-exported `function f() {}`.
    Function(String),
    /// Imports, side-effect statements, classes, default exports, ...
    Other,
}

/// Classify one top-level statement.
pub fn classify(stmt: &Statement<'_>) -> TopLevelItem {
    match stmt {
        Statement::ExportNamedDeclaration(export) => TopLevelItem::Export(classify_export(export)),
        Statement::VariableDeclaration(var) => TopLevelItem::Variables(declarator_bindings(var)),
        Statement::FunctionDeclaration(func) => match &func.id {
            Some(id) => TopLevelItem::Function(id.name.to_string()),
            None => TopLevelItem::Other,
        },
        _ => TopLevelItem::Other,
    }
}

fn classify_export(export: &ExportNamedDeclaration<'_>) -> ExportKind {
    match &export.declaration {
        Some(Declaration::VariableDeclaration(var)) => {
            ExportKind::Variables(declarator_bindings(var))
        }
        Some(Declaration::FunctionDeclaration(func)) => match &func.id {
            Some(id) => ExportKind::Function(id.name.to_string()),
            None => ExportKind::Opaque,
        },
        Some(Declaration::ClassDeclaration(class)) => match &class.id {
            Some(id) => ExportKind::Class(id.name.to_string()),
            None => ExportKind::Opaque,
        },
        Some(_) => ExportKind::Opaque,
        None => ExportKind::Specifiers {
            specifiers: export
                .specifiers
                .iter()
                .map(|spec| ExportedSpecifier {
                    local: export_name(&spec.local),
                    exported: export_name(&spec.exported),
                })
                .collect(),
            source: export.source.as_ref().map(|s| s.value.to_string()),
        },
    }
}

/// The binding of every declarator in a declaration, in source order.
pub fn declarator_bindings(var: &VariableDeclaration<'_>) -> Vec<DeclaratorBinding> {
    var.declarations
        .iter()
        .map(|declarator| match &declarator.id.kind {
            BindingPatternKind::BindingIdentifier(ident) => {
                DeclaratorBinding::Simple(ident.name.to_string())
            }
            _ => {
                let mut names = Vec::new();
                collect_bound_names(&declarator.id, &mut names);
                DeclaratorBinding::Pattern(names)
            }
        })
        .collect()
}

fn collect_bound_names(pattern: &BindingPattern<'_>, names: &mut Vec<String>) {
    match &pattern.kind {
        BindingPatternKind::BindingIdentifier(ident) => names.push(ident.name.to_string()),
        BindingPatternKind::ObjectPattern(object) => {
            for property in &object.properties {
                collect_bound_names(&property.value, names);
            }
            if let Some(rest) = &object.rest {
                collect_bound_names(&rest.argument, names);
            }
        }
        BindingPatternKind::ArrayPattern(array) => {
            for element in array.elements.iter().flatten() {
                collect_bound_names(element, names);
            }
            if let Some(rest) = &array.rest {
                collect_bound_names(&rest.argument, names);
            }
        }
        BindingPatternKind::AssignmentPattern(assign) => collect_bound_names(&assign.left, names),
    }
}

/// Textual name of an import/export specifier name.
pub fn export_name(name: &ModuleExportName<'_>) -> String {
    match name {
        ModuleExportName::IdentifierName(ident) => ident.name.to_string(),
        ModuleExportName::IdentifierReference(ident) => ident.name.to_string(),
        ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
    }
}
