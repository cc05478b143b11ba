//! Parser façade for reading module source text
//!
//! This module provides a unified interface for parsing source code into ASTs
//! that can be pruned and regenerated with [`crate::generate`].

use crate::error::{GenError, Result};
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Parse options for reading source code
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Source type (JavaScript, TypeScript, JSX, TSX)
    pub source_type: SourceType,
    /// Allow parsing errors (returns partial AST)
    pub allow_errors: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_type: SourceType::mjs(),
            allow_errors: false,
        }
    }
}

impl ParseOptions {
    /// Create parse options from file path (auto-detects source type)
    ///
    /// The result is always parsed with module semantics since only static
    /// `import`/`export` syntax is followed.
    pub fn from_path(path: &str) -> Self {
        Self {
            source_type: SourceType::from_path(path)
                .unwrap_or(SourceType::mjs())
                .with_module(true),
            allow_errors: false,
        }
    }
}

/// Parse diagnostic information
#[derive(Debug, Clone)]
pub struct ParseDiagnostic {
    /// Error message
    pub message: String,
    /// Byte offset and length of the primary label (if available)
    pub span: Option<(usize, usize)>,
}

/// Parsed program with AST and metadata
pub struct ParsedProgram<'a> {
    /// The parsed AST program
    pub program: oxc_ast::ast::Program<'a>,
    /// Parse diagnostics (only populated with `allow_errors`)
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl<'a> ParsedProgram<'a> {
    /// Get the program AST
    pub fn ast(&self) -> &oxc_ast::ast::Program<'a> {
        &self.program
    }

    /// Get mutable access to the program AST
    pub fn ast_mut(&mut self) -> &mut oxc_ast::ast::Program<'a> {
        &mut self.program
    }

    /// Check if parsing had errors
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Parse source code into an AST
///
/// # Arguments
///
/// * `allocator` - Allocator for AST nodes (must outlive the returned program)
/// * `source` - Source code to parse
/// * `options` - Parse options
///
/// # Errors
///
/// Returns [`GenError::ParseFailed`] when the parser reports any diagnostic
/// and `allow_errors` is not set.
pub fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    options: ParseOptions,
) -> Result<ParsedProgram<'a>> {
    let parser = Parser::new(allocator, source, options.source_type);
    let result = parser.parse();

    let diagnostics: Vec<ParseDiagnostic> = result
        .errors
        .iter()
        .map(|err| ParseDiagnostic {
            message: err.message.to_string(),
            span: err
                .labels
                .as_ref()
                .and_then(|labels| labels.first())
                .map(|label| (label.offset(), label.len())),
        })
        .collect();

    if result.panicked || (!options.allow_errors && !diagnostics.is_empty()) {
        return Err(GenError::parse_failed(
            "Parse errors",
            diagnostics.into_iter().map(|d| d.message).collect(),
        ));
    }

    Ok(ParsedProgram {
        program: result.program,
        diagnostics,
    })
}
