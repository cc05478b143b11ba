//! Parse and regenerate JavaScript modules using OXC
//!
//! This crate is the syntax-tree boundary of sift: it turns module source
//! text into an arena-allocated OXC [`Program`](oxc_ast::ast::Program) and
//! serializes a rewritten program back to text.
//!
//! # Example
//!
//! ```rust
//! use sift_gen::{FormatOptions, ParseOptions, generate, parse};
//! use oxc_allocator::Allocator;
//!
//! let allocator = Allocator::default();
//! let parsed = parse(&allocator, "export const a = 1;", ParseOptions::default())?;
//! assert_eq!(parsed.ast().body.len(), 1);
//!
//! let code = generate(parsed.ast(), &FormatOptions::default());
//! assert_eq!(code.trim(), "export const a = 1;");
//! # Ok::<(), sift_gen::GenError>(())
//! ```

mod codegen;
mod error;
mod format;
mod parser;

pub use codegen::generate;
pub use error::{GenError, Result};
pub use format::{FormatOptions, QuoteStyle};
pub use parser::{ParseDiagnostic, ParseOptions, ParsedProgram, parse};

// Re-export commonly used OXC types for convenience
pub use oxc_allocator::Allocator;
pub use oxc_span::SourceType;
