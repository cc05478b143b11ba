//! Code formatting options for regenerated modules

use oxc_codegen::CodegenOptions;

/// Quote style for string literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Single quotes: `'hello'`
    Single,
    /// Double quotes: `"hello"`
    #[default]
    Double,
}

/// Formatting options for code generation
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Quote style for string literals
    pub quote_style: QuoteStyle,
    /// Strip whitespace from the output
    pub minify: bool,
}

impl FormatOptions {
    pub(crate) fn to_codegen_options(&self) -> CodegenOptions {
        CodegenOptions {
            single_quote: self.quote_style == QuoteStyle::Single,
            minify: self.minify,
            ..CodegenOptions::default()
        }
    }
}
