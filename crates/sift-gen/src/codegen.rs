//! Serialize a (possibly rewritten) program back to source text

use crate::format::FormatOptions;
use oxc_ast::ast::Program;
use oxc_codegen::Codegen;

/// Generate source text for a program.
pub fn generate(program: &Program<'_>, opts: &FormatOptions) -> String {
    Codegen::new()
        .with_options(opts.to_codegen_options())
        .build(program)
        .code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParseOptions, QuoteStyle, parse};
    use oxc_allocator::Allocator;

    #[test]
    fn regenerates_parsed_source() {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, "export const a = 1;", ParseOptions::default()).unwrap();
        let code = generate(parsed.ast(), &FormatOptions::default());
        assert!(code.contains("export const a = 1;"));
    }

    #[test]
    fn honours_quote_style() {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, "import { a } from \"./a.js\";", ParseOptions::default())
            .unwrap();
        let opts = FormatOptions {
            quote_style: QuoteStyle::Single,
            ..FormatOptions::default()
        };
        assert!(generate(parsed.ast(), &opts).contains("'./a.js'"));
    }

    #[test]
    fn minify_strips_whitespace() {
        let allocator = Allocator::default();
        let parsed =
            parse(&allocator, "export const a = 1;\nexport const b = 2;", ParseOptions::default())
                .unwrap();
        let opts = FormatOptions {
            minify: true,
            ..FormatOptions::default()
        };
        let code = generate(parsed.ast(), &opts);
        assert!(code.contains("a=1"));
        assert!(code.len() < generate(parsed.ast(), &FormatOptions::default()).len());
    }
}
