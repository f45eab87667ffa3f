//! Typst source converter.

use crate::detect::Format;
use crate::model::Document;
use crate::parser::{ParseOptions, TypstParser};

use super::DocumentConverter;

/// Converter for Typst sources (`.typ`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TypstConverter;

impl TypstConverter {
    /// Create a new Typst converter.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentConverter for TypstConverter {
    fn source_format(&self) -> Format {
        Format::Typst
    }

    fn name(&self) -> &str {
        "typst"
    }

    fn parse(&self, source: &str, options: &ParseOptions) -> Document {
        TypstParser::with_options(options.clone()).parse(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{ConvertOptions, OutputFormat};
    use crate::error::Error;

    #[test]
    fn test_typst_to_markdown() {
        let result = TypstConverter::new()
            .convert_str("== Part\n\n- _x_", &ConvertOptions::default())
            .unwrap();
        assert_eq!(result.content, "## Part\n\n- *x*");
        assert_eq!(result.target, OutputFormat::Markdown);
    }

    #[test]
    fn test_typst_to_typst() {
        let options = ConvertOptions::new().with_format(OutputFormat::Typst);
        let result = TypstConverter::new()
            .convert_str("= A\nbody *b*", &options)
            .unwrap();
        assert_eq!(result.content, "= A\n\nbody *b*");
    }

    #[test]
    fn test_invalid_bytes() {
        let result = TypstConverter::new().convert_bytes(&[0xC3, 0x28], &ConvertOptions::default());
        assert!(matches!(result, Err(Error::Encoding(_))));
    }
}
