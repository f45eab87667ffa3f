//! Markdown source converter.

use crate::detect::Format;
use crate::model::Document;
use crate::parser::{MarkdownParser, ParseOptions};

use super::DocumentConverter;

/// Converter for Markdown sources (`.md`).
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownConverter;

impl MarkdownConverter {
    /// Create a new Markdown converter.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentConverter for MarkdownConverter {
    fn source_format(&self) -> Format {
        Format::Markdown
    }

    fn name(&self) -> &str {
        "markdown"
    }

    fn parse(&self, source: &str, options: &ParseOptions) -> Document {
        MarkdownParser::with_options(options.clone()).parse(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{ConvertOptions, OutputFormat};

    #[test]
    fn test_markdown_converter_info() {
        let converter = MarkdownConverter::new();
        assert_eq!(converter.name(), "markdown");
        assert_eq!(converter.supported_extensions(), vec!["md"]);
        assert!(converter.supports_extension("MD"));
        assert!(!converter.supports_extension("typ"));
    }

    #[test]
    fn test_markdown_to_typst() {
        let result = MarkdownConverter::new()
            .convert_str("Some **bold** text.", &ConvertOptions::default())
            .unwrap();
        assert_eq!(result.content, "Some *bold* text.");
        assert_eq!(result.target, OutputFormat::Typst);
    }

    #[test]
    fn test_markdown_to_json() {
        let options = ConvertOptions::new().with_format(OutputFormat::Json);
        let result = MarkdownConverter::new().convert_str("# A", &options).unwrap();
        assert!(result.content.contains("\"heading\""));
    }
}
