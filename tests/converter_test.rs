//! Integration tests for the converter module.

use std::sync::Arc;
use marktypist::convert::{
    ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter, MarkdownConverter,
    OutputFormat, TypstConverter,
};
use marktypist::detect::Format;
use marktypist::model::{Block, Document};
use marktypist::parser::ParseOptions;
use marktypist::JsonFormat;

/// Mock converter treating the whole source as one paragraph.
struct MockConverter {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockConverter {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl DocumentConverter for MockConverter {
    fn source_format(&self) -> Format {
        Format::Markdown
    }

    fn name(&self) -> &str {
        self.name
    }

    fn parse(&self, source: &str, _options: &ParseOptions) -> Document {
        Document::with_blocks(vec![Block::text(format!("{}: {}", self.name, source))])
    }

    fn supported_extensions(&self) -> Vec<&str> {
        self.extensions.clone()
    }
}

#[test]
fn test_converter_registry_new() {
    let registry = ConverterRegistry::new();

    // Empty registry should support nothing
    assert!(!registry.supports("md"));
    assert!(!registry.supports("typ"));
}

#[test]
fn test_converter_registry_with_defaults() {
    let registry = ConverterRegistry::with_defaults();

    assert!(registry.supports("md"));
    assert!(registry.supports("typ"));
    assert!(registry.supports("MD")); // Case insensitive
    assert!(!registry.supports("docx"));
    assert!(!registry.supports("markdown"));
}

#[test]
fn test_converter_registry_register() {
    let mut registry = ConverterRegistry::new();
    registry.register(Arc::new(MockConverter::new(vec!["txt", "text"], "text")));

    assert!(registry.supports("txt"));
    assert!(registry.supports("text"));
    assert!(registry.supports("TXT")); // Case insensitive
}

#[test]
fn test_registered_converter_is_used() {
    let mut registry = ConverterRegistry::with_defaults();
    registry.register(Arc::new(MockConverter::new(vec!["txt"], "plain")));

    let result = registry
        .convert_bytes(b"hello", "txt", &ConvertOptions::default())
        .unwrap();
    assert_eq!(result.content, "plain: hello");
    assert_eq!(result.target, OutputFormat::Typst);
}

#[test]
fn test_converter_registry_get_by_name() {
    let registry = ConverterRegistry::with_defaults();

    assert!(registry.get_by_name("typst").is_some());
    assert!(registry.get_by_name("TYPST").is_some()); // Case insensitive
    assert!(registry.get_by_name("unknown").is_none());
}

#[test]
fn test_later_registration_wins_extension() {
    let mut registry = ConverterRegistry::with_defaults();
    registry.register(Arc::new(MockConverter::new(vec!["md"], "override")));

    let converter = registry.get_by_extension("md").unwrap();
    assert_eq!(converter.name(), "override");
    assert!(registry.get_by_name("markdown").is_some());
}

#[test]
fn test_supported_extensions() {
    let registry = ConverterRegistry::with_defaults();
    let mut extensions = registry.supported_extensions();
    extensions.sort_unstable();

    assert_eq!(extensions, vec!["md", "typ"]);
}

#[test]
fn test_builtin_converter_formats() {
    assert_eq!(MarkdownConverter::new().source_format(), Format::Markdown);
    assert_eq!(TypstConverter::new().source_format(), Format::Typst);
    assert!(TypstConverter::new().supports_extension("TYP"));
    assert!(!TypstConverter::new().supports_extension("md"));
}

#[test]
fn test_json_target() {
    let options = ConvertOptions::new()
        .with_format(OutputFormat::Json)
        .with_json_format(JsonFormat::Compact);
    let result = TypstConverter::new().convert_str("= A", &options).unwrap();

    assert_eq!(
        result.content,
        r#"{"content":[{"type":"heading","level":1,"content":[{"type":"text","content":"A"}]}]}"#
    );
    assert_eq!(result.mime_type(), "application/json");
}

#[test]
fn test_convert_result_methods() {
    let result = ConvertResult::new("= Hello".to_string(), Format::Markdown, OutputFormat::Typst);

    assert_eq!(result.content_len(), 7);
    assert_eq!(result.mime_type(), "text/vnd.typst");
}
