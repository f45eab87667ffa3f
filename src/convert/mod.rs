//! Document converters and the extension-keyed registry.
//!
//! Each converter owns one source format: it parses that format into the
//! document model and renders the model into the requested target. The
//! registry dispatches files to converters by extension.
//!
//! # Example
//!
//! ```no_run
//! use marktypist::convert::{ConvertOptions, ConverterRegistry};
//! use std::path::Path;
//!
//! fn main() -> marktypist::Result<()> {
//!     let registry = ConverterRegistry::with_defaults();
//!     let result = registry.convert(Path::new("notes.md"), &ConvertOptions::default())?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```

mod markdown;
mod typst;

pub use markdown::MarkdownConverter;
pub use typst::TypstConverter;

use crate::detect::{decode_source, read_source, Format};
use crate::error::{Error, Result};
use crate::model::Document;
use crate::parser::ParseOptions;
use crate::render::{to_json, to_markdown, to_typst, JsonFormat};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Parsing options
    pub parse: ParseOptions,

    /// Output format; `None` targets the source format's counterpart
    pub output_format: Option<OutputFormat>,

    /// Layout of JSON output
    pub json_format: JsonFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Set JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Resolve the target for a given source format.
    pub fn target_for(&self, source: Format) -> OutputFormat {
        self.output_format
            .unwrap_or_else(|| source.counterpart().into())
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown markup
    Markdown,

    /// Typst markup
    Typst,

    /// JSON dump of the document model
    Json,
}

impl OutputFormat {
    /// File extension for this output.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Typst => "typ",
            OutputFormat::Json => "json",
        }
    }

    /// MIME type of this output.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Typst => "text/vnd.typst",
            OutputFormat::Json => "application/json",
        }
    }

    /// Map an output file extension to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "md" => Some(OutputFormat::Markdown),
            "typ" => Some(OutputFormat::Typst),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => OutputFormat::Markdown,
            Format::Typst => OutputFormat::Typst,
        }
    }
}

/// Render a document into the given output format.
pub fn render_document(
    doc: &Document,
    target: OutputFormat,
    json_format: JsonFormat,
) -> Result<String> {
    match target {
        OutputFormat::Markdown => to_markdown(doc),
        OutputFormat::Typst => to_typst(doc),
        OutputFormat::Json => to_json(doc, json_format),
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted content
    pub content: String,

    /// Format the content was parsed from
    pub source: Format,

    /// Format the content was rendered into
    pub target: OutputFormat,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String, source: Format, target: OutputFormat) -> Self {
        Self {
            content,
            source,
            target,
        }
    }

    /// MIME type of the content.
    pub fn mime_type(&self) -> &'static str {
        self.target.mime_type()
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Trait for document converters.
///
/// A converter reads one source format. Rendering is shared, so an
/// implementation only has to provide parsing.
pub trait DocumentConverter: Send + Sync {
    /// The format this converter reads.
    fn source_format(&self) -> Format;

    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Parse source text into the document model.
    fn parse(&self, source: &str, options: &ParseOptions) -> Document;

    /// Get the supported file extensions for this converter.
    ///
    /// Extensions are lowercase without the leading dot.
    fn supported_extensions(&self) -> Vec<&str> {
        vec![self.source_format().extension()]
    }

    /// Convert source text.
    fn convert_str(&self, source: &str, options: &ConvertOptions) -> Result<ConvertResult> {
        let format = self.source_format();
        let target = options.target_for(format);
        log::debug!("Converting {} source to {:?}", format, target);

        let doc = self.parse(source, &options.parse);
        log::debug!("Parsed {} top-level blocks", doc.block_count());

        let content = render_document(&doc, target, options.json_format)?;
        Ok(ConvertResult::new(content, format, target))
    }

    /// Convert from bytes.
    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let source = decode_source(bytes)?;
        self.convert_str(&source, options)
    }

    /// Convert a file at the given path.
    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let source = read_source(path)?;
        self.convert_str(&source, options)
    }

    /// Check if this converter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for document converters.
///
/// The registry maps file extensions to converters and provides
/// convenient methods for converting documents.
pub struct ConverterRegistry {
    converters: HashMap<String, Arc<dyn DocumentConverter>>,
    by_name: HashMap<String, Arc<dyn DocumentConverter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the Markdown and Typst converters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(MarkdownConverter::new()));
        registry.register(Arc::new(TypstConverter::new()));
        registry
    }

    /// Register a converter.
    ///
    /// The converter will be registered for all its supported extensions.
    pub fn register(&mut self, converter: Arc<dyn DocumentConverter>) {
        for ext in converter.supported_extensions() {
            self.converters.insert(ext.to_lowercase(), converter.clone());
        }
        self.by_name
            .insert(converter.name().to_lowercase(), converter);
    }

    /// Get a converter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.converters.get(&ext.to_lowercase()).cloned()
    }

    /// Get a converter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Get the converter for a file path.
    ///
    /// Fails with [`Error::UnsupportedFormat`] when the extension is
    /// missing or unregistered.
    pub fn for_path(&self, path: &Path) -> Result<Arc<dyn DocumentConverter>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        self.get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.converters.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.converters.keys().map(|s| s.as_str()).collect()
    }

    /// Convert a file using the appropriate converter.
    pub fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let converter = self.for_path(path)?;
        log::info!("Converting {} with the {} converter", path.display(), converter.name());
        converter.convert(path, options)
    }

    /// Convert bytes using the specified extension to determine the converter.
    pub fn convert_bytes(
        &self,
        bytes: &[u8],
        ext: &str,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let converter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

        converter.convert_bytes(bytes, options)
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_parse_options(ParseOptions::new().with_tables(false))
            .with_format(OutputFormat::Json)
            .with_json_format(JsonFormat::Compact);

        assert!(!options.parse.tables);
        assert_eq!(options.output_format, Some(OutputFormat::Json));
        assert_eq!(options.json_format, JsonFormat::Compact);
    }

    #[test]
    fn test_default_target_is_counterpart() {
        let options = ConvertOptions::default();
        assert_eq!(options.target_for(Format::Markdown), OutputFormat::Typst);
        assert_eq!(options.target_for(Format::Typst), OutputFormat::Markdown);
    }

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(OutputFormat::from_extension("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_extension("typ"), Some(OutputFormat::Typst));
        assert_eq!(OutputFormat::from_extension("pdf"), None);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = ConverterRegistry::with_defaults();
        assert!(registry.supports("md"));
        assert!(registry.supports("TYP"));
        assert!(!registry.supports("docx"));
    }

    #[test]
    fn test_registry_get_by_extension() {
        let registry = ConverterRegistry::with_defaults();
        let converter = registry.get_by_extension("typ");
        assert!(converter.is_some());
        assert_eq!(converter.unwrap().name(), "typst");
    }

    #[test]
    fn test_registry_get_by_name() {
        let registry = ConverterRegistry::with_defaults();
        assert!(registry.get_by_name("Markdown").is_some());
        assert!(registry.get_by_name("pdf").is_none());
    }

    #[test]
    fn test_for_path_rejects_unknown_extension() {
        let registry = ConverterRegistry::with_defaults();
        assert!(matches!(
            registry.for_path(Path::new("a.docx")),
            Err(Error::UnsupportedFormat(ext)) if ext == "docx"
        ));
        assert!(matches!(
            registry.for_path(Path::new("Makefile")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_convert_bytes() {
        let registry = ConverterRegistry::with_defaults();
        let result = registry
            .convert_bytes(b"# Hi", "md", &ConvertOptions::default())
            .unwrap();
        assert_eq!(result.content, "= Hi");
        assert_eq!(result.source, Format::Markdown);
        assert_eq!(result.mime_type(), "text/vnd.typst");
    }
}
