//! # marktypist
//!
//! Bidirectional converter between Markdown and Typst markup.
//!
//! Both directions route through one intermediate tree, the universal
//! document model in [`model`]. A builder turns source text into that
//! tree and a renderer turns the tree into target text.
//!
//! ## Quick Start
//!
//! ```
//! use marktypist::{convert_markdown_to_typst, convert_typst_to_markdown};
//!
//! fn main() -> marktypist::Result<()> {
//!     let typst = convert_markdown_to_typst("# Title\n\nSome **bold** text.")?;
//!     assert_eq!(typst, "= Title\n\nSome *bold* text.");
//!
//!     let markdown = convert_typst_to_markdown("== Part\n\n- _item_")?;
//!     assert_eq!(markdown, "## Part\n\n- *item*");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Markdown to Typst**: headings, emphasis, code, links, images, lists,
//!   block quotes and GFM tables
//! - **Typst to Markdown**: headings, bullet lists and paragraphs with
//!   bold and italic emphasis
//! - **JSON dump** of the document model for inspection
//! - **Async file conversion** behind the `async` feature

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter, OutputFormat,
};
pub use detect::{decode_source, detect_format_from_path, Format};
pub use error::{Error, Result};
pub use model::{Block, Document, Inline, ListItem, Table, TableCell, TableRow};
pub use parser::{MarkdownParser, ParseOptions, TypstParser};
pub use render::JsonFormat;

use std::fs;
use std::path::Path;

/// Parse source text of the given format with default options.
///
/// # Example
///
/// ```
/// use marktypist::{parse, Block, Format};
///
/// let doc = parse("= Hello", Format::Typst);
/// assert!(matches!(doc.content[0], Block::Heading { level: 1, .. }));
/// ```
pub fn parse(source: &str, format: Format) -> Document {
    parse_with_options(source, format, &ParseOptions::default())
}

/// Parse source text of the given format with custom options.
pub fn parse_with_options(source: &str, format: Format, options: &ParseOptions) -> Document {
    match format {
        Format::Markdown => MarkdownParser::with_options(options.clone()).parse(source),
        Format::Typst => TypstParser::with_options(options.clone()).parse(source),
    }
}

/// Render a document into the given markup language.
pub fn render(doc: &Document, format: Format) -> Result<String> {
    match format {
        Format::Markdown => render::to_markdown(doc),
        Format::Typst => render::to_typst(doc),
    }
}

/// Convert Markdown text to Typst text.
///
/// # Example
///
/// ```
/// use marktypist::convert_markdown_to_typst;
///
/// let typst = convert_markdown_to_typst("[Typst](https://typst.app)").unwrap();
/// assert_eq!(typst, "#link(\"https://typst.app\")[Typst]");
/// ```
pub fn convert_markdown_to_typst(source: &str) -> Result<String> {
    render::to_typst(&parse(source, Format::Markdown))
}

/// Convert Typst text to Markdown text.
///
/// Fails with [`Error::UnsupportedNodeKind`] only for node kinds the Typst
/// builder never produces, so any Typst input converts.
///
/// # Example
///
/// ```
/// use marktypist::convert_typst_to_markdown;
///
/// let markdown = convert_typst_to_markdown("这是 *_粗斜体_* 文字。").unwrap();
/// assert_eq!(markdown, "这是 ***粗斜体*** 文字。");
/// ```
pub fn convert_typst_to_markdown(source: &str) -> Result<String> {
    render::to_markdown(&parse(source, Format::Typst))
}

/// Convert a file, choosing the direction from its extension.
///
/// `.md` converts to Typst and `.typ` converts to Markdown. With an
/// output path the result is written there and `None` is returned;
/// without one the converted text is returned.
///
/// # Example
///
/// ```no_run
/// use marktypist::convert_file;
/// use std::path::Path;
///
/// convert_file("notes.md", Some(Path::new("notes.typ")))?;
/// let markdown = convert_file("notes.typ", None)?;
/// # Ok::<(), marktypist::Error>(())
/// ```
pub fn convert_file<P: AsRef<Path>>(input: P, output: Option<&Path>) -> Result<Option<String>> {
    convert_file_with_options(input, output, &ConvertOptions::default())
}

/// Convert a file with custom options.
pub fn convert_file_with_options<P: AsRef<Path>>(
    input: P,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<Option<String>> {
    let registry = ConverterRegistry::with_defaults();
    let result = registry.convert(input.as_ref(), options)?;
    write_or_return(result.content, output)
}

/// Convert a file without blocking the async runtime.
///
/// Behaves like [`convert_file_with_options`] but reads and writes with
/// `tokio::fs`.
#[cfg(feature = "async")]
pub async fn convert_file_async<P: AsRef<Path>>(
    input: P,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<Option<String>> {
    let input = input.as_ref();
    let registry = ConverterRegistry::with_defaults();
    let converter = registry.for_path(input)?;

    let bytes = tokio::fs::read(input).await?;
    let result = converter.convert_bytes(&bytes, options)?;

    match output {
        Some(path) => {
            tokio::fs::write(path, result.content.as_bytes()).await?;
            log::info!("Wrote {}", path.display());
            Ok(None)
        }
        None => Ok(Some(result.content)),
    }
}

fn write_or_return(content: String, output: Option<&Path>) -> Result<Option<String>> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            log::info!("Wrote {}", path.display());
            Ok(None)
        }
        None => Ok(Some(content)),
    }
}

/// Builder for parsing and converting documents.
///
/// # Example
///
/// ```
/// use marktypist::{Format, Marktypist};
///
/// let typst = Marktypist::new()
///     .join_lines()
///     .parse_str("one\ntwo", Format::Markdown)
///     .to_typst()?;
/// assert_eq!(typst, "one two");
/// # Ok::<(), marktypist::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Marktypist {
    options: ParseOptions,
}

impl Marktypist {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable GFM tables in Markdown sources.
    pub fn without_tables(mut self) -> Self {
        self.options = self.options.with_tables(false);
        self
    }

    /// Join soft line breaks with a space.
    pub fn join_lines(mut self) -> Self {
        self.options = self.options.with_line_breaks(false);
        self
    }

    /// Parse source text of the given format.
    pub fn parse_str(self, source: &str, format: Format) -> MarktypistResult {
        MarktypistResult {
            document: parse_with_options(source, format, &self.options),
        }
    }

    /// Parse a file, detecting its format from the extension.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<MarktypistResult> {
        let format = detect_format_from_path(&path)?;
        let source = detect::read_source(path)?;
        Ok(self.parse_str(&source, format))
    }
}

/// A parsed document ready for rendering.
#[derive(Debug, Clone)]
pub struct MarktypistResult {
    document: Document,
}

impl MarktypistResult {
    /// Borrow the parsed document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take the parsed document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Render to Typst.
    pub fn to_typst(&self) -> Result<String> {
        render::to_typst(&self.document)
    }

    /// Render to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document)
    }

    /// Render to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text with all markup dropped.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }
}
