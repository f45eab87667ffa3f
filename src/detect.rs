//! Source format detection and decoding.

use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::path::Path;

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Markup languages the converter reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Markdown (`.md`)
    Markdown,
    /// Typst (`.typ`)
    Typst,
}

impl Format {
    /// Every supported format.
    pub const ALL: [Format; 2] = [Format::Markdown, Format::Typst];

    /// Map a file extension (without the dot, any case) to a format.
    ///
    /// # Example
    /// ```
    /// use marktypist::detect::Format;
    ///
    /// assert_eq!(Format::from_extension("MD").unwrap(), Format::Markdown);
    /// assert!(Format::from_extension("docx").is_err());
    /// ```
    pub fn from_extension(ext: &str) -> Result<Self> {
        let ext_lower = ext.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extension() == ext_lower)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Markdown => "md",
            Format::Typst => "typ",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Format::Markdown => "Markdown",
            Format::Typst => "Typst",
        }
    }

    /// The format a source of this format converts into.
    pub fn counterpart(self) -> Self {
        match self {
            Format::Markdown => Format::Typst,
            Format::Typst => Format::Markdown,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detect the source format from a file path's extension.
///
/// A path without an extension is reported as an unsupported empty
/// extension.
///
/// # Example
/// ```
/// use marktypist::detect::{detect_format_from_path, Format};
///
/// assert_eq!(detect_format_from_path("notes.typ").unwrap(), Format::Typst);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<Format> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    Format::from_extension(ext)
}

/// Decode source bytes as UTF-8, dropping a leading byte order mark.
pub fn decode_source(bytes: &[u8]) -> Result<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8(bytes.to_vec()).map_err(|e| Error::Encoding(e.to_string()))
}

/// Read and decode a source file.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path)?;
    decode_source(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("md").unwrap(), Format::Markdown);
        assert_eq!(Format::from_extension("Typ").unwrap(), Format::Typst);
        assert!(matches!(
            Format::from_extension("markdown"),
            Err(Error::UnsupportedFormat(ext)) if ext == "markdown"
        ));
    }

    #[test]
    fn test_detect_from_path() {
        assert_eq!(
            detect_format_from_path("dir/a.b.md").unwrap(),
            Format::Markdown
        );
        assert!(matches!(
            detect_format_from_path("README"),
            Err(Error::UnsupportedFormat(ext)) if ext.is_empty()
        ));
    }

    #[test]
    fn test_counterpart() {
        assert_eq!(Format::Markdown.counterpart(), Format::Typst);
        assert_eq!(Format::Typst.counterpart(), Format::Markdown);
    }

    #[test]
    fn test_decode_strips_bom() {
        assert_eq!(decode_source(b"\xEF\xBB\xBF# Hi").unwrap(), "# Hi");
        assert_eq!(decode_source("plain é".as_bytes()).unwrap(), "plain é");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert!(matches!(
            decode_source(&[0x66, 0xFF, 0xFE]),
            Err(Error::Encoding(_))
        ));
    }
}
