//! Parsing options and configuration.

/// Options shared by the Markdown and Typst builders.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Recognize GFM tables in Markdown sources
    pub tables: bool,

    /// Keep soft line breaks inside a paragraph as newlines.
    /// When disabled they collapse to a single space.
    pub preserve_line_breaks: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable GFM tables.
    pub fn with_tables(mut self, tables: bool) -> Self {
        self.tables = tables;
        self
    }

    /// Enable or disable line break preservation.
    pub fn with_line_breaks(mut self, preserve: bool) -> Self {
        self.preserve_line_breaks = preserve;
        self
    }

    /// Text run standing in for a soft line break.
    pub(crate) fn line_break(&self) -> &'static str {
        if self.preserve_line_breaks {
            "\n"
        } else {
            " "
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tables: true,
            preserve_line_breaks: true,
        }
    }
}
