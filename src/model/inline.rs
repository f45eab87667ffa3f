//! Inline node types.

use serde::{Deserialize, Serialize};

/// A node occurring within running text.
///
/// Bold-italic has no variant of its own: it is one emphasis node wrapping
/// a single child of the other emphasis kind. Builders emit
/// `Italic[Bold[..]]` and both renderers recognize either nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// A plain text run
    Text {
        /// The text content
        content: String,
    },

    /// Strong emphasis
    Bold {
        /// Emphasized content
        content: Vec<Inline>,
    },

    /// Emphasis
    Italic {
        /// Emphasized content
        content: Vec<Inline>,
    },

    /// Inline code, kept verbatim
    Code {
        /// Code text
        content: String,
    },

    /// A hyperlink
    Link {
        /// Link target
        url: String,
        /// Link text
        content: Vec<Inline>,
    },

    /// An image; only valid directly inside a paragraph
    Image {
        /// Image source path or URL
        src: String,
        /// Alternative text
        alt: String,
    },
}

impl Inline {
    /// Create a plain text run.
    pub fn text(content: impl Into<String>) -> Self {
        Inline::Text {
            content: content.into(),
        }
    }

    /// Create a bold node.
    pub fn bold(content: Vec<Inline>) -> Self {
        Inline::Bold { content }
    }

    /// Create an italic node.
    pub fn italic(content: Vec<Inline>) -> Self {
        Inline::Italic { content }
    }

    /// Create a bold-italic node in its canonical `Italic[Bold[..]]` shape.
    pub fn bold_italic(content: Vec<Inline>) -> Self {
        Inline::italic(vec![Inline::bold(content)])
    }

    /// Create an inline code span.
    pub fn code(content: impl Into<String>) -> Self {
        Inline::Code {
            content: content.into(),
        }
    }

    /// Create a link.
    pub fn link(url: impl Into<String>, content: Vec<Inline>) -> Self {
        Inline::Link {
            url: url.into(),
            content,
        }
    }

    /// Create an image.
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Inline::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }

    /// Kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Inline::Text { .. } => "text",
            Inline::Bold { .. } => "bold",
            Inline::Italic { .. } => "italic",
            Inline::Code { .. } => "code",
            Inline::Link { .. } => "link",
            Inline::Image { .. } => "image",
        }
    }

    /// Text of a plain text run.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Inline::Text { content } => Some(content),
            _ => None,
        }
    }

    /// If this node is bold-italic (either nesting), the innermost content.
    pub fn bold_italic_content(&self) -> Option<&[Inline]> {
        match self {
            Inline::Italic { content } => match content.as_slice() {
                [Inline::Bold { content }] => Some(content),
                _ => None,
            },
            Inline::Bold { content } => match content.as_slice() {
                [Inline::Italic { content }] => Some(content),
                _ => None,
            },
            _ => None,
        }
    }

    /// Plain text of this node with all markup dropped.
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text { content } | Inline::Code { content } => content.clone(),
            Inline::Bold { content } | Inline::Italic { content } | Inline::Link { content, .. } => {
                plain_text(content)
            }
            Inline::Image { alt, .. } => alt.clone(),
        }
    }
}

/// Plain text of an inline sequence.
pub fn plain_text(content: &[Inline]) -> String {
    content.iter().map(Inline::plain_text).collect()
}
