//! Block-level node types.

use super::{plain_text, Inline, Table};
use serde::{Deserialize, Serialize};

/// A node occupying document-level vertical position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of inline content
    Paragraph {
        /// Inline content
        content: Vec<Inline>,
    },

    /// A heading
    Heading {
        /// Heading level (1 or more)
        level: usize,
        /// Inline content
        content: Vec<Inline>,
    },

    /// A code block, kept verbatim
    CodeBlock {
        /// Language tag (may be empty)
        language: String,
        /// Code text
        content: String,
    },

    /// A block quote; may nest further block quotes
    BlockQuote {
        /// Quoted blocks
        content: Vec<Block>,
    },

    /// A bullet list
    UnorderedList {
        /// List items
        items: Vec<ListItem>,
    },

    /// A numbered list
    OrderedList {
        /// Number of the first item
        start: u64,
        /// List items
        items: Vec<ListItem>,
    },

    /// A table
    Table(Table),
}

impl Block {
    /// Create a paragraph.
    pub fn paragraph(content: Vec<Inline>) -> Self {
        Block::Paragraph { content }
    }

    /// Create a paragraph holding a single text run.
    pub fn text(text: impl Into<String>) -> Self {
        Block::paragraph(vec![Inline::text(text)])
    }

    /// Create a heading.
    pub fn heading(level: usize, content: Vec<Inline>) -> Self {
        Block::Heading { level, content }
    }

    /// Create a code block.
    pub fn code_block(language: impl Into<String>, content: impl Into<String>) -> Self {
        Block::CodeBlock {
            language: language.into(),
            content: content.into(),
        }
    }

    /// Create a block quote.
    pub fn block_quote(content: Vec<Block>) -> Self {
        Block::BlockQuote { content }
    }

    /// Create a bullet list.
    pub fn unordered_list(items: Vec<ListItem>) -> Self {
        Block::UnorderedList { items }
    }

    /// Create a numbered list.
    pub fn ordered_list(start: u64, items: Vec<ListItem>) -> Self {
        Block::OrderedList { start, items }
    }

    /// Kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading { .. } => "heading",
            Block::CodeBlock { .. } => "code_block",
            Block::BlockQuote { .. } => "block_quote",
            Block::UnorderedList { .. } => "unordered_list",
            Block::OrderedList { .. } => "ordered_list",
            Block::Table(_) => "table",
        }
    }

    /// Plain text of this block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph { content } | Block::Heading { content, .. } => plain_text(content),
            Block::CodeBlock { content, .. } => content.clone(),
            Block::BlockQuote { content } => blocks_plain_text(content),
            Block::UnorderedList { items } | Block::OrderedList { items, .. } => items
                .iter()
                .map(ListItem::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Table(table) => table.plain_text(),
        }
    }
}

/// One item of a list. Its content is block-level, usually one paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Blocks in the item
    pub content: Vec<Block>,
}

impl ListItem {
    /// Create a list item from blocks.
    pub fn new(content: Vec<Block>) -> Self {
        Self { content }
    }

    /// Create a list item holding one paragraph.
    pub fn paragraph(content: Vec<Inline>) -> Self {
        Self::new(vec![Block::paragraph(content)])
    }

    /// The inline content when the item is exactly one paragraph.
    pub fn sole_paragraph(&self) -> Option<&[Inline]> {
        match self.content.as_slice() {
            [Block::Paragraph { content }] => Some(content),
            _ => None,
        }
    }

    /// Plain text of the item.
    pub fn plain_text(&self) -> String {
        blocks_plain_text(&self.content)
    }
}

pub(crate) fn blocks_plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::plain_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}
