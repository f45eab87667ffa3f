//! Visitor trait shared by the text renderers.
//!
//! A renderer supplies one visit method per node family and gets document
//! assembly for free: block separation, sequence joining and the final
//! trim. Visit methods return a `Result` so a target language can refuse a
//! node kind it has no syntax for.
//!
//! # Example
//!
//! ```
//! use marktypist::render::visitor::DocumentVisitor;
//! use marktypist::model::{Block, Document, Inline};
//! use marktypist::Result;
//!
//! struct PlainVisitor;
//!
//! impl DocumentVisitor for PlainVisitor {
//!     fn visit_block(&self, block: &Block) -> Result<String> {
//!         Ok(block.plain_text())
//!     }
//!
//!     fn visit_inline(&self, node: &Inline) -> Result<String> {
//!         Ok(node.plain_text())
//!     }
//! }
//!
//! let doc = Document::with_blocks(vec![Block::text("a"), Block::text("b")]);
//! assert_eq!(PlainVisitor.visit_document(&doc).unwrap(), "a\n\nb");
//! ```

use crate::error::Result;
use crate::model::{Block, Document, Inline};

/// Separator placed between top-level blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Renders model nodes into target-language text.
pub trait DocumentVisitor {
    /// Render one block.
    fn visit_block(&self, block: &Block) -> Result<String>;

    /// Render one inline node.
    fn visit_inline(&self, node: &Inline) -> Result<String>;

    /// Render an inline sequence by plain concatenation.
    fn visit_inlines(&self, content: &[Inline]) -> Result<String> {
        content.iter().map(|node| self.visit_inline(node)).collect()
    }

    /// Render a block sequence joined by `separator`.
    fn visit_blocks(&self, content: &[Block], separator: &str) -> Result<String> {
        let rendered = content
            .iter()
            .map(|block| self.visit_block(block))
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join(separator))
    }

    /// Render a whole document.
    ///
    /// A single block is rendered on its own; otherwise blocks are joined
    /// with a blank line. Leading and trailing whitespace is trimmed.
    fn visit_document(&self, doc: &Document) -> Result<String> {
        let output = match doc.content.as_slice() {
            [single] => self.visit_block(single)?,
            blocks => self.visit_blocks(blocks, BLOCK_SEPARATOR)?,
        };
        Ok(output.trim().to_string())
    }
}

/// Indent every line after the first.
pub(crate) fn indent_continuation(text: &str, indent: &str) -> String {
    text.replace('\n', &format!("\n{}", indent))
}
