//! Document-level types.

use super::block::blocks_plain_text;
use super::Block;
use serde::{Deserialize, Serialize};

/// Root of the universal document model.
///
/// Every node owns its children outright, and child order is reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level blocks
    pub content: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from blocks.
    pub fn with_blocks(content: Vec<Block>) -> Self {
        Self { content }
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.content.push(block);
    }

    /// Get the number of top-level blocks.
    pub fn block_count(&self) -> usize {
        self.content.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        blocks_plain_text(&self.content)
    }
}
