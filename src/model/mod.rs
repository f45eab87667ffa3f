//! Universal document model (UDM).
//!
//! This module defines the intermediate tree that both conversion
//! directions route through. Builders in [`crate::parser`] produce it,
//! renderers in [`crate::render`] consume it. The model carries no
//! behavior beyond construction helpers and plain-text extraction.

mod block;
mod document;
mod inline;
mod table;

pub use block::{Block, ListItem};
pub use document::Document;
pub use inline::{plain_text, Inline};
pub use table::{Table, TableCell, TableRow};
