//! Source parsing.
//!
//! Markdown goes through a tokenizer that produces a flat [`MdEvent`]
//! stream, which the builder folds into a [`Document`](crate::Document).
//! Typst is read line by line without a separate tokenizer.

mod events;
mod markdown;
mod options;
mod tokenizer;
mod typst;

pub use events::MdEvent;
pub use markdown::{build_document, MarkdownParser};
pub use options::ParseOptions;
pub use tokenizer::tokenize;
pub use typst::{parse_inline as parse_typst_inline, TypstParser};
