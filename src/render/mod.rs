//! Rendering module for converting documents to output formats.

mod json;
mod markdown;
mod typst;
pub mod visitor;

pub use json::{from_json, to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use typst::{to_typst, TypstRenderer};
pub use visitor::DocumentVisitor;
