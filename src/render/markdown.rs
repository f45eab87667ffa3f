//! Markdown rendering.
//!
//! Covers the subset the Typst builder can produce plus links, inline
//! code and code blocks. Images, block quotes, ordered lists and tables
//! are refused with [`Error::UnsupportedNodeKind`].

use crate::error::{Error, Result};
use crate::model::{Block, Document, Inline, ListItem};

use super::visitor::{indent_continuation, DocumentVisitor};

const RENDERER: &str = "markdown";

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document) -> Result<String> {
    MarkdownRenderer::new().render(doc)
}

/// Markdown renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        self.visit_document(doc)
    }

    fn render_list_item(&self, item: &ListItem) -> Result<String> {
        let body = self.visit_blocks(&item.content, "\n")?;
        Ok(format!("- {}", indent_continuation(&body, "    ")))
    }
}

impl DocumentVisitor for MarkdownRenderer {
    fn visit_block(&self, block: &Block) -> Result<String> {
        match block {
            Block::Heading { level, content } => Ok(format!(
                "{} {}",
                "#".repeat(*level),
                self.visit_inlines(content)?
            )),
            Block::Paragraph { content } => self.visit_inlines(content),
            Block::UnorderedList { items } => {
                let rendered = items
                    .iter()
                    .map(|item| self.render_list_item(item))
                    .collect::<Result<Vec<_>>>()?;
                Ok(rendered.join("\n"))
            }
            Block::CodeBlock { language, content } => {
                Ok(format!("```{}\n{}\n```", language, content))
            }
            Block::BlockQuote { .. } | Block::OrderedList { .. } | Block::Table(_) => {
                Err(Error::unsupported_node(RENDERER, block.kind_name()))
            }
        }
    }

    fn visit_inline(&self, node: &Inline) -> Result<String> {
        if let Some(inner) = node.bold_italic_content() {
            return Ok(format!("***{}***", self.visit_inlines(inner)?));
        }
        match node {
            Inline::Text { content } => Ok(content.clone()),
            Inline::Bold { content } => Ok(format!("**{}**", self.visit_inlines(content)?)),
            Inline::Italic { content } => Ok(format!("*{}*", self.visit_inlines(content)?)),
            Inline::Code { content } => Ok(format!("`{}`", content)),
            Inline::Link { url, content } => {
                Ok(format!("[{}]({})", self.visit_inlines(content)?, url))
            }
            Inline::Image { .. } => Err(Error::unsupported_node(RENDERER, node.kind_name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    fn render(blocks: Vec<Block>) -> Result<String> {
        to_markdown(&Document::with_blocks(blocks))
    }

    #[test]
    fn test_render_heading() {
        let doc = vec![Block::heading(3, vec![Inline::text("Deep")])];
        assert_eq!(render(doc).unwrap(), "### Deep");
    }

    #[test]
    fn test_render_emphasis() {
        let para = Block::paragraph(vec![
            Inline::bold(vec![Inline::text("b")]),
            Inline::text(" "),
            Inline::italic(vec![Inline::text("i")]),
            Inline::text(" "),
            Inline::bold_italic(vec![Inline::text("bi")]),
        ]);
        assert_eq!(render(vec![para]).unwrap(), "**b** *i* ***bi***");
    }

    #[test]
    fn test_render_link_and_code() {
        let para = Block::paragraph(vec![
            Inline::link("https://example.com", vec![Inline::text("site")]),
            Inline::text(" "),
            Inline::code("x"),
        ]);
        assert_eq!(
            render(vec![para]).unwrap(),
            "[site](https://example.com) `x`"
        );
    }

    #[test]
    fn test_render_list() {
        let list = Block::unordered_list(vec![
            ListItem::paragraph(vec![Inline::text("a")]),
            ListItem::new(vec![Block::text("b"), Block::code_block("", "c")]),
        ]);
        assert_eq!(render(vec![list]).unwrap(), "- a\n- b\n    ```\n    c\n    ```");
    }

    #[test]
    fn test_empty_list_item() {
        let list = Block::unordered_list(vec![ListItem::default()]);
        assert_eq!(render(vec![list]).unwrap(), "-");
    }

    #[test]
    fn test_unsupported_blocks() {
        for block in [
            Block::block_quote(vec![Block::text("q")]),
            Block::ordered_list(1, vec![]),
            Block::Table(Table::new()),
        ] {
            let kind = block.kind_name();
            match render(vec![block]) {
                Err(Error::UnsupportedNodeKind { renderer, kind: got }) => {
                    assert_eq!(renderer, "markdown");
                    assert_eq!(got, kind);
                }
                other => panic!("expected unsupported node error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_unsupported_image() {
        let para = Block::paragraph(vec![Inline::image("a.png", "a")]);
        assert!(matches!(
            render(vec![para]),
            Err(Error::UnsupportedNodeKind { kind: "image", .. })
        ));
    }
}
