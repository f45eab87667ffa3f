//! Typst rendering.

use crate::error::Result;
use crate::model::{Block, Document, Inline, ListItem, Table, TableCell};

use super::visitor::{indent_continuation, DocumentVisitor, BLOCK_SEPARATOR};

/// Convert a document to Typst markup.
pub fn to_typst(doc: &Document) -> Result<String> {
    TypstRenderer::new().render(doc)
}

/// Typst renderer. Every node kind has a Typst form.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypstRenderer;

impl TypstRenderer {
    /// Create a new Typst renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render a document to Typst markup.
    pub fn render(&self, doc: &Document) -> Result<String> {
        self.visit_document(doc)
    }

    fn render_list(&self, items: &[ListItem], marker: &str) -> Result<String> {
        let rendered = items
            .iter()
            .map(|item| -> Result<String> {
                Ok(format!("{} {}", marker, self.render_list_item(item)?))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join("\n"))
    }

    fn render_list_item(&self, item: &ListItem) -> Result<String> {
        let body = match item.sole_paragraph() {
            Some(content) => self.visit_inlines(content)?,
            None => self.visit_blocks(&item.content, "\n")?,
        };
        Ok(indent_continuation(&body, "  "))
    }

    fn render_table(&self, table: &Table) -> Result<String> {
        if table.is_empty() {
            return Ok(String::new());
        }
        let columns = table.column_count();

        let mut output = String::from("#table(\n");
        output.push_str(&format!(
            "  columns: ({}),\n",
            vec!["auto"; columns].join(", ")
        ));

        let header = table
            .header
            .cells
            .iter()
            .map(|cell| -> Result<String> {
                Ok(format!("[*{}*]", self.visit_inlines(&cell.content)?))
            })
            .collect::<Result<Vec<_>>>()?;
        output.push_str(&format!("  {},\n", header.join(", ")));

        for row in &table.rows {
            let mut cells = row
                .cells
                .iter()
                .map(|cell| self.render_body_cell(cell))
                .collect::<Result<Vec<_>>>()?;
            while cells.len() < columns {
                cells.push(quote(""));
            }
            output.push_str(&format!("  {},\n", cells.join(", ")));
        }

        output.push(')');
        Ok(output)
    }

    /// Plain-text cells become string literals, richer cells stay markup.
    fn render_body_cell(&self, cell: &TableCell) -> Result<String> {
        if cell.content.is_empty() {
            return Ok(quote(""));
        }
        match cell.as_plain_text() {
            Some(text) => Ok(quote(text)),
            None => self.visit_inlines(&cell.content),
        }
    }
}

impl DocumentVisitor for TypstRenderer {
    fn visit_block(&self, block: &Block) -> Result<String> {
        match block {
            Block::Heading { level, content } => Ok(format!(
                "{} {}",
                "=".repeat(*level),
                self.visit_inlines(content)?
            )),
            Block::Paragraph { content } => match content.as_slice() {
                [Inline::Image { src, alt }] => Ok(image(src, alt)),
                _ => self.visit_inlines(content),
            },
            Block::UnorderedList { items } => self.render_list(items, "-"),
            // Typst numbers `+` items itself; the start number is not carried.
            Block::OrderedList { items, .. } => self.render_list(items, "+"),
            Block::CodeBlock { language, content } => {
                Ok(format!("```{}\n{}\n```", language, content))
            }
            Block::BlockQuote { content } => Ok(format!(
                "#quote[{}]",
                self.visit_blocks(content, BLOCK_SEPARATOR)?
            )),
            Block::Table(table) => self.render_table(table),
        }
    }

    fn visit_inline(&self, node: &Inline) -> Result<String> {
        if let Some(inner) = node.bold_italic_content() {
            return Ok(format!("*_{}_*", self.visit_inlines(inner)?));
        }
        match node {
            Inline::Text { content } => Ok(content.clone()),
            Inline::Bold { content } => Ok(format!("*{}*", self.visit_inlines(content)?)),
            Inline::Italic { content } => Ok(format!("_{}_", self.visit_inlines(content)?)),
            Inline::Code { content } => Ok(format!("`{}`", content)),
            Inline::Link { url, content } => Ok(format!(
                "#link(\"{}\")[{}]",
                url,
                self.visit_inlines(content)?
            )),
            Inline::Image { src, alt } => Ok(image(src, alt)),
        }
    }
}

fn image(src: &str, alt: &str) -> String {
    format!("#image(\"{}\", alt: \"{}\")", src, alt.replace('"', "\\\""))
}

/// Typst string literal.
fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}
