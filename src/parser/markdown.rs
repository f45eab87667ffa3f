//! Markdown builder.
//!
//! Folds the flat [`MdEvent`] stream into a [`Document`] with an explicit
//! stack of open containers. Opening events push a frame, closing events
//! pop the top frame, finish it into a node and attach that node to the
//! new top. Leaf events attach directly to the top frame.

use crate::model::{Block, Document, Inline, ListItem, Table, TableCell, TableRow};

use super::{tokenize, MdEvent, ParseOptions};

/// Builds documents from Markdown source.
#[derive(Debug, Clone, Default)]
pub struct MarkdownParser {
    options: ParseOptions,
}

impl MarkdownParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse Markdown source into a document.
    pub fn parse(&self, source: &str) -> Document {
        let events = tokenize(source, &self.options);
        log::debug!("Tokenized Markdown into {} events", events.len());
        build_document(events)
    }
}

/// Build a document from a Markdown event stream.
///
/// Unknown events are skipped. Unbalanced streams are tolerated: a close
/// event pops whatever frame is on top, and frames still open at the end
/// are closed in order.
pub fn build_document(events: impl IntoIterator<Item = MdEvent>) -> Document {
    let mut builder = DocumentBuilder::new();
    for event in events {
        builder.handle(event);
    }
    builder.finish()
}

/// An open container on the builder stack.
enum Frame {
    Document(Vec<Block>),
    BlockQuote(Vec<Block>),
    ListItem(Vec<Block>),
    List {
        start: Option<u64>,
        items: Vec<ListItem>,
    },
    Paragraph(Vec<Inline>),
    Heading {
        level: usize,
        content: Vec<Inline>,
    },
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    Link {
        url: String,
        content: Vec<Inline>,
    },
    Cell(Vec<Inline>),
    Row(Vec<TableCell>),
    Table {
        header: TableRow,
        rows: Vec<TableRow>,
        align: Vec<String>,
    },
}

/// The child collection a frame exposes.
enum Slot<'a> {
    Blocks(&'a mut Vec<Block>),
    Inlines(&'a mut Vec<Inline>),
    Items(&'a mut Vec<ListItem>),
    Cells(&'a mut Vec<TableCell>),
    Rows {
        header: &'a mut TableRow,
        rows: &'a mut Vec<TableRow>,
    },
}

/// A finished node waiting to be attached.
enum Node {
    Document(Vec<Block>),
    Block(Block),
    Inline(Inline),
    Item(ListItem),
    Cell(TableCell),
    Row(TableRow),
}

impl Frame {
    fn slot(&mut self) -> Slot<'_> {
        match self {
            Frame::Document(blocks) | Frame::BlockQuote(blocks) | Frame::ListItem(blocks) => {
                Slot::Blocks(blocks)
            }
            Frame::List { items, .. } => Slot::Items(items),
            Frame::Paragraph(content)
            | Frame::Heading { content, .. }
            | Frame::Bold(content)
            | Frame::Italic(content)
            | Frame::Link { content, .. }
            | Frame::Cell(content) => Slot::Inlines(content),
            Frame::Row(cells) => Slot::Cells(cells),
            Frame::Table { header, rows, .. } => Slot::Rows { header, rows },
        }
    }

    fn finish(self) -> Node {
        match self {
            Frame::Document(blocks) => Node::Document(blocks),
            Frame::BlockQuote(content) => Node::Block(Block::block_quote(content)),
            Frame::ListItem(content) => Node::Item(ListItem::new(content)),
            Frame::List {
                start: Some(start),
                items,
            } => Node::Block(Block::ordered_list(start, items)),
            Frame::List { start: None, items } => Node::Block(Block::unordered_list(items)),
            Frame::Paragraph(content) => Node::Block(Block::paragraph(content)),
            Frame::Heading { level, content } => Node::Block(Block::heading(level, content)),
            Frame::Bold(content) => Node::Inline(Inline::bold(content)),
            Frame::Italic(content) => Node::Inline(Inline::italic(content)),
            Frame::Link { url, content } => Node::Inline(Inline::link(url, content)),
            Frame::Cell(content) => Node::Cell(TableCell::new(content)),
            Frame::Row(cells) => Node::Row(TableRow { cells }),
            Frame::Table {
                header,
                rows,
                align,
            } => Node::Block(Block::Table(Table {
                header,
                rows,
                align,
            })),
        }
    }
}

impl Node {
    fn kind_name(&self) -> &'static str {
        match self {
            Node::Document(_) => "document",
            Node::Block(block) => block.kind_name(),
            Node::Inline(inline) => inline.kind_name(),
            Node::Item(_) => "list_item",
            Node::Cell(_) => "table_cell",
            Node::Row(_) => "table_row",
        }
    }
}

struct DocumentBuilder {
    stack: Vec<Frame>,
    in_header: bool,
}

impl DocumentBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame::Document(Vec::new())],
            in_header: false,
        }
    }

    fn handle(&mut self, event: MdEvent) {
        match event {
            MdEvent::DocumentOpen => self.open(Frame::Document(Vec::new())),
            MdEvent::HeadingOpen { level } => self.open(Frame::Heading {
                level,
                content: Vec::new(),
            }),
            MdEvent::ParagraphOpen => self.open(Frame::Paragraph(Vec::new())),
            MdEvent::BulletListOpen => self.open(Frame::List {
                start: None,
                items: Vec::new(),
            }),
            MdEvent::OrderedListOpen { start } => self.open(Frame::List {
                start: Some(start),
                items: Vec::new(),
            }),
            MdEvent::ListItemOpen => self.open(Frame::ListItem(Vec::new())),
            MdEvent::BlockquoteOpen => self.open(Frame::BlockQuote(Vec::new())),
            MdEvent::TableOpen { align } => self.open(Frame::Table {
                header: TableRow::new(),
                rows: Vec::new(),
                align,
            }),
            MdEvent::TableRowOpen => self.open(Frame::Row(Vec::new())),
            MdEvent::TableHeaderCellOpen | MdEvent::TableDataCellOpen => {
                self.open(Frame::Cell(Vec::new()))
            }
            MdEvent::BoldOpen => self.open(Frame::Bold(Vec::new())),
            MdEvent::ItalicOpen => self.open(Frame::Italic(Vec::new())),
            MdEvent::LinkOpen { href } => self.open(Frame::Link {
                url: href,
                content: Vec::new(),
            }),

            close @ (MdEvent::DocumentClose
            | MdEvent::HeadingClose
            | MdEvent::ParagraphClose
            | MdEvent::BulletListClose
            | MdEvent::OrderedListClose
            | MdEvent::ListItemClose
            | MdEvent::BlockquoteClose
            | MdEvent::TableClose
            | MdEvent::TableRowClose
            | MdEvent::TableHeaderCellClose
            | MdEvent::TableDataCellClose
            | MdEvent::BoldClose
            | MdEvent::ItalicClose
            | MdEvent::LinkClose) => self.close(close.kind_name()),

            MdEvent::TableHeaderOpen => self.in_header = true,
            MdEvent::TableHeaderClose => self.in_header = false,

            MdEvent::Inline(children) => {
                for child in children {
                    self.handle(child);
                }
            }
            MdEvent::Text(content) => self.attach(Node::Inline(Inline::text(content))),
            MdEvent::InlineCode(content) => self.attach(Node::Inline(Inline::code(content))),
            MdEvent::Image { src, alt } => self.attach(Node::Inline(Inline::image(src, alt))),
            MdEvent::Fence { info, content } => {
                let language = info.split_whitespace().next().unwrap_or_default();
                self.attach(Node::Block(Block::code_block(language, content.trim())));
            }

            other @ MdEvent::Other(_) => {
                log::debug!("Skipping unsupported Markdown event: {}", other.kind_name())
            }
        }
    }

    fn open(&mut self, frame: Frame) {
        self.stack.push(frame);
    }

    fn close(&mut self, kind: &str) {
        // The root frame is never popped.
        if self.stack.len() < 2 {
            log::debug!("Ignoring {} with no open container", kind);
            return;
        }
        if let Some(frame) = self.stack.pop() {
            let node = frame.finish();
            self.attach(node);
        }
    }

    fn attach(&mut self, node: Node) {
        let in_header = self.in_header;
        let Some(parent) = self.stack.last_mut() else {
            return;
        };

        match (parent.slot(), node) {
            (Slot::Blocks(blocks), Node::Block(block)) => blocks.push(block),
            (Slot::Blocks(blocks), Node::Document(inner)) => blocks.extend(inner),
            (Slot::Inlines(content), Node::Inline(inline)) => content.push(inline),
            (Slot::Items(items), Node::Item(item)) => items.push(item),
            (Slot::Cells(cells), Node::Cell(cell)) => cells.push(cell),
            (Slot::Rows { header, .. }, Node::Row(row)) if in_header => *header = row,
            (Slot::Rows { rows, .. }, Node::Row(row)) => rows.push(row),
            (_, node) => log::debug!("Dropping {} with no matching parent", node.kind_name()),
        }
    }

    fn finish(mut self) -> Document {
        while self.stack.len() > 1 {
            self.close("end of stream");
        }
        match self.stack.pop() {
            Some(Frame::Document(blocks)) => Document::with_blocks(blocks),
            _ => Document::new(),
        }
    }
}
