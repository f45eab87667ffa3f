//! Adapter from `pulldown-cmark` events to the [`MdEvent`] stream.
//!
//! pulldown-cmark reports inline content loose inside its block, leaves
//! tight list items without a paragraph, and has no row inside the table
//! head. The adapter reshapes all of that into the flat stream the
//! builder expects: one `Inline` group per leaf block, an implicit
//! paragraph around loose inline content, and an explicit header row.

use pulldown_cmark::{Alignment, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use super::{MdEvent, ParseOptions};

/// Tokenize Markdown source into the builder's event stream.
pub fn tokenize(source: &str, options: &ParseOptions) -> Vec<MdEvent> {
    let mut md_options = Options::empty();
    if options.tables {
        md_options.insert(Options::ENABLE_TABLES);
    }

    let mut adapter = EventAdapter::new(options);
    for event in Parser::new_ext(source, md_options) {
        adapter.feed(event);
    }
    adapter.finish()
}

struct PendingCode {
    info: String,
    content: String,
}

struct PendingImage {
    src: String,
    alt: String,
    depth: usize,
}

struct EventAdapter<'o> {
    options: &'o ParseOptions,
    out: Vec<MdEvent>,
    inline: Option<Vec<MdEvent>>,
    implicit_paragraph: bool,
    in_table_head: bool,
    code: Option<PendingCode>,
    image: Option<PendingImage>,
}

impl<'o> EventAdapter<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            out: Vec::new(),
            inline: None,
            implicit_paragraph: false,
            in_table_head: false,
            code: None,
            image: None,
        }
    }

    fn feed(&mut self, event: Event<'_>) {
        if self.code.is_some() {
            self.feed_code(event);
            return;
        }
        if self.image.is_some() {
            self.feed_image(event);
            return;
        }

        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.push_inline(MdEvent::Text(text.into_string())),
            Event::Code(code) => self.push_inline(MdEvent::InlineCode(code.into_string())),
            Event::SoftBreak | Event::HardBreak => {
                let separator = self.options.line_break();
                self.push_inline(MdEvent::Text(separator.to_string()));
            }
            other => self.push_other(event_kind(&other)),
        }
    }

    fn feed_code(&mut self, event: Event<'_>) {
        let finished = match (event, self.code.as_mut()) {
            (Event::Text(text), Some(code)) => {
                code.content.push_str(&text);
                false
            }
            (Event::End(TagEnd::CodeBlock), _) => true,
            _ => false,
        };
        if finished {
            if let Some(code) = self.code.take() {
                self.out.push(MdEvent::Fence {
                    info: code.info,
                    content: code.content,
                });
            }
        }
    }

    fn feed_image(&mut self, event: Event<'_>) {
        let Some(image) = self.image.as_mut() else {
            return;
        };
        let finished = match event {
            Event::Start(Tag::Image { .. }) => {
                image.depth += 1;
                false
            }
            Event::End(TagEnd::Image) if image.depth > 0 => {
                image.depth -= 1;
                false
            }
            Event::End(TagEnd::Image) => true,
            Event::Text(text) | Event::Code(text) => {
                image.alt.push_str(&text);
                false
            }
            Event::SoftBreak | Event::HardBreak => {
                image.alt.push(' ');
                false
            }
            _ => false,
        };
        if finished {
            if let Some(image) = self.image.take() {
                self.push_inline(MdEvent::Image {
                    src: image.src,
                    alt: image.alt,
                });
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.open_leaf(MdEvent::ParagraphOpen),
            Tag::Heading { level, .. } => self.open_leaf(MdEvent::HeadingOpen {
                level: heading_level(level),
            }),
            Tag::BlockQuote { .. } => self.open_block(MdEvent::BlockquoteOpen),
            Tag::List(Some(start)) => self.open_block(MdEvent::OrderedListOpen { start }),
            Tag::List(None) => self.open_block(MdEvent::BulletListOpen),
            Tag::Item => self.open_block(MdEvent::ListItemOpen),
            Tag::CodeBlock(kind) => {
                self.flush_inline();
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info.into_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code = Some(PendingCode {
                    info,
                    content: String::new(),
                });
            }
            Tag::Table(alignments) => self.open_block(MdEvent::TableOpen {
                align: alignments.iter().map(alignment_name).collect(),
            }),
            Tag::TableHead => {
                self.flush_inline();
                self.in_table_head = true;
                self.out.push(MdEvent::TableHeaderOpen);
                self.out.push(MdEvent::TableRowOpen);
            }
            Tag::TableRow => self.open_block(MdEvent::TableRowOpen),
            Tag::TableCell => {
                let event = if self.in_table_head {
                    MdEvent::TableHeaderCellOpen
                } else {
                    MdEvent::TableDataCellOpen
                };
                self.open_leaf(event);
            }
            Tag::Emphasis => self.push_inline(MdEvent::ItalicOpen),
            Tag::Strong => self.push_inline(MdEvent::BoldOpen),
            Tag::Link { dest_url, .. } => self.push_inline(MdEvent::LinkOpen {
                href: dest_url.into_string(),
            }),
            Tag::Image { dest_url, .. } => {
                self.image = Some(PendingImage {
                    src: dest_url.into_string(),
                    alt: String::new(),
                    depth: 0,
                });
            }
            other => self.push_other(format!("{:?}", other)),
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.close_leaf(MdEvent::ParagraphClose),
            TagEnd::Heading { .. } => self.close_leaf(MdEvent::HeadingClose),
            TagEnd::BlockQuote { .. } => self.close_block(MdEvent::BlockquoteClose),
            TagEnd::List(true) => self.close_block(MdEvent::OrderedListClose),
            TagEnd::List(false) => self.close_block(MdEvent::BulletListClose),
            TagEnd::Item => self.close_block(MdEvent::ListItemClose),
            TagEnd::Table => self.close_block(MdEvent::TableClose),
            TagEnd::TableHead => {
                self.flush_inline();
                self.in_table_head = false;
                self.out.push(MdEvent::TableRowClose);
                self.out.push(MdEvent::TableHeaderClose);
            }
            TagEnd::TableRow => self.close_block(MdEvent::TableRowClose),
            TagEnd::TableCell => {
                let event = if self.in_table_head {
                    MdEvent::TableHeaderCellClose
                } else {
                    MdEvent::TableDataCellClose
                };
                self.close_leaf(event);
            }
            TagEnd::Emphasis => self.push_inline(MdEvent::ItalicClose),
            TagEnd::Strong => self.push_inline(MdEvent::BoldClose),
            TagEnd::Link => self.push_inline(MdEvent::LinkClose),
            // Unmodeled containers were reported at their start.
            _ => {}
        }
    }

    fn open_block(&mut self, event: MdEvent) {
        self.flush_inline();
        self.out.push(event);
    }

    fn close_block(&mut self, event: MdEvent) {
        self.flush_inline();
        self.out.push(event);
    }

    fn open_leaf(&mut self, event: MdEvent) {
        self.flush_inline();
        self.out.push(event);
        self.inline = Some(Vec::new());
    }

    fn close_leaf(&mut self, event: MdEvent) {
        let children = self.inline.take().unwrap_or_default();
        self.out.push(MdEvent::Inline(children));
        self.out.push(event);
    }

    /// Emit the pending inline group, closing an implicit paragraph.
    fn flush_inline(&mut self) {
        if let Some(children) = self.inline.take() {
            self.out.push(MdEvent::Inline(children));
        }
        if self.implicit_paragraph {
            self.out.push(MdEvent::ParagraphClose);
            self.implicit_paragraph = false;
        }
    }

    fn push_inline(&mut self, event: MdEvent) {
        if self.inline.is_none() {
            // Tight list items carry inline content without a paragraph.
            self.out.push(MdEvent::ParagraphOpen);
            self.implicit_paragraph = true;
        }
        let buffer = self.inline.get_or_insert_with(Vec::new);

        if let MdEvent::Text(text) = &event {
            if let Some(MdEvent::Text(last)) = buffer.last_mut() {
                last.push_str(text);
                return;
            }
        }
        buffer.push(event);
    }

    fn push_other(&mut self, kind: impl Into<String>) {
        let event = MdEvent::Other(kind.into());
        match self.inline.as_mut() {
            Some(buffer) => buffer.push(event),
            None => self.out.push(event),
        }
    }

    fn finish(mut self) -> Vec<MdEvent> {
        self.flush_inline();
        self.out
    }
}

fn heading_level(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn alignment_name(alignment: &Alignment) -> String {
    match alignment {
        Alignment::None => "",
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
    .to_string()
}

fn event_kind(event: &Event<'_>) -> &'static str {
    match event {
        Event::Html(_) => "html_block",
        Event::InlineHtml(_) => "html_inline",
        Event::Rule => "hr",
        Event::FootnoteReference(_) => "footnote_ref",
        Event::TaskListMarker(_) => "task_list_marker",
        _ => "unknown",
    }
}
