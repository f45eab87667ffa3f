//! Typst builder.
//!
//! Reads the reduced Typst grammar line by line: `=` headings, `-` list
//! items, and paragraphs made of consecutive text lines. Inline markup is
//! limited to `*bold*`, `_italic_` and `*_bold italic_*`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Block, Document, Inline, ListItem};

use super::ParseOptions;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(=+)\s*(.*)$").expect("heading pattern is valid"));

static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-\s*(.*)$").expect("list item pattern is valid"));

// Bold italic must come first so `*_x_*` is not read as bold.
static EMPHASIS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*_(.+?)_\*|\*(.+?)\*|_(.+?)_").expect("emphasis pattern is valid")
});

/// Builds documents from Typst source.
#[derive(Debug, Clone, Default)]
pub struct TypstParser {
    options: ParseOptions,
}

/// Classification of one trimmed source line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Heading { level: usize, text: &'a str },
    ListItem(&'a str),
    Text(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            return Line::Blank;
        }
        if let Some(caps) = HEADING.captures(line) {
            let level = caps.get(1).map_or(1, |m| m.as_str().len());
            let text = caps.get(2).map_or("", |m| m.as_str());
            return Line::Heading { level, text };
        }
        if let Some(caps) = LIST_ITEM.captures(line) {
            return Line::ListItem(caps.get(1).map_or("", |m| m.as_str()));
        }
        Line::Text(line)
    }
}

/// Where the previous line left the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    /// Index of the open paragraph
    InParagraph(usize),
    /// Index of the open list
    InList(usize),
}

impl TypstParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse Typst source into a document.
    pub fn parse(&self, source: &str) -> Document {
        let mut blocks = Vec::new();
        let mut state = State::Idle;

        for (number, raw) in source.lines().enumerate() {
            let line = Line::classify(raw.trim());
            log::trace!("Typst line {}: {:?}", number + 1, line);
            state = self.step(line, state, &mut blocks);
        }

        Document::with_blocks(blocks)
    }

    fn step(&self, line: Line<'_>, state: State, blocks: &mut Vec<Block>) -> State {
        match line {
            Line::Blank => State::Idle,
            Line::Heading { level, text } => {
                blocks.push(Block::heading(level, parse_inline(text)));
                State::Idle
            }
            Line::ListItem(text) => {
                let item = ListItem::paragraph(parse_inline(text));
                if let State::InList(index) = state {
                    if let Some(Block::UnorderedList { items }) = blocks.get_mut(index) {
                        items.push(item);
                        return state;
                    }
                }
                blocks.push(Block::unordered_list(vec![item]));
                State::InList(blocks.len() - 1)
            }
            Line::Text(text) => {
                let inlines = parse_inline(text);
                if let State::InParagraph(index) = state {
                    if let Some(Block::Paragraph { content }) = blocks.get_mut(index) {
                        // Separator comes from ParseOptions: "\n" by default, " " when joining.
                        append_inline(content, Inline::text(self.options.line_break()));
                        for node in inlines {
                            append_inline(content, node);
                        }
                        return state;
                    }
                }
                blocks.push(Block::paragraph(inlines));
                State::InParagraph(blocks.len() - 1)
            }
        }
    }
}

/// Parse one line of Typst inline markup.
///
/// Emphasis spans are matched left to right without overlap and their
/// inner text is parsed again. A `*` or `_` with no partner stays text.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut result = Vec::new();
    let mut last = 0;

    for caps in EMPHASIS.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            result.push(Inline::text(&text[last..whole.start()]));
        }

        let node = if let Some(inner) = caps.get(1) {
            Inline::bold_italic(parse_inline(inner.as_str()))
        } else if let Some(inner) = caps.get(2) {
            Inline::bold(parse_inline(inner.as_str()))
        } else if let Some(inner) = caps.get(3) {
            Inline::italic(parse_inline(inner.as_str()))
        } else {
            Inline::text(whole.as_str())
        };
        result.push(node);
        last = whole.end();
    }

    if last < text.len() {
        result.push(Inline::text(&text[last..]));
    }
    result
}

/// Push a node, merging adjacent text runs.
fn append_inline(content: &mut Vec<Inline>, node: Inline) {
    if let (Some(Inline::Text { content: last }), Inline::Text { content: next }) =
        (content.last_mut(), &node)
    {
        last.push_str(next);
        return;
    }
    content.push(node);
}
