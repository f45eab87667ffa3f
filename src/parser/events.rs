//! Structural event stream consumed by the Markdown builder.
//!
//! The stream is flat and ordered: containers appear as matching open and
//! close events, leaves as single events. Inline content of a leaf block
//! arrives as one [`MdEvent::Inline`] group whose children are themselves
//! inline events.

/// One event of the Markdown token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdEvent {
    /// Wrapper document opened by the tokenizer
    DocumentOpen,
    /// Wrapper document closed
    DocumentClose,

    /// Heading opened
    HeadingOpen {
        /// Heading level
        level: usize,
    },
    /// Heading closed
    HeadingClose,

    /// Paragraph opened
    ParagraphOpen,
    /// Paragraph closed
    ParagraphClose,

    /// Bullet list opened
    BulletListOpen,
    /// Bullet list closed
    BulletListClose,

    /// Ordered list opened
    OrderedListOpen {
        /// Number of the first item
        start: u64,
    },
    /// Ordered list closed
    OrderedListClose,

    /// List item opened
    ListItemOpen,
    /// List item closed
    ListItemClose,

    /// Block quote opened
    BlockquoteOpen,
    /// Block quote closed
    BlockquoteClose,

    /// Fenced code block
    Fence {
        /// Info string after the opening fence
        info: String,
        /// Literal body
        content: String,
    },

    /// Table opened
    TableOpen {
        /// Column alignments
        align: Vec<String>,
    },
    /// Table closed
    TableClose,
    /// Table header section opened
    TableHeaderOpen,
    /// Table header section closed
    TableHeaderClose,
    /// Table row opened
    TableRowOpen,
    /// Table row closed
    TableRowClose,
    /// Header cell opened
    TableHeaderCellOpen,
    /// Header cell closed
    TableHeaderCellClose,
    /// Data cell opened
    TableDataCellOpen,
    /// Data cell closed
    TableDataCellClose,

    /// Inline content of a leaf block
    Inline(Vec<MdEvent>),

    /// Plain text run
    Text(String),
    /// Strong emphasis opened
    BoldOpen,
    /// Strong emphasis closed
    BoldClose,
    /// Emphasis opened
    ItalicOpen,
    /// Emphasis closed
    ItalicClose,
    /// Inline code span
    InlineCode(String),
    /// Link opened
    LinkOpen {
        /// Link target
        href: String,
    },
    /// Link closed
    LinkClose,
    /// Image
    Image {
        /// Image source
        src: String,
        /// Alternative text
        alt: String,
    },

    /// Any event kind the builder does not model
    Other(String),
}

impl MdEvent {
    /// Kind name used in diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            MdEvent::DocumentOpen => "document_open",
            MdEvent::DocumentClose => "document_close",
            MdEvent::HeadingOpen { .. } => "heading_open",
            MdEvent::HeadingClose => "heading_close",
            MdEvent::ParagraphOpen => "paragraph_open",
            MdEvent::ParagraphClose => "paragraph_close",
            MdEvent::BulletListOpen => "bullet_list_open",
            MdEvent::BulletListClose => "bullet_list_close",
            MdEvent::OrderedListOpen { .. } => "ordered_list_open",
            MdEvent::OrderedListClose => "ordered_list_close",
            MdEvent::ListItemOpen => "list_item_open",
            MdEvent::ListItemClose => "list_item_close",
            MdEvent::BlockquoteOpen => "blockquote_open",
            MdEvent::BlockquoteClose => "blockquote_close",
            MdEvent::Fence { .. } => "fence",
            MdEvent::TableOpen { .. } => "table_open",
            MdEvent::TableClose => "table_close",
            MdEvent::TableHeaderOpen => "thead_open",
            MdEvent::TableHeaderClose => "thead_close",
            MdEvent::TableRowOpen => "tr_open",
            MdEvent::TableRowClose => "tr_close",
            MdEvent::TableHeaderCellOpen => "th_open",
            MdEvent::TableHeaderCellClose => "th_close",
            MdEvent::TableDataCellOpen => "td_open",
            MdEvent::TableDataCellClose => "td_close",
            MdEvent::Inline(_) => "inline",
            MdEvent::Text(_) => "text",
            MdEvent::BoldOpen => "strong_open",
            MdEvent::BoldClose => "strong_close",
            MdEvent::ItalicOpen => "em_open",
            MdEvent::ItalicClose => "em_close",
            MdEvent::InlineCode(_) => "code_inline",
            MdEvent::LinkOpen { .. } => "link_open",
            MdEvent::LinkClose => "link_close",
            MdEvent::Image { .. } => "image",
            MdEvent::Other(kind) => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(MdEvent::HeadingOpen { level: 2 }.kind_name(), "heading_open");
        assert_eq!(MdEvent::Other("hr".into()).kind_name(), "hr");
    }
}
