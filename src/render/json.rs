//! JSON rendering of the document model.

use crate::error::Result;
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc)?,
        JsonFormat::Compact => serde_json::to_string(doc)?,
    };
    Ok(json)
}

/// Read a document back from its JSON form.
///
/// Fails with [`Error::Json`](crate::Error::Json) on malformed input or on
/// a node whose `type` tag is not part of the model.
pub fn from_json(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Block, Inline};

    fn sample() -> Document {
        Document::with_blocks(vec![
            Block::heading(1, vec![Inline::text("Title")]),
            Block::paragraph(vec![Inline::bold(vec![Inline::text("Hello")])]),
        ])
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"type\": \"heading\""));
        assert!(json.contains("\"level\": 1"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert!(json.contains("{\"type\":\"bold\",\"content\":[{\"type\":\"text\",\"content\":\"Hello\"}]}"));
    }

    #[test]
    fn test_from_json() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert_eq!(from_json(&json).unwrap(), sample());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(from_json("{"), Err(Error::Json(_))));

        let unknown = r#"{"content":[{"type":"divider"}]}"#;
        assert!(matches!(from_json(unknown), Err(Error::Json(_))));
    }
}
