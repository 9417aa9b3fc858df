//! Stored document JSON boundary
//!
//! Documents travel to and from the template store as a JSON node tree.
//! This module is the only place the raw format is parsed or emitted; the
//! serializers in `vellum-core` work on the typed tree alone.

use vellum_core::Document;

use crate::Result;

/// Parse a stored document from its JSON source.
///
/// Unrecognized node and mark types parse into their catch-all variants and
/// survive a store cycle unchanged. Structurally broken input (not a JSON
/// object, wrong field types) is an error, never a panic.
pub fn parse_document(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a document back to its stored JSON form
pub fn to_json(doc: &Document) -> Result<String> {
    Ok(serde_json::to_string(doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_full_document_round_trips() {
        let stored = json!({
            "type": "doc",
            "content": [
                {"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Release notes"}]},
                {
                    "type": "paragraph",
                    "attrs": {"textAlign": "center"},
                    "content": [
                        {"type": "text", "text": "shipped", "marks": [{"type": "bold"}, {"type": "highlight", "attrs": {"color": "#aaffaa"}}]},
                        {"type": "hardBreak"},
                        {"type": "text", "text": "today", "marks": [{"type": "link", "attrs": {"href": "https://example.com", "target": "_blank"}}]}
                    ]
                },
                {"type": "bulletList", "content": [
                    {"type": "listItem", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "faster saves"}]}]}
                ]},
                {"type": "orderedList", "attrs": {"start": 4}, "content": [
                    {"type": "listItem", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "step"}]}]}
                ]},
                {"type": "blockquote", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "nice"}]}]},
                {"type": "codeBlock", "attrs": {"language": "rust"}, "content": [{"type": "text", "text": "fn main() {}"}]},
                {"type": "horizontalRule"},
                {"type": "image", "attrs": {"src": "https://cdn.example.com/a.png", "alt": "A", "width": 320}},
                {"type": "youtube", "attrs": {"src": "abc123", "controls": true}},
                {"type": "callout", "attrs": {"tone": "warning"}, "content": [{"type": "text", "text": "legacy block"}]}
            ]
        });

        let doc = parse_document(&stored.to_string()).unwrap();
        let back: Value = serde_json::from_str(&to_json(&doc).unwrap()).unwrap();
        assert_eq!(back, stored);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse_document("{not json").is_err());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(parse_document("[1, 2, 3]").is_err());
        assert!(parse_document(r#"{"type":"doc","content":{}}"#).is_err());
    }

    #[test]
    fn test_missing_content_parses_as_empty() {
        let doc = parse_document(r#"{"type":"doc"}"#).unwrap();
        assert!(doc.is_empty());
    }
}
