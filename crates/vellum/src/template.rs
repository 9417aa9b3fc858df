//! Template body rendering pipeline
//!
//! On every editor change the document tree is re-rendered into the two
//! derived representations stored alongside it. The pipeline never touches
//! the store itself; it produces the record that a create or update call
//! persists as a new template version.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vellum_core::{extract_text, render_html, Document};

use crate::Result;

/// A fully rendered template body, ready to persist.
///
/// `content` is the editable source of truth; `html` and `plain_text` are
/// derived from it and regenerated on every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedTemplate {
    /// The document tree as edited
    pub content: Document,

    /// Pre-rendered HTML for publishing and preview
    pub html: String,

    /// Flattened text for the search index
    pub plain_text: String,
}

/// Render both derived representations of a document
pub fn render_template(content: Document) -> RenderedTemplate {
    let html = render_html(&content);
    let plain_text = extract_text(&content);
    debug!(
        blocks = content.content.len(),
        html_bytes = html.len(),
        text_bytes = plain_text.len(),
        "rendered template body"
    );
    RenderedTemplate {
        content,
        html,
        plain_text,
    }
}

/// Parse a stored document and render it in one step
pub fn render_template_json(json: &str) -> Result<RenderedTemplate> {
    Ok(render_template(crate::json::parse_document(json)?))
}

/// Check whether a draft holds anything worth saving.
///
/// Autosave discards missing drafts and documents whose only content is
/// blank paragraphs instead of persisting them.
pub fn draft_is_empty(draft: Option<&Document>) -> bool {
    draft.map_or(true, Document::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_core::Node;

    #[test]
    fn test_record_matches_serializers() {
        let doc = Document::new(vec![
            Node::heading(2, vec![Node::text("Weekly digest")]),
            Node::paragraph(vec![Node::text("All quiet.")]),
        ]);

        let record = render_template(doc.clone());
        assert_eq!(record.content, doc);
        assert_eq!(record.html, render_html(&record.content));
        assert_eq!(record.plain_text, extract_text(&record.content));
    }

    #[test]
    fn test_render_from_stored_json() {
        let record = render_template_json(
            r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"Hi","marks":[{"type":"bold"}]}]}]}"#,
        )
        .unwrap();

        assert_eq!(record.html, "<p><strong>Hi</strong></p>");
        assert_eq!(record.plain_text, "Hi");
    }

    #[test]
    fn test_render_rejects_broken_json() {
        assert!(render_template_json("{").is_err());
    }

    #[test]
    fn test_missing_draft_is_empty() {
        assert!(draft_is_empty(None));
    }

    #[test]
    fn test_blank_draft_is_empty() {
        let doc = Document::new(vec![Node::paragraph(vec![])]);
        assert!(draft_is_empty(Some(&doc)));
    }

    #[test]
    fn test_written_draft_is_kept() {
        let doc = Document::new(vec![Node::paragraph(vec![Node::text("x")])]);
        assert!(!draft_is_empty(Some(&doc)));
    }
}
