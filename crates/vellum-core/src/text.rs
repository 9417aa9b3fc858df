//! Plain text extraction for search indexing
//!
//! Flattens a document to the text stored in the search index. Formatting
//! carries no weight here: marks are ignored and structure collapses to
//! space-joined runs. The walk is kept independent of the HTML renderer
//! because the two join differently (structural nesting there, flat spaces
//! here); the only shared piece is the child accessor.

use crate::doc::{Document, Node};

/// Extract the searchable plain text of a document.
///
/// Text nodes contribute their literal text, every other node contributes
/// its children's text joined with single spaces, and the result is trimmed
/// of leading and trailing whitespace. Void leaves contribute the empty
/// string, so neighbors of an embed end up two spaces apart. The join is
/// lossy on purpose; the output feeds search, not display.
pub fn extract_text(doc: &Document) -> String {
    let joined = doc
        .content
        .iter()
        .map(node_text)
        .collect::<Vec<_>>()
        .join(" ");
    joined.trim().to_string()
}

fn node_text(node: &Node) -> String {
    match node {
        Node::Text { text, .. } => text.clone(),
        node => node
            .children()
            .iter()
            .map(node_text)
            .collect::<Vec<_>>()
            .join(" "),
    }
}
