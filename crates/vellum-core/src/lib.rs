//! vellum-core - rich text document model and serializers
//!
//! This crate provides the document tree behind the content editor and the
//! pure functions that derive its stored representations. The tree is the
//! source of truth; HTML and plain text are regenerated from it on every
//! change and never edited directly.
//!
//! # Architecture
//!
//! ```text
//! Stored JSON ──serde──▶ ┌───────────────┐ ──▶ HTML (publishing, preview)
//!                        │ Document tree │
//! Editor edits ─────────▶│               │ ──▶ plain text (search index)
//!                        └───────────────┘
//! ```
//!
//! Both derivations are total: any document produces a string, with missing
//! attributes defaulting and unrecognized node types flattening to their
//! children's output.
//!
//! # Example
//!
//! ```rust
//! use vellum_core::{render_html, Document, Node};
//!
//! let doc = Document::new(vec![
//!     Node::heading(1, vec![Node::text("Hello World")]),
//!     Node::paragraph(vec![Node::text("First post.")]),
//! ]);
//!
//! assert_eq!(render_html(&doc), "<h1>Hello World</h1><p>First post.</p>");
//! ```

mod doc;
mod html;
mod mark;
mod text;

pub use doc::{
    Align, BlockAttrs, CodeBlockAttrs, Document, HeadingAttrs, ImageAttrs, Node,
    OrderedListAttrs, TextAlign, UnknownNode, YoutubeAttrs,
};
pub use html::render_html;
pub use mark::{HighlightAttrs, LinkAttrs, Mark, TextStyleAttrs, UnknownMark};
pub use text::extract_text;
