//! # vellum
//!
//! Derived-representation pipeline for rich text content.
//!
//! The content editor stores each post or template body three ways: the raw
//! document tree, its rendered HTML and its searchable plain text. This
//! crate is the boundary the embedding application talks to. It parses
//! stored document JSON, derives both representations and assembles the
//! record the template store persists as a new version.
//!
//! ## Example
//!
//! ```rust
//! use vellum::render_template_json;
//!
//! let record = render_template_json(
//!     r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"Hi"}]}]}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(record.html, "<p>Hi</p>");
//! assert_eq!(record.plain_text, "Hi");
//! ```

mod json;
mod template;

pub use json::{parse_document, to_json};
pub use template::{draft_is_empty, render_template, render_template_json, RenderedTemplate};
pub use vellum_core::{extract_text, render_html, Document, Mark, Node};

/// Error type for document boundary operations
#[derive(Debug, thiserror::Error)]
pub enum VellumError {
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VellumError>;
