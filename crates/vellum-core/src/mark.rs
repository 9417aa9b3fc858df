//! Formatting marks for text runs

use serde::{Deserialize, Serialize};

/// A formatting annotation on a run of text.
///
/// Marks are stored in application order. Rendering wraps the text in each
/// mark's tag from the first (innermost) to the last (outermost), and the
/// order is never canonicalized: two documents that differ only in mark
/// order produce different markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    /// Strong emphasis
    Bold,
    /// Emphasis
    Italic,
    /// Underline
    Underline,
    /// Strikethrough
    Strike,
    /// Inline code
    Code,
    /// Subscript
    Subscript,
    /// Superscript
    Superscript,
    /// A hyperlink
    Link {
        #[serde(default, skip_serializing_if = "crate::doc::is_default")]
        attrs: LinkAttrs,
    },
    /// Foreground text color
    TextStyle {
        #[serde(default, skip_serializing_if = "crate::doc::is_default")]
        attrs: TextStyleAttrs,
    },
    /// Background highlight
    Highlight {
        #[serde(default, skip_serializing_if = "crate::doc::is_default")]
        attrs: HighlightAttrs,
    },
    /// Any mark type this version does not know about; renders as a no-op
    #[serde(untagged)]
    Unknown(UnknownMark),
}

impl Mark {
    /// Create a link mark
    pub fn link(href: &str) -> Self {
        Mark::Link {
            attrs: LinkAttrs {
                href: href.to_string(),
                target: None,
            },
        }
    }

    /// Create a text color mark
    pub fn color(color: &str) -> Self {
        Mark::TextStyle {
            attrs: TextStyleAttrs {
                color: Some(color.to_string()),
            },
        }
    }

    /// Create a highlight mark with an explicit color
    pub fn highlight(color: &str) -> Self {
        Mark::Highlight {
            attrs: HighlightAttrs {
                color: Some(color.to_string()),
            },
        }
    }
}

/// Attributes for link marks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkAttrs {
    /// Link target URL
    #[serde(default)]
    pub href: String,

    /// Browsing context, e.g. `_blank`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Attributes for text color marks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyleAttrs {
    /// CSS color; without it the mark renders nothing extra
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Attributes for highlight marks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightAttrs {
    /// Highlight color; yellow when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Raw payload of an unrecognized mark type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnknownMark {
    /// The raw `type` tag
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Every other field, kept verbatim
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}
