//! Rich text document tree
//!
//! This module defines the node tree for rich text content. The tree is the
//! persisted interchange format: every node carries a `type` tag plus
//! optional `attrs`, `content` and `marks` fields, and the serde
//! representation matches the stored JSON node tree.

use serde::{Deserialize, Serialize};

use crate::mark::Mark;

/// Check whether a value equals its type's default.
///
/// Attribute objects are dropped from the serialized form when every field
/// is unset, matching the stored format.
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// A complete rich text document.
///
/// The root of the tree, one per editable post or template body. Its
/// `content` holds block nodes only; inline nodes (`text`, `hardBreak`)
/// always live inside a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "doc")]
pub struct Document {
    /// Top-level block nodes, in order
    #[serde(default)]
    pub content: Vec<Node>,
}

impl Document {
    /// Create a document from top-level blocks
    pub fn new(content: Vec<Node>) -> Self {
        Self { content }
    }

    /// Check whether the document holds any meaningful content.
    ///
    /// A document is empty when it has no blocks at all, or when every
    /// top-level block is a paragraph without children. Blank drafts are
    /// discarded based on this predicate, so it is the single source of
    /// truth for "nothing worth saving".
    pub fn is_empty(&self) -> bool {
        self.content.iter().all(|node| match node {
            Node::Paragraph { content, .. } => content.is_empty(),
            _ => false,
        })
    }
}

/// A node in the document tree.
///
/// One closed set of variants covers both block nodes (paragraphs,
/// headings, lists, embeds) and inline nodes ([`Text`](Node::Text),
/// [`HardBreak`](Node::HardBreak)). Node types written by newer editor
/// versions are captured by [`Unknown`](Node::Unknown) and survive a
/// load/store cycle unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// A paragraph of inline content
    Paragraph {
        #[serde(default, skip_serializing_if = "is_default")]
        attrs: BlockAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },

    /// A heading, `<h1>` through `<h6>`
    Heading {
        #[serde(default, skip_serializing_if = "is_default")]
        attrs: HeadingAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },

    /// An unordered list of list items
    BulletList {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },

    /// An ordered list of list items
    OrderedList {
        #[serde(default, skip_serializing_if = "is_default")]
        attrs: OrderedListAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },

    /// A single list entry holding block content, normally one paragraph
    ListItem {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },

    /// A block quote holding nested blocks
    Blockquote {
        #[serde(default, skip_serializing_if = "is_default")]
        attrs: BlockAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },

    /// A code block; its text children carry the code verbatim
    CodeBlock {
        #[serde(default, skip_serializing_if = "is_default")]
        attrs: CodeBlockAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },

    /// A thematic break
    HorizontalRule,

    /// An embedded image
    Image {
        #[serde(default, skip_serializing_if = "is_default")]
        attrs: ImageAttrs,
    },

    /// An embedded YouTube video
    Youtube {
        #[serde(default, skip_serializing_if = "is_default")]
        attrs: YoutubeAttrs,
    },

    /// A run of text with optional formatting marks
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },

    /// A forced line break
    HardBreak,

    /// Any node type this version does not know about
    #[serde(untagged)]
    Unknown(UnknownNode),
}

impl Node {
    /// Create a plain text node
    pub fn text(text: &str) -> Self {
        Node::Text {
            text: text.to_string(),
            marks: Vec::new(),
        }
    }

    /// Create a text node with formatting marks.
    ///
    /// Marks apply in array order, first mark innermost.
    pub fn styled_text(text: &str, marks: Vec<Mark>) -> Self {
        Node::Text {
            text: text.to_string(),
            marks,
        }
    }

    /// Create a paragraph from inline content
    pub fn paragraph(content: Vec<Node>) -> Self {
        Node::Paragraph {
            attrs: BlockAttrs::default(),
            content,
        }
    }

    /// Create a heading with the given level
    pub fn heading(level: u8, content: Vec<Node>) -> Self {
        Node::Heading {
            attrs: HeadingAttrs {
                level: Some(level),
                ..HeadingAttrs::default()
            },
            content,
        }
    }

    /// Create a list item wrapping inline content in a paragraph
    pub fn list_item(inline: Vec<Node>) -> Self {
        Node::ListItem {
            content: vec![Node::paragraph(inline)],
        }
    }

    /// Get the child nodes, empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph { content, .. }
            | Node::Heading { content, .. }
            | Node::BulletList { content }
            | Node::OrderedList { content, .. }
            | Node::ListItem { content }
            | Node::Blockquote { content, .. }
            | Node::CodeBlock { content, .. } => content,
            Node::Unknown(unknown) => &unknown.content,
            Node::HorizontalRule
            | Node::Image { .. }
            | Node::Youtube { .. }
            | Node::Text { .. }
            | Node::HardBreak => &[],
        }
    }

    /// Check if this node exists only inside block content.
    ///
    /// A document's own `content` never holds inline nodes directly; text
    /// is always wrapped in a block.
    pub fn is_inline(&self) -> bool {
        matches!(self, Node::Text { .. } | Node::HardBreak)
    }

    /// Check if this is a structural (block) node
    pub fn is_block(&self) -> bool {
        !self.is_inline()
    }
}

/// Raw payload of an unrecognized node type.
///
/// Keeps the original tag, the parsed children and every other field so
/// documents written by newer editors round-trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnknownNode {
    /// The raw `type` tag
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Child nodes, parsed recursively
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,

    /// Every other field, kept verbatim
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Horizontal alignment for text blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    /// Get the CSS keyword for this alignment
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

/// Horizontal placement for embedded media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    /// Get the CSS keyword for this placement
    pub fn as_css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// Presentation attributes shared by text-bearing blocks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockAttrs {
    /// Text alignment; `left` is the rendering default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,

    /// CSS background color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// CSS foreground color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Attributes for heading blocks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingAttrs {
    /// Heading level, 1 through 6; absent and out-of-range levels render
    /// as level 2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Attributes for ordered lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderedListAttrs {
    /// Number of the first item; rendered as the `start` attribute when
    /// present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
}

/// Attributes for code blocks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBlockAttrs {
    /// Highlighting language; `"plaintext"` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Attributes for image embeds.
///
/// Sizing, placement and caption fields are carried through to the output
/// as `data-*` attributes; resolving them into visual CSS is left to the
/// publishing theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttrs {
    /// Image URL
    #[serde(default)]
    pub src: String,

    /// Alternative text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Tooltip title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Display width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Display height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Horizontal placement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,

    /// Caption text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Whether the caption is shown under the image
    #[serde(default, skip_serializing_if = "is_default")]
    pub show_caption: bool,
}

/// Attributes for YouTube embeds. `src` holds the video id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeAttrs {
    /// Video id
    #[serde(default)]
    pub src: String,

    /// Player width in pixels; 640 when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Player height in pixels; 360 when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Horizontal placement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,

    /// Show player controls
    #[serde(default, skip_serializing_if = "is_default")]
    pub controls: bool,

    /// Request the privacy-enhanced player
    #[serde(default, skip_serializing_if = "is_default")]
    pub nocookie: bool,

    /// Reduce player branding
    #[serde(default, skip_serializing_if = "is_default")]
    pub modest_branding: bool,

    /// Force closed captions on
    #[serde(default, skip_serializing_if = "is_default")]
    pub cc_load_policy: bool,

    /// Playback start offset in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
}
