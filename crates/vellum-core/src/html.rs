//! HTML rendering for document trees
//!
//! Converts a document into the semantic HTML that is stored next to it and
//! served to readers. Rendering is a single recursive pass with one arm per
//! node type and it never fails, whatever the tree looks like: missing
//! attributes fall back to their defaults and unrecognized node types
//! flatten to their children's output.

use crate::doc::{Document, ImageAttrs, Node, TextAlign, YoutubeAttrs};
use crate::mark::Mark;

/// Render a document to an HTML string
pub fn render_html(doc: &Document) -> String {
    let mut out = String::with_capacity(4096);
    render_nodes(&doc.content, &mut out);
    out
}

fn render_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        render_node(node, out);
    }
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Paragraph { attrs, content } => {
            out.push_str("<p");
            push_style(
                out,
                attrs.text_align,
                attrs.background_color.as_deref(),
                attrs.color.as_deref(),
            );
            out.push('>');
            if content.is_empty() {
                // blank paragraphs keep their line height
                out.push_str("<br>");
            } else {
                render_nodes(content, out);
            }
            out.push_str("</p>");
        }

        Node::Heading { attrs, content } => {
            let tag = heading_tag(attrs.level);
            out.push('<');
            out.push_str(tag);
            push_style(
                out,
                attrs.text_align,
                attrs.background_color.as_deref(),
                attrs.color.as_deref(),
            );
            out.push('>');
            render_nodes(content, out);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }

        Node::BulletList { content } => {
            out.push_str("<ul>");
            render_nodes(content, out);
            out.push_str("</ul>");
        }

        Node::OrderedList { attrs, content } => {
            out.push_str("<ol");
            if let Some(start) = attrs.start {
                push_attr(out, "start", &start.to_string());
            }
            out.push('>');
            render_nodes(content, out);
            out.push_str("</ol>");
        }

        Node::ListItem { content } => {
            // tolerate structurally broken empty items
            if !content.is_empty() {
                out.push_str("<li>");
                render_nodes(content, out);
                out.push_str("</li>");
            }
        }

        Node::Blockquote { attrs, content } => {
            out.push_str("<blockquote");
            push_style(
                out,
                attrs.text_align,
                attrs.background_color.as_deref(),
                attrs.color.as_deref(),
            );
            out.push('>');
            render_nodes(content, out);
            out.push_str("</blockquote>");
        }

        Node::CodeBlock { attrs, content } => {
            out.push_str("<pre><code class=\"language-");
            push_escaped(out, attrs.language.as_deref().unwrap_or("plaintext"));
            out.push_str("\">");
            // code text comes straight from the block's own text children;
            // marks carry no meaning inside a code block
            let mut first = true;
            for child in content {
                if let Node::Text { text, .. } = child {
                    if !first {
                        out.push('\n');
                    }
                    push_escaped(out, text);
                    first = false;
                }
            }
            out.push_str("</code></pre>");
        }

        Node::HorizontalRule => out.push_str("<hr>"),

        Node::Image { attrs } => render_image(attrs, out),

        Node::Youtube { attrs } => render_youtube(attrs, out),

        Node::Text { text, marks } => out.push_str(&marked_text(text, marks)),

        Node::HardBreak => out.push_str("<br>"),

        Node::Unknown(unknown) => render_nodes(&unknown.content, out),
    }
}

/// Tag name for a heading level, clamping everything outside 1..=6 to `h2`
fn heading_tag(level: Option<u8>) -> &'static str {
    match level {
        Some(1) => "h1",
        Some(2) => "h2",
        Some(3) => "h3",
        Some(4) => "h4",
        Some(5) => "h5",
        Some(6) => "h6",
        _ => "h2",
    }
}

/// Escape a text run and wrap it in its marks' tags.
///
/// Marks apply in array order with the first mark innermost, so
/// `[bold, italic]` produces `<em><strong>…</strong></em>`. The order is
/// not normalized anywhere in the system, so reordering marks changes the
/// output nesting.
fn marked_text(text: &str, marks: &[Mark]) -> String {
    let mut html = String::with_capacity(text.len());
    push_escaped(&mut html, text);
    for mark in marks {
        html = wrap_mark(mark, html);
    }
    html
}

fn wrap_mark(mark: &Mark, inner: String) -> String {
    match mark {
        Mark::Bold => format!("<strong>{}</strong>", inner),
        Mark::Italic => format!("<em>{}</em>", inner),
        Mark::Underline => format!("<u>{}</u>", inner),
        Mark::Strike => format!("<s>{}</s>", inner),
        Mark::Code => format!("<code>{}</code>", inner),
        Mark::Subscript => format!("<sub>{}</sub>", inner),
        Mark::Superscript => format!("<sup>{}</sup>", inner),

        Mark::Link { attrs } => {
            let mut open = String::from("<a");
            push_attr(&mut open, "href", &attrs.href);
            if let Some(target) = &attrs.target {
                push_attr(&mut open, "target", target);
            }
            format!("{}>{}</a>", open, inner)
        }

        Mark::TextStyle { attrs } => match &attrs.color {
            Some(color) => {
                let mut open = String::from("<span");
                push_attr(&mut open, "style", &format!("color: {}", color));
                format!("{}>{}</span>", open, inner)
            }
            // a color mark without a color has nothing to render
            None => inner,
        },

        Mark::Highlight { attrs } => {
            let color = attrs.color.as_deref().unwrap_or("#ffff00");
            let mut open = String::from("<mark");
            push_attr(&mut open, "style", &format!("background-color: {}", color));
            format!("{}>{}</mark>", open, inner)
        }

        Mark::Unknown(_) => inner,
    }
}

/// Append a `style` attribute built from block presentation attributes.
///
/// `text-align: left` is the rendering default and is omitted.
fn push_style(
    out: &mut String,
    align: Option<TextAlign>,
    background: Option<&str>,
    color: Option<&str>,
) {
    let mut styles: Vec<String> = Vec::new();
    if let Some(align) = align {
        if align != TextAlign::Left {
            styles.push(format!("text-align: {}", align.as_css()));
        }
    }
    if let Some(background) = background {
        styles.push(format!("background-color: {}", background));
    }
    if let Some(color) = color {
        styles.push(format!("color: {}", color));
    }
    if !styles.is_empty() {
        push_attr(out, "style", &styles.join("; "));
    }
}

fn render_image(attrs: &ImageAttrs, out: &mut String) {
    out.push_str("<img");
    push_attr(out, "src", &attrs.src);
    push_attr(out, "alt", attrs.alt.as_deref().unwrap_or(""));
    if let Some(title) = &attrs.title {
        push_attr(out, "title", title);
    }
    if let Some(width) = attrs.width {
        push_attr(out, "data-width", &width.to_string());
    }
    if let Some(height) = attrs.height {
        push_attr(out, "data-height", &height.to_string());
    }
    if let Some(align) = attrs.align {
        push_attr(out, "data-align", align.as_css());
    }
    if let Some(caption) = &attrs.caption {
        push_attr(out, "data-caption", caption);
    }
    if attrs.show_caption {
        push_attr(out, "data-show-caption", "true");
    }
    out.push('>');
}

fn render_youtube(attrs: &YoutubeAttrs, out: &mut String) {
    let width = attrs.width.unwrap_or(640);
    let height = attrs.height.unwrap_or(360);

    out.push_str("<div data-youtube-video");
    if let Some(align) = attrs.align {
        push_attr(out, "data-align", align.as_css());
    }
    push_attr(out, "data-width", &width.to_string());
    out.push_str("><iframe");
    push_attr(out, "src", &embed_url(attrs));
    push_attr(out, "width", &width.to_string());
    push_attr(out, "height", &height.to_string());
    out.push_str(" allowfullscreen></iframe></div>");
}

/// Embed player URL for a video.
///
/// Always points at the privacy-enhanced host; playback flags become query
/// parameters when set.
fn embed_url(attrs: &YoutubeAttrs) -> String {
    let mut params: Vec<String> = Vec::new();
    if attrs.controls {
        params.push("controls=1".to_string());
    }
    if attrs.nocookie {
        params.push("nocookie=1".to_string());
    }
    if attrs.modest_branding {
        params.push("modestbranding=1".to_string());
    }
    if attrs.cc_load_policy {
        params.push("cc_load_policy=1".to_string());
    }
    if let Some(start) = attrs.start {
        if start > 0 {
            params.push(format!("start={}", start));
        }
    }

    let mut url = format!("https://www.youtube-nocookie.com/embed/{}", attrs.src);
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

/// HTML-escape `text` into `out`
fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Append ` name="value"` with the value escaped
fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value);
    out.push('"');
}
