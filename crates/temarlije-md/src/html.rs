//! HTML rendering of a parsed [`Document`].
//!
//! Mapping:
//!
//! | node               | element              |
//! |--------------------|----------------------|
//! | document           | `<div class="md">`   |
//! | heading level 1, 2 | `<h2>`               |
//! | heading level 3    | `<h3>`               |
//! | list / item        | `<ul>` / `<li>`      |
//! | paragraph          | `<p>`                |
//! | bold / italic      | `<strong>` / `<em>`  |
//!
//! Levels 1 and 2 share a weight.
//!
//! The tree keeps text verbatim; escaping happens here, at the display edge.

use html_escape::encode_text;

use crate::ast::{Block, Document, Inline};

/// Visual weight of a heading once rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingWeight {
    /// Levels 1 and 2.
    Major,
    /// Level 3.
    Minor,
}

impl HeadingWeight {
    pub fn for_level(level: u8) -> Self {
        match level {
            0..=2 => HeadingWeight::Major,
            _ => HeadingWeight::Minor,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            HeadingWeight::Major => "h2",
            HeadingWeight::Minor => "h3",
        }
    }
}

/// Render a document to an HTML fragment, one block per line.
pub fn render(doc: &Document) -> String {
    let mut out = String::with_capacity(64 + doc.span.len() as usize * 2);
    out.push_str("<div class=\"md\">\n");
    for block in &doc.blocks {
        render_block(block, &mut out);
    }
    out.push_str("</div>\n");
    out
}

/// Render a sequence of inline spans without any block wrapper.
pub fn render_inlines(inlines: &[Inline]) -> String {
    let mut out = String::new();
    push_inlines(inlines, &mut out);
    out
}

fn render_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading(h) => {
            let tag = HeadingWeight::for_level(h.level).tag();
            push_element(tag, &h.content, out);
        }
        Block::List(l) => {
            out.push_str("<ul>\n");
            for item in &l.items {
                push_element("li", &item.content, out);
            }
            out.push_str("</ul>\n");
        }
        Block::Paragraph(p) => push_element("p", &p.content, out),
    }
}

fn push_element(tag: &str, inlines: &[Inline], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    push_inlines(inlines, out);
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn push_inlines(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(t) => out.push_str(&encode_text(&t.content)),
            Inline::Bold(b) => {
                out.push_str("<strong>");
                out.push_str(&encode_text(&b.content));
                out.push_str("</strong>");
            }
            Inline::Italic(i) => {
                out.push_str("<em>");
                out.push_str(&encode_text(&i.content));
                out.push_str("</em>");
            }
        }
    }
}
