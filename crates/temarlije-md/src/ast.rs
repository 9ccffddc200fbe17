//! Document tree produced by the parser.
//!
//! The tree is shallow:
//!
//! - a [`Document`] is a flat sequence of [`Block`]s,
//! - every block holds flat sequences of [`Inline`] spans,
//! - inline spans never nest; bold and italic interiors are raw text.
//!
//! Text borrows from the parsed input whenever the block's inline text is a
//! contiguous slice of it. Multi-line paragraphs are joined with spaces and
//! therefore own their text.

use std::borrow::Cow;

use crate::span::Span;

/// Borrowed or owned string type for zero-copy parsing.
pub type CowStr<'a> = Cow<'a, str>;

/// A parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    /// Content blocks in document order.
    pub blocks: Vec<Block<'a>>,
    /// Source span covering the entire input.
    pub span: Span,
}

impl<'a> Document<'a> {
    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Detach the document from the input it was parsed from.
    pub fn into_owned(self) -> Document<'static> {
        Document {
            blocks: self.blocks.into_iter().map(Block::into_owned).collect(),
            span: self.span,
        }
    }
}

/// Block-level nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#`, `##` or `###` heading.
    Heading(Heading<'a>),
    /// Run of consecutive `-` / `*` bullet lines.
    List(List<'a>),
    /// Run of consecutive non-blank lines joined with spaces.
    Paragraph(Paragraph<'a>),
}

impl<'a> Block<'a> {
    /// Source span of the lines this block was scanned from.
    pub fn span(&self) -> Span {
        match self {
            Block::Heading(h) => h.span,
            Block::List(l) => l.span,
            Block::Paragraph(p) => p.span,
        }
    }

    pub fn into_owned(self) -> Block<'static> {
        match self {
            Block::Heading(h) => Block::Heading(Heading {
                level: h.level,
                content: into_owned_inlines(h.content),
                span: h.span,
            }),
            Block::List(l) => Block::List(List {
                items: l
                    .items
                    .into_iter()
                    .map(|item| ListItem {
                        content: into_owned_inlines(item.content),
                        span: item.span,
                    })
                    .collect(),
                span: l.span,
            }),
            Block::Paragraph(p) => Block::Paragraph(Paragraph {
                content: into_owned_inlines(p.content),
                span: p.span,
            }),
        }
    }
}

/// Section heading with level and inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Heading level, always 1, 2 or 3.
    pub level: u8,
    /// Inline content (empty for a bare `# `).
    pub content: Vec<Inline<'a>>,
    /// Source span.
    pub span: Span,
}

/// Unordered list. `items` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<'a> {
    pub items: Vec<ListItem<'a>>,
    /// Source span from the first to the last item line.
    pub span: Span,
}

/// One bullet line, with its marker stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<'a> {
    pub content: Vec<Inline<'a>>,
    pub span: Span,
}

/// Text paragraph containing inline elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// Inline content of all lines, joined with single spaces.
    pub content: Vec<Inline<'a>>,
    /// Source span from the first to the last line.
    pub span: Span,
}

/// Inline-level nodes. Spans do not nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<'a> {
    /// Plain text, including any markers that found no partner.
    Text(Text<'a>),
    /// `**bold**` text.
    Bold(Bold<'a>),
    /// `*italic*` or `_italic_` text.
    Italic(Italic<'a>),
}

impl<'a> Inline<'a> {
    /// Text inside the span, without markers.
    pub fn content(&self) -> &str {
        match self {
            Inline::Text(t) => &t.content,
            Inline::Bold(b) => &b.content,
            Inline::Italic(i) => &i.content,
        }
    }

    /// The exact text this span was tokenized from, markers included.
    pub fn source_text(&self) -> Cow<'_, str> {
        match self {
            Inline::Text(t) => Cow::Borrowed(&t.content),
            Inline::Bold(b) => Cow::Owned(format!("**{}**", b.content)),
            Inline::Italic(i) => {
                let d = i.delimiter.as_str();
                Cow::Owned(format!("{d}{}{d}", i.content))
            }
        }
    }

    pub fn into_owned(self) -> Inline<'static> {
        match self {
            Inline::Text(t) => Inline::Text(Text {
                content: Cow::Owned(t.content.into_owned()),
            }),
            Inline::Bold(b) => Inline::Bold(Bold {
                content: Cow::Owned(b.content.into_owned()),
            }),
            Inline::Italic(i) => Inline::Italic(Italic {
                content: Cow::Owned(i.content.into_owned()),
                delimiter: i.delimiter,
            }),
        }
    }
}

/// Plain text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text<'a> {
    pub content: CowStr<'a>,
}

/// Bold text. The interior is raw and never re-tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bold<'a> {
    pub content: CowStr<'a>,
}

/// Italic text. The interior is raw and never re-tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Italic<'a> {
    pub content: CowStr<'a>,
    /// Which marker opened and closed the span.
    pub delimiter: Delimiter,
}

/// Single-character emphasis marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `*`
    Asterisk,
    /// `_`
    Underscore,
}

impl Delimiter {
    /// Map a marker byte back to its delimiter.
    #[inline]
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'*' => Some(Delimiter::Asterisk),
            b'_' => Some(Delimiter::Underscore),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::Asterisk => "*",
            Delimiter::Underscore => "_",
        }
    }
}

pub(crate) fn into_owned_inlines(inlines: Vec<Inline<'_>>) -> Vec<Inline<'static>> {
    inlines.into_iter().map(Inline::into_owned).collect()
}
