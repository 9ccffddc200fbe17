//! Block scanner.
//!
//! A single forward pass over the input lines, one block at a time, with no
//! backtracking. Each line is classified in priority order:
//!
//! 1. blank: ends the current block and is discarded,
//! 2. `#`, `##` or `###` followed by whitespace: a one-line heading,
//! 3. optional indent, `-` or `*`, whitespace: starts a list that runs while
//!    following lines keep that shape,
//! 4. anything else: starts a paragraph that absorbs every following
//!    non-blank line, whatever it looks like.
//!
//! Parsing is total: every input produces a [`Document`].

use std::borrow::Cow;

use crate::ast::{Block, CowStr, Document, Heading, List, ListItem, Paragraph};
use crate::inline::{parse_inlines, parse_inlines_cow};
use crate::lexer::{is_space, Lexer, Line};
use crate::span::Span;

/// Deepest heading level the scanner recognizes.
pub const MAX_HEADING_LEVEL: usize = 3;

/// Parse a whole document.
///
/// ```rust
/// use temarlije_md::{parse, Block};
///
/// let doc = parse("# Title\n\n- one\n- two");
/// assert_eq!(doc.blocks.len(), 2);
/// assert!(matches!(doc.blocks[1], Block::List(_)));
/// ```
pub fn parse(input: &str) -> Document<'_> {
    Document {
        blocks: Blocks::new(input).collect(),
        span: Span::from_offsets(0, input.len()),
    }
}

/// Streaming iterator over the blocks of an input.
pub struct Blocks<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Blocks<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }

    fn parse_block(&mut self) -> Option<Block<'a>> {
        self.lexer.skip_blank_lines();
        let line = *self.lexer.peek_line()?;

        if let Some((level, rest)) = match_heading(line.text) {
            self.lexer.next_line();
            log::trace!("heading level {} at {}..{}", level, line.span.start, line.span.end);
            return Some(Block::Heading(Heading {
                level,
                content: parse_inlines(rest),
                span: line.span,
            }));
        }

        if match_list_item(line.text).is_some() {
            return Some(self.parse_list());
        }

        Some(self.parse_paragraph())
    }

    fn parse_list(&mut self) -> Block<'a> {
        let mut items = Vec::with_capacity(8);
        let mut span: Option<Span> = None;

        while let Some(&line) = self.lexer.peek_line() {
            let Some(item) = match_list_item(line.text) else {
                break;
            };
            self.lexer.next_line();

            items.push(ListItem {
                content: parse_inlines(item),
                span: line.span,
            });
            span = Some(span.map_or(line.span, |s| s.merge(line.span)));
        }

        let span = span.unwrap_or_default();
        log::trace!("list of {} items at {}..{}", items.len(), span.start, span.end);
        Block::List(List { items, span })
    }

    fn parse_paragraph(&mut self) -> Block<'a> {
        let mut lines: Vec<Line<'a>> = Vec::with_capacity(4);

        while let Some(&line) = self.lexer.peek_line() {
            if line.is_blank() {
                break;
            }
            self.lexer.next_line();
            lines.push(line);
        }

        let span = match (lines.first(), lines.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::default(),
        };

        let text: CowStr<'a> = match lines.as_slice() {
            [only] => Cow::Borrowed(only.text),
            _ => Cow::Owned(
                lines
                    .iter()
                    .map(|line| line.text)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        };

        log::trace!("paragraph of {} lines at {}..{}", lines.len(), span.start, span.end);
        Block::Paragraph(Paragraph {
            content: parse_inlines_cow(text),
            span,
        })
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        self.parse_block()
    }
}

/// Match `^(#{1,3})\s+(.*)$`, returning the level and the text after the
/// whitespace run.
///
/// The trailing text may be empty, but may not contain a line terminator
/// (a lone `\r`, U+2028 or U+2029).
pub fn match_heading(text: &str) -> Option<(u8, &str)> {
    let level = text.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }

    let after_marker = &text[level..];
    let rest = after_marker.trim_start_matches(is_space);
    if rest.len() == after_marker.len() {
        return None;
    }
    if rest.contains(['\r', '\u{2028}', '\u{2029}']) {
        return None;
    }

    Some((level as u8, rest))
}

/// Match `^\s*[-*]\s+`, returning the item text with the prefix stripped.
pub fn match_list_item(text: &str) -> Option<&str> {
    let trimmed = text.trim_start_matches(is_space);
    let after_marker = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('*'))?;

    let rest = after_marker.trim_start_matches(is_space);
    if rest.len() == after_marker.len() {
        return None;
    }

    Some(rest)
}
