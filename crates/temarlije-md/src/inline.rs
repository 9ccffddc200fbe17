//! Inline tokenizer: splits one block's text into text, bold and italic spans.
//!
//! Greedy, left-to-right, no backtracking. The scan jumps between marker
//! bytes (`*`, `_`) with `memchr`, so plain text is never examined byte by
//! byte. Rules, in order, at each marker:
//!
//! 1. `**` opens bold and pairs with the next `**`; a `*` followed by `*` is
//!    never treated as a lone italic marker.
//! 2. A lone `*` or `_` opens italic and pairs with the next occurrence of the
//!    same byte, wherever it is.
//! 3. A marker without a partner stays literal text, and the scan resumes
//!    after the whole marker.
//!
//! Interiors are raw: `**a *b* c**` is one bold span containing `a *b* c`.

use std::borrow::Cow;

use memchr::{memchr, memchr2, memmem};

use crate::ast::{into_owned_inlines, Bold, CowStr, Delimiter, Inline, Italic, Text};

/// Tokenize inline spans, borrowing from `text`.
#[inline]
pub fn parse_inlines(text: &str) -> Vec<Inline<'_>> {
    if text.is_empty() {
        return Vec::new();
    }
    InlineParser::new(text).parse()
}

/// Tokenize text that may be owned, such as a joined multi-line paragraph.
pub(crate) fn parse_inlines_cow(text: CowStr<'_>) -> Vec<Inline<'_>> {
    match text {
        Cow::Borrowed(s) => parse_inlines(s),
        Cow::Owned(s) => into_owned_inlines(parse_inlines(&s)),
    }
}

struct InlineParser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> InlineParser<'a> {
    #[inline]
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn parse(&mut self) -> Vec<Inline<'a>> {
        let mut inlines = Vec::with_capacity(4);
        let mut text_start = 0;

        while self.pos < self.bytes.len() {
            match memchr2(b'*', b'_', &self.bytes[self.pos..]) {
                Some(offset) => self.pos += offset,
                None => break,
            }

            let is_double = self.bytes[self.pos] == b'*' && self.peek_byte(1) == Some(b'*');

            let parsed = if is_double {
                self.try_parse_bold(&mut inlines, &mut text_start)
            } else {
                self.try_parse_italic(&mut inlines, &mut text_start)
            };

            // Unmatched markers stay inside the pending text run.
            if !parsed {
                self.pos += if is_double { 2 } else { 1 };
            }
        }

        if text_start < self.bytes.len() {
            inlines.push(self.make_text(text_start, self.bytes.len()));
        }

        inlines
    }

    #[inline(always)]
    fn peek_byte(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    #[inline(always)]
    fn make_text(&self, start: usize, end: usize) -> Inline<'a> {
        Inline::Text(Text {
            content: Cow::Borrowed(&self.text[start..end]),
        })
    }

    #[inline(always)]
    fn flush_text(&self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) {
        if *text_start < self.pos {
            inlines.push(self.make_text(*text_start, self.pos));
        }
        *text_start = self.pos;
    }

    fn try_parse_bold(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        let content_start = self.pos + 2;

        let Some(offset) = memmem::find(&self.bytes[content_start..], b"**") else {
            return false;
        };
        let close = content_start + offset;

        self.flush_text(inlines, text_start);
        inlines.push(Inline::Bold(Bold {
            content: Cow::Borrowed(&self.text[content_start..close]),
        }));

        self.pos = close + 2;
        *text_start = self.pos;
        true
    }

    fn try_parse_italic(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        let marker = self.bytes[self.pos];
        let Some(delimiter) = Delimiter::from_byte(marker) else {
            return false;
        };
        let content_start = self.pos + 1;

        let Some(offset) = memchr(marker, &self.bytes[content_start..]) else {
            return false;
        };
        let close = content_start + offset;

        self.flush_text(inlines, text_start);
        inlines.push(Inline::Italic(Italic {
            content: Cow::Borrowed(&self.text[content_start..close]),
            delimiter,
        }));

        self.pos = close + 1;
        *text_start = self.pos;
        true
    }
}
