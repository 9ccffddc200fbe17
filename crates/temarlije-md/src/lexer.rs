//! Line lexer feeding the block scanner.
//!
//! Splits input on `\n` using `memchr`. A `\r` directly before a `\n` is
//! dropped from the line, so CRLF input scans exactly like LF input. A lone
//! `\r` (not followed by `\n`) stays part of the line text.
//!
//! Lines borrow from the input; the lexer never allocates.

use crate::span::Span;
use memchr::memchr;

/// A single line from the input with its source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without the line break).
    pub text: &'a str,
    /// Byte span of `text` in the original input.
    pub span: Span,
}

impl<'a> Line<'a> {
    /// Check if this line is empty or contains only whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.text.chars().all(is_space)
    }
}

/// Whitespace as the markup sees it: Unicode `White_Space` without U+0085
/// (NEXT LINE), plus U+FEFF (BYTE ORDER MARK).
///
/// A file that starts with a byte order mark therefore scans like one that
/// does not.
///
/// ```rust
/// use temarlije_md::lexer::is_space;
///
/// assert!(is_space('\u{feff}'));
/// assert!(!is_space('\u{85}'));
/// ```
#[inline]
pub fn is_space(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Line-based lexer with one line of lookahead.
pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    offset: usize,
    peeked: Option<Line<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
            peeked: None,
        }
    }

    /// Peek at the next line without consuming it.
    #[inline]
    pub fn peek_line(&mut self) -> Option<&Line<'a>> {
        if self.peeked.is_none() {
            self.peeked = self.read_line();
        }
        self.peeked.as_ref()
    }

    /// Consume and return the next line.
    #[inline]
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        if let Some(line) = self.peeked.take() {
            return Some(line);
        }
        self.read_line()
    }

    /// Skip blank lines and return the count skipped.
    #[inline]
    pub fn skip_blank_lines(&mut self) -> usize {
        let mut count = 0;
        while let Some(line) = self.peek_line() {
            if !line.is_blank() {
                break;
            }
            self.next_line();
            count += 1;
        }
        count
    }

    fn read_line(&mut self) -> Option<Line<'a>> {
        if self.offset >= self.bytes.len() {
            return None;
        }

        let start = self.offset;
        let (end, has_newline) = match memchr(b'\n', &self.bytes[start..]) {
            Some(pos) => (start + pos, true),
            None => (self.bytes.len(), false),
        };

        // Only the CR of a CRLF pair is a line break; a trailing lone CR is text.
        let text_end = if has_newline && end > start && self.bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if has_newline { end + 1 } else { end };

        Some(Line {
            // SAFETY: `start` is 0 or one past a `\n`, and `text_end` sits on a `\n`,
            // a `\r` or the end of input. ASCII bytes never occur inside a multi-byte
            // UTF-8 sequence, so both are char boundaries.
            text: unsafe { self.input.get_unchecked(start..text_end) },
            span: Span::from_offsets(start, text_end),
        })
    }
}
