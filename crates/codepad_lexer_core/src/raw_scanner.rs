//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords, builtins, or colors; those are deferred to the highlighting
//! layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) at EOF dispatches to `null_or_eof()`.
//!
//! Every arm consumes at least one byte unless the cursor is at EOF, so a
//! full scan takes at most `source.len()` calls before returning `Eof`.

use crate::cursor::Cursor;
use crate::rules::ScanRules;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Unterminated constructs are encoded as `RawTag` variants, not as
/// `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    rules: ScanRules,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor and a rule set.
    pub fn new(cursor: Cursor<'a>, rules: ScanRules) -> Self {
        Self { cursor, rules }
    }

    /// Byte offset where the next token will start.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.null_or_eof(start),
            b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => self.whitespace(start),
            b'/' => self.slash(start),
            b'#' if self.rules.contains(ScanRules::HASH_COMMENTS) => self.line_comment(start),
            b'"' | b'\'' | b'`' => self.string(start),
            b'0'..=b'9' => self.number(start),
            b'<' if self.rules.contains(ScanRules::MARKUP_TAGS) => self.markup(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'$' if self.rules.contains(ScanRules::DOLLAR_IDENTS) => self.identifier(start),
            b'+' | b'-' | b'*' | b'%' | b'=' | b'<' | b'>' | b'!' | b'&' | b'|' | b'^' => {
                self.operator(start)
            }
            b'~' | b'?' | b':' | b';' | b',' | b'.' => self.single(start, RawTag::Operator),
            b'(' | b')' | b'[' | b']' | b'{' | b'}'
                if self.rules.contains(ScanRules::PUNCTUATION) =>
            {
                self.single(start, RawTag::Punctuation)
            }
            0x80..=0xFF if self.cursor.at_whitespace() => self.whitespace(start),
            _ => self.unknown(start),
        }
    }

    fn token(&self, tag: RawTag, start: usize) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────────

    fn null_or_eof(&mut self, start: usize) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte: an ordinary unclassified character.
            self.unknown(start)
        }
    }

    // ─── Whitespace ────────────────────────────────────────────────────

    fn whitespace(&mut self, start: usize) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(RawTag::Whitespace, start)
    }

    // ─── Comments ──────────────────────────────────────────────────────

    fn slash(&mut self, start: usize) -> RawToken {
        match self.cursor.peek() {
            b'/' => self.line_comment(start),
            b'*' => self.block_comment(start),
            _ => self.operator(start),
        }
    }

    /// `//` or `#` through the end of the line. The newline is left for the
    /// whitespace rule.
    fn line_comment(&mut self, start: usize) -> RawToken {
        self.cursor.eat_until_newline_or_eof();
        self.token(RawTag::LineComment, start)
    }

    /// The `*/` search starts at the opener's `*`, so `/*/` is a complete
    /// comment.
    fn block_comment(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // consume '/'
        if self.cursor.eat_through_block_comment_end() {
            self.token(RawTag::BlockComment, start)
        } else {
            self.token(RawTag::UnterminatedBlockComment, start)
        }
    }

    // ─── Strings ───────────────────────────────────────────────────────

    /// Quoted literal. `\` escapes the next character whatever it is;
    /// newlines do not end the literal.
    fn string(&mut self, start: usize) -> RawToken {
        let quote = self.cursor.current();
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                0 => return self.token(RawTag::UnterminatedString, start),
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                _ => {
                    self.cursor.advance(); // consume closing quote
                    return self.token(RawTag::String, start);
                }
            }
        }
    }

    // ─── Numbers ───────────────────────────────────────────────────────

    /// Digits and dots, plus radix/exponent letters when enabled. No
    /// numeric grammar is enforced: `1.2.3` is one token.
    fn number(&mut self, start: usize) -> RawToken {
        let letters = self.rules.contains(ScanRules::NUMBER_LETTERS);
        self.cursor.advance(); // consume first digit
        self.cursor.eat_while(|b| {
            b.is_ascii_digit() || b == b'.' || (letters && matches!(b, b'x' | b'X' | b'e' | b'E'))
        });
        self.token(RawTag::Number, start)
    }

    // ─── Markup ────────────────────────────────────────────────────────

    fn markup(&mut self, start: usize) -> RawToken {
        if self.cursor.eat_through(b'>') {
            self.token(RawTag::Markup, start)
        } else {
            self.token(RawTag::UnterminatedMarkup, start)
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────────

    fn identifier(&mut self, start: usize) -> RawToken {
        let dollar = self.rules.contains(ScanRules::DOLLAR_IDENTS);
        self.cursor.advance(); // consume first char (already validated)
        self.cursor.eat_while(|b| is_ident_continue(b, dollar));
        self.token(RawTag::Ident, start)
    }

    // ─── Operators ─────────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: usize, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    /// Operator that may pair with a following `=`, `<`, or `>`.
    ///
    /// Only two characters are ever joined: `===` scans as `==` then `=`.
    fn operator(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // consume first char
        if matches!(self.cursor.current(), b'=' | b'<' | b'>') {
            self.cursor.advance();
        }
        self.token(RawTag::Operator, start)
    }

    // ─── Fallback ──────────────────────────────────────────────────────

    /// Exactly one character, whatever its width.
    fn unknown(&mut self, start: usize) -> RawToken {
        self.cursor.advance_char();
        self.token(RawTag::Unknown, start)
    }
}

/// Check if a byte can continue an identifier.
#[inline]
fn is_ident_continue(b: u8, dollar: bool) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || (dollar && b == b'$')
}
