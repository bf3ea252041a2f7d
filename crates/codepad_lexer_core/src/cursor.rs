//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the position reaches the source length, where the sentinel byte
//! (`0x00`) lives. Interior null bytes (U+0000 inside the source) also read
//! as `0x00`; [`Cursor::is_eof`] tells them apart by position.
//!
//! All multi-byte movement goes through [`Cursor::advance_char`] so the
//! position always lands on a UTF-8 character boundary.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `buf[source_len]` and every byte after it are `0x00`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: usize,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: usize) -> Self {
        debug_assert!(
            source_len + 1 < buf.len(),
            "sentinel and lookahead byte must be within buffer bounds"
        );
        debug_assert!(buf[source_len] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF (the sentinel byte) and on interior nulls.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Reads padding (`0x00`) when the current byte is the last source byte
    /// or the sentinel.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos + 1]
    }

    /// Decode the character starting at the current position.
    ///
    /// Returns `None` at EOF.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let end = (self.pos + Self::utf8_char_width(self.current())).min(self.source_len);
        std::str::from_utf8(&self.buf[self.pos..end])
            .ok()
            .and_then(|s| s.chars().next())
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos]) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    ///
    /// Never moves past the end of the source.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    /// Advance past a run of whitespace characters.
    ///
    /// ASCII whitespace (space, tab, `\n`, `\r`, vertical tab, form feed) is
    /// matched bytewise; non-ASCII bytes are decoded and tested against
    /// [`is_non_ascii_space`]. The sentinel is not whitespace, so the loop
    /// stops at EOF.
    pub fn eat_whitespace(&mut self) {
        loop {
            match self.current() {
                b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => self.pos += 1,
                0x80..=0xFF if self.current_char().is_some_and(is_non_ascii_space) => {
                    self.advance_char();
                }
                _ => break,
            }
        }
    }

    /// Returns `true` if the character at the current position is whitespace.
    pub fn at_whitespace(&self) -> bool {
        match self.current() {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => true,
            0x80..=0xFF => self.current_char().is_some_and(is_non_ascii_space),
            _ => false,
        }
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// The newline itself is not consumed.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos..self.source_len];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past the next `*/`, consuming it.
    ///
    /// Returns `false` and positions the cursor at EOF if no `*/` remains.
    pub fn eat_through_block_comment_end(&mut self) -> bool {
        let remaining = &self.buf[self.pos..self.source_len];
        if let Some(offset) = memchr::memmem::find(remaining, b"*/") {
            self.pos += offset + 2;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Advance past the next occurrence of `byte`, consuming it.
    ///
    /// Returns `false` and positions the cursor at EOF if `byte` does not
    /// occur in the rest of the source. `byte` must be ASCII.
    pub fn eat_through(&mut self, byte: u8) -> bool {
        debug_assert!(byte.is_ascii(), "eat_through needle must be ASCII");
        let remaining = &self.buf[self.pos..self.source_len];
        if let Some(offset) = memchr::memchr(byte, remaining) {
            self.pos += offset + 1;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Advance past ordinary string content to the next `quote` or `\`.
    ///
    /// Returns the byte found, or `0` at EOF. `quote` must be ASCII; ASCII
    /// bytes never occur inside multi-byte UTF-8 sequences, so the cursor
    /// stays on a character boundary.
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let remaining = &self.buf[self.pos..self.source_len];
        if let Some(offset) = memchr::memchr2(quote, b'\\', remaining) {
            self.pos += offset;
            self.buf[self.pos]
        } else {
            self.pos = self.source_len;
            0
        }
    }
}

/// Non-ASCII whitespace: the Unicode space separators, the line and
/// paragraph separators, and the byte order mark.
///
/// Differs from [`char::is_whitespace`]: U+FEFF is included and U+0085
/// (NEXT LINE) is not.
fn is_non_ascii_space(c: char) -> bool {
    matches!(
        c,
        '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
