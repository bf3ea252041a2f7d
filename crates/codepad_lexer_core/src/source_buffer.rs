//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the scanner to detect EOF without explicit bounds checking.
//! The total buffer size is rounded up to the next 64-byte boundary for
//! cache-line alignment, which also provides safe padding for `peek()`
//! near the end of the buffer.
//!
//! The buffer keeps a borrow of the original `&str` so that token text can
//! be handed out with the caller's lifetime rather than the buffer's.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated copy of a source string.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00, padding_zeros...]
///  ^                ^           ^
///  0                |           rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// At least two zero bytes follow the source, so `peek()` from the last
/// source byte and `current()` at EOF both read padding.
#[derive(Clone, Debug)]
pub struct SourceBuffer<'src> {
    /// The original source text.
    source: &'src str,
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
}

impl<'src> SourceBuffer<'src> {
    /// Create a new sentinel-terminated buffer from source text.
    pub fn new(source: &'src str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary, keeping room for the
        // sentinel plus one byte of lookahead.
        let padded_len = (source_len + 2 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self { source, buf }
    }

    /// Returns the original source text.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Create a cursor positioned at the start of the source.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.len())
    }
}
