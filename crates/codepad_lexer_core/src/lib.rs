//! Low-level raw scanner for the codepad syntax highlighter.
//!
//! Splits source text into `(RawTag, len)` pairs without resolving keywords,
//! builtins, or colors. The highlighting layer (`codepad_highlight`) slices
//! the original source by these lengths and classifies each piece.
//!
//! ```text
//! &str → SourceBuffer → Cursor → RawScanner → (RawTag, len)
//! ```
//!
//! Every byte of the input is covered by exactly one raw token, and every
//! token boundary falls on a UTF-8 character boundary. The scanner never
//! fails: unterminated constructs are encoded as error tags that still carry
//! their full length.

mod cursor;
mod raw_scanner;
mod rules;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use rules::ScanRules;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
