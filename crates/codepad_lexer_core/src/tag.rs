//! Raw token tags produced by the scanner.
//!
//! Discriminants are grouped into semantic ranges so that category checks
//! compile to a single comparison:
//!
//! | Range   | Category                |
//! |---------|-------------------------|
//! | 0-15    | Words and literals      |
//! | 16-31   | Operators and brackets  |
//! | 32-47   | Trivia                  |
//! | 48      | Unclassified character  |
//! | 240-250 | Unterminated constructs |
//! | 255     | EOF                     |

/// Raw token tag: what kind of lexeme the scanner found, without any
/// language-level interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Words and literals ===
    /// Identifier-shaped word (`[A-Za-z_][A-Za-z0-9_]*`, optionally with `$`).
    Ident = 0,
    /// Permissive numeric run (`1`, `3.14`, `1.2.3`, `0x1e5`).
    Number = 1,
    /// Quoted string, char, or template literal including both quotes.
    String = 2,
    /// Markup tag from `<` through `>`.
    Markup = 3,

    // === Operators and brackets ===
    /// One- or two-character operator.
    Operator = 16,
    /// One of `( ) [ ] { }`.
    Punctuation = 17,

    // === Trivia ===
    /// Run of whitespace characters, newlines included.
    Whitespace = 32,
    /// `//` or `#` comment up to (not including) the newline.
    LineComment = 33,
    /// `/* ... */` comment.
    BlockComment = 34,

    // === Fallback ===
    /// A single character matched by no other rule.
    Unknown = 48,

    // === Unterminated constructs ===
    /// String literal that reached EOF before its closing quote.
    UnterminatedString = 240,
    /// Block comment that reached EOF before `*/`.
    UnterminatedBlockComment = 241,
    /// Markup tag that reached EOF before `>`.
    UnterminatedMarkup = 242,

    // === Control ===
    /// End of input. Always has length 0.
    Eof = 255,
}

impl RawTag {
    /// Returns `true` for constructs that ran into EOF.
    pub fn is_unterminated(self) -> bool {
        (self as u8) >= 240 && self != Self::Eof
    }

    /// Stable lowercase name, used in debug output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "ident",
            Self::Number => "number",
            Self::String => "string",
            Self::Markup => "markup",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
            Self::Whitespace => "whitespace",
            Self::LineComment => "line-comment",
            Self::BlockComment => "block-comment",
            Self::Unknown => "unknown",
            Self::UnterminatedString => "unterminated-string",
            Self::UnterminatedBlockComment => "unterminated-block-comment",
            Self::UnterminatedMarkup => "unterminated-markup",
            Self::Eof => "eof",
        }
    }
}

/// A raw token: tag plus byte length.
///
/// The token's position is implicit: it starts where the previous token
/// ended. Callers that need offsets accumulate `len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    /// What kind of lexeme this is.
    pub tag: RawTag,
    /// Length in bytes. Zero only for [`RawTag::Eof`].
    pub len: usize,
}

#[cfg(test)]
mod tests;
