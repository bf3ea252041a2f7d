//! Token cooking layer.
//!
//! Turns `(RawTag, len)` pairs from the raw scanner into [`TokenKind`]s:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → TokenKind
//! ```
//!
//! Everything except identifiers maps 1:1. Identifiers go through, in
//! order: keyword table, builtin table (advanced), leading uppercase
//! (advanced), `(` lookahead, and finally the profile's fallback kind.

use codepad_lexer_core::RawTag;

use crate::keywords;
use crate::{Language, Profile, TokenKind};

/// Classifies raw tokens for one language and profile.
///
/// Stateless with respect to individual tokens: each `cook()` call is
/// independent.
pub(crate) struct TokenCooker<'src> {
    source: &'src [u8],
    language: Language,
    profile: Profile,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src [u8], language: Language, profile: Profile) -> Self {
        Self {
            source,
            language,
            profile,
        }
    }

    /// Cook a single raw token.
    ///
    /// `text` is the token's source text and `end` the byte offset just past
    /// it, used for the `(` lookahead.
    pub(crate) fn cook(&self, tag: RawTag, text: &str, end: usize) -> TokenKind {
        match tag {
            RawTag::Ident => self.identifier(text, end),
            RawTag::Number => TokenKind::Number,
            RawTag::String | RawTag::UnterminatedString => TokenKind::String,
            RawTag::Markup | RawTag::UnterminatedMarkup => TokenKind::Tag,
            RawTag::LineComment | RawTag::BlockComment | RawTag::UnterminatedBlockComment => {
                TokenKind::Comment
            }
            RawTag::Operator => TokenKind::Operator,
            RawTag::Punctuation => TokenKind::Punctuation,
            RawTag::Whitespace | RawTag::Unknown | RawTag::Eof => TokenKind::Default,
        }
    }

    fn identifier(&self, text: &str, end: usize) -> TokenKind {
        let advanced = self.profile.is_advanced();
        if keywords::is_keyword(self.language, self.profile, text) {
            TokenKind::Keyword
        } else if advanced && keywords::is_builtin(self.language, text) {
            TokenKind::Function
        } else if advanced && text.as_bytes().first().is_some_and(u8::is_ascii_uppercase) {
            TokenKind::Class
        } else if self.source.get(end) == Some(&b'(') {
            TokenKind::Function
        } else if advanced {
            TokenKind::Variable
        } else {
            TokenKind::Default
        }
    }
}
