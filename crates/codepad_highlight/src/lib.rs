//! Syntax highlighting for the codepad editor.
//!
//! Classifies source text into typed tokens for a fixed catalog of
//! languages and maps each token type to a theme color.
//!
//! # Architecture
//!
//! ```text
//! &str → SourceBuffer → RawScanner → (RawTag, len) → TokenCooker → Token
//!                                                                    ↓
//!                                                        color_for(kind, theme)
//! ```
//!
//! The raw scanner (`codepad_lexer_core`) only finds lexeme boundaries. This
//! crate picks the scan rules for a [`Language`] and [`Profile`], resolves
//! identifiers against per-language keyword and builtin tables, and owns the
//! light and dark palettes.
//!
//! Everything here is total: empty input yields no tokens, unknown language
//! names fall back to JavaScript, and malformed input degrades into coarse
//! comment/string/default tokens. Concatenating the text of the returned
//! tokens always reproduces the input.
//!
//! ```
//! use codepad_highlight::{tokenize, Language, Profile, TokenKind};
//!
//! let tokens = tokenize("const x = 5;", Language::JavaScript, Profile::Basic);
//! assert_eq!(tokens[0].text, "const");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! ```

mod cooker;
mod highlighter;
mod keywords;
mod kind;
mod language;
mod palette;
mod profile;
mod templates;
mod token;

pub use codepad_lexer_core::SourceBuffer;
pub use highlighter::{Highlighter, Tokens};
pub use kind::TokenKind;
pub use language::Language;
pub use palette::{color_for, color_for_name, ParseThemeError, Theme};
pub use profile::{ParseProfileError, Profile};
pub use token::{StyledToken, Token};

/// Tokenize `source` as `language` under the given profile.
///
/// Never fails. The returned tokens borrow from `source`.
#[tracing::instrument(level = "trace", skip_all, fields(%language, %profile, len = source.len()))]
pub fn tokenize(source: &str, language: Language, profile: Profile) -> Vec<Token<'_>> {
    let buf = SourceBuffer::new(source);
    let tokens: Vec<Token<'_>> = Highlighter::new(language, profile).tokens(&buf).collect();
    tracing::debug!(count = tokens.len(), "tokenized");
    tokens
}

/// Tokenize `source` with the advanced profile and attach `theme` colors.
///
/// This is what the editor view paints from.
#[tracing::instrument(level = "trace", skip_all, fields(%language, %theme, len = source.len()))]
pub fn highlight(source: &str, language: Language, theme: Theme) -> Vec<StyledToken<'_>> {
    let buf = SourceBuffer::new(source);
    let tokens: Vec<StyledToken<'_>> = Highlighter::new(language, Profile::Advanced)
        .tokens(&buf)
        .map(|token| token.styled(theme))
        .collect();
    tracing::debug!(count = tokens.len(), "highlighted");
    tokens
}
