//! Highlighted tokens.

use serde::Serialize;

use crate::{color_for, Theme, TokenKind};

/// A classified slice of the source.
///
/// `text` is never empty and is a verbatim substring of the input.
/// Serializes as `{"text": ..., "type": ...}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'src> {
    pub text: &'src str,
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

impl<'src> Token<'src> {
    /// Attach the `theme` color for this token's kind.
    pub fn styled(self, theme: Theme) -> StyledToken<'src> {
        StyledToken {
            text: self.text,
            kind: self.kind,
            color: color_for(self.kind, theme),
        }
    }
}

/// A token with its resolved display color.
///
/// Serializes as `{"text": ..., "type": ..., "color": "#RRGGBB"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct StyledToken<'src> {
    pub text: &'src str,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub color: &'static str,
}
