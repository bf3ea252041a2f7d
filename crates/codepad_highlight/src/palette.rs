//! Theme palettes: the `(TokenKind, Theme) → color` mapping.
//!
//! Colors are `#RRGGBB` strings so they can be handed straight to a
//! rendering layer. The mapping is total over [`TokenKind`].

use std::fmt;
use std::str::FromStr;

use crate::TokenKind;

/// Light palette.
mod light {
    pub(super) const KEYWORD: &str = "#D946EF"; // Fuchsia
    pub(super) const STRING: &str = "#16A34A"; // Green
    pub(super) const NUMBER: &str = "#EA580C"; // Orange
    pub(super) const COMMENT: &str = "#6B7280"; // Gray
    pub(super) const FUNCTION: &str = "#0891B2"; // Cyan
    pub(super) const CLASS: &str = "#7C3AED"; // Violet
    pub(super) const TAG: &str = "#DC2626"; // Red
    pub(super) const TEXT: &str = "#1A1A1A"; // Near-black
}

/// Dark palette.
mod dark {
    pub(super) const KEYWORD: &str = "#EC4899"; // Pink
    pub(super) const STRING: &str = "#4ADE80"; // Green
    pub(super) const NUMBER: &str = "#FB923C"; // Orange
    pub(super) const COMMENT: &str = "#9CA3AF"; // Gray
    pub(super) const FUNCTION: &str = "#06B6D4"; // Cyan
    pub(super) const CLASS: &str = "#C084FC"; // Purple
    pub(super) const TAG: &str = "#F87171"; // Red
    pub(super) const TEXT: &str = "#F1F5F9"; // Near-white
}

/// Editor color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Map the editor's dark-mode flag to a theme.
    pub fn from_is_dark(is_dark: bool) -> Theme {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A theme name other than `light` or `dark`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}` (expected `light` or `dark`)")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseThemeError(s.to_owned())),
        }
    }
}

/// Display color for `kind` under `theme`.
pub fn color_for(kind: TokenKind, theme: Theme) -> &'static str {
    match theme {
        Theme::Light => match kind {
            TokenKind::Keyword => light::KEYWORD,
            TokenKind::String => light::STRING,
            TokenKind::Number => light::NUMBER,
            TokenKind::Comment => light::COMMENT,
            TokenKind::Function | TokenKind::Property => light::FUNCTION,
            TokenKind::Class | TokenKind::Attribute => light::CLASS,
            TokenKind::Tag => light::TAG,
            TokenKind::Variable
            | TokenKind::Operator
            | TokenKind::Punctuation
            | TokenKind::Default => light::TEXT,
        },
        Theme::Dark => match kind {
            TokenKind::Keyword => dark::KEYWORD,
            TokenKind::String => dark::STRING,
            TokenKind::Number => dark::NUMBER,
            TokenKind::Comment => dark::COMMENT,
            TokenKind::Function | TokenKind::Property => dark::FUNCTION,
            TokenKind::Class | TokenKind::Attribute => dark::CLASS,
            TokenKind::Tag => dark::TAG,
            TokenKind::Variable
            | TokenKind::Operator
            | TokenKind::Punctuation
            | TokenKind::Default => dark::TEXT,
        },
    }
}

/// Display color for a kind given by name.
///
/// Unknown names get the theme's `default` color.
pub fn color_for_name(name: &str, theme: Theme) -> &'static str {
    let kind = TokenKind::from_name(name).unwrap_or(TokenKind::Default);
    color_for(kind, theme)
}
