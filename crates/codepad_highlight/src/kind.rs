//! Semantic token types.

use std::fmt;

use serde::Serialize;

/// What a token means for coloring purposes.
///
/// The basic profile only produces `Keyword`, `String`, `Number`, `Comment`,
/// `Function`, `Operator` and `Default`. `Property` and `Attribute` are never
/// produced by the scanner; they exist so renderers that do finer
/// classification share one palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    String,
    Number,
    Comment,
    Function,
    Operator,
    Variable,
    Class,
    Property,
    Tag,
    Attribute,
    Punctuation,
    Default,
}

impl TokenKind {
    /// Every kind, in palette order.
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Keyword,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Comment,
        TokenKind::Function,
        TokenKind::Variable,
        TokenKind::Class,
        TokenKind::Property,
        TokenKind::Tag,
        TokenKind::Attribute,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Default,
    ];

    /// Lowercase name used by renderers (`"keyword"`, `"punctuation"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::String => "string",
            Self::Number => "number",
            Self::Comment => "comment",
            Self::Function => "function",
            Self::Operator => "operator",
            Self::Variable => "variable",
            Self::Class => "class",
            Self::Property => "property",
            Self::Tag => "tag",
            Self::Attribute => "attribute",
            Self::Punctuation => "punctuation",
            Self::Default => "default",
        }
    }

    /// Look up a kind by its lowercase name.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
