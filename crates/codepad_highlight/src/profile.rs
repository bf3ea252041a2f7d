//! Classification profiles.

use std::fmt;
use std::str::FromStr;

use codepad_lexer_core::ScanRules;

/// How fine-grained classification is.
///
/// Both profiles share one scan loop; the profile only toggles scan rules
/// and the identifier fallbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Seven kinds: keyword, string, number, comment, function, operator,
    /// default. Brackets and markup are plain text.
    Basic,
    /// The full kind set: builtins, classes, variables, markup tags,
    /// punctuation, `$` identifiers, and hex/exponent numbers.
    #[default]
    Advanced,
}

impl Profile {
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
        }
    }

    /// Rules this profile adds on top of the language's own.
    pub(crate) fn scan_rules(self) -> ScanRules {
        match self {
            Self::Basic => ScanRules::empty(),
            Self::Advanced => {
                ScanRules::DOLLAR_IDENTS | ScanRules::NUMBER_LETTERS | ScanRules::PUNCTUATION
            }
        }
    }

    pub fn is_advanced(self) -> bool {
        self == Self::Advanced
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A profile name other than `basic` or `advanced`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown profile `{0}` (expected `basic` or `advanced`)")]
pub struct ParseProfileError(pub String);

impl FromStr for Profile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ParseProfileError(s.to_owned())),
        }
    }
}
