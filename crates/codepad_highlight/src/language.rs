//! The catalog of highlightable languages.

use std::fmt;
use std::path::Path;

use codepad_lexer_core::ScanRules;

use crate::Profile;

/// A language the highlighter has rules for.
///
/// Anything the editor labels with an unknown name is highlighted with the
/// JavaScript rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    JavaScript,
    Python,
    Java,
    Cpp,
    Html,
    Css,
    Xml,
    Json,
}

impl Language {
    /// Every language, in the order the new-file picker lists them.
    pub const ALL: [Language; 8] = [
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Html,
        Language::Css,
        Language::Xml,
        Language::Json,
    ];

    /// Resolve a language name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`Language::JavaScript`].
    pub fn from_name(name: &str) -> Language {
        match name.trim().to_ascii_lowercase().as_str() {
            "python" => Self::Python,
            "java" => Self::Java,
            "cpp" => Self::Cpp,
            "html" => Self::Html,
            "css" => Self::Css,
            "xml" => Self::Xml,
            "json" => Self::Json,
            _ => Self::JavaScript,
        }
    }

    /// Resolve a file extension (with or without the leading dot).
    pub fn from_extension(ext: &str) -> Option<Language> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "js" | "jsx" | "ts" | "tsx" => Some(Self::JavaScript),
            "py" => Some(Self::Python),
            "java" => Some(Self::Java),
            "cpp" | "cc" | "cxx" | "h" | "hpp" => Some(Self::Cpp),
            "html" | "htm" => Some(Self::Html),
            "css" | "scss" | "less" => Some(Self::Css),
            "xml" | "svg" => Some(Self::Xml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Resolve a language from a file name such as `untitled.js`.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Language> {
        let ext = path.as_ref().extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::Html => "html",
            Self::Css => "css",
            Self::Xml => "xml",
            Self::Json => "json",
        }
    }

    /// Scan rules for this language under `profile`.
    ///
    /// `#` comments apply to Python in both profiles. Markup tags are an
    /// advanced-profile rule because the basic kind set has no `tag`.
    pub(crate) fn scan_rules(self, profile: Profile) -> ScanRules {
        let mut rules = profile.scan_rules();
        if self == Self::Python {
            rules |= ScanRules::HASH_COMMENTS;
        }
        if profile.is_advanced() && matches!(self, Self::Html | Self::Xml) {
            rules |= ScanRules::MARKUP_TAGS;
        }
        rules
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
