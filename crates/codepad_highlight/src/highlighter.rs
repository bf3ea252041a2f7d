//! Lazy token stream over a source buffer.

use std::iter::FusedIterator;

use codepad_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::cooker::TokenCooker;
use crate::{Language, Profile, Token};

/// A language and profile pair, ready to tokenize any number of buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Highlighter {
    language: Language,
    profile: Profile,
}

impl Highlighter {
    /// Highlighter for `language` under `profile`.
    pub fn new(language: Language, profile: Profile) -> Self {
        Self { language, profile }
    }

    /// Language whose keyword tables and scan rules are used.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Classification profile.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Stream tokens from `buf` on demand.
    ///
    /// Token text borrows from the buffer's original source, so tokens may
    /// outlive the buffer itself.
    pub fn tokens<'b, 'src>(&self, buf: &'b SourceBuffer<'src>) -> Tokens<'b, 'src> {
        let source = buf.source();
        let rules = self.language.scan_rules(self.profile);
        Tokens {
            scanner: RawScanner::new(buf.cursor(), rules),
            cooker: TokenCooker::new(source.as_bytes(), self.language, self.profile),
            source,
        }
    }
}

/// Iterator returned by [`Highlighter::tokens`].
pub struct Tokens<'b, 'src> {
    scanner: RawScanner<'b>,
    cooker: TokenCooker<'src>,
    source: &'src str,
}

impl<'src> Iterator for Tokens<'_, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        let start = self.scanner.pos();
        let raw = self.scanner.next_token();
        if raw.tag == RawTag::Eof {
            return None;
        }
        let end = start + raw.len;

        if raw.tag.is_unterminated() {
            tracing::trace!(
                tag = raw.tag.name(),
                start,
                end,
                "unterminated construct runs to end of input"
            );
        }

        let text = &self.source[start..end];
        Some(Token {
            text,
            kind: self.cooker.cook(raw.tag, text, end),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len() - self.scanner.pos();
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Tokens<'_, '_> {}
