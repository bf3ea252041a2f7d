//! Property-based tests for tokenization.
//!
//! For arbitrary input, every language and profile must produce non-empty
//! tokens whose concatenation is the input, deterministically.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use codepad_highlight::{color_for, tokenize, Language, Profile, Theme, TokenKind};
use proptest::prelude::*;

fn any_language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn any_profile() -> impl Strategy<Value = Profile> {
    prop::sample::select(vec![Profile::Basic, Profile::Advanced])
}

/// Code-shaped text: dense in the characters that start or end constructs.
fn code_like() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_$ \t\n\r\"'`\\\\/*#<>=!&|+\\-.,;:(){}\\[\\]é😀\u{00A0}]{0,96}"
}

proptest! {
    #[test]
    fn lossless_on_arbitrary_strings(
        source in any::<String>(),
        language in any_language(),
        profile in any_profile(),
    ) {
        let tokens = tokenize(&source, language, profile);
        prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
        let joined: String = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(joined, source);
    }

    #[test]
    fn lossless_on_code_like_text(
        source in code_like(),
        language in any_language(),
        profile in any_profile(),
    ) {
        let tokens = tokenize(&source, language, profile);
        let joined: String = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(joined, source.clone());
        prop_assert_eq!(tokenize(&source, language, profile), tokens);
    }

    #[test]
    fn basic_profile_kinds_are_restricted(source in code_like(), language in any_language()) {
        for token in tokenize(&source, language, Profile::Basic) {
            prop_assert!(matches!(
                token.kind,
                TokenKind::Keyword
                    | TokenKind::String
                    | TokenKind::Number
                    | TokenKind::Comment
                    | TokenKind::Function
                    | TokenKind::Operator
                    | TokenKind::Default
            ), "unexpected {:?} for {:?}", token.kind, token.text);
        }
    }

    #[test]
    fn every_token_resolves_to_a_color(source in code_like(), language in any_language()) {
        for token in tokenize(&source, language, Profile::Advanced) {
            for theme in [Theme::Light, Theme::Dark] {
                prop_assert!(color_for(token.kind, theme).starts_with('#'));
            }
        }
    }
}
