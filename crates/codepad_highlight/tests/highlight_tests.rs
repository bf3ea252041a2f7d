//! End-to-end tests through the public API.
//!
//! Covers the starter templates, the documented tokenization examples,
//! color resolution for produced tokens, and the JSON shape renderers see.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use codepad_highlight::{
    color_for, highlight, tokenize, Language, Profile, Theme, Token, TokenKind,
};
use pretty_assertions::assert_eq;

const PROFILES: [Profile; 2] = [Profile::Basic, Profile::Advanced];

fn joined(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

fn pairs<'a>(tokens: &[Token<'a>]) -> Vec<(&'a str, TokenKind)> {
    tokens.iter().map(|t| (t.text, t.kind)).collect()
}

// -- Templates --

#[test]
fn templates_round_trip_in_every_profile() {
    for language in Language::ALL {
        for profile in PROFILES {
            let source = language.template();
            let tokens = tokenize(source, language, profile);
            assert_eq!(joined(&tokens), source, "{language} / {profile}");
            assert!(tokens.iter().all(|t| !t.text.is_empty()));
        }
    }
}

#[test]
fn templates_are_nonempty_and_end_with_newline() {
    for language in Language::ALL {
        assert!(language.template().ends_with('\n'), "{language}");
    }
}

#[test]
fn javascript_template_highlights_hello_function() {
    let tokens = tokenize(Language::JavaScript.template(), Language::JavaScript, Profile::Advanced);
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].text, "// JavaScript Template");
    assert!(tokens.contains(&Token { text: "function", kind: TokenKind::Keyword }));
    assert!(tokens.contains(&Token { text: "hello", kind: TokenKind::Function }));
    assert!(tokens.contains(&Token { text: "'Hello, World!'", kind: TokenKind::String }));
}

#[test]
fn python_template_comment_and_keywords() {
    let tokens = tokenize(Language::Python.template(), Language::Python, Profile::Advanced);
    assert_eq!(tokens[0].text, "# Python Template");
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert!(tokens.contains(&Token { text: "def", kind: TokenKind::Keyword }));
    assert!(tokens.contains(&Token { text: "print", kind: TokenKind::Function }));
}

#[test]
fn html_template_tags() {
    let tokens = tokenize(Language::Html.template(), Language::Html, Profile::Advanced);
    assert!(tokens.contains(&Token { text: "<head>", kind: TokenKind::Tag }));
    assert!(tokens.contains(&Token { text: "</html>", kind: TokenKind::Tag }));
}

// -- Documented examples --

#[test]
fn const_is_a_keyword() {
    let tokens = tokenize("const x = 5;", Language::JavaScript, Profile::Basic);
    assert_eq!(tokens[0], Token { text: "const", kind: TokenKind::Keyword });
}

#[test]
fn escaped_quote_stays_inside_string() {
    let tokens = tokenize(r#""a\"b""#, Language::JavaScript, Profile::Basic);
    assert_eq!(pairs(&tokens), vec![(r#""a\"b""#, TokenKind::String)]);
}

#[test]
fn call_is_function_in_basic_profile() {
    let tokens = tokenize("console.log('x');", Language::JavaScript, Profile::Basic);
    assert_eq!(
        pairs(&tokens[..3]),
        vec![
            ("console", TokenKind::Default),
            (".", TokenKind::Operator),
            ("log", TokenKind::Function),
        ]
    );
}

#[test]
fn strict_equality_splits_into_two_operators() {
    let tokens = tokenize("a === b", Language::JavaScript, Profile::Advanced);
    let ops: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.text)
        .collect();
    assert_eq!(ops, vec!["==", "="]);
}

#[test]
fn unterminated_block_comment_is_one_token() {
    for profile in PROFILES {
        let tokens = tokenize("/* never closes", Language::JavaScript, profile);
        assert_eq!(pairs(&tokens), vec![("/* never closes", TokenKind::Comment)]);
    }
}

#[test]
fn comment_closed_by_opener_star() {
    let tokens = tokenize("/*/ x */", Language::JavaScript, Profile::Advanced);
    assert_eq!(
        pairs(&tokens),
        vec![
            ("/*/", TokenKind::Comment),
            (" ", TokenKind::Default),
            ("x", TokenKind::Variable),
            (" ", TokenKind::Default),
            ("*", TokenKind::Operator),
            ("/", TokenKind::Operator),
        ]
    );
}

#[test]
fn empty_input_yields_no_tokens() {
    for language in Language::ALL {
        for profile in PROFILES {
            assert!(tokenize("", language, profile).is_empty());
        }
    }
}

#[test]
fn tokenize_is_deterministic() {
    let source = Language::Java.template();
    let first = tokenize(source, Language::Java, Profile::Advanced);
    let second = tokenize(source, Language::Java, Profile::Advanced);
    assert_eq!(first, second);
}

#[test]
fn unknown_language_name_uses_javascript_rules() {
    let language = Language::from_name("cobol");
    assert_eq!(
        tokenize("let x", language, Profile::Advanced),
        tokenize("let x", Language::JavaScript, Profile::Advanced)
    );
}

// -- Colors --

#[test]
fn highlight_attaches_theme_colors() {
    for theme in [Theme::Light, Theme::Dark] {
        for styled in highlight(Language::Css.template(), Language::Css, theme) {
            assert_eq!(styled.color, color_for(styled.kind, theme));
        }
    }
}

#[test]
fn highlight_matches_advanced_tokenize() {
    let source = Language::Cpp.template();
    let plain = tokenize(source, Language::Cpp, Profile::Advanced);
    let styled = highlight(source, Language::Cpp, Theme::Dark);
    assert_eq!(plain.len(), styled.len());
    for (p, s) in plain.iter().zip(&styled) {
        assert_eq!((p.text, p.kind), (s.text, s.kind));
    }
}

// -- Serialization --

#[test]
fn token_serializes_with_type_field() {
    let token = Token { text: "const", kind: TokenKind::Keyword };
    assert_eq!(
        serde_json::to_string(&token).unwrap(),
        r#"{"text":"const","type":"keyword"}"#
    );
}

#[test]
fn styled_token_serializes_with_color() {
    let tokens = highlight("1", Language::JavaScript, Theme::Light);
    assert_eq!(
        serde_json::to_value(&tokens).unwrap(),
        serde_json::json!([{ "text": "1", "type": "number", "color": "#EA580C" }])
    );
}

#[test]
fn every_kind_serializes_to_its_name() {
    for kind in TokenKind::ALL {
        assert_eq!(serde_json::to_value(kind).unwrap(), serde_json::json!(kind.name()));
    }
}
