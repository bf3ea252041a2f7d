use super::*;
use pretty_assertions::assert_eq;

// === RawTag discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Words and literals: 0-15
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::Number as u8, 1);
    assert_eq!(RawTag::String as u8, 2);
    assert_eq!(RawTag::Markup as u8, 3);

    // Operators and brackets: 16-31
    assert_eq!(RawTag::Operator as u8, 16);
    assert_eq!(RawTag::Punctuation as u8, 17);

    // Trivia: 32-47
    assert_eq!(RawTag::Whitespace as u8, 32);
    assert_eq!(RawTag::LineComment as u8, 33);
    assert_eq!(RawTag::BlockComment as u8, 34);

    assert_eq!(RawTag::Unknown as u8, 48);

    // Unterminated: 240+
    assert_eq!(RawTag::UnterminatedString as u8, 240);
    assert_eq!(RawTag::UnterminatedMarkup as u8, 242);

    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}

// === Predicates ===

#[test]
fn unterminated_tags() {
    assert!(RawTag::UnterminatedString.is_unterminated());
    assert!(RawTag::UnterminatedBlockComment.is_unterminated());
    assert!(RawTag::UnterminatedMarkup.is_unterminated());
    assert!(!RawTag::Eof.is_unterminated());
    assert!(!RawTag::String.is_unterminated());
    assert!(!RawTag::Unknown.is_unterminated());
}

#[test]
fn names_are_unique() {
    let tags = [
        RawTag::Ident,
        RawTag::Number,
        RawTag::String,
        RawTag::Markup,
        RawTag::Operator,
        RawTag::Punctuation,
        RawTag::Whitespace,
        RawTag::LineComment,
        RawTag::BlockComment,
        RawTag::Unknown,
        RawTag::UnterminatedString,
        RawTag::UnterminatedBlockComment,
        RawTag::UnterminatedMarkup,
        RawTag::Eof,
    ];
    let mut names: Vec<&str> = tags.iter().map(|t| t.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), tags.len());
}
