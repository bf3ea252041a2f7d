//! Per-language scanning switches.

use bitflags::bitflags;

bitflags! {
    /// Optional lexical rules layered on top of the shared scan.
    ///
    /// The empty set is the plain C-family scan: `//` and `/* */` comments,
    /// quoted strings, digit-and-dot numbers, `[A-Za-z_]` identifiers, and
    /// operators. Brackets fall through to [`RawTag::Unknown`](crate::RawTag::Unknown).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ScanRules: u8 {
        /// `#` starts a line comment (Python).
        const HASH_COMMENTS = 1 << 0;
        /// `<` starts a markup tag that runs through `>` (HTML, XML).
        const MARKUP_TAGS = 1 << 1;
        /// `$` is an identifier character.
        const DOLLAR_IDENTS = 1 << 2;
        /// `x`, `X`, `e`, `E` continue a number (`0x1F`, `1e10`).
        const NUMBER_LETTERS = 1 << 3;
        /// `( ) [ ] { }` scan as [`RawTag::Punctuation`](crate::RawTag::Punctuation).
        const PUNCTUATION = 1 << 4;
    }
}
