//! 24-bit ANSI color output.

use std::fmt::Write;

const RESET: &str = "\x1b[0m";

/// Parse `#RRGGBB`.
pub(crate) fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Append `text` to `out` in the given foreground color.
///
/// Whitespace and unparseable colors are written uncolored.
pub(crate) fn paint(out: &mut String, text: &str, color: &str) {
    match hex_to_rgb(color) {
        Some((r, g, b)) if !text.trim().is_empty() => {
            // Writing to a String cannot fail.
            let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{text}{RESET}");
        }
        _ => out.push_str(text),
    }
}
