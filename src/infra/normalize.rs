//! Character-level input normalization.

use unicode_normalization::UnicodeNormalization;

use super::chars::{is_format, is_path_separator, is_zero_width};

/// Canonicalizes raw input before any script-aware processing.
///
/// - NFKC
/// - dash variants become `-`, curly quotes become `'` and `"`
/// - control characters (U+0000..U+001F, U+007F) become spaces
/// - zero-width characters, variation selectors and Cf characters are removed
/// - `/` and `\` become spaces
/// - whitespace runs collapse to one space; the ends are trimmed
///
/// # Examples
///
/// ```
/// use slugline::infra::normalize;
///
/// assert_eq!(normalize("  “Hello” — world/again  "), "\"Hello\" - world again");
/// ```
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.nfkc() {
        match c {
            '\u{2010}'..='\u{2015}' | '\u{2043}' | '\u{2212}' => out.push('-'),
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => out.push('"'),
            '\u{0000}'..='\u{001F}' | '\u{007F}' => out.push(' '),
            c if is_path_separator(c) => out.push(' '),
            c if is_zero_width(c) || is_format(c) => {}
            c => out.push(c),
        }
    }
    collapse_whitespace(&out)
}

/// Collapses whitespace runs to a single ASCII space and trims the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
