//! Unicode character classes needed beyond what `char` offers.
//!
//! General-category checks go through `regex` property classes. A pattern
//! that fails to compile degrades to the closest `char` predicate instead of
//! panicking.

use regex::Regex;
use std::sync::LazyLock;

static LETTER_OR_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[\p{L}\p{N}]$"));

static FORMAT: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^\p{Cf}$"));

/// Compiles a built-in pattern, logging instead of failing.
pub(crate) fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            log::debug!("pattern {pattern:?} unavailable: {err}");
            None
        }
    }
}

fn matches_char(re: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    re.is_match(c.encode_utf8(&mut buf))
}

/// General category L* or N*.
pub fn is_letter_or_number(c: char) -> bool {
    match LETTER_OR_NUMBER.as_ref() {
        Some(re) => matches_char(re, c),
        None => c.is_alphanumeric(),
    }
}

/// General category M* (combining marks).
pub fn is_mark(c: char) -> bool {
    unicode_normalization::char::is_combining_mark(c)
}

/// General category Cf (format characters such as soft hyphen or bidi controls).
pub fn is_format(c: char) -> bool {
    match FORMAT.as_ref() {
        Some(re) => matches_char(re, c),
        None => matches!(
            c,
            '\u{00AD}'
                | '\u{061C}'
                | '\u{200B}'..='\u{200F}'
                | '\u{202A}'..='\u{202E}'
                | '\u{2060}'..='\u{2064}'
                | '\u{2066}'..='\u{206F}'
                | '\u{FEFF}'
                | '\u{E0001}'..='\u{E007F}'
        ),
    }
}

/// Zero-width characters and variation selectors.
pub fn is_zero_width(c: char) -> bool {
    matches!(
        c,
        '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FE00}'..='\u{FE0F}'
            | '\u{E0100}'..='\u{E01EF}'
    )
}

/// `/` or `\`.
pub fn is_path_separator(c: char) -> bool {
    c == '/' || c == '\\'
}
