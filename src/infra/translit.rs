//! ASCII transliteration of single tokens.

use unicode_normalization::UnicodeNormalization;

use super::chars::is_mark;
use crate::domain::UnknownPolicy;
use crate::tables;

/// ASCII sub-tokens produced from one input token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transliteration {
    pub tokens: Vec<String>,
    /// Whether any character was emitted as a `u<hex>` token
    pub hex_encoded: bool,
}

/// Converts a token to zero or more ASCII-only sub-tokens.
///
/// The token is NFKD-decomposed and stripped of combining marks. Each
/// remaining character is looked up in the Latin-special, Greek and Cyrillic
/// maps (in that order, case-insensitively); plain ASCII letters and digits
/// pass through unchanged. Any other character ends the current sub-token;
/// under [`UnknownPolicy::Hex`] a non-ASCII one also becomes its own
/// `u<hex codepoint>` sub-token.
///
/// # Examples
///
/// ```
/// use slugline::domain::UnknownPolicy;
/// use slugline::infra::transliterate;
///
/// assert_eq!(transliterate("straße", UnknownPolicy::Hex).tokens, vec!["strasse"]);
/// assert_eq!(transliterate("a你b", UnknownPolicy::Hex).tokens, vec!["a", "u4f60", "b"]);
/// assert_eq!(transliterate("a你b", UnknownPolicy::Drop).tokens, vec!["a", "b"]);
/// ```
pub fn transliterate(token: &str, unknown: UnknownPolicy) -> Transliteration {
    let mut out = Transliteration::default();
    let mut buf = String::new();

    for c in token.nfkd().filter(|c| !is_mark(*c)) {
        let lower = single_lowercase(c);
        let mapped = tables::latin_special(lower)
            .or_else(|| tables::greek(lower))
            .or_else(|| tables::cyrillic(lower));

        if let Some(ascii) = mapped {
            buf.push_str(ascii);
        } else if c.is_ascii_alphanumeric() {
            buf.push(c);
        } else {
            flush(&mut buf, &mut out.tokens);
            if !c.is_ascii() && unknown == UnknownPolicy::Hex {
                out.tokens.push(format!("u{:x}", u32::from(c)));
                out.hex_encoded = true;
            }
        }
    }

    flush(&mut buf, &mut out.tokens);
    out
}

fn flush(buf: &mut String, tokens: &mut Vec<String>) {
    if !buf.is_empty() {
        tokens.push(std::mem::take(buf));
    }
}

/// Lowercase form of `c` when it is a single character, `c` itself otherwise.
fn single_lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
