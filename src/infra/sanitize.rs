//! Character sanitization, separator handling and truncation of joined slugs.

use super::chars::{is_letter_or_number, is_mark, is_path_separator};
use crate::domain::Alphabet;

/// Replaces every run of `/` or `\` with a single `sep`.
pub fn replace_path_separators(s: &str, sep: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if is_path_separator(c) {
            if !in_run {
                out.push(sep);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// `true` if `s` contains `/` or `\`.
pub fn contains_path_separator(s: &str) -> bool {
    s.chars().any(is_path_separator)
}

/// Keeps only the characters allowed by `alphabet`, plus `sep`.
///
/// ASCII keeps ASCII letters and digits. Unicode keeps letters and numbers of
/// any script, and a combining mark only while it follows a kept letter,
/// number or mark, so marks never attach across a separator.
pub fn sanitize_strict(s: &str, sep: char, alphabet: Alphabet) -> String {
    let mut out = String::with_capacity(s.len());
    match alphabet {
        Alphabet::Ascii => {
            out.extend(s.chars().filter(|&c| c == sep || c.is_ascii_alphanumeric()));
        }
        Alphabet::Unicode => {
            let mut after_word_char = false;
            for c in s.chars() {
                if c == sep {
                    out.push(c);
                    after_word_char = false;
                } else if is_letter_or_number(c) {
                    out.push(c);
                    after_word_char = true;
                } else if after_word_char && is_mark(c) {
                    out.push(c);
                } else {
                    after_word_char = false;
                }
            }
        }
    }
    out
}

/// Collapses runs of `sep` to one and trims it from both ends.
pub fn collapse_separators(s: &str, sep: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_was_sep = false;
    for c in s.chars() {
        if c == sep {
            if !prev_was_sep {
                out.push(c);
            }
            prev_was_sep = true;
        } else {
            out.push(c);
            prev_was_sep = false;
        }
    }
    out.trim_matches(sep).to_string()
}

/// Shortens `s` to at most `max` characters without splitting a token.
///
/// Cuts at `max` characters, then backs up to the last separator in the cut.
/// If that separator would be the first character, the raw cut is kept.
///
/// # Examples
///
/// ```
/// use slugline::infra::truncate_at_boundary;
///
/// assert_eq!(truncate_at_boundary("alpha-beta-gamma", '-', 12), "alpha-beta");
/// assert_eq!(truncate_at_boundary("alphabet", '-', 5), "alpha");
/// ```
pub fn truncate_at_boundary(s: &str, sep: char, max: usize) -> String {
    let cut = match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => return s.to_string(),
    };
    let cut = match cut.rfind(sep) {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut,
    };
    collapse_separators(cut, sep)
}

/// Empty, `.` or `..`: values that can never be returned as a slug.
pub fn is_unusable(s: &str) -> bool {
    s.is_empty() || s == "." || s == ".."
}
