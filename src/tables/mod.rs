//! Static lookup tables: transliteration maps, symbol and emoji names,
//! stopwords, reserved names.
//!
//! The tables are built once per process on first use and never mutated, so
//! every lookup is safe to call from any thread.

mod emoji;
mod scripts;
mod stopwords;
mod symbols;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::domain::SymbolsPolicy;

static LATIN_SPECIAL: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| scripts::LATIN_SPECIAL.iter().copied().collect());

static GREEK: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| scripts::GREEK.iter().copied().collect());

static CYRILLIC: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| scripts::CYRILLIC.iter().copied().collect());

static SYMBOLS_EXTENDED: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
    symbols::BASIC
        .iter()
        .chain(symbols::EXTENDED_ONLY)
        .copied()
        .collect()
});

static STOPWORDS_EN: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| stopwords::ENGLISH.iter().copied().collect());

/// Names no slug may equal without disambiguation.
const RESERVED_DEFAULT: &[&str] = &[
    ".", "..", "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7",
    "com8", "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// ASCII for Latin letters that have no canonical decomposition (`ß`, `ø`, `þ`...).
/// Keys are lowercase.
pub fn latin_special(c: char) -> Option<&'static str> {
    LATIN_SPECIAL.get(&c).copied()
}

/// ASCII for a lowercase Greek letter.
pub fn greek(c: char) -> Option<&'static str> {
    GREEK.get(&c).copied()
}

/// ASCII for a lowercase Cyrillic letter. Hard and soft signs map to `""`.
pub fn cyrillic(c: char) -> Option<&'static str> {
    CYRILLIC.get(&c).copied()
}

/// Symbol-to-word pairs for the given policy, in application order.
pub fn symbols(policy: SymbolsPolicy) -> &'static [(&'static str, &'static str)] {
    match policy {
        SymbolsPolicy::Off => &[],
        SymbolsPolicy::Basic => symbols::BASIC,
        SymbolsPolicy::Extended => SYMBOLS_EXTENDED.as_slice(),
    }
}

/// Emoji-to-name pairs, multi-codepoint sequences first.
pub fn emoji_names() -> &'static [(&'static str, &'static str)] {
    emoji::NAMES
}

/// The built-in English stopword set.
pub fn english_stopwords() -> &'static HashSet<&'static str> {
    &STOPWORDS_EN
}

/// Built-in reserved names, including `.` and `..`.
pub fn default_reserved() -> &'static [&'static str] {
    RESERVED_DEFAULT
}
