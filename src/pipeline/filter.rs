//! Token-level case folding and filtering.

use std::collections::HashSet;

use crate::domain::StopwordPolicy;
use crate::tables;

/// Lowercases a token for the given locale.
///
/// Turkish and Azerbaijani map `I` to dotless `ı` and `İ` to `i`; every other
/// locale uses the default Unicode mapping.
pub fn lowercase_token(token: &str, locale: &str) -> String {
    if !uses_turkic_casing(locale) {
        return token.to_lowercase();
    }
    let mut out = String::with_capacity(token.len());
    for c in token.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            other => out.extend(other.to_lowercase()),
        }
    }
    out
}

fn uses_turkic_casing(locale: &str) -> bool {
    matches!(primary_subtag(locale).as_str(), "tr" | "az")
}

fn primary_subtag(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// `true` for a non-empty token made only of ASCII digits.
pub fn is_ascii_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Stopwords in effect for one call.
#[derive(Debug)]
pub enum Stopwords {
    Builtin(&'static HashSet<&'static str>),
    Custom(HashSet<String>),
}

impl Stopwords {
    /// Resolves the policy against the locale; `None` means no filtering.
    pub fn resolve(policy: &StopwordPolicy, locale: &str) -> Option<Self> {
        match policy {
            StopwordPolicy::Off => None,
            StopwordPolicy::List(words) => Some(Self::Custom(
                words.iter().map(|w| w.to_lowercase()).collect(),
            )),
            StopwordPolicy::Auto if locale.to_ascii_lowercase().starts_with("en") => {
                Some(Self::Builtin(tables::english_stopwords()))
            }
            StopwordPolicy::Auto => None,
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        match self {
            Self::Builtin(set) => set.contains(token),
            Self::Custom(set) => set.contains(token),
        }
    }
}

/// Drops stopwords, then collapses adjacent duplicates ("the the cat").
///
/// Only neighbours are deduplicated; a word repeated later in the text stays.
pub fn semantic_filter(tokens: &mut Vec<String>, stopwords: Option<&Stopwords>) {
    if let Some(stopwords) = stopwords {
        tokens.retain(|t| !stopwords.contains(t));
    }
    tokens.dedup();
}
