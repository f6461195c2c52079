//! Text rewrites applied between normalization and segmentation.

use regex::Regex;
use std::sync::LazyLock;

use super::chars::compile;
use super::normalize::collapse_whitespace;
use crate::domain::{Alphabet, EmojiPolicy, SymbolsPolicy};
use crate::tables;

/// Technology shorthand and its spelled-out form. Applied in order.
static TECH_TERMS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)c\+\+", " cpp "),
        (r"(?i)c#", " csharp "),
        (r"(?i)f#", " fsharp "),
        (r"(?i)(^|[^\p{L}\p{N}])\.net\b", "${1} dotnet "),
        (r"(?i)\bnode\.js\b", " nodejs "),
    ]
    .into_iter()
    .filter_map(|(pattern, word)| compile(pattern).map(|re| (re, word)))
    .collect()
});

static PICTOGRAPHIC: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"\p{Extended_Pictographic}+"));

/// Spells out `c++`, `c#`, `f#`, `.net` and `node.js`, case-insensitively.
///
/// Must run before [`rewrite_symbols`], which would otherwise turn `c++`
/// into `c plus plus`. A `.net` glued to a letter or digit is left alone, so
/// `x.net` produced by joining with `.` is not rewritten again.
pub fn rewrite_tech(s: &str, enabled: bool) -> String {
    if !enabled {
        return s.to_string();
    }
    let mut out = s.to_string();
    for (re, word) in TECH_TERMS.iter() {
        out = re.replace_all(&out, *word).into_owned();
    }
    collapse_whitespace(&out)
}

/// Fuses adjacent `node` and `js` tokens into `nodejs`.
///
/// Joined with `.`, the pair would read `node.js`, which [`rewrite_tech`]
/// spells out on the next pass.
pub fn fuse_dotted_tech(tokens: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens.into_iter().filter(|t| !t.is_empty()) {
        if token.eq_ignore_ascii_case("js")
            && out.last().is_some_and(|prev| prev.eq_ignore_ascii_case("node"))
        {
            out.pop();
            out.push("nodejs".to_string());
        } else {
            out.push(token);
        }
    }
    out
}

/// Replaces every symbol in the selected table with its word, space-padded.
pub fn rewrite_symbols(s: &str, policy: SymbolsPolicy) -> String {
    let table = tables::symbols(policy);
    if table.is_empty() {
        return s.to_string();
    }
    let mut out = s.to_string();
    for (symbol, word) in table {
        if out.contains(symbol) {
            out = out.replace(symbol, &format!(" {word} "));
        }
    }
    collapse_whitespace(&out)
}

/// Result of [`rewrite_emoji`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRewrite {
    pub text: String,
    /// The policy that actually ran (`keep` is demoted to `remove` for ASCII)
    pub applied: EmojiPolicy,
}

/// Names, removes, or keeps emoji. Variation selectors are always stripped.
pub fn rewrite_emoji(s: &str, policy: EmojiPolicy, alphabet: Alphabet) -> EmojiRewrite {
    let applied = match (policy, alphabet) {
        (EmojiPolicy::Keep, Alphabet::Ascii) => EmojiPolicy::Remove,
        (policy, _) => policy,
    };

    let mut out: String = s
        .chars()
        .filter(|c| !matches!(c, '\u{FE0E}' | '\u{FE0F}'))
        .collect();

    match applied {
        EmojiPolicy::Name => {
            for (emoji, name) in tables::emoji_names() {
                if out.contains(emoji) {
                    out = out.replace(emoji, &format!(" {name} "));
                }
            }
            out = replace_pictographs(&out);
            out = collapse_whitespace(&out);
        }
        EmojiPolicy::Remove => {
            out = replace_pictographs(&out);
            for (emoji, _) in tables::emoji_names() {
                if out.contains(emoji) {
                    out = out.replace(emoji, " ");
                }
            }
            out = collapse_whitespace(&out);
        }
        EmojiPolicy::Keep => {}
    }

    EmojiRewrite { text: out, applied }
}

fn replace_pictographs(s: &str) -> String {
    match PICTOGRAPHIC.as_ref() {
        Some(re) => re.replace_all(s, " ").into_owned(),
        None => s.to_string(),
    }
}
