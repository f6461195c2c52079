//! Fallback slug generation.

use unicode_normalization::UnicodeNormalization;

use super::chars::is_mark;
use super::hash::SlugHash;
use super::sanitize::collapse_separators;
use crate::domain::{FallbackContext, FallbackStrategy, Separator};

const DEFAULT_BASE: &str = "untitled";

/// Builds `<base><sep><hash>` for input that produced no usable slug.
///
/// The base comes from `strategy` (or `untitled` if it returns blank text) and
/// is reduced to lowercase ASCII letters and digits joined by `sep`. The hash
/// is computed from `normalized`, so distinct inputs get distinct fallbacks
/// even under a constant strategy. The result is never empty and never
/// contains anything but ASCII alphanumerics and `sep`.
///
/// # Examples
///
/// ```
/// use slugline::domain::{FallbackStrategy, Separator};
/// use slugline::infra::fallback_slug;
///
/// let slug = fallback_slug("", Separator::Hyphen, &[], &FallbackStrategy::default());
/// assert!(slug.starts_with("untitled-"));
/// ```
pub fn fallback_slug(
    normalized: &str,
    sep: Separator,
    tokens: &[String],
    strategy: &FallbackStrategy,
) -> String {
    let hash = SlugHash::compute(normalized);
    let raw = strategy.resolve(normalized, &FallbackContext { tokens });
    let raw = raw.trim();

    let mut base = if raw.is_empty() {
        DEFAULT_BASE.to_string()
    } else {
        ascii_base(raw, sep.as_char())
    };
    if base.is_empty() {
        base = DEFAULT_BASE.to_string();
    }

    log::trace!("fallback slug base {base:?} for input {normalized:?}");
    format!("{base}{sep}{hash}")
}

fn ascii_base(raw: &str, sep: char) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.nfkd().filter(|c| !is_mark(*c)).flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else {
            out.push(sep);
        }
    }
    collapse_separators(&out, sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::hash::hash_base36;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_base_is_untitled() {
        let slug = fallback_slug("", Separator::Hyphen, &[], &FallbackStrategy::default());
        assert_eq!(slug, format!("untitled-{}", hash_base36("")));
    }

    #[test]
    fn literal_strategy_is_sanitized() {
        let strategy = FallbackStrategy::Literal("  Draft Note! ".to_string());
        let slug = fallback_slug("x", Separator::Underscore, &[], &strategy);
        assert_eq!(slug, format!("draft_note_{}", hash_base36("x")));
    }

    #[test]
    fn accents_are_folded_not_split() {
        let strategy = FallbackStrategy::Literal("Résumé".to_string());
        let slug = fallback_slug("x", Separator::Hyphen, &[], &strategy);
        assert!(slug.starts_with("resume-"), "{slug}");
    }

    #[test]
    fn blank_or_unusable_strategy_output_uses_untitled() {
        let blank = FallbackStrategy::Literal("   ".to_string());
        assert!(fallback_slug("x", Separator::Hyphen, &[], &blank).starts_with("untitled-"));

        let symbols = FallbackStrategy::Literal("../..".to_string());
        assert!(fallback_slug("x", Separator::Hyphen, &[], &symbols).starts_with("untitled-"));
    }

    #[test]
    fn function_strategy_sees_input_and_tokens() {
        let strategy = FallbackStrategy::function(|input, ctx| {
            format!("{} {}", input, ctx.tokens.join(" "))
        });
        let tokens = vec!["b".to_string()];
        let slug = fallback_slug("a", Separator::Dot, &tokens, &strategy);
        assert_eq!(slug, format!("a.b.{}", hash_base36("a")));
    }

    #[test]
    fn constant_strategy_still_distinguishes_inputs() {
        let strategy = FallbackStrategy::Literal("same".to_string());
        let a = fallback_slug("!!!", Separator::Hyphen, &[], &strategy);
        let b = fallback_slug("???", Separator::Hyphen, &[], &strategy);
        assert_ne!(a, b);
    }
}
