//! The slug builder: sequences every stage from raw text to a safe slug.
//!
//! Stages run strictly in order; each one may be recorded as a [`SlugStep`]
//! through a caller-supplied [`StepRecorder`]. Nothing is shared between
//! calls except the read-only tables and the process-wide segmenter.

mod filter;
mod slugger;
mod suggest;
mod unique;

use serde_json::json;

use crate::domain::{
    Alphabet, Mode, NoopRecorder, Separator, SlugDetailed, SlugError, SlugOptions, SlugOutcome,
    SlugStep, StepLog, StepMeta, StepRecorder, Warning,
};
use crate::infra::{
    WordSegmenter, active_segmenter, collapse_separators, contains_path_separator, fallback_slug,
    fuse_dotted_tech, is_unusable, normalize, replace_path_separators, rewrite_emoji,
    rewrite_symbols, rewrite_tech, sanitize_strict, transliterate, truncate_at_boundary,
};
use crate::tables;

pub use filter::{Stopwords, is_ascii_number, lowercase_token, semantic_filter};
pub use slugger::Slugger;
pub use suggest::{SuggestContext, Suggester, slug_async};
pub use unique::{UniqueOptions, unique_slug};

/// Converts `input` to a slug.
///
/// Any text yields a non-empty slug free of `/` and `\` that is never `.` or
/// `..`; input that leaves nothing usable gets a generated fallback.
///
/// # Errors
///
/// Returns [`SlugError::InvalidSeparator`] if `options.separator` is not
/// `-`, `_` or `.`.
///
/// # Examples
///
/// ```
/// use slugline::domain::SlugOptions;
///
/// let slug = slugline::slug("Hello, world!", &SlugOptions::default()).unwrap();
/// assert_eq!(slug, "hello-world");
/// ```
pub fn slug(input: &str, options: &SlugOptions) -> Result<String, SlugError> {
    slug_with_recorder(input, options, &mut NoopRecorder).map(|outcome| outcome.slug)
}

/// Alias of [`slug`].
pub fn slugify(input: &str, options: &SlugOptions) -> Result<String, SlugError> {
    slug(input, options)
}

/// Like [`slug`], also returning tokens, warnings and every recorded step.
///
/// # Errors
///
/// Same as [`slug`].
pub fn slug_detailed(input: &str, options: &SlugOptions) -> Result<SlugDetailed, SlugError> {
    let mut log = StepLog::new();
    let outcome = slug_with_recorder(input, options, &mut log)?;
    Ok(SlugDetailed {
        input: input.to_string(),
        slug: outcome.slug,
        tokens: outcome.tokens,
        warnings: outcome.warnings,
        steps: log.into_steps(),
    })
}

/// Alias of [`slug_detailed`].
pub fn slugify_detailed(input: &str, options: &SlugOptions) -> Result<SlugDetailed, SlugError> {
    slug_detailed(input, options)
}

/// Runs the pipeline, handing each step to `recorder`.
///
/// # Errors
///
/// Same as [`slug`].
pub fn slug_with_recorder<R>(
    input: &str,
    options: &SlugOptions,
    recorder: &mut R,
) -> Result<SlugOutcome, SlugError>
where
    R: StepRecorder + ?Sized,
{
    build(input, options, recorder, active_segmenter())
}

pub(crate) fn build<R>(
    input: &str,
    options: &SlugOptions,
    recorder: &mut R,
    segmenter: &dyn WordSegmenter,
) -> Result<SlugOutcome, SlugError>
where
    R: StepRecorder + ?Sized,
{
    let sep = options.separator()?;
    let sep_char = sep.as_char();
    let locale = options.effective_locale();
    let mut trace = Tracer { recorder };
    let mut warnings = Vec::new();

    trace.step("input", "", input, StepMeta::new);

    // Text stages
    let normalized = normalize(input);
    trace.step("normalize", input, &normalized, StepMeta::new);

    let tech = rewrite_tech(&normalized, options.tech);
    trace.step("tech", &normalized, &tech, || meta([("enabled", json!(options.tech))]));

    let symbols = rewrite_symbols(&tech, options.symbols);
    trace.step("symbols", &tech, &symbols, || {
        meta([("mode", json!(options.symbols.as_str()))])
    });

    let emoji = rewrite_emoji(&symbols, options.emoji, options.alphabet);
    trace.step("emoji", &symbols, &emoji.text, || {
        meta([("mode", json!(emoji.applied.as_str()))])
    });

    // Token stages
    let mut tokens = segmenter.segment(&emoji.text, locale);
    if !segmenter.is_primary() {
        push_warning(&mut warnings, Warning::SegmenterUnavailable);
    }
    trace.step("segment", &emoji.text, &tokens.join(" | "), || {
        meta([
            ("segmenter", json!(segmenter.name())),
            ("used_segmenter", json!(segmenter.is_primary())),
            ("token_count", json!(tokens.len())),
        ])
    });

    if options.lowercase {
        let before = trace.snapshot(&tokens);
        tokens = tokens.iter().map(|t| lowercase_token(t, locale)).collect();
        trace.step("lowercase", &before, &tokens.join(" "), || {
            meta([("locale", json!(locale))])
        });
    }

    if !options.keep_numbers {
        let before = trace.snapshot(&tokens);
        tokens.retain(|t| !is_ascii_number(t));
        trace.step("keep-numbers", &before, &tokens.join(" "), || {
            meta([("keep_numbers", json!(false))])
        });
    }

    if options.mode == Mode::Semantic {
        let before = trace.snapshot(&tokens);
        let stopwords = Stopwords::resolve(&options.stopwords, locale);
        semantic_filter(&mut tokens, stopwords.as_ref());
        trace.step("semantic", &before, &tokens.join(" "), || {
            meta([("stopwords", json!(stopwords.is_some()))])
        });
    }

    if options.alphabet == Alphabet::Ascii {
        let before = trace.snapshot(&tokens);
        let mut ascii = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let t = transliterate(token, options.unknown);
            if t.hex_encoded {
                push_warning(&mut warnings, Warning::UnknownScriptHexEncoded);
            }
            ascii.extend(t.tokens);
        }
        tokens = ascii;
        trace.step("ascii", &before, &tokens.join(" "), || {
            meta([("unknown", json!(options.unknown.as_str()))])
        });
    }

    // Slug stages
    if options.tech && sep_char == '.' {
        tokens = fuse_dotted_tech(tokens);
    }
    let joined = join_tokens(&tokens, sep);
    trace.step("join", &tokens.join(" "), &joined, || {
        meta([("separator", json!(sep.as_str()))])
    });

    let mut slug = replace_path_separators(&joined, sep_char);
    if options.strict {
        let before = slug;
        slug = collapse_separators(&sanitize_strict(&before, sep_char, options.alphabet), sep_char);
        trace.step("strict", &before, &slug, || {
            meta([("alphabet", json!(options.alphabet.as_str()))])
        });
    } else {
        slug = collapse_separators(&slug, sep_char);
    }

    if is_unusable(&slug) {
        push_warning(&mut warnings, Warning::FellBack);
        let generated = fallback_slug(&normalized, sep, &tokens, &options.fallback);
        trace.step("fallback", &slug, &generated, StepMeta::new);
        slug = generated;
    }

    if options.max_length > 0 {
        let truncated = truncate_at_boundary(&slug, sep_char, options.max_length);
        if truncated != slug {
            trace.step("truncate", &slug, &truncated, || {
                meta([("max_length", json!(options.max_length))])
            });
            slug = truncated;
        }
    }

    slug = collapse_separators(&slug, sep_char);
    if is_unusable(&slug) {
        push_warning(&mut warnings, Warning::FellBack);
        let generated = fallback_slug(&normalized, sep, &tokens, &options.fallback);
        trace.step("fallback-final", &slug, &generated, StepMeta::new);
        slug = generated;
    }

    if is_reserved(&slug, &options.reserved) {
        let before = slug;
        slug = disambiguate(&before, sep_char, options.max_length);
        trace.step("reserved", &before, &slug, StepMeta::new);
    }

    if contains_path_separator(&slug) {
        let before = slug;
        slug = collapse_separators(&replace_path_separators(&before, sep_char), sep_char);
        trace.step("no-slash", &before, &slug, StepMeta::new);
    }

    log::trace!("slug {input:?} -> {slug:?} ({} tokens, warnings {warnings:?})", tokens.len());
    Ok(SlugOutcome {
        slug,
        tokens,
        warnings,
    })
}

/// Wraps a recorder so steps are only built when someone is listening.
struct Tracer<'r, R: StepRecorder + ?Sized> {
    recorder: &'r mut R,
}

impl<R: StepRecorder + ?Sized> Tracer<'_, R> {
    fn step<F>(&mut self, op: &'static str, before: &str, after: &str, meta: F)
    where
        F: FnOnce() -> StepMeta,
    {
        if self.recorder.enabled() {
            self.recorder.record(SlugStep {
                op,
                before: before.to_string(),
                after: after.to_string(),
                meta: meta(),
            });
        }
    }

    /// Space-joined tokens, or nothing when recording is off.
    fn snapshot(&self, tokens: &[String]) -> String {
        if self.recorder.enabled() {
            tokens.join(" ")
        } else {
            String::new()
        }
    }
}

fn meta<const N: usize>(entries: [(&'static str, serde_json::Value); N]) -> StepMeta {
    StepMeta::from(entries)
}

fn push_warning(warnings: &mut Vec<Warning>, warning: Warning) {
    if !warnings.contains(&warning) {
        warnings.push(warning);
    }
}

fn join_tokens(tokens: &[String], sep: Separator) -> String {
    tokens
        .iter()
        .filter(|t| !t.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(sep.as_str())
}

/// Built-in device names match in any case; caller names match exactly.
fn is_reserved(slug: &str, extra: &[String]) -> bool {
    tables::default_reserved()
        .iter()
        .any(|r| r.eq_ignore_ascii_case(slug))
        || extra.iter().any(|r| r == slug)
}

/// Appends `<sep>1`, shortening the name first if that would exceed `max`.
fn disambiguate(name: &str, sep: char, max: usize) -> String {
    let suffixed = format!("{name}{sep}1");
    let room = max.saturating_sub(2);
    if max == 0 || suffixed.chars().count() <= max || room == 0 {
        return suffixed;
    }
    format!("{}{sep}1", truncate_at_boundary(name, sep, room))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        EmojiPolicy, FallbackStrategy, StopwordPolicy, SymbolsPolicy, UnknownPolicy,
    };
    use crate::infra::{WhitespaceSegmenter, hash_base36};
    use pretty_assertions::assert_eq;

    fn ascii() -> SlugOptions {
        SlugOptions {
            alphabet: Alphabet::Ascii,
            ..SlugOptions::default()
        }
    }

    fn s(input: &str) -> String {
        slug(input, &SlugOptions::default()).unwrap()
    }

    fn ops(detailed: &SlugDetailed) -> Vec<&'static str> {
        detailed.steps.iter().map(|step| step.op).collect()
    }

    // ===========================================
    // Basic behavior
    // ===========================================

    #[test]
    fn hello_world() {
        assert_eq!(s("Hello, world!"), "hello-world");
    }

    #[test]
    fn ascii_folds_diacritics() {
        assert_eq!(slug("Český Krumlov", &ascii()).unwrap(), "cesky-krumlov");
    }

    #[test]
    fn ascii_names_emoji() {
        let options = SlugOptions {
            emoji: EmojiPolicy::Name,
            ..ascii()
        };
        assert_eq!(slug("Ship it 🚀", &options).unwrap(), "ship-it-rocket");
    }

    #[test]
    fn ascii_hex_encodes_han() {
        let detailed = slug_detailed("你好 世界", &ascii()).unwrap();
        assert_eq!(detailed.slug, "u4f60-u597d-u4e16-u754c");
        assert!(detailed.warnings.contains(&Warning::UnknownScriptHexEncoded));
    }

    #[test]
    fn hex_warning_is_recorded_once() {
        let detailed = slug_detailed("你 好 世 界", &ascii()).unwrap();
        let count = detailed
            .warnings
            .iter()
            .filter(|w| **w == Warning::UnknownScriptHexEncoded)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn drop_policy_discards_unknown_script() {
        let options = SlugOptions {
            unknown: UnknownPolicy::Drop,
            ..ascii()
        };
        assert_eq!(slug("Tokyo 東京", &options).unwrap(), "tokyo");
    }

    #[test]
    fn unicode_mode_keeps_scripts() {
        assert_eq!(s("Привет мир"), "привет-мир");
        assert_eq!(s("Γειά σου Κόσμε"), "γειά-σου-κόσμε");
        assert_eq!(s("مرحبا بالعالم"), "مرحبا-بالعالم");
        assert_eq!(s("你好 世界"), "你好-世界");
    }

    #[test]
    fn punctuation_and_dashes_split_words() {
        assert_eq!(s("rock—n—roll"), "rock-n-roll");
        assert_eq!(s("  lots   of\tspace\n"), "lots-of-space");
    }

    #[test]
    fn no_lowercase_keeps_case() {
        let options = SlugOptions {
            lowercase: false,
            ..SlugOptions::default()
        };
        assert_eq!(slug("Hello World", &options).unwrap(), "Hello-World");
    }

    #[test]
    fn turkish_locale_lowercases_dotless() {
        let options = SlugOptions {
            locale: "tr".to_string(),
            ..SlugOptions::default()
        };
        assert_eq!(slug("ISPARTA", &options).unwrap(), "ısparta");
    }

    // ===========================================
    // Rewrites
    // ===========================================

    #[test]
    fn tech_and_symbols() {
        let options = SlugOptions {
            tech: true,
            ..SlugOptions::default()
        };
        assert_eq!(slug("C++ & C#", &options).unwrap(), "cpp-and-csharp");
        assert_eq!(slug("Intro to .NET", &options).unwrap(), "intro-to-dotnet");
    }

    #[test]
    fn dotted_tech_output_is_stable() {
        let options = SlugOptions {
            alphabet: Alphabet::Ascii,
            separator: '.',
            tech: true,
            ..SlugOptions::default()
        };
        for (input, expected) in [
            ("x net", "x.net"),
            ("node js", "nodejs"),
            ("Node.js and .NET", "nodejs.and.dotnet"),
            ("Learn ASP net", "learn.asp.net"),
        ] {
            let once = slug(input, &options).unwrap();
            assert_eq!(once, expected);
            assert_eq!(slug(&once, &options).unwrap(), once);
        }
    }

    #[test]
    fn node_js_pair_kept_apart_with_other_separators() {
        let options = SlugOptions {
            tech: true,
            ..SlugOptions::default()
        };
        assert_eq!(slug("node js", &options).unwrap(), "node-js");
    }

    #[test]
    fn symbols_off_drops_them() {
        let options = SlugOptions {
            symbols: SymbolsPolicy::Off,
            ..SlugOptions::default()
        };
        assert_eq!(slug("Tom & Jerry", &options).unwrap(), "tom-jerry");
        assert_eq!(s("Tom & Jerry"), "tom-and-jerry");
    }

    #[test]
    fn emoji_removed_by_default() {
        assert_eq!(s("Party 🎉 time"), "party-time");
    }

    #[test]
    fn keep_emoji_is_demoted_for_ascii() {
        let options = SlugOptions {
            emoji: EmojiPolicy::Keep,
            ..ascii()
        };
        let detailed = slug_detailed("Fire 🔥", &options).unwrap();
        assert_eq!(detailed.slug, "fire");
        let emoji = detailed.steps.iter().find(|s| s.op == "emoji").unwrap();
        assert_eq!(emoji.meta["mode"], "remove");
    }

    // ===========================================
    // Filtering
    // ===========================================

    #[test]
    fn drop_numbers() {
        let options = SlugOptions {
            keep_numbers: false,
            ..SlugOptions::default()
        };
        assert_eq!(slug("Top 10 tips for 2024", &options).unwrap(), "top-tips-for");
    }

    #[test]
    fn semantic_mode_with_auto_stopwords() {
        let options = SlugOptions {
            mode: Mode::Semantic,
            stopwords: StopwordPolicy::Auto,
            ..SlugOptions::default()
        };
        assert_eq!(
            slug("The the Quick Brown Fox and the Dog", &options).unwrap(),
            "quick-brown-fox-dog"
        );
    }

    #[test]
    fn semantic_mode_dedups_stutter_without_stopwords() {
        let options = SlugOptions {
            mode: Mode::Semantic,
            ..SlugOptions::default()
        };
        assert_eq!(slug("very very good", &options).unwrap(), "very-good");
    }

    #[test]
    fn auto_stopwords_ignored_outside_english() {
        let options = SlugOptions {
            mode: Mode::Semantic,
            stopwords: StopwordPolicy::Auto,
            locale: "de".to_string(),
            ..SlugOptions::default()
        };
        assert_eq!(slug("the end", &options).unwrap(), "the-end");
    }

    // ===========================================
    // Separators and strictness
    // ===========================================

    #[test]
    fn custom_separator() {
        let options = SlugOptions {
            separator: '_',
            ..SlugOptions::default()
        };
        assert_eq!(slug("Hello big world", &options).unwrap(), "hello_big_world");
    }

    #[test]
    fn invalid_separator_is_an_error() {
        let options = SlugOptions {
            separator: '/',
            ..SlugOptions::default()
        };
        assert!(matches!(
            slug("anything", &options),
            Err(SlugError::InvalidSeparator(_))
        ));
    }

    #[test]
    fn slashes_never_survive() {
        assert_eq!(s("a/b\\c"), "a-b-c");
        let options = SlugOptions {
            strict: false,
            ..SlugOptions::default()
        };
        let got = slug("../../etc/passwd", &options).unwrap();
        assert!(!got.contains('/') && !got.contains('\\'), "{got}");
    }

    // ===========================================
    // Fallback and reserved names
    // ===========================================

    #[test]
    fn dots_fall_back() {
        for input in [".", "..", "", "   ", "!!!"] {
            let detailed = slug_detailed(input, &SlugOptions::default()).unwrap();
            assert!(detailed.slug.starts_with("untitled-"), "{input:?} -> {}", detailed.slug);
            assert!(detailed.warnings.contains(&Warning::FellBack));
        }
    }

    #[test]
    fn fallback_hash_comes_from_normalized_input() {
        assert_eq!(s("..."), format!("untitled-{}", hash_base36("...")));
    }

    #[test]
    fn literal_fallback_strategy() {
        let options = SlugOptions {
            fallback: FallbackStrategy::Literal("Post".to_string()),
            ..SlugOptions::default()
        };
        assert!(slug("???", &options).unwrap().starts_with("post-"));
    }

    #[test]
    fn truncation_back_to_reserved_name_is_disambiguated() {
        let options = SlugOptions {
            max_length: 10,
            ..SlugOptions::default()
        };
        assert_eq!(
            slug("con supercalifragilistic", &options).unwrap(),
            "con-1"
        );
    }

    #[test]
    fn reserved_suffix_fits_max_length() {
        let options = SlugOptions {
            max_length: 4,
            ..SlugOptions::default()
        };
        assert_eq!(slug("AUX", &options).unwrap(), "au-1");
        assert_eq!(disambiguate("aux", '-', 0), "aux-1");
        assert_eq!(disambiguate("aux", '-', 2), "aux-1");
    }

    #[test]
    fn reserved_suffix_wins_under_three_chars() {
        let options = SlugOptions {
            max_length: 2,
            reserved: vec!["ab".to_string()],
            ..SlugOptions::default()
        };
        assert_eq!(slug("AB", &options).unwrap(), "ab-1");
        assert_eq!(disambiguate("ab", '_', 1), "ab_1");
    }

    #[test]
    fn device_names_match_in_any_case() {
        let options = SlugOptions {
            lowercase: false,
            ..SlugOptions::default()
        };
        assert_eq!(slug("CON", &options).unwrap(), "CON-1");
        assert_eq!(slug("Lpt1", &options).unwrap(), "Lpt1-1");
        assert_eq!(slug("Console", &options).unwrap(), "Console");
    }

    #[test]
    fn custom_reserved_names_match_exactly() {
        let options = SlugOptions {
            lowercase: false,
            reserved: vec!["admin".to_string()],
            ..SlugOptions::default()
        };
        assert_eq!(slug("Admin", &options).unwrap(), "Admin");
        assert_eq!(slug("admin", &options).unwrap(), "admin-1");
    }

    #[test]
    fn reserved_names_get_suffix() {
        assert_eq!(s("CON"), "con-1");
        assert_eq!(s("lpt1"), "lpt1-1");
        let options = SlugOptions {
            reserved: vec!["admin".to_string()],
            ..SlugOptions::default()
        };
        assert_eq!(slug("Admin", &options).unwrap(), "admin-1");
    }

    // ===========================================
    // Truncation
    // ===========================================

    #[test]
    fn truncates_on_token_boundary() {
        let options = SlugOptions {
            max_length: 12,
            ..SlugOptions::default()
        };
        let detailed = slug_detailed("alpha beta gamma delta", &options).unwrap();
        assert_eq!(detailed.slug, "alpha-beta");
        assert!(ops(&detailed).contains(&"truncate"));
    }

    #[test]
    fn zero_max_length_disables_truncation() {
        let long = "word ".repeat(40);
        let options = SlugOptions {
            max_length: 0,
            ..SlugOptions::default()
        };
        assert_eq!(slug(&long, &options).unwrap().chars().count(), 40 * 5 - 1);
    }

    #[test]
    fn truncate_step_only_when_changed() {
        let detailed = slug_detailed("short", &SlugOptions::default()).unwrap();
        assert!(!ops(&detailed).contains(&"truncate"));
    }

    // ===========================================
    // Tracing and segmentation
    // ===========================================

    #[test]
    fn step_order() {
        let options = SlugOptions {
            mode: Mode::Semantic,
            keep_numbers: false,
            ..ascii()
        };
        let detailed = slug_detailed("Hello 42", &options).unwrap();
        assert_eq!(
            ops(&detailed),
            vec![
                "input",
                "normalize",
                "tech",
                "symbols",
                "emoji",
                "segment",
                "lowercase",
                "keep-numbers",
                "semantic",
                "ascii",
                "join",
                "strict",
            ]
        );
        assert_eq!(detailed.tokens, vec!["hello"]);
    }

    #[test]
    fn noop_recorder_matches_detailed_slug() {
        let options = ascii();
        let plain = slug("Ünïcödé Straße", &options).unwrap();
        let detailed = slug_detailed("Ünïcödé Straße", &options).unwrap();
        assert_eq!(plain, detailed.slug);
        assert_eq!(plain, "unicode-strasse");
    }

    #[test]
    fn secondary_segmenter_warns() {
        let mut log = StepLog::new();
        let outcome = build("hello world", &SlugOptions::default(), &mut log, &WhitespaceSegmenter)
            .unwrap();
        assert_eq!(outcome.slug, "hello-world");
        assert_eq!(outcome.warnings, vec![Warning::SegmenterUnavailable]);
        let segment = log.steps().iter().find(|s| s.op == "segment").unwrap();
        assert_eq!(segment.meta["segmenter"], "whitespace");
        assert_eq!(segment.meta["used_segmenter"], false);
    }
}
