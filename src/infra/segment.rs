//! Word segmentation.
//!
//! The primary segmenter follows UAX #29 word boundaries (cargo feature
//! `segmentation`). Without it, maximal runs of letters, marks and numbers are
//! taken as words, and if even that pattern is unavailable the text is split on
//! whitespace. The segmenter is picked once per process.

use regex::Regex;
use std::sync::LazyLock;

use super::chars::compile;

/// Splits normalized text into word-like tokens.
pub trait WordSegmenter: Send + Sync {
    /// Short identifier recorded in step metadata.
    fn name(&self) -> &'static str;

    /// `false` for the degraded strategies; the pipeline warns when it is.
    fn is_primary(&self) -> bool;

    fn segment(&self, text: &str, locale: &str) -> Vec<String>;
}

static ACTIVE: LazyLock<Box<dyn WordSegmenter>> = LazyLock::new(select);

/// The segmenter chosen for this process.
pub fn active_segmenter() -> &'static dyn WordSegmenter {
    &**ACTIVE
}

#[cfg(feature = "segmentation")]
fn select() -> Box<dyn WordSegmenter> {
    Box::new(UnicodeWordSegmenter)
}

#[cfg(not(feature = "segmentation"))]
fn select() -> Box<dyn WordSegmenter> {
    log::debug!("word-boundary segmentation not compiled in; using fallback");
    fallback_segmenter()
}

/// Best available segmenter that does not need word-boundary tables.
pub fn fallback_segmenter() -> Box<dyn WordSegmenter> {
    match RunSegmenter::new() {
        Some(runs) => Box::new(runs),
        None => Box::new(WhitespaceSegmenter),
    }
}

/// UAX #29 word segmentation keeping only word-like segments.
///
/// UAX #29 has no dictionary for scripts written without spaces, so it breaks
/// Han, kana, Thai and similar text into single characters. Adjacent segments
/// from those scripts are glued back into one run, matching how the text was
/// written.
#[cfg(feature = "segmentation")]
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordSegmenter;

#[cfg(feature = "segmentation")]
impl WordSegmenter for UnicodeWordSegmenter {
    fn name(&self) -> &'static str {
        "uax29"
    }

    fn is_primary(&self) -> bool {
        true
    }

    fn segment(&self, text: &str, _locale: &str) -> Vec<String> {
        use unicode_segmentation::UnicodeSegmentation;

        let mut tokens: Vec<String> = Vec::new();
        let mut prev_end = None;
        for (start, part) in text.split_word_bound_indices() {
            if !part.chars().any(char::is_alphanumeric) {
                continue;
            }
            let end = start + part.len();
            if let Some(prev) = tokens.last_mut()
                && prev_end == Some(start)
                && continues_unspaced_run(prev, part)
            {
                prev.push_str(part);
            } else {
                tokens.push(part.to_string());
            }
            prev_end = Some(end);
        }
        tokens
    }
}

#[cfg(feature = "segmentation")]
fn continues_unspaced_run(prev: &str, next: &str) -> bool {
    matches!(
        (prev.chars().next_back(), next.chars().next()),
        (Some(a), Some(b)) if is_unspaced_script(a) && is_unspaced_script(b)
    )
}

/// Scripts conventionally written without spaces between words.
#[cfg(feature = "segmentation")]
fn is_unspaced_script(c: char) -> bool {
    matches!(
        c,
        '\u{0E00}'..='\u{0EFF}'       // Thai, Lao
            | '\u{1000}'..='\u{109F}' // Myanmar
            | '\u{1780}'..='\u{17FF}' // Khmer
            | '\u{3040}'..='\u{30FF}' // Hiragana, Katakana
            | '\u{31F0}'..='\u{31FF}'
            | '\u{3400}'..='\u{4DBF}' // CJK
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2FFFF}'
    )
}

/// Maximal runs of Unicode letters, marks and numbers.
#[derive(Debug, Clone)]
pub struct RunSegmenter {
    pattern: Regex,
}

impl RunSegmenter {
    /// Returns `None` if the Unicode property pattern cannot be built.
    pub fn new() -> Option<Self> {
        compile(r"[\p{L}\p{M}\p{N}]+").map(|pattern| Self { pattern })
    }
}

impl WordSegmenter for RunSegmenter {
    fn name(&self) -> &'static str {
        "letter-runs"
    }

    fn is_primary(&self) -> bool {
        false
    }

    fn segment(&self, text: &str, _locale: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Whitespace splitting, the last resort.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceSegmenter;

impl WordSegmenter for WhitespaceSegmenter {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn is_primary(&self) -> bool {
        false
    }

    fn segment(&self, text: &str, _locale: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}
