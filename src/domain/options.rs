//! Per-call slug configuration.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::{Separator, SlugError};

/// Which characters may survive into the final slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// Unicode letters and numbers in any script
    #[default]
    Unicode,
    /// ASCII letters and digits only, transliterating other scripts
    Ascii,
}

impl Alphabet {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unicode => "unicode",
            Self::Ascii => "ascii",
        }
    }
}

/// Processing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Keep every token
    #[default]
    Classic,
    /// Drop stopwords and collapse stuttered tokens
    Semantic,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Semantic => "semantic",
        }
    }
}

/// What to do with emoji in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmojiPolicy {
    /// Replace every pictograph with a space
    #[default]
    Remove,
    /// Leave pictographs alone (demoted to `remove` for ASCII output)
    Keep,
    /// Replace known emoji with their English name
    Name,
}

impl EmojiPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remove => "remove",
            Self::Keep => "keep",
            Self::Name => "name",
        }
    }
}

/// Which symbol-to-word table to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SymbolsPolicy {
    /// Leave symbols for the sanitizer to drop
    Off,
    /// Common symbols such as `&`, `@`, `%`, `+`
    #[default]
    Basic,
    /// The basic table plus currency, math, and legal marks
    Extended,
}

impl SymbolsPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Basic => "basic",
            Self::Extended => "extended",
        }
    }
}

/// Policy for characters the transliterator cannot map to ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPolicy {
    /// Discard the character
    Drop,
    /// Emit a `u<hex codepoint>` token in its place
    #[default]
    Hex,
}

impl UnknownPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Hex => "hex",
        }
    }
}

/// Stopword filtering used in semantic mode.
///
/// In configuration files this is written as `false`/`"off"`, `"auto"`, or a
/// list of words. On the command line a comma-separated list is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "StopwordsRepr", into = "StopwordsRepr")]
pub enum StopwordPolicy {
    #[default]
    Off,
    /// Built-in English list when the locale starts with `en`, nothing otherwise
    Auto,
    /// Caller-supplied words, compared lowercased
    List(Vec<String>),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StopwordsRepr {
    Flag(bool),
    Keyword(String),
    List(Vec<String>),
}

impl TryFrom<StopwordsRepr> for StopwordPolicy {
    type Error = SlugError;

    fn try_from(repr: StopwordsRepr) -> Result<Self, Self::Error> {
        match repr {
            StopwordsRepr::Flag(false) => Ok(Self::Off),
            StopwordsRepr::Flag(true) => Ok(Self::Auto),
            StopwordsRepr::Keyword(k) => match k.as_str() {
                "off" => Ok(Self::Off),
                "auto" => Ok(Self::Auto),
                _ => Err(SlugError::invalid_option(
                    "stopwords",
                    &k,
                    "\"off\", \"auto\" or a list of words",
                )),
            },
            StopwordsRepr::List(words) => Ok(Self::List(words)),
        }
    }
}

impl From<StopwordPolicy> for StopwordsRepr {
    fn from(policy: StopwordPolicy) -> Self {
        match policy {
            StopwordPolicy::Off => Self::Flag(false),
            StopwordPolicy::Auto => Self::Keyword("auto".to_string()),
            StopwordPolicy::List(words) => Self::List(words),
        }
    }
}

impl FromStr for StopwordPolicy {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "off" | "false" | "none" => Ok(Self::Off),
            "auto" => Ok(Self::Auto),
            list => {
                let words: Vec<String> = list
                    .split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(str::to_string)
                    .collect();
                if words.is_empty() {
                    return Err(SlugError::invalid_option(
                        "stopwords",
                        s,
                        "\"off\", \"auto\" or a comma-separated list of words",
                    ));
                }
                Ok(Self::List(words))
            }
        }
    }
}

/// Context handed to a fallback function.
#[derive(Debug, Clone, Copy)]
pub struct FallbackContext<'a> {
    /// Tokens that survived up to the join stage (possibly none)
    pub tokens: &'a [String],
}

/// Signature of a fallback function: normalized input plus token context.
pub type FallbackFn = dyn Fn(&str, &FallbackContext<'_>) -> String + Send + Sync;

/// Base text for the slug generated when nothing usable survives the pipeline.
///
/// Whatever the strategy returns is re-sanitized and suffixed with a hash of
/// the input, so a constant strategy still yields distinct slugs.
#[derive(Clone)]
pub enum FallbackStrategy {
    Literal(String),
    Function(Arc<FallbackFn>),
}

impl FallbackStrategy {
    /// Wraps a pure function as a fallback strategy.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&str, &FallbackContext<'_>) -> String + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    /// Produces the raw base string for `input`.
    pub fn resolve(&self, input: &str, ctx: &FallbackContext<'_>) -> String {
        match self {
            Self::Literal(s) => s.clone(),
            Self::Function(f) => f(input, ctx),
        }
    }
}

impl Default for FallbackStrategy {
    fn default() -> Self {
        Self::Literal("untitled".to_string())
    }
}

impl fmt::Debug for FallbackStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl Serialize for FallbackStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Literal(s) => serializer.serialize_str(s),
            Self::Function(_) => serializer.serialize_str("<function>"),
        }
    }
}

impl<'de> Deserialize<'de> for FallbackStrategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::Literal)
    }
}

/// Complete configuration for one slug call.
///
/// Build one with struct-update syntax over the defaults:
///
/// ```
/// use slugline::domain::{Alphabet, SlugOptions};
///
/// let options = SlugOptions {
///     alphabet: Alphabet::Ascii,
///     ..SlugOptions::default()
/// };
/// assert_eq!(slugline::slug("Český Krumlov", &options).unwrap(), "cesky-krumlov");
/// ```
#[derive(Debug, Clone)]
pub struct SlugOptions {
    /// Must be `-`, `_` or `.`; anything else fails the call
    pub separator: char,
    pub lowercase: bool,
    /// BCP 47 tag; drives lowercasing and stopword selection
    pub locale: String,
    /// Maximum length in characters; 0 disables truncation
    pub max_length: usize,
    pub alphabet: Alphabet,
    pub mode: Mode,
    pub strict: bool,
    pub emoji: EmojiPolicy,
    pub symbols: SymbolsPolicy,
    /// Rewrite `c++`, `c#`, `.net` and friends before symbol rewriting
    pub tech: bool,
    pub stopwords: StopwordPolicy,
    pub keep_numbers: bool,
    /// Extra reserved names on top of the built-in set
    pub reserved: Vec<String>,
    pub unknown: UnknownPolicy,
    pub fallback: FallbackStrategy,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: '-',
            lowercase: true,
            locale: "en".to_string(),
            max_length: 80,
            alphabet: Alphabet::Unicode,
            mode: Mode::Classic,
            strict: true,
            emoji: EmojiPolicy::Remove,
            symbols: SymbolsPolicy::Basic,
            tech: false,
            stopwords: StopwordPolicy::Off,
            keep_numbers: true,
            reserved: Vec::new(),
            unknown: UnknownPolicy::Hex,
            fallback: FallbackStrategy::default(),
        }
    }
}

impl SlugOptions {
    /// Validates the configured separator.
    ///
    /// # Errors
    ///
    /// Returns `SlugError::InvalidSeparator` unless the separator is `-`, `_` or `.`.
    pub fn separator(&self) -> Result<Separator, SlugError> {
        Separator::try_from(self.separator)
    }

    /// Locale to use, with an empty tag treated as `en`.
    pub fn effective_locale(&self) -> &str {
        if self.locale.is_empty() {
            "en"
        } else {
            &self.locale
        }
    }

    /// Returns a copy with every field set in `overrides` replaced.
    pub fn with_overrides(&self, overrides: &SlugOverrides) -> Self {
        let mut options = self.clone();
        options.apply(overrides);
        options
    }

    /// Replaces every field that is set in `overrides`.
    pub fn apply(&mut self, overrides: &SlugOverrides) {
        if let Some(v) = overrides.separator {
            self.separator = v;
        }
        if let Some(v) = overrides.lowercase {
            self.lowercase = v;
        }
        if let Some(v) = &overrides.locale {
            self.locale = v.clone();
        }
        if let Some(v) = overrides.max_length {
            self.max_length = v;
        }
        if let Some(v) = overrides.alphabet {
            self.alphabet = v;
        }
        if let Some(v) = overrides.mode {
            self.mode = v;
        }
        if let Some(v) = overrides.strict {
            self.strict = v;
        }
        if let Some(v) = overrides.emoji {
            self.emoji = v;
        }
        if let Some(v) = overrides.symbols {
            self.symbols = v;
        }
        if let Some(v) = overrides.tech {
            self.tech = v;
        }
        if let Some(v) = &overrides.stopwords {
            self.stopwords = v.clone();
        }
        if let Some(v) = overrides.keep_numbers {
            self.keep_numbers = v;
        }
        if let Some(v) = &overrides.reserved {
            self.reserved = v.clone();
        }
        if let Some(v) = overrides.unknown {
            self.unknown = v;
        }
        if let Some(v) = &overrides.fallback {
            self.fallback = v.clone();
        }
    }
}

/// A partial [`SlugOptions`]: only the fields that are set take effect.
///
/// Used for presets, the `[options]` table of the config file, command-line
/// flags, and per-call overrides on a [`crate::Slugger`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlugOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<Alphabet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<EmojiPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<SymbolsPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<StopwordPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown: Option<UnknownPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackStrategy>,
}

impl SlugOverrides {
    /// Layers `top` over `self`; fields set in `top` win.
    pub fn merged(&self, top: &SlugOverrides) -> SlugOverrides {
        SlugOverrides {
            separator: top.separator.or(self.separator),
            lowercase: top.lowercase.or(self.lowercase),
            locale: top.locale.clone().or_else(|| self.locale.clone()),
            max_length: top.max_length.or(self.max_length),
            alphabet: top.alphabet.or(self.alphabet),
            mode: top.mode.or(self.mode),
            strict: top.strict.or(self.strict),
            emoji: top.emoji.or(self.emoji),
            symbols: top.symbols.or(self.symbols),
            tech: top.tech.or(self.tech),
            stopwords: top.stopwords.clone().or_else(|| self.stopwords.clone()),
            keep_numbers: top.keep_numbers.or(self.keep_numbers),
            reserved: top.reserved.clone().or_else(|| self.reserved.clone()),
            unknown: top.unknown.or(self.unknown),
            fallback: top.fallback.clone().or_else(|| self.fallback.clone()),
        }
    }

    /// Materializes these overrides on top of the default options.
    pub fn to_options(&self) -> SlugOptions {
        SlugOptions::default().with_overrides(self)
    }
}
