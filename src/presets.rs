//! Named option bundles.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{
    Alphabet, EmojiPolicy, Mode, SlugError, SlugOptions, SlugOverrides, StopwordPolicy,
    SymbolsPolicy, UnknownPolicy,
};

/// A named set of options for a common use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// ASCII-only slugs for URLs and file names
    Safe,
    /// ASCII, emoji names, extended symbols, English stopwords dropped
    Cyber,
    /// Any script, emoji names, extended symbols, English stopwords dropped
    Unicode,
}

impl Preset {
    pub fn all() -> &'static [Preset] {
        &[Self::Safe, Self::Cyber, Self::Unicode]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Cyber => "cyber",
            Self::Unicode => "unicode",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Safe => "ASCII-only slugs with tech terms and basic symbols spelled out",
            Self::Cyber => "short ASCII slugs with emoji names, extended symbols and stopword removal",
            Self::Unicode => "slugs in any script with emoji names, extended symbols and stopword removal",
        }
    }

    /// The fields this preset sets; everything else keeps its default.
    pub fn overrides(self) -> SlugOverrides {
        let shared = SlugOverrides {
            separator: Some('-'),
            lowercase: Some(true),
            strict: Some(true),
            tech: Some(true),
            max_length: Some(80),
            ..SlugOverrides::default()
        };
        match self {
            Self::Safe => SlugOverrides {
                alphabet: Some(Alphabet::Ascii),
                unknown: Some(UnknownPolicy::Hex),
                emoji: Some(EmojiPolicy::Remove),
                symbols: Some(SymbolsPolicy::Basic),
                mode: Some(Mode::Classic),
                ..shared
            },
            Self::Cyber => SlugOverrides {
                alphabet: Some(Alphabet::Ascii),
                unknown: Some(UnknownPolicy::Hex),
                emoji: Some(EmojiPolicy::Name),
                symbols: Some(SymbolsPolicy::Extended),
                mode: Some(Mode::Semantic),
                stopwords: Some(StopwordPolicy::Auto),
                max_length: Some(60),
                ..shared
            },
            Self::Unicode => SlugOverrides {
                alphabet: Some(Alphabet::Unicode),
                emoji: Some(EmojiPolicy::Name),
                symbols: Some(SymbolsPolicy::Extended),
                mode: Some(Mode::Semantic),
                stopwords: Some(StopwordPolicy::Auto),
                ..shared
            },
        }
    }

    /// Complete options: the defaults with this preset applied.
    pub fn options(self) -> SlugOptions {
        self.overrides().to_options()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SlugError::invalid_option("preset", s, "safe, cyber or unicode"))
    }
}
