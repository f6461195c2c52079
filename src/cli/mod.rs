//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::{
    Alphabet, EmojiPolicy, FallbackStrategy, Mode, Separator, SlugOverrides, StopwordPolicy,
    SymbolsPolicy, UnknownPolicy,
};
use crate::presets::Preset;
use output::OutputFormat;

/// slugline - turn any text into a safe, readable slug
#[derive(Parser, Debug)]
#[command(name = "slugline", version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/slugline/config.toml)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert text to slugs, one per argument or stdin line
    Slug(SlugArgs),

    /// Find a free variant of a slug
    Unique(UniqueArgs),

    /// List the built-in presets
    Presets(PresetsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `slug` command
#[derive(Parser, Debug, Default)]
pub struct SlugArgs {
    /// Text to convert; reads one input per line from stdin when omitted
    pub text: Vec<String>,

    /// Start from a named preset (overrides the config file's preset)
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Separator between words: -, _ or .
    #[arg(short, long)]
    pub separator: Option<Separator>,

    /// Keep the original letter case
    #[arg(long)]
    pub no_lowercase: bool,

    /// Locale tag used for lowercasing and stopwords (e.g. en, tr)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Maximum slug length in characters (0 disables truncation)
    #[arg(short, long)]
    pub max_length: Option<usize>,

    /// Characters allowed in the slug
    #[arg(short, long, value_enum)]
    pub alphabet: Option<Alphabet>,

    /// Processing mode
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Keep characters outside the alphabet
    #[arg(long)]
    pub no_strict: bool,

    /// What to do with emoji
    #[arg(long, value_enum)]
    pub emoji: Option<EmojiPolicy>,

    /// Which symbols to spell out as words
    #[arg(long, value_enum)]
    pub symbols: Option<SymbolsPolicy>,

    /// Spell out c++, c#, f#, .net and node.js
    #[arg(long)]
    pub tech: bool,

    /// Stopwords for semantic mode: off, auto, or a comma-separated list
    #[arg(long, value_name = "POLICY")]
    pub stopwords: Option<StopwordPolicy>,

    /// Drop tokens made only of digits
    #[arg(long)]
    pub drop_numbers: bool,

    /// Extra reserved name (can be specified multiple times)
    #[arg(long = "reserved", value_name = "NAME", action = ArgAction::Append)]
    pub reserved: Vec<String>,

    /// What to do with characters that cannot be transliterated
    #[arg(long, value_enum)]
    pub unknown: Option<UnknownPolicy>,

    /// Base text for slugs generated from unusable input
    #[arg(long, value_name = "TEXT")]
    pub fallback: Option<String>,

    /// Show tokens, warnings and every pipeline step
    #[arg(short, long)]
    pub detailed: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl SlugArgs {
    /// The option fields set on the command line.
    pub fn overrides(&self) -> SlugOverrides {
        SlugOverrides {
            separator: self.separator.map(Separator::as_char),
            lowercase: self.no_lowercase.then_some(false),
            locale: self.locale.clone(),
            max_length: self.max_length,
            alphabet: self.alphabet,
            mode: self.mode,
            strict: self.no_strict.then_some(false),
            emoji: self.emoji,
            symbols: self.symbols,
            tech: self.tech.then_some(true),
            stopwords: self.stopwords.clone(),
            keep_numbers: self.drop_numbers.then_some(false),
            reserved: (!self.reserved.is_empty()).then(|| self.reserved.clone()),
            unknown: self.unknown,
            fallback: self.fallback.clone().map(FallbackStrategy::Literal),
        }
    }
}

/// Arguments for the `unique` command
#[derive(Parser, Debug)]
pub struct UniqueArgs {
    /// Slug to make unique
    pub base: String,

    /// A slug that is already in use (can be specified multiple times)
    #[arg(short, long = "taken", value_name = "SLUG", action = ArgAction::Append)]
    pub taken: Vec<String>,

    /// File listing slugs already in use, one per line
    #[arg(long, value_name = "FILE")]
    pub taken_file: Option<PathBuf>,

    /// Highest numeric suffix to try before using a timestamp
    #[arg(long, default_value_t = 1000)]
    pub max: usize,

    /// Separator before the suffix: -, _ or .
    #[arg(short, long, default_value_t = Separator::Hyphen)]
    pub separator: Separator,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `presets` command
#[derive(Parser, Debug)]
pub struct PresetsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
