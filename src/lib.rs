//! slugline - turn arbitrary text into safe, readable slugs
//!
//! ```
//! use slugline::domain::{Alphabet, SlugOptions};
//!
//! let options = SlugOptions {
//!     alphabet: Alphabet::Ascii,
//!     ..SlugOptions::default()
//! };
//! assert_eq!(slugline::slug("Ünïcödé Straße", &options).unwrap(), "unicode-strasse");
//! ```

pub mod cli;
pub mod domain;
pub mod infra;
pub mod pipeline;
pub mod presets;
pub mod tables;

use anyhow::Result;
use clap::Parser;
use std::io;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_presets, handle_slug, handle_unique},
};

pub use domain::{SlugDetailed, SlugError, SlugOptions};
pub use pipeline::{
    Slugger, SuggestContext, Suggester, UniqueOptions, slug, slug_async, slug_detailed,
    slug_with_recorder, slugify, slugify_detailed, unique_slug,
};
pub use presets::Preset;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Slug(args) => {
            let config = Config::load(cli.config.as_deref())?;
            handle_slug(args, &config, io::stdin().lock(), &mut out)
        }
        Command::Unique(args) => handle_unique(args, &mut out),
        Command::Presets(args) => handle_presets(args, &mut out),
        Command::Completions(args) => handle_completions(args, &mut out),
    }
}

/// `RUST_LOG` wins; otherwise each `-v` raises the level from `warn`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}
