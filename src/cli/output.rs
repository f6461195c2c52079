//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::SlugOverrides;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// One input and its slug.
#[derive(Debug, Serialize)]
pub struct SlugListing {
    pub input: String,
    pub slug: String,
}

/// Result of the `unique` command.
#[derive(Debug, Serialize)]
pub struct UniqueListing {
    pub base: String,
    pub slug: String,
    /// Whether the base itself was already taken
    pub changed: bool,
}

/// A preset and the options it sets.
#[derive(Debug, Serialize)]
pub struct PresetListing {
    pub name: &'static str,
    pub description: &'static str,
    pub options: SlugOverrides,
}
