//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::{SlugOptions, SlugOverrides};
use crate::presets::Preset;

/// Application configuration loaded from config file.
///
/// ```toml
/// preset = "safe"
///
/// [options]
/// separator = "_"
/// max_length = 60
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Preset applied beneath `options`
    pub preset: Option<Preset>,

    /// Option values that override the preset
    pub options: SlugOverrides,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the default config; an
    /// explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    log::debug!("no config file at {}", default.display());
                    return Ok(Self::default());
                }
                default
            }
        };

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        let config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;
        log::info!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/slugline/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("slugline")
            .join("config.toml")
    }

    /// Resolve the options for one command.
    ///
    /// Precedence order:
    /// 1. Command-line flags
    /// 2. Config file `[options]`
    /// 3. Preset (`--preset` before the config file's `preset`)
    /// 4. Built-in defaults
    pub fn resolve(&self, cli_preset: Option<Preset>, cli: &SlugOverrides) -> SlugOptions {
        let preset = cli_preset.or(self.preset);
        preset
            .map(Preset::overrides)
            .unwrap_or_default()
            .merged(&self.options)
            .merged(cli)
            .to_options()
    }
}
