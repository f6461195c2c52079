//! A reusable slug builder bound to a fixed set of defaults.

use super::{slug, slug_detailed};
use crate::domain::{SlugDetailed, SlugError, SlugOptions, SlugOverrides};
use crate::presets::Preset;

/// Slugs text with fixed defaults, optionally overridden per call.
///
/// # Examples
///
/// ```
/// use slugline::Slugger;
/// use slugline::domain::{SlugOptions, SlugOverrides};
///
/// let slugger = Slugger::new(SlugOptions {
///     separator: '_',
///     ..SlugOptions::default()
/// });
/// assert_eq!(slugger.slug("Hello World").unwrap(), "hello_world");
///
/// let dotted = SlugOverrides {
///     separator: Some('.'),
///     ..SlugOverrides::default()
/// };
/// assert_eq!(slugger.slug_with("Hello World", &dotted).unwrap(), "hello.world");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Slugger {
    defaults: SlugOptions,
}

impl Slugger {
    pub fn new(defaults: SlugOptions) -> Self {
        Self { defaults }
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(preset.options())
    }

    pub fn defaults(&self) -> &SlugOptions {
        &self.defaults
    }

    /// Slugs `input` with the bound defaults.
    ///
    /// # Errors
    ///
    /// Same as [`crate::slug`].
    pub fn slug(&self, input: &str) -> Result<String, SlugError> {
        slug(input, &self.defaults)
    }

    /// Slugs `input` with `overrides` layered over the bound defaults.
    ///
    /// # Errors
    ///
    /// Same as [`crate::slug`].
    pub fn slug_with(&self, input: &str, overrides: &SlugOverrides) -> Result<String, SlugError> {
        slug(input, &self.defaults.with_overrides(overrides))
    }

    /// # Errors
    ///
    /// Same as [`crate::slug`].
    pub fn slug_detailed(&self, input: &str) -> Result<SlugDetailed, SlugError> {
        slug_detailed(input, &self.defaults)
    }
}
