//! Error type for slug generation.

use thiserror::Error;

/// Errors returned by the slug entry points.
///
/// Malformed *text* never produces an error: any input yields a slug, falling
/// back to a generated one when nothing usable survives. Only configuration
/// values and the external suggester can fail a call.
#[derive(Debug, Error)]
pub enum SlugError {
    #[error("separator must be \"-\", \"_\" or \".\", got {0:?}")]
    InvalidSeparator(String),

    #[error("invalid value '{value}' for {option}: expected {expected}")]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("slug suggester failed: {0}")]
    Suggester(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SlugError {
    pub(crate) fn invalid_option(option: &'static str, value: &str, expected: &'static str) -> Self {
        Self::InvalidOption {
            option,
            value: value.to_string(),
            expected,
        }
    }
}
