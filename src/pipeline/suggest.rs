//! Optional asynchronous slug suggestions from an external source.

use serde::Serialize;
use std::future::Future;

use super::{slug, slug_with_recorder};
use crate::domain::{Alphabet, Mode, NoopRecorder, Separator, SlugError, SlugOptions, Warning};
use crate::infra::is_unusable;

/// What a [`Suggester`] is told about the slug being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestContext<'a> {
    /// The raw input, before normalization
    pub input: &'a str,
    /// The slug the deterministic pipeline produced
    pub deterministic: &'a str,
    pub locale: &'a str,
    pub max_length: usize,
    pub separator: Separator,
    pub alphabet: Alphabet,
    pub mode: Mode,
}

/// An external source of slug candidates, such as a language model.
///
/// Whatever it returns is untrusted: [`slug_async`] runs the candidate through
/// the full pipeline before using it.
pub trait Suggester {
    type Error: std::error::Error + Send + Sync + 'static;

    fn suggest(
        &self,
        context: &SuggestContext<'_>,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Builds the deterministic slug, then asks `suggester` for a better one.
///
/// The suggester is awaited exactly once. Its candidate is slugged with the
/// same `options`; if that leaves nothing usable (or only the generated
/// fallback), the deterministic slug is returned instead.
///
/// # Errors
///
/// Returns [`SlugError::InvalidSeparator`] for a bad separator, and
/// [`SlugError::Suggester`] if the suggester itself fails.
pub async fn slug_async<S>(
    input: &str,
    options: &SlugOptions,
    suggester: &S,
) -> Result<String, SlugError>
where
    S: Suggester,
{
    let deterministic = slug(input, options)?;
    let context = SuggestContext {
        input,
        deterministic: &deterministic,
        locale: options.effective_locale(),
        max_length: options.max_length,
        separator: options.separator()?,
        alphabet: options.alphabet,
        mode: options.mode,
    };

    let candidate = suggester
        .suggest(&context)
        .await
        .map_err(|err| SlugError::Suggester(Box::new(err)))?;

    let outcome = slug_with_recorder(&candidate, options, &mut NoopRecorder)?;
    if is_unusable(&outcome.slug) || outcome.warnings.contains(&Warning::FellBack) {
        log::debug!("rejected suggested slug {candidate:?}; keeping {deterministic:?}");
        return Ok(deterministic);
    }
    Ok(outcome.slug)
}
