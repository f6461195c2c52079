//! Disambiguating a slug against ones already in use.

use chrono::Utc;

use crate::domain::Separator;

/// Settings for [`unique_slug`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueOptions {
    pub separator: Separator,
    /// Highest numeric suffix to try before falling back to a timestamp
    pub max: usize,
}

impl Default for UniqueOptions {
    fn default() -> Self {
        Self {
            separator: Separator::Hyphen,
            max: 1000,
        }
    }
}

/// Returns `base` if it is free, else the first free `<base><sep>N` for
/// `N` in `1..=max`, else `<base><sep><unix millis>`.
///
/// # Examples
///
/// ```
/// use slugline::{UniqueOptions, unique_slug};
///
/// let taken = ["post", "post-1"];
/// let slug = unique_slug("post", |s| taken.contains(&s), &UniqueOptions::default());
/// assert_eq!(slug, "post-2");
/// ```
pub fn unique_slug<F>(base: &str, mut is_taken: F, options: &UniqueOptions) -> String
where
    F: FnMut(&str) -> bool,
{
    if !is_taken(base) {
        return base.to_string();
    }
    let sep = options.separator;
    for n in 1..=options.max {
        let candidate = format!("{base}{sep}{n}");
        if !is_taken(&candidate) {
            return candidate;
        }
    }
    log::debug!("no free suffix for {base:?} up to {}; using timestamp", options.max);
    format!("{base}{sep}{}", Utc::now().timestamp_millis())
}
