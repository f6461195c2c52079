//! Unique command handler.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::Write;

use crate::cli::UniqueArgs;
use crate::cli::output::{Output, OutputFormat, UniqueListing};
use crate::{UniqueOptions, unique_slug};

pub fn handle_unique(args: &UniqueArgs, out: &mut impl Write) -> Result<()> {
    let mut taken: HashSet<String> = args.taken.iter().cloned().collect();
    if let Some(path) = &args.taken_file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read taken slugs from {}", path.display()))?;
        taken.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }
    log::debug!("{} slugs taken", taken.len());

    let options = UniqueOptions {
        separator: args.separator,
        max: args.max,
    };
    let slug = unique_slug(&args.base, |candidate| taken.contains(candidate), &options);

    match args.format {
        OutputFormat::Human => writeln!(out, "{slug}")?,
        OutputFormat::Json => {
            let listing = UniqueListing {
                base: args.base.clone(),
                changed: slug != args.base,
                slug,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(listing))?)?;
        }
    }
    Ok(())
}
