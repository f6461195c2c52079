//! Slug command handler.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::cli::SlugArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, SlugListing};
use crate::domain::{SlugDetailed, SlugOptions};

pub fn handle_slug(
    args: &SlugArgs,
    config: &Config,
    stdin: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let options = config.resolve(args.preset, &args.overrides());
    log::debug!("resolved options: {options:?}");

    let inputs = if args.text.is_empty() {
        stdin
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .context("failed to read input from stdin")?
    } else {
        args.text.clone()
    };

    if args.detailed {
        let results = inputs
            .iter()
            .map(|input| detailed(input, &options))
            .collect::<Result<Vec<_>>>()?;
        match args.format {
            OutputFormat::Human => {
                for result in &results {
                    write_detailed(out, result)?;
                }
            }
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(results))?)?;
            }
        }
        return Ok(());
    }

    let listings = inputs
        .into_iter()
        .map(|input| {
            let slug = crate::slug(&input, &options)
                .with_context(|| format!("failed to slug {input:?}"))?;
            Ok(SlugListing { input, slug })
        })
        .collect::<Result<Vec<_>>>()?;

    match args.format {
        OutputFormat::Human => {
            for listing in &listings {
                writeln!(out, "{}", listing.slug)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(listings))?)?;
        }
    }
    Ok(())
}

fn detailed(input: &str, options: &SlugOptions) -> Result<SlugDetailed> {
    crate::slug_detailed(input, options).with_context(|| format!("failed to slug {input:?}"))
}

fn write_detailed(out: &mut impl Write, result: &SlugDetailed) -> Result<()> {
    writeln!(out, "{}", result.slug)?;
    writeln!(out, "  tokens:   {}", result.tokens.join(" "))?;
    if !result.warnings.is_empty() {
        let warnings: Vec<&str> = result.warnings.iter().map(|w| w.as_str()).collect();
        writeln!(out, "  warnings: {}", warnings.join(", "))?;
    }
    for step in &result.steps {
        writeln!(out, "  {:<14} {:?} -> {:?}", step.op, step.before, step.after)?;
    }
    Ok(())
}
