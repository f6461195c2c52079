//! Presets command handler.

use anyhow::Result;
use serde_json::Value;
use std::io::Write;

use crate::cli::PresetsArgs;
use crate::cli::output::{Output, OutputFormat, PresetListing};
use crate::presets::Preset;

pub fn handle_presets(args: &PresetsArgs, out: &mut impl Write) -> Result<()> {
    match args.format {
        OutputFormat::Human => {
            for preset in Preset::all() {
                writeln!(out, "{:<8}  {}", preset.name(), preset.description())?;
                writeln!(out, "{:<8}  {}", "", option_summary(*preset)?)?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<PresetListing> = Preset::all()
                .iter()
                .map(|p| PresetListing {
                    name: p.name(),
                    description: p.description(),
                    options: p.overrides(),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(listings))?)?;
        }
    }
    Ok(())
}

/// `key=value` pairs for every option the preset sets, in key order.
fn option_summary(preset: Preset) -> Result<String> {
    let value = serde_json::to_value(preset.overrides())?;
    let pairs: Vec<String> = value
        .as_object()
        .into_iter()
        .flatten()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{key}={s}"),
            other => format!("{key}={other}"),
        })
        .collect();
    Ok(pairs.join(" "))
}
