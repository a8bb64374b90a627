//! Filter compilation front end.
//!
//! Reads a [`FilterSelection`] as JSON, optionally replaces its `date`
//! dimension with a timeline bucket, and compiles it for one entity type.
//! Used by the `mcx compile` command.

use anyhow::{bail, Context, Result};
use media_companion_core::timeline::TimelineBucket;
use media_companion_core::{
    assemble_with, supports_timeline, EntityFilter, EntityType, FilterSelection,
};
use std::io::Read;
use std::path::Path;

use crate::config::Config;

/// Parse a selection from JSON text. Blank input is an empty selection.
pub fn parse_selection(text: &str) -> Result<FilterSelection> {
    if text.trim().is_empty() {
        return Ok(FilterSelection::default());
    }
    serde_json::from_str(text).with_context(|| "Failed to parse filter selection JSON")
}

/// Read a selection from `path`, or from stdin when `path` is `-` or absent.
///
/// With no path and an interactive stdin there is nothing to read, so the
/// selection is empty.
pub fn read_selection(path: Option<&Path>) -> Result<FilterSelection> {
    let text = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read selection file: {}", p.display()))?,
        None if atty::is(atty::Stream::Stdin) => String::new(),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .with_context(|| "Failed to read selection from stdin")?;
            buf
        }
    };
    parse_selection(&text)
}

/// Compile `selection` for the entity named `entity`.
///
/// `period` is a timeline bucket key (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`)
/// whose date range replaces any `date` in the selection.
pub fn compile_selection(
    config: &Config,
    entity: &str,
    selection: FilterSelection,
    period: Option<&str>,
) -> Result<EntityFilter> {
    let entity: EntityType = entity.parse()?;
    let mut selection = selection;

    if let Some(key) = period {
        if !supports_timeline(entity) {
            bail!("Entity '{}' has no timeline view; --period cannot be used", entity);
        }
        let bucket = TimelineBucket::parse(key)?;
        tracing::info!(entity = %entity, bucket = %bucket, "applying timeline period");
        selection.date = Some(bucket.date_range()?);
    }

    let filter = assemble_with(entity, &selection, &config.compile_options());
    tracing::debug!(entity = %entity, fields = filter.len(), "compiled filter");
    Ok(filter)
}

/// CLI entry point: compile and print the filter as JSON.
pub fn run_compile(
    config: &Config,
    entity: Option<&str>,
    selection_path: Option<&Path>,
    period: Option<&str>,
    pretty: bool,
) -> Result<()> {
    let entity = entity.unwrap_or(config.filters.default_entity.as_str());
    let selection = read_selection(selection_path)?;
    let filter = compile_selection(config, entity, selection, period)?;

    let out = if pretty || config.pretty_output() {
        serde_json::to_string_pretty(&filter)?
    } else {
        serde_json::to_string(&filter)?
    };
    println!("{}", out);

    Ok(())
}
