//! Queryable JSON exports of the JVM APIs.
//!
//! Optional export commands dump the Java and Kotlin APIs into
//! `javadoc.json` / `kdoc.json`; the Python doc templates query them to link
//! into the JVM API reference. The export command receives the output path
//! as its last argument.

use crate::{config::ForgeConfig, log, utils::fs::create_dir_if_needed};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Run the configured JSON API exports, skipping the unconfigured ones.
pub fn export_api_json(config: &'static ForgeConfig) -> Result<()> {
    let layout = config.layout();

    if !config.docs.java.json_export.is_empty() {
        run_export(config, &config.docs.java.json_export, &layout.javadoc_json(), "javadoc")?;
    }
    if !config.docs.kotlin.json_export.is_empty() {
        run_export(config, &config.docs.kotlin.json_export, &layout.kdoc_json(), "kdoc")?;
    }

    Ok(())
}

/// Run one export command and sanity-check its output file.
fn run_export(
    config: &'static ForgeConfig,
    command: &[String],
    out: &Path,
    label: &str,
) -> Result<()> {
    if let Some(parent) = out.parent() {
        create_dir_if_needed(parent)?;
    }

    crate::exec!(config.get_root(); command; out)?;

    let entries = summarize_json(out)
        .with_context(|| format!("`{}` did not produce a usable {label} export", command[0]))?;
    log!("docs"; "{label}: exported {entries} entries to {}", out.display());

    Ok(())
}

/// Shallow validation of an export: the file must exist and parse as JSON.
/// Returns the number of top-level entries.
fn summarize_json(path: &Path) -> Result<usize> {
    if !path.exists() {
        bail!("Output file {} was not created", path.display());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let entries = match &value {
        serde_json::Value::Object(map) => map.len(),
        serde_json::Value::Array(items) => items.len(),
        _ => 1,
    };
    Ok(entries)
}

// ============================================================================
// Tests
// ============================================================================
