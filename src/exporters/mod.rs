//! Documentation exporter tasks.
//!
//! Each language's API docs are produced by an external extractor driven
//! with a fixed argument list. The tasks here only sequence those tools and
//! massage their output for the site generator; rendering is entirely the
//! extractors' business.

mod api;
mod java;
mod kotlin;
mod python;

use crate::config::ForgeConfig;
use anyhow::Result;

/// Render the Python API docs.
///
/// The queryable JSON API exports run first: the Python doc templates
/// resolve references into the JVM API from them.
pub fn python_docs(config: &'static ForgeConfig) -> Result<()> {
    api::export_api_json(config)?;
    python::generate(config)
}

/// Render the Java API docs.
pub fn java_docs(config: &'static ForgeConfig) -> Result<()> {
    java::generate(config)
}

/// Render the Kotlin API docs.
pub fn kotlin_docs(config: &'static ForgeConfig) -> Result<()> {
    kotlin::generate(config)
}

/// Render the Python, Java, and Kotlin docs for the current source tree.
pub fn code_docs(config: &'static ForgeConfig) -> Result<()> {
    python_docs(config)?;
    java_docs(config)?;
    kotlin_docs(config)
}
