//! Kotlin API docs via Dokka.
//!
//! The configured exporter command receives the output directory as its
//! last argument.

use crate::{
    config::ForgeConfig,
    exec,
    log,
    utils::fs::{create_dir_if_needed, rename_file},
};
use anyhow::Result;

/// Render the Kotlin API docs into `build/doc/code-kotlin`.
pub fn generate(config: &'static ForgeConfig) -> Result<()> {
    let dir = config.layout().code_dir("kotlin");
    create_dir_if_needed(&dir)?;

    exec!(config.get_root(); &config.docs.kotlin.command; &dir)?;

    // hugo wants to use the index.html url,
    // so rename the index file generated by dokka to something else
    rename_file(&dir.join("index.html"), "start.html")?;

    log!("kotlin"; "rendered into {}", dir.display());
    Ok(())
}
