//! Hugo development server for editing hand-written documentation.

use crate::{
    config::ForgeConfig,
    log,
    site,
    utils::command::{exec_interactive, filter_args, to_cmd_vec, to_os},
};
use anyhow::Result;

/// Start the Hugo development server. Useful for getting quick feedback
/// when writing and editing documentation.
pub fn serve_docs(config: &'static ForgeConfig) -> Result<()> {
    site::check_prereqs(config)?;

    // The dev server only renders the hand-written tree: generated code
    // docs, version history, and download links will not appear here.
    log!("serve"; "note: automatically generated content is not available in the dev server");

    let dev = config.layout().website_dev();
    exec_interactive(
        Some(config.layout().doc_dir()),
        &to_cmd_vec(&config.site.command),
        &filter_args(&[to_os("server"), to_os("--destination"), to_os(&dev)]),
    )
}
