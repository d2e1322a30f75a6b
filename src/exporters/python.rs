//! Python API docs via pydoc-markdown.
//!
//! Each configured module becomes one markdown page. The front matter is
//! written and flushed first, then the exporter's stdout is pointed into the
//! same file handle, so the header is guaranteed to precede the generated
//! body on disk.

use crate::{
    config::ForgeConfig,
    frontmatter::FrontMatter,
    log,
    utils::{
        command::{exec_to_file, filter_args, to_cmd_vec, to_os},
        fs::recreate_dir,
    },
};
use anyhow::{Context, Result};
use std::{
    env,
    ffi::OsString,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

/// Render one page per configured Python module, in menu order.
pub fn generate(config: &'static ForgeConfig) -> Result<()> {
    let dir = config.layout().code_dir("python");
    recreate_dir(&dir)?;

    let modules = &config.docs.python.modules;
    for (index, module) in modules.iter().enumerate() {
        pydoc_markdown(config, module, &dir.join(format!("{module}.md")), index as i32 + 1)?;
    }

    log!("python"; "rendered {} module pages", modules.len());
    Ok(())
}

/// Render one module's docs into `file`, front matter first.
fn pydoc_markdown(
    config: &'static ForgeConfig,
    module: &str,
    file: &Path,
    weight: i32,
) -> Result<()> {
    let python = &config.docs.python;

    let mut out =
        File::create(file).with_context(|| format!("Failed to create {}", file.display()))?;
    out.write_all(
        FrontMatter::new()
            .title(module)
            .weight(weight)
            .hidden(true)
            .render()
            .as_bytes(),
    )?;

    // flush buffers before pointing other external programs into this stream
    out.flush()?;

    let pythonpath = join_python_path(env::var_os("PYTHONPATH"), &python.extra_path)?;
    exec_to_file(
        Some(config.get_root()),
        &to_cmd_vec(&python.command),
        &filter_args(&[
            to_os("--search-path"),
            to_os(&python.search_path),
            to_os("--module"),
            to_os(module),
            to_os(&python.config),
        ]),
        &[("PYTHONPATH", pythonpath)],
        out,
    )
}

/// Extend an inherited PYTHONPATH with the configured extra entries.
fn join_python_path(existing: Option<OsString>, extra: &[PathBuf]) -> Result<OsString> {
    let mut paths: Vec<PathBuf> = Vec::new();
    if let Some(existing) = existing {
        paths.extend(env::split_paths(&existing));
    }
    paths.extend(extra.iter().cloned());

    env::join_paths(paths).context("Invalid PYTHONPATH entry")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_python_path_from_scratch() {
        let joined = join_python_path(None, &[PathBuf::from("/proj/buildsrc/python")]).unwrap();
        assert_eq!(joined, OsString::from("/proj/buildsrc/python"));
    }

    #[test]
    fn test_join_python_path_keeps_inherited_entries_first() {
        let joined = join_python_path(
            Some(OsString::from("/site-packages")),
            &[PathBuf::from("/proj/python")],
        )
        .unwrap();

        let parts: Vec<_> = env::split_paths(&joined).collect();
        assert_eq!(
            parts,
            vec![PathBuf::from("/site-packages"), PathBuf::from("/proj/python")]
        );
    }

    #[test]
    fn test_join_python_path_empty() {
        let joined = join_python_path(None, &[]).unwrap();
        assert_eq!(joined, OsString::new());
    }
}
