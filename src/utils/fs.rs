//! Filesystem helpers for assembling content trees.
//!
//! Thin wrappers over `std::fs` and `walkdir` that carry path context in
//! their errors, used by the exporters and the site assembler.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Compound archive extensions that must be treated as a single unit
/// when splitting a filename into base and extension.
const COMPOUND_EXTENSIONS: &[&str] = &["tar.gz", "tar.bz2", "tar.xz"];

/// Create a directory (and parents) if it does not exist yet.
pub fn create_dir_if_needed(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Remove a directory tree if present, then create it fresh.
pub fn recreate_dir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)
            .with_context(|| format!("Failed to clear {}", path.display()))?;
    }
    fs::create_dir_all(path).with_context(|| format!("Failed to create {}", path.display()))
}

/// Recursively copy a directory tree into `dst`, creating it as needed.
///
/// Symlinks are followed; file metadata is not preserved.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            create_dir_if_needed(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                create_dir_if_needed(parent)?;
            }
            fs::copy(entry.path(), &target).with_context(|| {
                format!("Failed to copy {} to {}", entry.path().display(), target.display())
            })?;
        }
    }
    Ok(())
}

/// Rename a file in place, keeping its parent directory.
pub fn rename_file(path: &Path, new_name: &str) -> Result<PathBuf> {
    let target = path
        .parent()
        .map(|p| p.join(new_name))
        .unwrap_or_else(|| PathBuf::from(new_name));
    fs::rename(path, &target).with_context(|| {
        format!("Failed to rename {} to {}", path.display(), target.display())
    })?;
    Ok(target)
}

/// Rewrite a file with `header` prepended to its current content.
pub fn prepend_to_file(path: &Path, header: &str) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    fs::write(path, format!("{header}{content}"))
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Split a filename into (base, extension).
///
/// Compound archive extensions stay whole: `docs-4.0.tar.gz` splits into
/// `("docs-4.0", "tar.gz")`, not `("docs-4.0.tar", "gz")`. A file with no
/// extension yields an empty extension.
pub fn base_and_extension(filename: &str) -> (&str, &str) {
    for ext in COMPOUND_EXTENSIONS {
        if let Some(base) = filename.strip_suffix(ext).and_then(|b| b.strip_suffix('.')) {
            return (base, ext);
        }
    }
    match filename.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base, ext),
        _ => (filename, ""),
    }
}

// ============================================================================
// Tests
// ============================================================================
