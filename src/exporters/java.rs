//! Java API docs via javadoc.
//!
//! See <https://docs.oracle.com/en/java/javase/17/docs/specs/man/javadoc.html>

use crate::{
    config::ForgeConfig,
    exec,
    frontmatter::FrontMatter,
    log,
    utils::fs::{prepend_to_file, recreate_dir, rename_file},
};
use anyhow::{Context, Result};
use std::{env, ffi::OsString, path::Path};
use walkdir::WalkDir;

/// Render the Java API docs into `build/doc/code-java`.
pub fn generate(config: &'static ForgeConfig) -> Result<()> {
    let java = &config.docs.java;
    let dir = config.layout().code_dir("java");
    recreate_dir(&dir)?;

    let (classpath_flag, classpath) = if java.classpath.is_empty() {
        ("", OsString::new())
    } else {
        let joined = env::join_paths(java.classpath.iter().cloned())
            .context("Invalid [docs.java.classpath] entry")?;
        ("-classpath", joined)
    };

    exec!(
        config.get_root();
        &java.command;
        "-source", &java.source_version,
        "-sourcepath", &java.source_dir,
        "-d", &dir,
        "-subpackages", &java.subpackages,
        classpath_flag, classpath,
        "-Xdoclint:none",
    )?;

    // hugo wants to use the index.html url,
    // so rename the index file generated by javadoc to something else
    rename_file(&dir.join("index.html"), "start.html")?;

    // tweak the markdown files from the javadoc folder, otherwise hugo gets confused
    hide_markdown_pages(&dir)?;

    log!("java"; "rendered into {}", dir.display());
    Ok(())
}

/// Prepend a hidden front-matter block to every markdown file in the tree.
fn hide_markdown_pages(dir: &Path) -> Result<()> {
    let header = FrontMatter::new().hidden(true).render();

    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "md")
        {
            prepend_to_file(entry.path(), &header)?;
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_hide_markdown_pages_prepends_front_matter() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("com/acme")).unwrap();
        fs::write(dir.path().join("com/acme/overview.md"), "# Overview\n").unwrap();
        fs::write(dir.path().join("readme.md"), "readme\n").unwrap();
        fs::write(dir.path().join("App.html"), "<html>").unwrap();

        hide_markdown_pages(dir.path()).unwrap();

        let nested = fs::read_to_string(dir.path().join("com/acme/overview.md")).unwrap();
        assert!(nested.starts_with("+++\nweight = 4\nhidden = true\n+++\n\n"));
        assert!(nested.ends_with("# Overview\n"));

        let top = fs::read_to_string(dir.path().join("readme.md")).unwrap();
        assert!(top.starts_with("+++"));

        // non-markdown files are untouched
        assert_eq!(fs::read_to_string(dir.path().join("App.html")).unwrap(), "<html>");
    }

    #[test]
    fn test_hide_markdown_pages_empty_tree() {
        let dir = tempfile::tempdir().unwrap();
        assert!(hide_markdown_pages(dir.path()).is_ok());
    }
}
