//! Versioned documentation release bundles.
//!
//! A docs release is a bzip2 tarball of `content/documentation/v<version>/`
//! holding the generated code docs plus a snapshot of the hand-written main
//! docs, ready to be unpacked straight into a future website source tree.

use crate::{
    config::ForgeConfig,
    exec,
    log,
    utils::{
        fs::{copy_dir, create_dir_if_needed, recreate_dir},
        template,
    },
    version::Version,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Build the code documentation archive for the current version.
pub fn build_docs_release(config: &'static ForgeConfig) -> Result<()> {
    let layout = config.layout();
    let version = config.project_version()?;

    let staging = layout.release_staging_dir();
    recreate_dir(&staging)?;
    let bundle = staging.join(format!("content/documentation/v{version}"));

    copy_dir(&layout.code_dir("python"), &bundle.join("code/python"))?;
    copy_dir(&layout.code_dir("java"), &bundle.join("code/java"))?;
    copy_dir(&layout.code_dir("kotlin"), &bundle.join("code/kotlin"))?;

    // copy the hand-written main docs, but rewrite the index page,
    // which has lots of references to the main branch that won't be
    // appropriate for a versioned snapshot
    copy_dir(&layout.doc_main_dir(), &bundle)?;
    let index = render_version_index(&layout.version_archetype(), version)?;
    fs::write(bundle.join("_index.md"), index)
        .with_context(|| format!("Failed to write {}", bundle.join("_index.md").display()))?;

    create_dir_if_needed(layout.releases_dir())?;
    let tar = layout.doc_release_tar(version);
    exec!(staging.as_path(); ["tar"]; "--create", "--bzip2", "--file", &tar, "content")?;

    log!("archive"; "built {}", tar.display());
    Ok(())
}

/// Render the versioned docs index page from the archetype template.
///
/// The template gets the version string and a menu sorting weight computed
/// so newer versions appear above older ones.
fn render_version_index(archetype: &Path, version: Version) -> Result<String> {
    let template = fs::read_to_string(archetype)
        .with_context(|| format!("Failed to read archetype {}", archetype.display()))?;

    template::expand(
        &template,
        &[
            ("version", version.to_string()),
            ("weight", version.nav_weight().to_string()),
        ],
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_version_index() {
        let dir = tempfile::tempdir().unwrap();
        let archetype = dir.path().join("doc-version.md");
        fs::write(
            &archetype,
            "+++\ntitle = \"v${version}\"\nweight = ${weight}\n+++\n\n# Version ${version}\n",
        )
        .unwrap();

        let rendered = render_version_index(&archetype, Version::new(4, 2)).unwrap();

        assert_eq!(
            rendered,
            "+++\ntitle = \"v4.2\"\nweight = 95998000\n+++\n\n# Version 4.2\n"
        );
    }

    #[test]
    fn test_render_version_index_missing_archetype() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            render_version_index(&dir.path().join("absent.md"), Version::new(1, 0)).unwrap_err();
        assert!(format!("{err:#}").contains("archetype"));
    }

    #[test]
    fn test_render_version_index_unknown_placeholder_fails() {
        let dir = tempfile::tempdir().unwrap();
        let archetype = dir.path().join("doc-version.md");
        fs::write(&archetype, "weight = ${wheight}\n").unwrap();

        assert!(render_version_index(&archetype, Version::new(1, 0)).is_err());
    }
}
