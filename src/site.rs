//! Website assembly and rendering.
//!
//! Builds the documentation and download website:
//!
//! ```text
//! build_website()
//!     │
//!     ├── check_prereqs() ──► hugo + git on PATH, pinned theme cloned
//!     │
//!     ├── assemble src tree ──► hand-written docs + generated code docs
//!     │                         + unpacked doc releases
//!     │
//!     ├── inject links ──► version list + download links via tag markers
//!     │
//!     └── hugo ──► rendered site, packaged as <name>-website.tar.gz
//! ```

use crate::{
    config::ForgeConfig,
    exec,
    log,
    release::{ReleaseScan, pair_component},
    tags,
    utils::{
        command::require,
        fs::{copy_dir, create_dir_if_needed, recreate_dir},
    },
};
use anyhow::{Context, Result, bail};

/// Build the documentation and download website.
pub fn build_website(config: &'static ForgeConfig) -> Result<()> {
    check_prereqs(config)?;

    let layout = config.layout();
    let src = layout.website_src();
    let dst = layout.website_dst();

    recreate_dir(&layout.website_dir())?;
    create_dir_if_needed(&src)?;
    create_dir_if_needed(&dst)?;

    // copy over the docs from the source tree
    copy_dir(layout.doc_dir(), &src)?;

    // copy over the generated code docs
    let main_code = src.join("content/documentation/main/code");
    copy_dir(&layout.code_dir("java"), &main_code.join("java"))?;
    copy_dir(&layout.code_dir("kotlin"), &main_code.join("kotlin"))?;
    copy_dir(&layout.code_dir("python"), &main_code.join("python"))?;

    // query for the available doc releases
    let doc_releases = ReleaseScan::scan(layout.releases_dir(), &layout.doc_release_prefix())?;
    let versions: Vec<_> = doc_releases
        .all_ascending("")
        .iter()
        .map(|r| r.version.to_string())
        .collect();
    log!("site"; "found {} documentation releases: [{}]", doc_releases.len(), versions.join(", "));

    // unpack the docs releases
    for release in doc_releases.iter() {
        exec!(["tar"]; "--extract", "--file", &release.path, "--directory", &src)?;
    }

    // add version links to the versioned docs main page
    tags::update_file(
        &src.join("content/documentation/_index.md"),
        &[("doc/versions", version_list(&doc_releases))],
    )?;

    // generate the download links
    let releases = ReleaseScan::scan(layout.releases_dir(), &config.project.name)?;
    tags::update_file(&src.join("content/_index.md"), &latest_links(config, &releases)?)?;
    tags::update_file(
        &src.join("content/install/versions.md"),
        &all_links(config, &releases),
    )?;

    // build the website using hugo
    exec!(src.as_path(); &config.site.command; "--destination", &dst)?;

    // package the rendered site
    create_dir_if_needed(&layout.build_doc_dir())?;
    let tar = layout.website_tar();
    exec!(dst.as_path(); ["tar"]; "--create", "--gzip", "--file", &tar, ".")?;

    log!("site"; "built {}", tar.display());
    Ok(())
}

/// Make sure the site generator, git, and the pinned theme are available.
pub fn check_prereqs(config: &'static ForgeConfig) -> Result<()> {
    // commands we'll need
    let hugo = config
        .site
        .command
        .first()
        .context("[site.command] must have at least one element")?;
    require(hugo)?;
    require("git")?;

    // download the theme, if needed
    let theme = &config.site.theme;
    let theme_dir = config.layout().theme_dir(&theme.name);
    if !theme_dir.exists() {
        exec!(
            ["git"];
            "clone",
            "--depth", "1",
            "--branch", &theme.branch,
            &theme.url,
            &theme_dir,
        )?;
    }

    // make sure we got it
    if !theme_dir.exists() {
        bail!("Hugo theme is not available. The download must have failed somehow.");
    }

    Ok(())
}

/// Markdown list of versioned docs, one link per unpacked release.
fn version_list(doc_releases: &ReleaseScan) -> String {
    let links = doc_releases
        .all_ascending("")
        .iter()
        .map(|release| format!(" * [v{version}](v{version})", version = release.version))
        .collect::<Vec<_>>()
        .join("\n");
    format!("\n\n{links}\n")
}

/// Substitutions for the `download/<target>/<platform>/latest` markers.
///
/// A configured pair with no matching release is a missing expected release
/// and halts the build.
fn latest_links(
    config: &'static ForgeConfig,
    releases: &ReleaseScan,
) -> Result<Vec<(String, String)>> {
    config
        .site
        .download_pairs()
        .map(|(target, platform)| {
            let release = releases.latest(&pair_component(target, platform))?;
            let url = config.remote.archive_url_for(&release.filename);
            Ok((
                format!("download/{target}/{platform}/latest"),
                format!("[{}]({url})", release.filename),
            ))
        })
        .collect()
}

/// Substitutions for the `download/<target>/<platform>/all` markers,
/// oldest first since "latest" is already surfaced separately.
fn all_links(config: &'static ForgeConfig, releases: &ReleaseScan) -> Vec<(String, String)> {
    config
        .site
        .download_pairs()
        .map(|(target, platform)| {
            let list = releases
                .all_ascending(&pair_component(target, platform))
                .iter()
                .map(|release| {
                    let url = config.remote.archive_url_for(&release.filename);
                    format!(" * **v{}**: [{}]({url})", release.version, release.filename)
                })
                .collect::<Vec<_>>()
                .join("\n");
            (
                format!("download/{target}/{platform}/all"),
                format!("\n\n{list}\n"),
            )
        })
        .collect()
}

/// Leaked config for tests; mirrors how `main` hands out `&'static` refs.
#[cfg(test)]
fn leak_config(toml: &str) -> &'static ForgeConfig {
    Box::leak(Box::new(ForgeConfig::from_str(toml).unwrap()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};

    const CONFIG: &str = r#"
        [project]
        name = "acme"

        [[site.downloads]]
        target = "desktop"
        platforms = ["linux"]

        [[site.downloads]]
        target = "server"
        platforms = ["linux"]

        [remote]
        archive_url = "https://example.com/releases"
    "#;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"").unwrap();
        }
    }

    #[test]
    fn test_version_list_markdown() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["acme-docs-4.0.tbz2", "acme-docs-3.9.tbz2"]);
        let scan = ReleaseScan::scan(dir.path(), "acme-docs").unwrap();

        assert_eq!(version_list(&scan), "\n\n * [v3.9](v3.9)\n * [v4.0](v4.0)\n");
    }

    #[test]
    fn test_latest_links_pick_newest_per_pair() {
        let config = leak_config(CONFIG);
        let dir = tempfile::tempdir().unwrap();
        touch(
            dir.path(),
            &[
                "acme-desktop-linux-4.0.tbz2",
                "acme-desktop-linux-4.2.tbz2",
                "acme-server-linux-4.1.tbz2",
            ],
        );
        let scan = ReleaseScan::scan(dir.path(), "acme").unwrap();

        let subs = latest_links(config, &scan).unwrap();

        assert_eq!(
            subs[0],
            (
                "download/desktop/linux/latest".to_string(),
                "[acme-desktop-linux-4.2.tbz2](https://example.com/releases/acme-desktop-linux-4.2.tbz2)"
                    .to_string()
            )
        );
        assert_eq!(subs[1].0, "download/server/linux/latest");
    }

    #[test]
    fn test_latest_links_missing_pair_halts() {
        let config = leak_config(CONFIG);
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["acme-desktop-linux-4.2.tbz2"]);
        let scan = ReleaseScan::scan(dir.path(), "acme").unwrap();

        // server-linux has no release: that is a missing expected artifact
        assert!(latest_links(config, &scan).is_err());
    }

    #[test]
    fn test_all_links_ascending() {
        let config = leak_config(CONFIG);
        let dir = tempfile::tempdir().unwrap();
        touch(
            dir.path(),
            &[
                "acme-desktop-linux-2.1.tbz2",
                "acme-desktop-linux-1.9.tbz2",
                "acme-desktop-linux-2.0.tbz2",
                "acme-server-linux-1.0.tbz2",
            ],
        );
        let scan = ReleaseScan::scan(dir.path(), "acme").unwrap();

        let subs = all_links(config, &scan);
        let desktop = &subs[0];

        assert_eq!(desktop.0, "download/desktop/linux/all");
        let lines: Vec<_> = desktop.1.lines().filter(|l| !l.is_empty()).collect();
        assert!(lines[0].starts_with(" * **v1.9**:"));
        assert!(lines[1].starts_with(" * **v2.0**:"));
        assert!(lines[2].starts_with(" * **v2.1**:"));
    }
}
