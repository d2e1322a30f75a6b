//! Release transfer and website deployment over SSH/SCP.
//!
//! The release host is the source of truth for documentation releases: the
//! fetch task mirrors the archives the local build is missing, and the
//! deploy task uploads the packaged website and unpacks it in place.

use crate::{
    config::ForgeConfig,
    exec,
    log,
    utils::fs::create_dir_if_needed,
};
use anyhow::{Context, Result, bail};
use std::{collections::HashSet, ffi::OsString, fs};

/// Download documentation releases missing from the local mirror.
pub fn fetch_doc_releases(config: &'static ForgeConfig) -> Result<()> {
    let layout = config.layout();
    let remote = &config.remote;
    let prefix = layout.doc_release_prefix();
    create_dir_if_needed(layout.releases_dir())?;

    // what releases do we have already?
    let local: HashSet<String> = fs::read_dir(layout.releases_dir())?
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(&prefix))
        .collect();

    // what releases do we need? (`-p` marks directories with a trailing `/`)
    let (identity_flag, identity) = identity_args(config);
    let listing = exec!(
        ["ssh"];
        identity_flag, &identity,
        &remote.host,
        format!("ls -1p {}", remote.release_dir.display()),
    )?;
    let stdout = String::from_utf8_lossy(&listing.stdout);
    let missing = missing_releases(&stdout, &prefix, &local);

    // download the missing releases
    if missing.is_empty() {
        log!("fetch"; "no extra documentation releases to download");
        return Ok(());
    }
    for name in missing {
        log!("fetch"; "downloading {name}");
        exec!(
            ["scp"];
            "-q",
            identity_flag, &identity,
            format!("{}:{}/{name}", remote.host, remote.release_dir.display()),
            layout.releases_dir().join(&name),
        )?;
    }

    Ok(())
}

/// Replace the deployed website with the one in the build folder.
pub fn deploy_website(config: &'static ForgeConfig) -> Result<()> {
    let layout = config.layout();
    let remote = &config.remote;

    // first, make sure we have the website tar file
    let tar = layout.website_tar();
    if !tar.exists() {
        bail!("Website archive not found. Create it with the `website` task first.");
    }
    let tar_name = tar
        .file_name()
        .context("Website archive has no filename")?
        .to_string_lossy()
        .into_owned();
    let remote_tar = format!("{}/{tar_name}", remote.deploy_dir.display());

    // upload the tar file
    let (identity_flag, identity) = identity_args(config);
    log!("deploy"; "uploading {tar_name}");
    exec!(
        ["scp"];
        "-q",
        identity_flag, &identity,
        &tar,
        format!("{}:{remote_tar}", remote.host),
    )?;

    // extract the tar file
    log!("deploy"; "extracting website ...");
    exec!(
        ["ssh"];
        identity_flag, &identity,
        &remote.host,
        format!(
            "tar --extract -f \"{remote_tar}\" --directory \"{}\"",
            remote.deploy_dir.display()
        ),
    )?;

    // all done!
    log!("deploy"; "website deployed successfully!");
    if !remote.site_url.is_empty() {
        log!("deploy"; "you can visit the website at: {}", remote.site_url);
    }

    Ok(())
}

/// `-i <identity>` arguments, or empty strings when no identity file is
/// configured (empty args are filtered out before the command runs).
fn identity_args(config: &ForgeConfig) -> (&'static str, OsString) {
    match &config.remote.identity_file {
        Some(path) => ("-i", path.into()),
        None => ("", OsString::new()),
    }
}

/// Names from a remote `ls -1p` listing that carry the release prefix and
/// are not mirrored locally yet. Directory entries (trailing `/`) and
/// unrelated files are skipped.
fn missing_releases(listing: &str, prefix: &str, local: &HashSet<String>) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty() && !name.ends_with('/'))
        .filter(|name| name.starts_with(prefix))
        .filter(|name| !local.contains(*name))
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
