//! Release archive scanning.
//!
//! Packaged build artifacts live in a flat directory and are identified by
//! filename alone: `<prefix>-<component>-<major>.<minor>.<ext>`, where the
//! component encodes the build target and platform (`desktop-linux`) or is
//! empty for documentation bundles (`acme-docs-4.0.tbz2`).
//!
//! Files that don't carry the prefix are skipped silently; a file that
//! carries it but has an unparsable version segment is a data-integrity
//! error, not a filter condition.

use crate::{utils::fs::base_and_extension, version::Version};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path, path::PathBuf};

// ============================================================================
// Target / Platform
// ============================================================================

/// Build flavor an archive was produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    Desktop,
    Server,
    ServiceDocker,
}

/// Operating system an archive was produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Linux,
    Osx,
    Windows,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Desktop => "desktop",
            Self::Server => "server",
            Self::ServiceDocker => "service-docker",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Linux => "linux",
            Self::Osx => "osx",
            Self::Windows => "windows",
        };
        f.write_str(s)
    }
}

/// Filename component for a (target, platform) pair, e.g. `desktop-linux`.
pub fn pair_component(target: Target, platform: Platform) -> String {
    format!("{target}-{platform}")
}

// ============================================================================
// Release Descriptor
// ============================================================================

/// Parsed identity of one packaged artifact.
///
/// Constructed transiently by [`ReleaseScan::scan`]; never persisted.
#[derive(Debug, Clone)]
pub struct Release {
    /// Full archive filename, e.g. `acme-desktop-linux-4.2.tbz2`.
    pub filename: String,
    /// Segments between the prefix and the version; empty for doc bundles.
    pub component: String,
    pub version: Version,
    pub path: PathBuf,
}

// ============================================================================
// Scanner
// ============================================================================

/// The result of scanning an archive directory for one filename prefix.
#[derive(Debug)]
pub struct ReleaseScan {
    prefix: String,
    releases: Vec<Release>,
}

impl ReleaseScan {
    /// Scan `dir` for regular files named `<prefix>-...`.
    ///
    /// The version is the last `-`-separated segment of the basename (so a
    /// prefix containing `-` is fine as long as the caller passes it whole);
    /// whatever sits between prefix and version becomes the component.
    ///
    /// # Errors
    /// Fails if the directory cannot be read, or if a matching filename has
    /// a malformed version segment.
    pub fn scan(dir: &Path, prefix: &str) -> Result<Self> {
        let marked_prefix = format!("{prefix}-");
        let mut releases = Vec::new();

        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read release directory {}", dir.display()))?;

        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let filename = entry.file_name().to_string_lossy().into_owned();
            let Some(rest) = base_and_extension(&filename).0.strip_prefix(&marked_prefix) else {
                continue;
            };

            let (component, version_str) = match rest.rsplit_once('-') {
                Some((component, version)) => (component, version),
                None => ("", rest),
            };
            let version = version_str
                .parse()
                .with_context(|| format!("Malformed release filename `{filename}`"))?;

            releases.push(Release {
                filename: filename.clone(),
                component: component.to_string(),
                version,
                path: entry.path(),
            });
        }

        Ok(Self { prefix: prefix.to_string(), releases })
    }

    /// The release with the maximum version for the given component.
    ///
    /// # Errors
    /// A component with zero matches means an expected release is missing
    /// and halts the calling workflow.
    pub fn latest(&self, component: &str) -> Result<&Release> {
        let Some(release) = self
            .releases
            .iter()
            .filter(|r| r.component == component)
            .max_by_key(|r| r.version)
        else {
            bail!("No release found for `{}-{component}`", self.prefix);
        };
        Ok(release)
    }

    /// Every release for the given component, sorted ascending by version.
    pub fn all_ascending(&self, component: &str) -> Vec<&Release> {
        let mut matches: Vec<_> = self
            .releases
            .iter()
            .filter(|r| r.component == component)
            .collect();
        matches.sort_by_key(|r| r.version);
        matches
    }

    /// All scanned releases, in directory order.
    pub fn iter(&self) -> impl Iterator<Item = &Release> {
        self.releases.iter()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    #[allow(dead_code)] // Reserved API
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"").unwrap();
        }
    }

    #[test]
    fn test_scan_skips_non_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(
            dir.path(),
            &["app-docs-4.0.tbz2", "app-docs-4.2.tbz2", "app-docs-3.9.tbz2", "readme.txt"],
        );

        let scan = ReleaseScan::scan(dir.path(), "app-docs").unwrap();

        assert_eq!(scan.len(), 3);
        assert_eq!(scan.latest("").unwrap().version, Version::new(4, 2));
    }

    #[test]
    fn test_scan_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["app-docs-1.0.tbz2"]);
        fs::create_dir(dir.path().join("app-docs-2.0.tbz2")).unwrap();

        let scan = ReleaseScan::scan(dir.path(), "app-docs").unwrap();
        assert_eq!(scan.len(), 1);
        assert_eq!(scan.latest("").unwrap().version, Version::new(1, 0));
    }

    #[test]
    fn test_scan_malformed_matching_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["app-docs-nightly.tbz2"]);

        let err = ReleaseScan::scan(dir.path(), "app-docs").unwrap_err();
        assert!(format!("{err:#}").contains("app-docs-nightly.tbz2"));
    }

    #[test]
    fn test_latest_on_empty_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let scan = ReleaseScan::scan(dir.path(), "app-docs").unwrap();

        assert!(scan.is_empty());
        let err = scan.latest("").unwrap_err();
        assert!(err.to_string().contains("No release found"));
    }

    #[test]
    fn test_latest_missing_component_fails() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["app-desktop-linux-4.2.tbz2"]);

        let scan = ReleaseScan::scan(dir.path(), "app").unwrap();
        assert!(scan.latest("desktop-windows").is_err());
    }

    #[test]
    fn test_all_ascending_is_strictly_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(
            dir.path(),
            &["app-server-linux-2.1.tbz2", "app-server-linux-1.9.tbz2", "app-server-linux-2.0.tbz2"],
        );

        let scan = ReleaseScan::scan(dir.path(), "app").unwrap();
        let versions: Vec<_> = scan
            .all_ascending("server-linux")
            .iter()
            .map(|r| r.version)
            .collect();

        assert_eq!(
            versions,
            vec![Version::new(1, 9), Version::new(2, 0), Version::new(2, 1)]
        );
    }

    #[test]
    fn test_components_do_not_leak_between_queries() {
        let dir = tempfile::tempdir().unwrap();
        touch(
            dir.path(),
            &["app-desktop-linux-4.9.tbz2", "app-server-linux-4.2.tbz2"],
        );

        let scan = ReleaseScan::scan(dir.path(), "app").unwrap();
        let latest = scan
            .latest(&pair_component(Target::Server, Platform::Linux))
            .unwrap();

        assert_eq!(latest.version, Version::new(4, 2));
        assert_eq!(latest.filename, "app-server-linux-4.2.tbz2");
    }

    #[test]
    fn test_numeric_version_ordering_in_latest() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["app-docs-4.2.tbz2", "app-docs-4.10.tbz2"]);

        let scan = ReleaseScan::scan(dir.path(), "app-docs").unwrap();
        assert_eq!(scan.latest("").unwrap().version, Version::new(4, 10));
    }

    #[test]
    fn test_compound_extension_does_not_confuse_version() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["app-desktop-osx-4.2.tar.gz"]);

        let scan = ReleaseScan::scan(dir.path(), "app").unwrap();
        let release = scan.latest("desktop-osx").unwrap();
        assert_eq!(release.version, Version::new(4, 2));
    }

    #[test]
    fn test_pair_component_formatting() {
        assert_eq!(pair_component(Target::Desktop, Platform::Linux), "desktop-linux");
        assert_eq!(
            pair_component(Target::ServiceDocker, Platform::Linux),
            "service-docker-linux"
        );
    }
}
