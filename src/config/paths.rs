//! `[paths]` section configuration.
//!
//! Base directories everything else is resolved against. All of them are
//! normalized to absolute paths when the CLI arguments are applied.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[paths]` section in docforge.toml - directory layout roots.
///
/// # Example
/// ```toml
/// [paths]
/// doc = "doc"
/// build = "build"
/// releases = "build/releases"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root; set from the CLI, not the config file.
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Hand-written documentation tree (content, archetypes, themes).
    #[serde(default = "defaults::paths::doc")]
    #[educe(Default = defaults::paths::doc())]
    pub doc: PathBuf,

    /// Build output root.
    #[serde(default = "defaults::paths::build")]
    #[educe(Default = defaults::paths::build())]
    pub build: PathBuf,

    /// Local mirror of the release archives.
    #[serde(default = "defaults::paths::releases")]
    #[educe(Default = defaults::paths::releases())]
    pub releases: PathBuf,
}
