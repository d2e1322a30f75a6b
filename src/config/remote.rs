//! `[remote]` section configuration.
//!
//! Where release archives live and where the rendered website is deployed,
//! reached over SSH/SCP.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[remote]` section in docforge.toml - release host settings.
///
/// # Example
/// ```toml
/// [remote]
/// host = "deploy@docs.example.com"
/// release_dir = "/data/releases"
/// deploy_dir = "/var/www/docs"
/// archive_url = "https://example.com/releases"
/// site_url = "https://example.com/docs"
/// identity_file = "~/.ssh/id_ed25519"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// SSH destination, `user@host`.
    #[serde(default)]
    pub host: String,

    /// Remote directory holding every release archive.
    #[serde(default)]
    pub release_dir: PathBuf,

    /// Remote directory the website tarball is extracted into.
    #[serde(default)]
    pub deploy_dir: PathBuf,

    /// Public base URL the release archives are served from.
    #[serde(default)]
    pub archive_url: String,

    /// Public URL of the deployed website, printed after a deploy.
    #[serde(default)]
    pub site_url: String,

    /// SSH identity file, passed as `-i` when set.
    ///
    /// A leading `~` is expanded against the home directory.
    #[serde(default = "defaults::remote::identity_file")]
    #[educe(Default = defaults::remote::identity_file())]
    pub identity_file: Option<PathBuf>,
}

impl RemoteConfig {
    /// Public URL for one release archive filename.
    pub fn archive_url_for(&self, filename: &str) -> String {
        format!("{}/{filename}", self.archive_url.trim_end_matches('/'))
    }
}
