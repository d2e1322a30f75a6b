//! `[site]` section configuration.
//!
//! Settings for the Hugo site build: generator command, pinned theme, and
//! which (target, platform) download links the content pages expect.

use super::defaults;
use crate::release::{Platform, Target};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in docforge.toml - website generator settings.
///
/// # Example
/// ```toml
/// [site]
/// command = ["hugo"]
///
/// [site.theme]
/// url = "https://github.com/matcornic/hugo-theme-learn"
/// branch = "2.5.0"
///
/// [[site.downloads]]
/// target = "desktop"
/// platforms = ["linux", "osx", "windows"]
///
/// [[site.downloads]]
/// target = "service-docker"
/// platforms = ["linux"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Static-site generator invocation.
    #[serde(default = "defaults::site::command")]
    #[educe(Default = defaults::site::command())]
    pub command: Vec<String>,

    /// Pinned theme snapshot.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Download-link groups injected into the content pages.
    #[serde(default)]
    pub downloads: Vec<DownloadGroup>,
}

/// `[site.theme]` section - theme snapshot pinned by git tag.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Theme repository to clone.
    #[serde(default = "defaults::site::theme::url")]
    #[educe(Default = defaults::site::theme::url())]
    pub url: String,

    /// Tag or branch of the pinned snapshot.
    #[serde(default = "defaults::site::theme::branch")]
    #[educe(Default = defaults::site::theme::branch())]
    pub branch: String,

    /// Directory name under `doc/themes/`.
    #[serde(default = "defaults::site::theme::name")]
    #[educe(Default = defaults::site::theme::name())]
    pub name: String,
}

/// One `[[site.downloads]]` entry - a build target and the platforms it
/// ships for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DownloadGroup {
    pub target: Target,
    pub platforms: Vec<Platform>,
}

impl SiteConfig {
    /// All configured (target, platform) pairs, in declaration order.
    pub fn download_pairs(&self) -> impl Iterator<Item = (Target, Platform)> + '_ {
        self.downloads
            .iter()
            .flat_map(|group| group.platforms.iter().map(|p| (group.target, *p)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::ForgeConfig;
    use crate::release::{Platform, Target};

    #[test]
    fn test_site_config_full() {
        let config = r#"
            [project]
            name = "acme"

            [site]
            command = ["hugo", "--minify"]

            [site.theme]
            url = "https://github.com/matcornic/hugo-theme-learn"
            branch = "2.5.0"
            name = "hugo-theme-learn"

            [[site.downloads]]
            target = "desktop"
            platforms = ["linux", "osx", "windows"]

            [[site.downloads]]
            target = "service-docker"
            platforms = ["linux"]
        "#;
        let config: ForgeConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.command, vec!["hugo", "--minify"]);
        assert_eq!(config.site.theme.branch, "2.5.0");

        let pairs: Vec<_> = config.site.download_pairs().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0], (Target::Desktop, Platform::Linux));
        assert_eq!(pairs[3], (Target::ServiceDocker, Platform::Linux));
    }

    #[test]
    fn test_site_config_defaults() {
        let config = r#"
            [project]
            name = "acme"
        "#;
        let config: ForgeConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.command, vec!["hugo"]);
        assert_eq!(config.site.theme.name, "hugo-theme-learn");
        assert!(config.site.downloads.is_empty());
    }

    #[test]
    fn test_site_config_rejects_unknown_target() {
        let config = r#"
            [project]
            name = "acme"
            [[site.downloads]]
            target = "mainframe"
            platforms = ["linux"]
        "#;
        let result: Result<ForgeConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_unknown_field_rejection() {
        let config = r#"
            [project]
            name = "acme"
            [site]
            minify = true
        "#;
        let result: Result<ForgeConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
