//! Build configuration management for `docforge.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[project]` | Product identity (name, documented version)      |
//! | `[paths]`   | Base directories (doc tree, build root, releases)|
//! | `[docs]`    | External doc extractor commands and sources      |
//! | `[site]`    | Hugo command, pinned theme, download-link pairs  |
//! | `[remote]`  | Release host, deploy dir, public URLs            |
//! | `[extra]`   | User-defined custom fields                       |
//!
//! # Example
//!
//! ```toml
//! [project]
//! name = "acme"
//! version = "4.3"
//!
//! [docs.python]
//! modules = ["acme", "acme.prep"]
//!
//! [docs.java]
//! subpackages = "com.acme"
//!
//! [[site.downloads]]
//! target = "desktop"
//! platforms = ["linux", "osx", "windows"]
//!
//! [remote]
//! host = "deploy@docs.example.com"
//! ```

pub mod defaults;
mod docs;
mod error;
mod layout;
mod paths;
mod project;
mod remote;
mod site;

// Re-export public types used by other modules
pub use layout::Layout;

// Internal imports used in this module
use docs::DocsConfig;
use error::ConfigError;
use paths::PathsConfig;
use project::ProjectConfig;
use remote::RemoteConfig;
use site::SiteConfig;

use crate::{
    cli::{Cli, Commands},
    utils::command::require,
    version::Version,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing docforge.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForgeConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Product identity
    #[serde(default)]
    pub project: ProjectConfig,

    /// Directory layout roots
    #[serde(default)]
    pub paths: PathsConfig,

    /// Documentation extractor settings
    #[serde(default)]
    pub docs: DocsConfig,

    /// Website generator settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Release host settings
    #[serde(default)]
    pub remote: RemoteConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl ForgeConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: ForgeConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.paths.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.paths.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Path resolver over the configured base directories.
    pub fn layout(&self) -> Layout<'_> {
        Layout::new(
            &self.paths.doc,
            &self.paths.build,
            &self.paths.releases,
            &self.project.name,
        )
    }

    /// The version currently being documented.
    pub fn project_version(&self) -> Result<Version> {
        self.project
            .version
            .parse()
            .with_context(|| format!("[project.version] `{}`", self.project.version))
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        self.set_root(&root);
        self.update_path_with_root(&root);
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize all directory paths
        self.paths.doc = Self::normalize_path(&root.join(&self.paths.doc));
        self.paths.build = Self::normalize_path(&root.join(&self.paths.build));
        self.paths.releases = Self::normalize_path(&root.join(&self.paths.releases));

        // Normalize extractor source paths
        self.docs.python.search_path = Self::normalize_path(&root.join(&self.docs.python.search_path));
        self.docs.python.config = Self::normalize_path(&root.join(&self.docs.python.config));
        self.docs.python.extra_path = self
            .docs
            .python
            .extra_path
            .iter()
            .map(|p| Self::normalize_path(&root.join(p)))
            .collect();
        self.docs.java.source_dir = Self::normalize_path(&root.join(&self.docs.java.source_dir));
        self.docs.java.classpath = self
            .docs
            .java
            .classpath
            .iter()
            .map(|p| Self::normalize_path(&root.join(p)))
            .collect();
        self.docs.kotlin.source_dir = Self::normalize_path(&root.join(&self.docs.kotlin.source_dir));

        // Normalize identity file (with tilde expansion)
        if let Some(identity) = &self.remote.identity_file
            && let Some(identity_str) = identity.to_str()
        {
            let expanded = shellexpand::tilde(identity_str).into_owned();
            let path = PathBuf::from(expanded);
            self.remote.identity_file = Some(if path.is_relative() {
                Self::normalize_path(&root.join(path))
            } else {
                Self::normalize_path(&path)
            });
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        let cli = self.get_cli();

        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if self.project.name.is_empty() {
            bail!(ConfigError::Validation("[project.name] is required".into()));
        }

        match &cli.command {
            Commands::JavaDocs => self.check_java_tools()?,
            Commands::KotlinDocs => self.check_kotlin_tools()?,
            Commands::PythonDocs => self.check_python_tools()?,
            Commands::CodeDocs => self.check_exporter_tools()?,
            Commands::Release => {
                self.check_exporter_tools()?;
                require("tar")?;
                self.project_version()?;
            }
            Commands::Fetch => {
                self.check_transfer_tools()?;
                self.check_remote_release_dir()?;
            }
            Commands::Website => {
                self.check_exporter_tools()?;
                self.check_transfer_tools()?;
                self.check_remote_release_dir()?;
                require("tar")?;

                if !self.site.downloads.is_empty() && !self.remote.archive_url.starts_with("http") {
                    bail!(ConfigError::Validation(
                        "[remote.archive_url] must start with http:// or https:// to generate download links".into()
                    ));
                }
            }
            Commands::Deploy => {
                self.check_transfer_tools()?;
                if self.remote.deploy_dir.as_os_str().is_empty() {
                    bail!(ConfigError::Validation(
                        "[remote.deploy_dir] is required for deploy".into()
                    ));
                }
            }
            // Hugo and git availability is checked by the site prereqs,
            // together with the theme snapshot
            Commands::Serve => {}
        }

        if let Some(identity) = &self.remote.identity_file
            && matches!(
                cli.command,
                Commands::Fetch | Commands::Website | Commands::Deploy
            )
        {
            if !identity.exists() {
                bail!(ConfigError::Validation(
                    "[remote.identity_file] not found".into()
                ));
            }
            if !identity.is_file() {
                bail!(ConfigError::Validation(
                    "[remote.identity_file] is not a file".into()
                ));
            }
        }

        Ok(())
    }

    fn check_java_tools(&self) -> Result<()> {
        Self::check_command_installed("[docs.java.command]", &self.docs.java.command)?;
        if self.docs.java.subpackages.is_empty() {
            bail!(ConfigError::Validation(
                "[docs.java.subpackages] is required".into()
            ));
        }
        Ok(())
    }

    fn check_kotlin_tools(&self) -> Result<()> {
        Self::check_command_installed("[docs.kotlin.command]", &self.docs.kotlin.command)
    }

    fn check_python_tools(&self) -> Result<()> {
        Self::check_command_installed("[docs.python.command]", &self.docs.python.command)?;
        if !self.docs.java.json_export.is_empty() {
            Self::check_command_installed("[docs.java.json_export]", &self.docs.java.json_export)?;
        }
        if !self.docs.kotlin.json_export.is_empty() {
            Self::check_command_installed(
                "[docs.kotlin.json_export]",
                &self.docs.kotlin.json_export,
            )?;
        }
        Ok(())
    }

    fn check_exporter_tools(&self) -> Result<()> {
        self.check_java_tools()?;
        self.check_kotlin_tools()?;
        self.check_python_tools()
    }

    fn check_transfer_tools(&self) -> Result<()> {
        require("ssh")?;
        require("scp")?;
        if self.remote.host.is_empty() {
            bail!(ConfigError::Validation(
                "[remote.host] is required for remote transfers".into()
            ));
        }
        Ok(())
    }

    fn check_remote_release_dir(&self) -> Result<()> {
        if self.remote.release_dir.as_os_str().is_empty() {
            bail!(ConfigError::Validation(
                "[remote.release_dir] is required to fetch releases".into()
            ));
        }
        Ok(())
    }

    /// Check if a command is installed and available
    fn check_command_installed(field: &str, command: &[String]) -> Result<()> {
        if command.is_empty() {
            bail!(ConfigError::Validation(format!(
                "{field} must have at least one element"
            )));
        }

        let cmd = &command[0];
        which::which(cmd)
            .with_context(|| format!("`{cmd}` not found. Please install it first."))?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [project]
            name = "acme"
            version = "4.3"
        "#;
        let result = ForgeConfig::from_str(config_str);

        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.project.name, "acme");
        assert_eq!(config.project_version().unwrap().to_string(), "4.3");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [project
            name = "acme"
        "#;
        let result = ForgeConfig::from_str(invalid_config);

        assert!(result.is_err());
    }

    #[test]
    fn test_project_version_malformed() {
        let config_str = r#"
            [project]
            name = "acme"
            version = "nightly"
        "#;
        let config = ForgeConfig::from_str(config_str).unwrap();
        assert!(config.project_version().is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = ForgeConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = ForgeConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_layout_follows_paths() {
        let config = r#"
            [project]
            name = "acme"
            [paths]
            doc = "/proj/doc"
            build = "/proj/build"
            releases = "/proj/build/releases"
        "#;
        let config: ForgeConfig = toml::from_str(config).unwrap();
        let layout = config.layout();

        assert_eq!(layout.code_dir("kotlin"), PathBuf::from("/proj/build/doc/code-kotlin"));
        assert_eq!(layout.doc_release_prefix(), "acme-docs");
    }

    #[test]
    fn test_extra_fields() {
        let config = r#"
            [project]
            name = "acme"

            [extra]
            custom_field = "custom_value"
            number_field = 42
        "#;
        let config: ForgeConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.extra.get("custom_field").and_then(|v| v.as_str()),
            Some("custom_value")
        );
        assert_eq!(
            config.extra.get("number_field").and_then(|v| v.as_integer()),
            Some(42)
        );
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [project]
            name = "acme"

            [unknown_section]
            field = "value"
        "#;
        let result: Result<ForgeConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r#"
            [project]
            name = "acme"
            version = "4.3"

            [paths]
            doc = "doc"
            build = "build"
            releases = "build/releases"

            [docs.python]
            modules = ["acme", "acme.prep"]

            [docs.java]
            subpackages = "com.acme"

            [docs.kotlin]
            command = ["dokka-cli", "-moduleName", "com.acme"]

            [site]
            command = ["hugo"]

            [site.theme]
            branch = "2.5.0"

            [[site.downloads]]
            target = "desktop"
            platforms = ["linux", "osx", "windows"]

            [remote]
            host = "deploy@docs.example.com"
            release_dir = "/data/releases"
            deploy_dir = "/var/www/docs"
            archive_url = "https://example.com/releases"

            [extra]
            issue_tracker = "https://github.com/acme/acme/issues"
        "#;
        let config: ForgeConfig = toml::from_str(config).unwrap();

        assert_eq!(config.project.name, "acme");
        assert_eq!(config.docs.python.modules.len(), 2);
        assert_eq!(config.site.theme.branch, "2.5.0");
        assert_eq!(config.site.download_pairs().count(), 3);
        assert_eq!(config.remote.host, "deploy@docs.example.com");
        assert!(config.extra.contains_key("issue_tracker"));
    }
}
