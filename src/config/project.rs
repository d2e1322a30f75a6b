//! `[project]` section configuration.
//!
//! Identifies the product being documented; its name prefixes every release
//! archive filename.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[project]` section in docforge.toml - product identity.
///
/// # Example
/// ```toml
/// [project]
/// name = "acme"
/// version = "4.3"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Product name; release archives are named `<name>-...`.
    pub name: String,

    /// Version currently being documented, `major.minor`.
    #[serde(default = "defaults::project::version")]
    #[educe(Default = defaults::project::version())]
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::super::ForgeConfig;

    #[test]
    fn test_project_config() {
        let config = r#"
            [project]
            name = "acme"
            version = "4.3"
        "#;
        let config: ForgeConfig = toml::from_str(config).unwrap();

        assert_eq!(config.project.name, "acme");
        assert_eq!(config.project.version, "4.3");
    }

    #[test]
    fn test_project_config_defaults() {
        let config = r#"
            [project]
            name = "acme"
        "#;
        let config: ForgeConfig = toml::from_str(config).unwrap();

        assert_eq!(config.project.version, "0.1");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [project]
            name = "acme"
            unknown_field = "should_fail"
        "#;
        let result: Result<ForgeConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
