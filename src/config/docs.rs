//! `[docs]` section configuration.
//!
//! Settings for the three external documentation extractors. Each extractor
//! has a `command` array (program plus fixed leading arguments); docforge
//! appends the task-specific arguments when it runs them.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[docs]` section in docforge.toml - documentation extractor settings.
///
/// # Example
/// ```toml
/// [docs.python]
/// modules = ["acme", "acme.prep"]
///
/// [docs.java]
/// subpackages = "com.acme"
///
/// [docs.kotlin]
/// command = ["dokka-cli", "-moduleName", "com.acme"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    #[serde(default)]
    pub python: PythonDocsConfig,

    #[serde(default)]
    pub java: JavaDocsConfig,

    #[serde(default)]
    pub kotlin: KotlinDocsConfig,
}

/// `[docs.python]` section - pydoc-markdown settings.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PythonDocsConfig {
    /// Exporter invocation; the module and config path are appended per run.
    #[serde(default = "defaults::docs::python::command")]
    #[educe(Default = defaults::docs::python::command())]
    pub command: Vec<String>,

    /// Python modules to render, one page each, in menu order.
    #[serde(default)]
    pub modules: Vec<String>,

    /// Source root passed as the exporter's `--search-path`.
    #[serde(default = "defaults::docs::python::search_path")]
    #[educe(Default = defaults::docs::python::search_path())]
    pub search_path: PathBuf,

    /// Exporter configuration file (relative to the project root).
    #[serde(default = "defaults::docs::python::config")]
    #[educe(Default = defaults::docs::python::config())]
    pub config: PathBuf,

    /// Extra entries prepended to PYTHONPATH while the exporter runs.
    #[serde(default)]
    pub extra_path: Vec<PathBuf>,
}

/// `[docs.java]` section - javadoc settings.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct JavaDocsConfig {
    #[serde(default = "defaults::docs::java::command")]
    #[educe(Default = defaults::docs::java::command())]
    pub command: Vec<String>,

    /// Language level passed as `-source`.
    #[serde(default = "defaults::docs::java::source_version")]
    #[educe(Default = defaults::docs::java::source_version())]
    pub source_version: String,

    /// Java source root, passed as `-sourcepath`.
    #[serde(default = "defaults::docs::java::source_dir")]
    #[educe(Default = defaults::docs::java::source_dir())]
    pub source_dir: PathBuf,

    /// Package subtree to document, passed as `-subpackages`.
    pub subpackages: String,

    /// Classpath entries, joined with the platform separator.
    #[serde(default)]
    pub classpath: Vec<PathBuf>,

    /// Optional command exporting the API into queryable JSON
    /// (`javadoc.json`); the output path is appended as the last argument.
    #[serde(default)]
    pub json_export: Vec<String>,
}

/// `[docs.kotlin]` section - Dokka settings.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct KotlinDocsConfig {
    /// Exporter invocation; the output directory is appended as the last
    /// argument.
    #[serde(default = "defaults::docs::kotlin::command")]
    #[educe(Default = defaults::docs::kotlin::command())]
    pub command: Vec<String>,

    /// Kotlin source root the exporter reads.
    #[serde(default = "defaults::docs::kotlin::source_dir")]
    #[educe(Default = defaults::docs::kotlin::source_dir())]
    pub source_dir: PathBuf,

    /// Optional command exporting the API into queryable JSON (`kdoc.json`);
    /// the output path is appended as the last argument.
    #[serde(default)]
    pub json_export: Vec<String>,
}
