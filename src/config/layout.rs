//! Centralized path resolution for the build tree.
//!
//! This module is the single source of truth for where everything lands
//! under the configured base directories, so no task builds output paths
//! by hand.
//!
//! # Architecture
//!
//! ```text
//! ForgeConfig
//!     │
//!     └── layout() → Layout
//!                      │
//!                      ├── doc_main_dir()    → <doc>/content/documentation/main
//!                      ├── code_dir("java")  → <build>/doc/code-java
//!                      ├── website_src()     → <build>/website/src
//!                      ├── website_tar()     → <build>/doc/<name>-website.tar.gz
//!                      └── doc_release_tar() → <releases>/<name>-docs-<ver>.tbz2
//! ```

use crate::version::Version;
use std::path::{Path, PathBuf};

/// Path resolver over the configured base directories.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    doc: &'a Path,
    build: &'a Path,
    releases: &'a Path,
    product: &'a str,
}

impl<'a> Layout<'a> {
    pub const fn new(doc: &'a Path, build: &'a Path, releases: &'a Path, product: &'a str) -> Self {
        Self { doc, build, releases, product }
    }

    // ------------------------------------------------------------------------
    // Hand-written documentation tree
    // ------------------------------------------------------------------------

    /// Root of the hand-written doc tree.
    pub const fn doc_dir(&self) -> &Path {
        self.doc
    }

    /// Hand-written docs for the current ("main") branch.
    pub fn doc_main_dir(&self) -> PathBuf {
        self.doc.join("content/documentation/main")
    }

    /// Archetype template for a versioned docs index page.
    pub fn version_archetype(&self) -> PathBuf {
        self.doc.join("archetypes/doc-version.md")
    }

    /// Where the pinned theme snapshot is cloned.
    pub fn theme_dir(&self, name: &str) -> PathBuf {
        self.doc.join("themes").join(name)
    }

    // ------------------------------------------------------------------------
    // Generated code docs
    // ------------------------------------------------------------------------

    /// Documentation build dir.
    pub fn build_doc_dir(&self) -> PathBuf {
        self.build.join("doc")
    }

    /// Output dir for one language's generated code docs.
    pub fn code_dir(&self, lang: &str) -> PathBuf {
        self.build_doc_dir().join(format!("code-{lang}"))
    }

    /// Queryable Javadoc export.
    pub fn javadoc_json(&self) -> PathBuf {
        self.build_doc_dir().join("javadoc.json")
    }

    /// Queryable KDoc export.
    pub fn kdoc_json(&self) -> PathBuf {
        self.build_doc_dir().join("kdoc/kdoc.json")
    }

    // ------------------------------------------------------------------------
    // Releases
    // ------------------------------------------------------------------------

    /// Local release archive mirror.
    pub const fn releases_dir(&self) -> &Path {
        self.releases
    }

    /// Filename prefix of documentation release bundles.
    pub fn doc_release_prefix(&self) -> String {
        format!("{}-docs", self.product)
    }

    /// Staging tree for the docs release bundle.
    pub fn release_staging_dir(&self) -> PathBuf {
        self.build_doc_dir().join("release-staging")
    }

    /// Path of the docs release archive for one version.
    pub fn doc_release_tar(&self, version: Version) -> PathBuf {
        self.releases
            .join(format!("{}-{version}.tbz2", self.doc_release_prefix()))
    }

    // ------------------------------------------------------------------------
    // Website
    // ------------------------------------------------------------------------

    /// Website build root.
    pub fn website_dir(&self) -> PathBuf {
        self.build.join("website")
    }

    /// Assembled content tree the generator consumes.
    pub fn website_src(&self) -> PathBuf {
        self.website_dir().join("src")
    }

    /// Rendered website output.
    pub fn website_dst(&self) -> PathBuf {
        self.website_dir().join("dst")
    }

    /// Scratch output for the dev server.
    pub fn website_dev(&self) -> PathBuf {
        self.website_dir().join("dev")
    }

    /// Packaged website tarball.
    pub fn website_tar(&self) -> PathBuf {
        self.build_doc_dir()
            .join(format!("{}-website.tar.gz", self.product))
    }
}

// ============================================================================
// Tests
// ============================================================================
