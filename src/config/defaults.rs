//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [project] Section Defaults
// ============================================================================

pub mod project {
    pub fn version() -> String {
        "0.1".into()
    }
}

// ============================================================================
// [paths] Section Defaults
// ============================================================================

pub mod paths {
    use std::path::PathBuf;

    pub fn doc() -> PathBuf {
        "doc".into()
    }

    pub fn build() -> PathBuf {
        "build".into()
    }

    pub fn releases() -> PathBuf {
        "build/releases".into()
    }
}

// ============================================================================
// [docs] Section Defaults
// ============================================================================

pub mod docs {
    pub mod python {
        use std::path::PathBuf;

        pub fn command() -> Vec<String> {
            vec!["pydoc-markdown".into()]
        }

        pub fn search_path() -> PathBuf {
            "src/main/python".into()
        }

        pub fn config() -> PathBuf {
            "doc/pydoc-markdown.yml".into()
        }
    }

    pub mod java {
        use std::path::PathBuf;

        pub fn command() -> Vec<String> {
            vec!["javadoc".into()]
        }

        pub fn source_version() -> String {
            "17".into()
        }

        pub fn source_dir() -> PathBuf {
            "src/main/java".into()
        }
    }

    pub mod kotlin {
        use std::path::PathBuf;

        pub fn command() -> Vec<String> {
            vec!["dokka-cli".into()]
        }

        pub fn source_dir() -> PathBuf {
            "src/main/kotlin".into()
        }
    }
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn command() -> Vec<String> {
        vec!["hugo".into()]
    }

    pub mod theme {
        pub fn url() -> String {
            "https://github.com/matcornic/hugo-theme-learn".into()
        }

        pub fn branch() -> String {
            "2.5.0".into()
        }

        pub fn name() -> String {
            "hugo-theme-learn".into()
        }
    }
}

// ============================================================================
// [remote] Section Defaults
// ============================================================================

pub mod remote {
    use std::path::PathBuf;

    pub fn identity_file() -> Option<PathBuf> {
        None
    }
}
