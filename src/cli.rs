//! Command-line interface definitions.
//!
//! Each subcommand is one build task. Tasks that depend on other tasks run
//! them first as a fixed sequence in `main`; there is no internal scheduler.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Docforge documentation build driver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: docforge.toml)
    #[arg(short = 'C', long, default_value = "docforge.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the Python API docs (runs the JSON API exports first)
    PythonDocs,

    /// Render the Java API docs with javadoc
    JavaDocs,

    /// Render the Kotlin API docs with Dokka
    KotlinDocs,

    /// Render the Python, Java, and Kotlin docs for the current source tree
    CodeDocs,

    /// Build the code documentation archive for the current version
    Release,

    /// Download documentation releases missing from the local mirror
    Fetch,

    /// Build the documentation and download website
    Website,

    /// Replace the deployed website with the one in the build folder
    Deploy,

    /// Start the Hugo development server for editing hand-written docs
    Serve,
}

#[allow(unused)]
impl Cli {
    pub const fn is_website(&self) -> bool {
        matches!(self.command, Commands::Website)
    }
    pub const fn is_deploy(&self) -> bool {
        matches!(self.command, Commands::Deploy)
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve)
    }
}
