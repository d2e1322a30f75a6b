//! Docforge - a documentation build and publishing driver.

mod archive;
mod cli;
mod config;
mod exporters;
mod frontmatter;
mod release;
mod serve;
mod site;
mod tags;
mod transfer;
mod utils;
mod version;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::ForgeConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static ForgeConfig = Box::leak(Box::new(load_config(cli)?));

    // Task dependencies are a fixed sequence resolved here, by the caller
    match &cli.command {
        Commands::PythonDocs => exporters::python_docs(config),
        Commands::JavaDocs => exporters::java_docs(config),
        Commands::KotlinDocs => exporters::kotlin_docs(config),
        Commands::CodeDocs => exporters::code_docs(config),
        Commands::Release => {
            exporters::code_docs(config)?;
            archive::build_docs_release(config)
        }
        Commands::Fetch => transfer::fetch_doc_releases(config),
        Commands::Website => {
            exporters::code_docs(config)?;
            transfer::fetch_doc_releases(config)?;
            site::build_website(config)
        }
        Commands::Deploy => transfer::deploy_website(config),
        Commands::Serve => serve::serve_docs(config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<ForgeConfig> {
    let root = cli.root.as_deref().unwrap_or(std::path::Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found.");
    }

    let mut config = ForgeConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
