//! mkpages - render `<name>.<ext>.tmpl` templates once per language.

mod build;
mod cli;
mod compiler;
mod config;
mod data;
mod logger;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::Cli;
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    build_site(&config).map(|_| ())
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let config = SiteConfig::from_cli(cli)?;
    config.validate()?;
    Ok(config)
}
