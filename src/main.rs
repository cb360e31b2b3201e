//! svgport - SVG export size and data URI tool.

mod cli;
mod config;
mod logger;
mod svg;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ToolConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ToolConfig::load(&cli)?;

    match &cli.command {
        Commands::Size { args } => cli::size::run_size(args, &config),
        Commands::Uri { args } => cli::uri::run_uri(args, &config),
        Commands::Presets => {
            cli::presets::run_presets(&config);
            Ok(())
        }
    }
}
