//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::svg::{DataUriKind, ExportScale};

/// svgport: SVG export size and data URI tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, global = true, default_value = "svgport.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the intrinsic size and the export size of an SVG
    #[command(visible_alias = "s")]
    Size {
        #[command(flatten)]
        args: SizeArgs,
    },

    /// Encode an SVG as data URIs
    #[command(visible_alias = "u")]
    Uri {
        #[command(flatten)]
        args: UriArgs,
    },

    /// List the preset export scales
    #[command(visible_alias = "p")]
    Presets,
}

/// Size command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SizeArgs {
    /// SVG file to read, or `-` for stdin
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Export scale: a preset (0.25, 0.5, 0.75, 1, 1.5, 2..8) or `custom`
    #[arg(short, long, value_parser = parse_scale)]
    pub scale: Option<ExportScale>,

    /// Export width in pixels; height follows the aspect ratio
    #[arg(short, long, conflicts_with = "height", allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Export height in pixels; width follows the aspect ratio
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Print JSON instead of text
    #[arg(short, long)]
    pub json: bool,
}

/// Uri command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct UriArgs {
    /// SVG file to read, or `-` for stdin
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Encoding to print (default from config, else minified)
    #[arg(short, long, value_enum, conflicts_with = "all")]
    pub kind: Option<DataUriKind>,

    /// Print all three encodings
    #[arg(short, long)]
    pub all: bool,

    /// Print the full encoding set as JSON
    #[arg(short, long, conflicts_with_all = ["kind", "all"])]
    pub json: bool,
}

fn parse_scale(s: &str) -> Result<ExportScale, String> {
    s.parse().map_err(|e: crate::svg::scale::ParseScaleError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_size_args() {
        let cli = Cli::parse_from(["svgport", "size", "logo.svg", "--scale", "0.5"]);
        let Commands::Size { args } = cli.command else {
            panic!("expected size command");
        };
        assert_eq!(args.input, PathBuf::from("logo.svg"));
        assert_eq!(args.scale, Some(ExportScale::Preset(0.5)));
        assert!(args.width.is_none());
    }

    #[test]
    fn test_size_rejects_unknown_scale() {
        let result = Cli::try_parse_from(["svgport", "size", "logo.svg", "--scale", "2.5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_width_conflicts_with_height() {
        let result =
            Cli::try_parse_from(["svgport", "s", "-", "--width", "10", "--height", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_width_is_parsed() {
        let cli = Cli::parse_from(["svgport", "size", "-", "--width", "-5"]);
        let Commands::Size { args } = cli.command else {
            panic!("expected size command");
        };
        assert_eq!(args.width, Some(-5.0));
    }

    #[test]
    fn test_uri_args() {
        let cli = Cli::parse_from(["svgport", "u", "-", "--kind", "urlencoded", "-v"]);
        assert!(cli.verbose);
        let Commands::Uri { args } = cli.command else {
            panic!("expected uri command");
        };
        assert_eq!(args.kind, Some(DataUriKind::Url));
        assert!(!args.all);
    }
}
