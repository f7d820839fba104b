use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gradia_core::{
    ColorStop, ExportFormat, GradientKind, GradientPosition, LinearDirection,
    RadialShape, is_valid_hex_color, parse_position_strict,
};

/// Build CSS gradients from color stops and export them as CSS or SCSS.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) gradient: GradientArgs,

    /// JSON config file, defaults to ~/.config/gradia/config.json
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Seed for random stop colors
    #[arg(long, value_name = "N")]
    pub(crate) seed: Option<u64>,

    #[command(subcommand)]
    pub(crate) command: Option<CliCommand>,
}

/// Initial gradient, shared by every subcommand.
#[derive(Args, Debug, Default)]
pub(crate) struct GradientArgs {
    /// Start from a catalog preset, by name or index
    #[arg(long, value_name = "NAME|INDEX", conflicts_with = "stops")]
    pub(crate) preset: Option<String>,

    /// Color stop as COLOR@POSITION, repeat for each stop
    #[arg(
        long = "stop",
        value_name = "COLOR@POS",
        value_parser = parse_stop_arg,
    )]
    pub(crate) stops: Vec<ColorStop>,

    /// Gradient function: linear, radial or conic
    #[arg(long)]
    pub(crate) kind: Option<GradientKind>,

    /// Linear direction, e.g. "to bottom right" or "custom"
    #[arg(long)]
    pub(crate) direction: Option<LinearDirection>,

    /// Custom linear angle in degrees, implies --direction custom
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) angle: Option<i64>,

    /// Radial shape: circle or ellipse
    #[arg(long)]
    pub(crate) shape: Option<RadialShape>,

    /// Radial/conic center, e.g. "top left"
    #[arg(long = "at", value_name = "POSITION")]
    pub(crate) position: Option<GradientPosition>,

    /// Emit the repeating- variant
    #[arg(long)]
    pub(crate) repeating: bool,

    /// Class name used in CSS/SCSS output
    #[arg(long, value_name = "NAME")]
    pub(crate) class_name: Option<String>,

    /// Add -webkit-, -moz- and -o- declarations
    #[arg(long, conflicts_with = "no_prefixes")]
    pub(crate) prefixes: bool,

    /// Leave vendor declarations out even when the config enables them
    #[arg(long)]
    pub(crate) no_prefixes: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub(crate) enum CliCommand {
    /// Print the gradient function
    Render,
    /// Print the CSS block
    Css,
    /// Print the SCSS module
    Scss,
    /// Write a stylesheet file
    Export {
        /// css or scss
        format: ExportFormat,
        /// Target directory, defaults to the configured export directory
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
        /// Leave the generation time out of the file header
        #[arg(long)]
        no_timestamp: bool,
    },
    /// List the preset catalog
    Presets,
    /// Edit the gradient interactively (default)
    Edit,
}

/// Parse `COLOR@POSITION`, e.g. `#ff7e5f@30`.
pub(crate) fn parse_stop_arg(raw: &str) -> Result<ColorStop, String> {
    let Some((color, position)) = raw.rsplit_once('@') else {
        return Err(format!("expected COLOR@POSITION, got {raw:?}"));
    };
    let color = color.trim();
    if !is_valid_hex_color(color) {
        return Err(format!("expected a #rrggbb color, got {color:?}"));
    }
    let position =
        parse_position_strict(position).map_err(|err| err.to_string())?;
    Ok(ColorStop::new(color, position))
}
