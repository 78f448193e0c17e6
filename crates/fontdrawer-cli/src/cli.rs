//! CLI argument definitions using Clap v4

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use fontdrawer_core::Hinting;
use fontdrawer_export::ExportFormat;

/// fontdrawer - draw a run of text onto a fixed-size image
#[derive(Parser, Debug)]
#[command(name = "fontdrawer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log face rebuilds and draws (same as RUST_LOG=debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw text into an image file
    #[command(alias = "r")]
    Render(Box<RenderArgs>),

    /// Run one render job per line of a JSONL file
    Batch(BatchArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Text to draw (read from stdin if omitted)
    pub text: Option<String>,

    /// Font file path (.ttf, .otf)
    #[arg(short = 'f', long = "font")]
    pub font: PathBuf,

    /// Canvas width in pixels
    #[arg(short = 'W', long = "width", default_value_t = 96)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long = "height", default_value_t = 64)]
    pub height: u32,

    /// Font size in points (default: width / number of characters)
    #[arg(short = 's', long = "size")]
    pub size: Option<f32>,

    /// Resolution in dots per inch
    #[arg(long = "dpi", default_value_t = 72.0)]
    pub dpi: f32,

    /// Hinting mode
    #[arg(long = "hinting", value_enum, default_value_t = HintingArg::None)]
    pub hinting: HintingArg,

    /// Text color (RRGGBB or RRGGBBAA)
    #[arg(short = 'c', long = "color", default_value = "FFFFFF")]
    pub color: String,

    /// Output format
    #[arg(short = 'O', long = "format", value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Output file path (default: out.<format>)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Baseline start x in pixels (centered horizontally if omitted)
    #[arg(long = "x", allow_negative_numbers = true)]
    pub x: Option<f32>,

    /// Baseline y in pixels (centered vertically if omitted)
    #[arg(long = "y", allow_negative_numbers = true)]
    pub y: Option<f32>,
}

/// Arguments for the batch command
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Input JSONL file (one job per line)
    pub input: PathBuf,

    /// Directory relative job outputs are written to
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum HintingArg {
    None,
    Vertical,
    Full,
}

impl From<HintingArg> for Hinting {
    fn from(arg: HintingArg) -> Self {
        match arg {
            HintingArg::None => Hinting::None,
            HintingArg::Vertical => Hinting::Vertical,
            HintingArg::Full => Hinting::Full,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// RGBA PNG, transparent background
    Png,
    /// Color PPM on black
    Ppm,
    /// Grayscale PGM on black
    Pgm,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => ExportFormat::Png,
            OutputFormat::Ppm => ExportFormat::Ppm,
            OutputFormat::Pgm => ExportFormat::Pgm,
        }
    }
}
