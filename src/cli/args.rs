//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, EdgeMode, Filter, PolarityArg};

/// Convert images to ASCII art and render the art as a PNG
#[derive(Parser, Debug)]
#[command(name = "img2ascii")]
#[command(version, about = "Convert images to ASCII art rendered as PNG", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an image to ASCII art
    Convert(ConvertArgs),
    /// List built-in character sets
    Charsets,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

/// Options for a single conversion. Unset options fall back to the config file.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Source image (JPEG, PNG, ...)
    pub input: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "ascii_output.png")]
    pub output: PathBuf,

    /// Output width in characters
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Built-in character set
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom palette, darkest character first
    #[arg(long, conflicts_with = "charset")]
    pub chars: Option<String>,

    /// Monospaced TrueType/OpenType font (built-in font if unset or unreadable)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Font size in pixels
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Canvas colour (#rrggbb, #rgb or a name)
    #[arg(long)]
    pub bg_color: Option<String>,

    /// Glyph colour (#rrggbb, #rgb or a name)
    #[arg(long)]
    pub text_color: Option<String>,

    /// Default colour pairing
    #[arg(long)]
    pub polarity: Option<PolarityArg>,

    /// Map bright pixels to dense glyphs
    #[arg(long, overrides_with = "no_invert")]
    pub invert: bool,

    /// Keep dark pixels on dense glyphs, even if the config file inverts
    #[arg(long, overrides_with = "invert")]
    pub no_invert: bool,

    /// Vertical correction for glyph aspect ratio
    #[arg(long)]
    pub correction: Option<f64>,

    /// Resampling filter
    #[arg(long)]
    pub filter: Option<Filter>,

    /// Edge enhancement before quantization
    #[arg(long)]
    pub edges: Option<EdgeMode>,

    /// Canny low threshold
    #[arg(long)]
    pub canny_low: Option<f32>,

    /// Canny high threshold
    #[arg(long)]
    pub canny_high: Option<f32>,

    /// Share of the inverted edge map in the blend (0.0-1.0)
    #[arg(long)]
    pub edge_weight: Option<f32>,

    /// Also write the ASCII art as plain text
    #[arg(long)]
    pub text_out: Option<PathBuf>,

    /// Print the ASCII art to stdout
    #[arg(long)]
    pub print: bool,
}

impl ConvertArgs {
    /// The invert setting given on the command line, if any.
    pub fn invert_flag(&self) -> Option<bool> {
        match (self.invert, self.no_invert) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
