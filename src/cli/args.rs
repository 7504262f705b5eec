//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{Color, Output, Resample};

/// Quickly view (satellite) imagery directly in your terminal
#[derive(Parser, Debug)]
#[command(name = "textview")]
#[command(version, long_about = None)]
#[command(about = "View images in the terminal with unicode block glyphs")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Images to show ("-" or no images reads the list from stdin)
    pub images: Vec<String>,

    /// Output width in glyph columns (default: terminal width)
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Band to show, 1-based (once for gray, three times for RGB)
    #[arg(short, long = "band", value_name = "BAND")]
    pub bands: Vec<usize>,

    /// Resampling mode
    #[arg(short, long)]
    pub resample: Option<Resample>,

    /// Combine band 1 of three images as red, green and blue
    #[arg(long)]
    pub stack: bool,

    /// Treat inputs as text and show every http(s) URL found in them
    #[arg(long)]
    pub urls: bool,

    /// Do not print image names
    #[arg(long)]
    pub nofn: bool,

    /// Color depth
    #[arg(long)]
    pub color: Option<Color>,

    /// Output buffering
    #[arg(long)]
    pub output: Option<Output>,

    /// Number of catalog glyphs to use (1-57)
    #[arg(long)]
    pub glyphs: Option<usize>,

    /// Source window to show, in source pixels
    #[arg(long, num_args = 4, value_names = ["XOFF", "YOFF", "XSIZE", "YSIZE"])]
    pub srcwin: Option<Vec<u32>>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
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
