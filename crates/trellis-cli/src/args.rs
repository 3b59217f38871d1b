//! Command-line argument definitions for the Trellis CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, layout overrides and logging verbosity.

use clap::Parser;

use trellis::{Direction, HorizontalAlignment, VerticalAlignment};

/// Command-line arguments for the Trellis flow layout tool
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input item sheet (TOML)
    #[arg(help = "Path to the item sheet")]
    pub input: String,

    /// Path to the output file; positions are printed to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Flow direction within rows (forward, reverse)
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Horizontal alignment of rows (leading, center, trailing)
    #[arg(long)]
    pub horizontal_alignment: Option<HorizontalAlignment>,

    /// Vertical alignment of items in a row (top, center, bottom)
    #[arg(long)]
    pub vertical_alignment: Option<VerticalAlignment>,

    /// Spacing between items in a row
    #[arg(long)]
    pub horizontal_spacing: Option<f32>,

    /// Spacing between rows
    #[arg(long)]
    pub vertical_spacing: Option<f32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
