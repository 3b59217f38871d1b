//! CLI logic for the Trellis flow layout tool.
//!
//! This module contains the core CLI logic: it reads an item sheet, runs the
//! flow layout engine and writes the resulting positions.

pub mod error_adapter;
pub mod sheet;

mod args;
mod config;

pub use args::Args;
pub use config::{AppConfig, OutputConfig, load_config};

use std::{fs, io::Write};

use log::{debug, info};

use trellis::{FlowLayout, TrellisError, config::FlowConfig};

use sheet::{ItemSheet, render_layout};

/// Run the Trellis CLI application
///
/// This function lays out the items of the input sheet and writes one line
/// per item to the output file, or to stdout when no output path is given.
///
/// # Errors
///
/// Returns `TrellisError` for:
/// - File I/O errors
/// - Configuration or item sheet loading errors
/// - Invalid item sizes, bounds or spacing
pub fn run(args: &Args) -> Result<(), TrellisError> {
    info!(input_path = args.input; "Processing item sheet");

    let app_config = load_config(args.config.as_ref())?;
    let layout_config = apply_overrides(*app_config.layout(), args);
    debug!(layout_config:?; "Resolved layout configuration");

    let engine = FlowLayout::try_from(&layout_config)?;

    let source = fs::read_to_string(&args.input)?;
    let sheet = ItemSheet::parse(&source)?;

    let layout = engine.position(sheet.items(), sheet.bounds())?;
    info!(
        items = layout.len(),
        fitting_height = layout.fitting_height();
        "Layout calculated"
    );

    let text = render_layout(&layout, sheet.items(), app_config.output().precision());
    match &args.output {
        Some(path) => {
            fs::write(path, text)?;
            info!(output_file = path; "Positions written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
        }
    }

    Ok(())
}

/// Apply command-line overrides on top of the loaded layout configuration.
fn apply_overrides(mut config: FlowConfig, args: &Args) -> FlowConfig {
    if let Some(direction) = args.direction {
        config = config.with_direction(direction);
    }
    if let Some(alignment) = args.horizontal_alignment {
        config = config.with_horizontal_alignment(alignment);
    }
    if let Some(alignment) = args.vertical_alignment {
        config = config.with_vertical_alignment(alignment);
    }
    if let Some(spacing) = args.horizontal_spacing {
        config = config.with_horizontal_spacing(spacing);
    }
    if let Some(spacing) = args.vertical_spacing {
        config = config.with_vertical_spacing(spacing);
    }
    config
}
