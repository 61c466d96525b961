//! CLI logic for the Cumulus diagram tool.
//!
//! This module contains the core CLI logic for the Cumulus diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use cumulus::{CumulusError, DiagramBuilder, resource::Inventory};

/// Run the Cumulus CLI application
///
/// This function reads an inventory JSON file, runs it through the
/// Cumulus pipeline and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CumulusError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Inventory parsing errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CumulusError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing inventory"
    );

    // Load configuration, letting command-line flags override the canvas
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(width) = args.width {
        app_config.layout.canvas_width = width;
    }
    if let Some(height) = args.height {
        app_config.layout.canvas_height = height;
    }

    // Read and parse the inventory
    let json = fs::read_to_string(&args.input)?;
    let inventory = Inventory::from_json(&json)?;
    info!(
        resources_count = inventory.resources.len(),
        connections_count = inventory.connections.len();
        "Inventory loaded"
    );

    // Render the diagram
    let builder = DiagramBuilder::new(app_config);
    builder.export_svg(&inventory, &args.output)?;

    Ok(())
}
