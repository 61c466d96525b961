//! Cumulus - hierarchical SVG diagrams of cloud infrastructure.
//!
//! Cumulus turns a flat inventory of cloud resources plus typed
//! relationships into an SVG diagram of nested, auto-sized containers.
//! The pipeline runs in three stages: the hierarchy builder nests
//! resources along `belongs_to` relationships, the layout engine computes
//! a footprint and center for every node, and the renderer serializes the
//! result through the `svg` crate.

pub mod config;
pub mod layout;

mod error;
mod export;
mod hierarchy;

pub use cumulus_core::{catalog, color, geometry, resource};

pub use error::CumulusError;
pub use hierarchy::{Hierarchy, HierarchyNode};
pub use layout::{Engine, Layout};

use log::{debug, info};

use cumulus_core::resource::Inventory;

use config::AppConfig;
use export::Exporter;

/// Builder for laying out and rendering infrastructure diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use cumulus::{DiagramBuilder, config::AppConfig, resource::Inventory};
///
/// let json = std::fs::read_to_string("inventory.json").unwrap();
/// let inventory = Inventory::from_json(&json).unwrap();
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let svg = builder.render_svg(&inventory).expect("Failed to render");
/// println!("{svg}");
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Build the containment hierarchy and compute the layout.
    ///
    /// The returned [`Layout`] borrows the inventory and carries a defined
    /// center coordinate for every resource.
    ///
    /// # Errors
    ///
    /// Returns `CumulusError` for duplicate resource ids or out-of-range
    /// layout options.
    pub fn layout<'a>(&self, inventory: &'a Inventory) -> Result<Layout<'a>, CumulusError> {
        info!(
            resources_count = inventory.resources.len(),
            connections_count = inventory.connections.len();
            "Building containment hierarchy"
        );
        let hierarchy = Hierarchy::build(inventory)?;
        debug!(roots_count = hierarchy.roots().len(); "Hierarchy built");

        let engine = Engine::new(self.config.layout)?;

        info!("Calculating layout");
        Ok(engine.calculate(hierarchy))
    }

    /// Render an inventory to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `CumulusError` for layout or rendering errors.
    pub fn render_svg(&self, inventory: &Inventory) -> Result<String, CumulusError> {
        let layout = self.layout(inventory)?;

        let doc = export::svg::render_document(
            &layout,
            &inventory.connections,
            &self.config.layout,
            &self.config.style,
        )?;

        info!("SVG rendered successfully");
        Ok(doc.to_string())
    }

    /// Render an inventory and write the SVG to `path`, overwriting
    /// silently if the file exists.
    ///
    /// # Errors
    ///
    /// Returns `CumulusError` for layout, rendering, or I/O errors.
    pub fn export_svg(&self, inventory: &Inventory, path: &str) -> Result<(), CumulusError> {
        let layout = self.layout(inventory)?;

        let exporter = export::svg::Svg::new(path)
            .with_options(self.config.layout)
            .with_style(self.config.style.clone());
        exporter.export_diagram(&layout, &inventory.connections)?;

        info!(output_file = path; "SVG exported successfully");
        Ok(())
    }
}
