//! SVG export.
//!
//! [`Svg`] delegates all drawing to the `svg` crate's primitives
//! (rectangle, path, text, group) and serializes the assembled document to
//! a file, overwriting silently if one exists.

use std::{fs::File, io::Write};

use log::{error, info};
use svg::Document;

use cumulus_core::resource::Connection;

use crate::{
    config::{LayoutOptions, StyleConfig},
    export,
    layout::Layout,
};

mod diagram;

pub(crate) use diagram::render_document;

/// SVG exporter with the output path and rendering style.
pub struct Svg {
    file_name: String,
    options: LayoutOptions,
    style: StyleConfig,
}

impl Svg {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            options: LayoutOptions::default(),
            style: StyleConfig::default(),
        }
    }

    /// Use the given layout options for label metrics.
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Use the given style settings (background color).
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Writes an SVG document to the configured file
    pub fn write_document(&self, doc: &Document) -> Result<(), export::Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_diagram(
        &self,
        layout: &Layout<'_>,
        connections: &[Connection],
    ) -> Result<(), export::Error> {
        let doc = render_document(layout, connections, &self.options, &self.style)?;
        self.write_document(&doc)
    }
}
