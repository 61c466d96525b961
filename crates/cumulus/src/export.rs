//! Diagram exporters.

pub mod svg;

use cumulus_core::resource::Connection;

use crate::layout::Layout;

/// A single Exporter trait so other backends can slot in next to SVG
pub trait Exporter {
    fn export_diagram(
        &self,
        layout: &Layout<'_>,
        connections: &[Connection],
    ) -> Result<(), Error>;
}

#[derive(Debug)]
pub enum Error {
    Render(String),
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
