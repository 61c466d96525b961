//! Error adapter for converting CumulusError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use cumulus::CumulusError;

/// Adapter for [`CumulusError`] variants.
///
/// Cumulus errors carry no source spans, so the adapter only contributes
/// a diagnostic code and, where useful, help text.
pub struct ErrorAdapter<'a>(pub &'a CumulusError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CumulusError::Io(_) => "cumulus::io",
            CumulusError::Config(_) => "cumulus::config",
            CumulusError::Inventory(_) => "cumulus::inventory",
            CumulusError::Hierarchy(_) => "cumulus::hierarchy",
            CumulusError::Export(_) => "cumulus::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CumulusError::Config(_) => {
                "check the [layout] and [style] values in your configuration file"
            }
            CumulusError::Inventory(_) => {
                "the input must be a JSON document with `resources` and `connections` arrays"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}
