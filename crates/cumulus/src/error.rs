//! Error types for Cumulus operations.
//!
//! This module provides the main error type [`CumulusError`] which wraps
//! the error conditions that can occur while turning an inventory into a
//! rendered diagram.

use std::io;

use thiserror::Error;

/// The main error type for Cumulus operations.
#[derive(Debug, Error)]
pub enum CumulusError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid inventory: {0}")]
    Inventory(String),

    #[error("Hierarchy error: {0}")]
    Hierarchy(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for CumulusError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<serde_json::Error> for CumulusError {
    fn from(error: serde_json::Error) -> Self {
        Self::Inventory(error.to_string())
    }
}
