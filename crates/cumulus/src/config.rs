//! Configuration types for Cumulus diagram rendering.
//!
//! This module provides the configuration structures that control canvas
//! geometry and visual styling. All types implement [`serde::Deserialize`]
//! for loading from external sources (the CLI loads them from a TOML file).
//!
//! All numeric options are optional with fixed defaults; out-of-range
//! values are a fatal misconfiguration reported by [`LayoutOptions::validate`]
//! before any layout work starts.

use serde::Deserialize;

use cumulus_core::color::Color;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    pub layout: LayoutOptions,

    /// Style configuration section.
    #[serde(default)]
    pub style: StyleConfig,
}

/// Canvas and box geometry options for the layout engine.
///
/// These are the only runtime knobs of the layout core; every other metric
/// (header height, row spacing, width caps) is a fixed layout constant.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Initial canvas width in pixels; expanded if the layout needs more.
    pub canvas_width: f32,
    /// Initial canvas height in pixels; expanded if the layout needs more.
    pub canvas_height: f32,
    /// Horizontal spacing between sibling resources.
    pub spacing: f32,
    /// Width of a single leaf resource box.
    pub resource_width: f32,
    /// Height of a single leaf resource box.
    pub resource_height: f32,
    /// Base font size for labels.
    pub font_size: f32,
    /// Interior padding of containers, also used as the canvas margin.
    pub padding: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            canvas_width: 1200.0,
            canvas_height: 800.0,
            spacing: 40.0,
            resource_width: 120.0,
            resource_height: 100.0,
            font_size: 14.0,
            padding: 30.0,
        }
    }
}

impl LayoutOptions {
    /// Validate that every option is a positive, finite number.
    ///
    /// # Errors
    ///
    /// Returns a descriptive message naming the first offending option.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("spacing", self.spacing),
            ("resource_width", self.resource_width),
            ("resource_height", self.resource_height),
            ("font_size", self.font_size),
            ("padding", self.padding),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }

        Ok(())
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default background [`Color`] for diagrams, as a color string.
    #[serde(default)]
    pub background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        assert!(LayoutOptions::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_and_negative() {
        let mut opts = LayoutOptions::default();
        opts.spacing = 0.0;
        assert!(opts.validate().is_err());

        let mut opts = LayoutOptions::default();
        opts.padding = -5.0;
        let err = opts.validate().unwrap_err();
        assert!(err.contains("padding"));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut opts = LayoutOptions::default();
        opts.canvas_width = f32::NAN;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_background_color_parsing() {
        let style = StyleConfig {
            background_color: Some("#fafafa".to_string()),
        };
        assert!(style.background_color().unwrap().is_some());

        let style = StyleConfig {
            background_color: Some("not a color".to_string()),
        };
        assert!(style.background_color().is_err());

        assert!(StyleConfig::default().background_color().unwrap().is_none());
    }
}
