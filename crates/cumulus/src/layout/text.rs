//! Approximate text measurement.
//!
//! Label backdrops only need a rough box around short labels, so a
//! character-count estimate is enough; no font stack involved.

use cumulus_core::geometry::Size;

/// Estimate the rendered size of a single line of text.
pub(crate) fn approximate_text_size(text: &str, font_size: f32) -> Size {
    Size::new(
        text.chars().count() as f32 * font_size * 0.6,
        font_size * 1.2,
    )
}
