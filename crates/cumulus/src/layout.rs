//! Diagram layout.
//!
//! Two tree passes over the containment forest: a bottom-up size pass
//! (children before parents) and a top-down position pass (parents before
//! children), followed by a canvas reconciliation step. See [`Engine`].

mod engine;
mod rows;
pub(crate) mod text;

pub use engine::{
    Engine, HEADER_HEIGHT, LEAF_LABEL_BAND, Layout, MAX_WIDTH_FRACTION, MIN_CANVAS_HEIGHT,
    MIN_CANVAS_WIDTH, MIN_CONTAINER_WIDTH, ROW_SPACING,
};
