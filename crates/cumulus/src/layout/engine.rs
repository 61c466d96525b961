//! The container layout engine.
//!
//! Converts a containment forest into a center coordinate for every
//! resource, in three steps:
//!
//! 1. **Size pass** — bottom-up: a leaf's footprint is the configured
//!    resource box; a container's footprint wraps its children into rows
//!    and adds header and padding.
//! 2. **Position pass** — top-down: roots are laid out left-to-right,
//!    centered as a group; each container stacks its child rows below its
//!    header, centering every row in its interior.
//! 3. **Canvas reconciliation** — expands the canvas to the placed
//!    content and shifts everything right if anything crosses the left
//!    padding margin. Re-running it on a reconciled layout is a no-op.
//!
//! Given identical input ordering the output is fully deterministic.

use indexmap::IndexMap;
use log::debug;

use cumulus_core::geometry::{Bounds, Point, Size};

use crate::{
    config::LayoutOptions,
    error::CumulusError,
    hierarchy::Hierarchy,
    layout::rows::{Row, wrap_into_rows},
};

/// Height of the label band at the top of a container.
pub const HEADER_HEIGHT: f32 = 40.0;
/// Vertical gap between child rows inside a container.
pub const ROW_SPACING: f32 = 30.0;
/// Narrowest a container is ever drawn.
pub const MIN_CONTAINER_WIDTH: f32 = 200.0;
/// Fraction of the canvas width a container may normally occupy.
pub const MAX_WIDTH_FRACTION: f32 = 0.9;
/// Space reserved below a leaf box for its name label.
pub const LEAF_LABEL_BAND: f32 = 40.0;
/// Smallest canvas ever emitted.
pub const MIN_CANVAS_WIDTH: f32 = 800.0;
pub const MIN_CANVAS_HEIGHT: f32 = 600.0;

/// The positioned diagram: hierarchy plus per-node footprints and centers.
#[derive(Debug)]
pub struct Layout<'a> {
    hierarchy: Hierarchy<'a>,
    footprints: Vec<Size>,
    centers: Vec<Point>,
    canvas: Size,
}

impl<'a> Layout<'a> {
    /// The containment forest this layout was computed for.
    pub fn hierarchy(&self) -> &Hierarchy<'a> {
        &self.hierarchy
    }

    /// Final canvas dimensions after reconciliation.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// The footprint reserved for the node at `idx` and its subtree.
    pub fn footprint(&self, idx: usize) -> Size {
        self.footprints[idx]
    }

    /// The center coordinate of the node at `idx`.
    pub fn center(&self, idx: usize) -> Point {
        self.centers[idx]
    }

    /// The bounding box of the node at `idx`.
    pub fn bounds(&self, idx: usize) -> Bounds {
        self.centers[idx].to_bounds(self.footprints[idx])
    }

    /// The center coordinate for a resource id, if the id is known.
    pub fn center_of(&self, id: &str) -> Option<Point> {
        self.hierarchy.index_of(id).map(|idx| self.centers[idx])
    }

    /// The full resource id → center coordinate map, in input order.
    pub fn coordinates(&self) -> IndexMap<&'a str, Point> {
        self.hierarchy
            .nodes()
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.resource().id.as_str(), self.centers[idx]))
            .collect()
    }
}

/// The layout engine, parameterized by validated [`LayoutOptions`].
pub struct Engine {
    options: LayoutOptions,
}

impl Engine {
    /// Create an engine, failing fast on out-of-range options.
    ///
    /// # Errors
    ///
    /// Returns [`CumulusError::Config`] naming the offending option.
    pub fn new(options: LayoutOptions) -> Result<Self, CumulusError> {
        options.validate().map_err(CumulusError::Config)?;
        Ok(Self { options })
    }

    /// The options this engine was built with.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Maximum row width inside a container interior.
    fn row_limit(&self) -> f32 {
        self.options.canvas_width * MAX_WIDTH_FRACTION - 2.0 * self.options.padding
    }

    /// Run both passes and the reconciliation, consuming the hierarchy.
    pub fn calculate<'a>(&self, hierarchy: Hierarchy<'a>) -> Layout<'a> {
        let mut footprints = vec![Size::default(); hierarchy.len()];
        for &root in hierarchy.roots() {
            self.measure(&hierarchy, root, &mut footprints);
        }

        let mut centers = vec![Point::default(); hierarchy.len()];
        self.place_roots(&hierarchy, &footprints, &mut centers);

        let mut layout = Layout {
            hierarchy,
            footprints,
            centers,
            canvas: Size::new(self.options.canvas_width, self.options.canvas_height),
        };
        self.reconcile(&mut layout);

        debug!(
            nodes_count = layout.hierarchy.len(),
            canvas_width = layout.canvas.width,
            canvas_height = layout.canvas.height;
            "Layout calculated"
        );

        layout
    }

    /// Size pass: compute the footprint of `idx`, children first.
    fn measure(&self, hierarchy: &Hierarchy<'_>, idx: usize, footprints: &mut [Size]) {
        let node = hierarchy.node(idx);

        // Non-container kinds and childless containers are both leaves.
        if node.children().is_empty() {
            footprints[idx] = Size::new(self.options.resource_width, self.options.resource_height);
            return;
        }

        for &child in node.children() {
            self.measure(hierarchy, child, footprints);
        }

        let rows = self.rows_for(hierarchy, idx, footprints);
        let widest = rows.iter().map(|row| row.width).fold(0.0_f32, f32::max);
        let rows_height: f32 = rows.iter().map(|row| row.height).sum();

        // The cap normally wins over wide content (the rows were wrapped
        // against it), but a single oversized child still gets a row and
        // widens the container past the cap instead of being clipped.
        let required = widest + 2.0 * self.options.padding;
        let cap = self.options.canvas_width * MAX_WIDTH_FRACTION;
        let width = required.max(MIN_CONTAINER_WIDTH).min(cap).max(required);

        let height = HEADER_HEIGHT
            + rows_height
            + ROW_SPACING * (rows.len() - 1) as f32
            + self.options.padding;

        footprints[idx] = Size::new(width, height);
    }

    /// Position pass entry: lay out the root set left-to-right, centered
    /// as a group within the canvas at a fixed top offset.
    fn place_roots(&self, hierarchy: &Hierarchy<'_>, footprints: &[Size], centers: &mut [Point]) {
        let roots = hierarchy.roots();
        if roots.is_empty() {
            return;
        }

        let group_width: f32 = roots.iter().map(|&idx| footprints[idx].width).sum::<f32>()
            + self.options.spacing * (roots.len() - 1) as f32;

        let mut cursor = ((self.options.canvas_width - group_width) / 2.0).max(self.options.padding);
        let top = self.options.padding;

        for &root in roots {
            let size = footprints[root];
            let center = Point::new(cursor + size.width / 2.0, top + size.height / 2.0);
            self.place(hierarchy, root, center, footprints, centers);
            cursor += size.width + self.options.spacing;
        }
    }

    /// Position pass: place `idx` at `center`, then its children row by
    /// row below the header, each row centered in the interior and each
    /// child vertically centered within its row band.
    fn place(
        &self,
        hierarchy: &Hierarchy<'_>,
        idx: usize,
        center: Point,
        footprints: &[Size],
        centers: &mut [Point],
    ) {
        centers[idx] = center;

        let node = hierarchy.node(idx);
        if node.children().is_empty() {
            return;
        }

        let size = footprints[idx];
        let rows = self.rows_for(hierarchy, idx, footprints);

        let mut row_top = center.y - size.height / 2.0 + HEADER_HEIGHT;
        for row in rows {
            let mut cursor = center.x - row.width / 2.0;
            for &child in &row.members {
                let child_size = footprints[child];
                let child_center = Point::new(
                    cursor + child_size.width / 2.0,
                    row_top + row.height / 2.0,
                );
                self.place(hierarchy, child, child_center, footprints, centers);
                cursor += child_size.width + self.options.spacing;
            }
            row_top += row.height + ROW_SPACING;
        }
    }

    /// The row assignment for a container's children; identical between
    /// the size and position passes.
    fn rows_for(&self, hierarchy: &Hierarchy<'_>, idx: usize, footprints: &[Size]) -> Vec<Row> {
        wrap_into_rows(
            hierarchy.node(idx).children(),
            footprints,
            self.row_limit(),
            self.options.spacing,
        )
    }

    /// Canvas reconciliation: grow the canvas to the placed content and
    /// shift everything right if a left edge sits inside the padding
    /// margin. Returns whether anything changed; a second run on the same
    /// layout always returns `false`.
    pub fn reconcile(&self, layout: &mut Layout<'_>) -> bool {
        let padding = self.options.padding;
        let mut changed = false;

        let mut required = Size::default();
        if !layout.hierarchy.is_empty() {
            let min_left = (0..layout.hierarchy.len())
                .map(|idx| layout.bounds(idx).min_x)
                .fold(f32::INFINITY, f32::min);

            if min_left < padding {
                let offset = padding - min_left;
                for center in &mut layout.centers {
                    center.x += offset;
                }
                changed = true;
            }

            for idx in 0..layout.hierarchy.len() {
                let bounds = layout.bounds(idx);
                let mut bottom = bounds.max_y;
                if !layout.hierarchy.node(idx).is_container() {
                    bottom += LEAF_LABEL_BAND;
                }
                required.width = required.width.max(bounds.max_x + padding);
                required.height = required.height.max(bottom + padding);
            }
        }

        let canvas = Size::new(
            self.options
                .canvas_width
                .max(MIN_CANVAS_WIDTH)
                .max(required.width),
            self.options
                .canvas_height
                .max(MIN_CANVAS_HEIGHT)
                .max(required.height),
        );

        if canvas != layout.canvas {
            layout.canvas = canvas;
            changed = true;
        }

        changed
    }
}
