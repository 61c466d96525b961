//! Diagram rendering to an SVG document.
//!
//! Draw order is containers back-to-front by containment depth (parent
//! backgrounds first, so they never cover already-drawn child content),
//! then leaf boxes with icons and labels, then relationship lines with
//! midpoint labels on top.

use log::warn;
use svg::{
    Document,
    node::element::{Group, Path, Rectangle, Text},
};

use cumulus_core::{
    catalog,
    geometry::{Bounds, Point},
    resource::{Connection, ConnectionKind},
};

use crate::{
    config::{LayoutOptions, StyleConfig},
    export,
    layout::{HEADER_HEIGHT, Layout, text},
};

/// Stroke color and dash pattern for relationship lines by connection
/// kind. Kinds without a dedicated color share the dashed default.
fn connection_style(kind: &ConnectionKind) -> (&'static str, Option<&'static str>) {
    match kind {
        ConnectionKind::BelongsTo => ("#007BFF", None),
        ConnectionKind::Uses => ("#28A745", None),
        ConnectionKind::AttachedTo => ("#DC3545", None),
        _ => ("#666666", Some("5,5")),
    }
}

/// Render a positioned layout plus its connection list into a document.
pub(crate) fn render_document(
    layout: &Layout<'_>,
    connections: &[Connection],
    options: &LayoutOptions,
    style: &StyleConfig,
) -> Result<Document, export::Error> {
    let canvas = layout.canvas();
    let mut doc = Document::new()
        .set("viewBox", format!("0 0 {} {}", canvas.width, canvas.height))
        .set("width", canvas.width)
        .set("height", canvas.height);

    if let Some(background) = style.background_color().map_err(export::Error::Render)? {
        doc = doc.add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", canvas.width)
                .set("height", canvas.height)
                .set("fill", &background),
        );
    }

    let hierarchy = layout.hierarchy();

    let mut containers: Vec<usize> = (0..hierarchy.len())
        .filter(|&idx| hierarchy.node(idx).is_container())
        .collect();
    // Back-to-front: parents before their children. The sort is stable,
    // so nodes on the same level keep input order.
    containers.sort_by_key(|&idx| hierarchy.node(idx).level());

    for idx in containers {
        doc = doc.add(render_container(layout, idx, options));
    }

    for idx in (0..hierarchy.len()).filter(|&idx| !hierarchy.node(idx).is_container()) {
        doc = doc.add(render_leaf(layout, idx, options));
    }

    for connection in connections {
        // Nesting already shows this relationship.
        if connection.kind == ConnectionKind::BelongsTo
            && hierarchy.is_direct_child(&connection.source, &connection.target)
        {
            continue;
        }

        let (Some(source), Some(target)) = (
            layout.center_of(&connection.source),
            layout.center_of(&connection.target),
        ) else {
            warn!(
                source = connection.source,
                target = connection.target;
                "Skipping connection with missing endpoint coordinates"
            );
            continue;
        };

        doc = doc.add(render_connection(source, target, connection, options));
    }

    Ok(doc)
}

fn render_container(layout: &Layout<'_>, idx: usize, options: &LayoutOptions) -> Group {
    let node = layout.hierarchy().node(idx);
    let kind = node.resource().kind;
    let color = catalog::brand_color(kind);
    let bounds = layout.bounds(idx);

    let mut group = Group::new();

    group = group.add(
        Rectangle::new()
            .set("x", bounds.min_x)
            .set("y", bounds.min_y)
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", 10)
            .set("ry", 10)
            .set("fill", color)
            .set("fill-opacity", 0.08)
            .set("stroke", color)
            .set("stroke-width", 2),
    );

    group = group.add(
        Rectangle::new()
            .set("x", bounds.min_x)
            .set("y", bounds.min_y)
            .set("width", bounds.width())
            .set("height", HEADER_HEIGHT)
            .set("rx", 10)
            .set("ry", 10)
            .set("fill", color)
            .set("fill-opacity", 0.12),
    );

    // Kind icon in the top-left header corner.
    if let Some(path_data) = catalog::icon_path(kind) {
        let icon_size = HEADER_HEIGHT * 0.6;
        let icon_margin = (HEADER_HEIGHT - icon_size) / 2.0;
        let scale = icon_size / catalog::ICON_VIEWBOX;
        group = group.add(
            Group::new()
                .set(
                    "transform",
                    format!(
                        "translate({}, {}) scale({scale}, {scale})",
                        bounds.min_x + icon_margin,
                        bounds.min_y + icon_margin
                    ),
                )
                .add(
                    Path::new()
                        .set("d", path_data)
                        .set("stroke", color)
                        .set("stroke-width", 2)
                        .set("fill", "none"),
                ),
        );
    }

    group = group.add(
        Text::new(&node.resource().name)
            .set("x", bounds.min_x + HEADER_HEIGHT)
            .set("y", bounds.min_y + HEADER_HEIGHT / 2.0)
            .set("dominant-baseline", "middle")
            .set("font-family", "Arial")
            .set("font-size", options.font_size)
            .set("font-weight", "bold")
            .set("fill", color),
    );

    group.add(
        Text::new(format!("({})", kind.label()))
            .set("x", bounds.max_x - 10.0)
            .set("y", bounds.min_y + HEADER_HEIGHT / 2.0)
            .set("text-anchor", "end")
            .set("dominant-baseline", "middle")
            .set("font-family", "Arial")
            .set("font-size", options.font_size - 2.0)
            .set("fill", color),
    )
}

fn render_leaf(layout: &Layout<'_>, idx: usize, options: &LayoutOptions) -> Group {
    let node = layout.hierarchy().node(idx);
    let kind = node.resource().kind;
    let bounds = layout.bounds(idx);
    let name = node.resource().name.as_str();

    let mut group = Group::new();

    match catalog::icon_path(kind) {
        Some(path_data) => {
            let color = catalog::brand_color(kind);
            group = group.add(
                Rectangle::new()
                    .set("x", bounds.min_x)
                    .set("y", bounds.min_y)
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("rx", 10)
                    .set("ry", 10)
                    .set("fill", color)
                    .set("fill-opacity", 0.1)
                    .set("stroke", color)
                    .set("stroke-width", 2),
            );

            let icon_size = bounds.width().min(bounds.height()) * 0.6;
            let center = bounds.center();
            let scale = icon_size / catalog::ICON_VIEWBOX;
            group = group.add(
                Group::new()
                    .set(
                        "transform",
                        format!(
                            "translate({}, {}) scale({scale}, {scale})",
                            center.x - icon_size / 2.0,
                            center.y - icon_size / 2.0
                        ),
                    )
                    .add(
                        Path::new()
                            .set("d", path_data)
                            .set("stroke", color)
                            .set("stroke-width", 2)
                            .set("fill", "none"),
                    ),
            );

            group.add(leaf_label(name, &bounds, color, options))
        }
        None => {
            // No icon registered for this kind: plain labeled box.
            group = group.add(
                Rectangle::new()
                    .set("x", bounds.min_x)
                    .set("y", bounds.min_y)
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("rx", 10)
                    .set("ry", 10)
                    .set("fill", "#EEEEEE")
                    .set("stroke", "#666666")
                    .set("stroke-width", 2),
            );
            group.add(leaf_label(name, &bounds, "#666666", options))
        }
    }
}

fn leaf_label(name: &str, bounds: &Bounds, color: &'static str, options: &LayoutOptions) -> Text {
    Text::new(name)
        .set("x", bounds.center().x)
        .set("y", bounds.max_y + 20.0)
        .set("text-anchor", "middle")
        .set("font-family", "Arial")
        .set("font-size", options.font_size)
        .set("font-weight", "bold")
        .set("fill", color)
}

fn render_connection(
    source: Point,
    target: Point,
    connection: &Connection,
    options: &LayoutOptions,
) -> Group {
    let (color, dash) = connection_style(&connection.kind);

    let mut path = Path::new()
        .set(
            "d",
            format!("M {} {} L {} {}", source.x, source.y, target.x, target.y),
        )
        .set("stroke", color)
        .set("stroke-width", 1.5)
        .set("fill", "none");
    if let Some(dash) = dash {
        path = path.set("stroke-dasharray", dash);
    }

    let mut group = Group::new().add(path);

    // Midpoint label over a white backdrop for readability.
    let mid = source.midpoint(target);
    let label = connection.kind.label();
    let label_size = text::approximate_text_size(label, options.font_size - 2.0);

    group = group.add(
        Rectangle::new()
            .set("x", mid.x - label_size.width / 2.0 - 5.0)
            .set("y", mid.y - label_size.height / 2.0 - 5.0)
            .set("width", label_size.width + 10.0)
            .set("height", label_size.height + 10.0)
            .set("rx", 3)
            .set("fill", "white")
            .set("fill-opacity", 0.8),
    );

    group.add(
        Text::new(label)
            .set("x", mid.x)
            .set("y", mid.y)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "Arial")
            .set("font-size", options.font_size - 2.0)
            .set("fill", color),
    )
}
