//! Greedy row-wrapping shared by the size and position passes.
//!
//! Both passes must agree on which children land in which row, so the
//! assignment lives here and is computed from the same inputs in each pass.

use cumulus_core::geometry::Size;

/// One horizontal band of children inside a container.
#[derive(Debug)]
pub(crate) struct Row {
    /// Node indices in left-to-right order.
    pub members: Vec<usize>,
    /// Total width including inter-child spacing.
    pub width: f32,
    /// Height of the tallest member.
    pub height: f32,
}

/// Assign children to rows with a greedy left-to-right fill.
///
/// A child is added to the current row while the running width stays within
/// `limit`; otherwise a new row starts. A child that alone exceeds the
/// limit still gets a row of its own, producing a wider-than-limit row
/// rather than failing.
pub(crate) fn wrap_into_rows(
    children: &[usize],
    footprints: &[Size],
    limit: f32,
    spacing: f32,
) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    let mut current = Row {
        members: Vec::new(),
        width: 0.0,
        height: 0.0,
    };

    for &child in children {
        let size = footprints[child];
        let appended_width = current.width + spacing + size.width;

        if !current.members.is_empty() && appended_width > limit {
            rows.push(current);
            current = Row {
                members: Vec::new(),
                width: 0.0,
                height: 0.0,
            };
        }

        current.width = if current.members.is_empty() {
            size.width
        } else {
            current.width + spacing + size.width
        };
        current.height = current.height.max(size.height);
        current.members.push(child);
    }

    if !current.members.is_empty() {
        rows.push(current);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footprints(widths: &[f32]) -> Vec<Size> {
        widths.iter().map(|&w| Size::new(w, 100.0)).collect()
    }

    #[test]
    fn test_single_row_when_children_fit() {
        let sizes = footprints(&[100.0, 100.0, 100.0]);
        let rows = wrap_into_rows(&[0, 1, 2], &sizes, 400.0, 20.0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].members, vec![0, 1, 2]);
        assert_eq!(rows[0].width, 340.0);
        assert_eq!(rows[0].height, 100.0);
    }

    #[test]
    fn test_greedy_fill_wraps_at_limit() {
        let sizes = footprints(&[100.0; 5]);
        // Limit fits two children (220) but not three (340).
        let rows = wrap_into_rows(&[0, 1, 2, 3, 4], &sizes, 250.0, 20.0);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].members, vec![0, 1]);
        assert_eq!(rows[1].members, vec![2, 3]);
        assert_eq!(rows[2].members, vec![4]);
    }

    #[test]
    fn test_oversized_child_gets_own_row() {
        let sizes = footprints(&[500.0, 100.0]);
        let rows = wrap_into_rows(&[0, 1], &sizes, 250.0, 20.0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].members, vec![0]);
        assert_eq!(rows[0].width, 500.0);
        assert_eq!(rows[1].members, vec![1]);
    }

    #[test]
    fn test_row_height_is_tallest_member() {
        let sizes = vec![Size::new(100.0, 80.0), Size::new(100.0, 200.0)];
        let rows = wrap_into_rows(&[0, 1], &sizes, 400.0, 20.0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].height, 200.0);
    }

    #[test]
    fn test_no_children_no_rows() {
        let rows = wrap_into_rows(&[], &[], 400.0, 20.0);
        assert!(rows.is_empty());
    }
}
