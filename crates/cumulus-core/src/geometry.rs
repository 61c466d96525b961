//! Geometric primitives for diagram layout and positioning.
//!
//! Coordinates follow the SVG convention: origin at the top-left corner,
//! X increasing rightward, Y increasing downward. Positions refer to the
//! center of an element unless stated otherwise.

/// A 2D point representing a position in diagram coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Adds another point to this point, returning a new point
    pub fn add(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Returns the point halfway between this point and another
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the component-wise maximum of two sizes
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Grows the size by the given padding on all four sides
    pub fn add_padding(self, padding: f32) -> Self {
        Self {
            width: self.width + padding * 2.0,
            height: self.height + padding * 2.0,
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Returns the width of the bounds
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(&self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns the center of the bounds as a Point
    pub fn center(&self) -> Point {
        Point {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(&self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by the specified offset
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Checks whether another bounds lies fully inside this one
    pub fn contains(&self, other: &Self) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }

    /// Checks whether this bounds overlaps another with positive area
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_add() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        let result = p1.add(p2);
        assert_eq!(result.x, 4.0);
        assert_eq!(result.y, 6.0);
    }

    #[test]
    fn test_point_midpoint() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(4.0, 6.0);
        let mid = p1.midpoint(p2);
        assert_eq!(mid.x, 2.0);
        assert_eq!(mid.y, 3.0);
    }

    #[test]
    fn test_point_to_bounds_centers_the_size() {
        let bounds = Point::new(10.0, 20.0).to_bounds(Size::new(4.0, 6.0));
        assert_eq!(bounds.min_x, 8.0);
        assert_eq!(bounds.max_x, 12.0);
        assert_eq!(bounds.min_y, 17.0);
        assert_eq!(bounds.max_y, 23.0);
        assert_eq!(bounds.center(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_size_max() {
        let a = Size::new(10.0, 2.0);
        let b = Size::new(4.0, 8.0);
        assert_eq!(a.max(b), Size::new(10.0, 8.0));
    }

    #[test]
    fn test_size_add_padding() {
        let padded = Size::new(10.0, 20.0).add_padding(5.0);
        assert_eq!(padded, Size::new(20.0, 30.0));
    }

    #[test]
    fn test_bounds_merge() {
        let a = Point::new(0.0, 0.0).to_bounds(Size::new(2.0, 2.0));
        let b = Point::new(10.0, 10.0).to_bounds(Size::new(2.0, 2.0));
        let merged = a.merge(&b);
        assert_eq!(merged.min_x, -1.0);
        assert_eq!(merged.max_x, 11.0);
        assert_eq!(merged.width(), 12.0);
        assert_eq!(merged.height(), 12.0);
    }

    #[test]
    fn test_bounds_translate() {
        let bounds = Point::new(0.0, 0.0).to_bounds(Size::new(2.0, 2.0));
        let moved = bounds.translate(Point::new(5.0, -1.0));
        assert_eq!(moved.min_x, 4.0);
        assert_eq!(moved.max_y, 0.0);
    }

    #[test]
    fn test_bounds_contains() {
        let outer = Point::new(0.0, 0.0).to_bounds(Size::new(10.0, 10.0));
        let inner = Point::new(1.0, 1.0).to_bounds(Size::new(2.0, 2.0));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        // A bounds contains itself
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_bounds_intersects() {
        let a = Point::new(0.0, 0.0).to_bounds(Size::new(4.0, 4.0));
        let b = Point::new(3.0, 0.0).to_bounds(Size::new(4.0, 4.0));
        let c = Point::new(10.0, 0.0).to_bounds(Size::new(4.0, 4.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        // Touching edges do not count as an overlap
        let d = Point::new(4.0, 0.0).to_bounds(Size::new(4.0, 4.0));
        assert!(!a.intersects(&d));
    }
}
