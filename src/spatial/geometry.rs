//! Output geometry in continuous grid units
//!
//! One grid unit separates neighbouring nodes; node (c, r) sits at (c, r).
//! Rendering layers scale and offset these values onto their own surface.

use crate::spatial::coordinate::{Coordinate, NodeKind};

/// A 2D point in grid units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position, growing downwards
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Centre of a grid node
    pub const fn at(coordinate: Coordinate) -> Self {
        Self::new(coordinate.col as f64, coordinate.row as f64)
    }

    /// Move `fraction` of the way towards `target`
    #[must_use]
    pub fn towards(self, target: Self, fraction: f64) -> Self {
        Self::new(
            self.x + (target.x - self.x) * fraction,
            self.y + (target.y - self.y) * fraction,
        )
    }
}

/// Typed line segment, the unit consumed by rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start x
    pub x1: f64,
    /// Start y
    pub y1: f64,
    /// End x
    pub x2: f64,
    /// End y
    pub y2: f64,
    /// Node kind the segment belongs to
    pub kind: NodeKind,
    /// Visible weave geometry, as opposed to a hidden authoring guide
    pub visible: bool,
}

impl Segment {
    /// Create a segment between two points
    pub const fn new(start: Point, end: Point, kind: NodeKind, visible: bool) -> Self {
        Self {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
            kind,
            visible,
        }
    }

    /// Start point
    pub const fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// End point
    pub const fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}

/// Anchor node marker with no geometry beyond its own point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Marked node
    pub coordinate: Coordinate,
    /// Primary or secondary
    pub kind: NodeKind,
}
