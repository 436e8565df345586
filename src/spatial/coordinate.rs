//! Grid coordinates and the parity-derived node classification
//!
//! The knot grid alternates anchor nodes and strand nodes. A node whose column
//! and row are both even is a primary anchor, both odd a secondary anchor, and
//! every mixed-parity node carries weave geometry.

use std::fmt;

/// Integer grid position as (column, row), 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Column index (x)
    pub col: i32,
    /// Row index (y)
    pub row: i32,
}

impl Coordinate {
    /// Create a coordinate from a column and a row
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Classify this coordinate by parity
    pub const fn kind(self) -> NodeKind {
        NodeKind::of(self)
    }

    /// Position of this coordinate along `axis`
    ///
    /// Horizontal positions are columns, vertical positions are rows.
    pub const fn along(self, axis: Orientation) -> i32 {
        match axis {
            Orientation::Horizontal => self.col,
            Orientation::Vertical => self.row,
        }
    }

    /// The four diagonal neighbours, without bounds filtering
    pub const fn diagonal_neighbors(self) -> [Self; 4] {
        [
            Self::new(self.col - 1, self.row - 1),
            Self::new(self.col + 1, self.row - 1),
            Self::new(self.col - 1, self.row + 1),
            Self::new(self.col + 1, self.row + 1),
        ]
    }

    /// Check whether this coordinate lies within `[0, width) x [0, height)`
    pub const fn within(self, width: usize, height: usize) -> bool {
        self.col >= 0 && self.row >= 0 && (self.col as usize) < width && (self.row as usize) < height
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// Role of a grid node, derived purely from coordinate parity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Both column and row are even
    Primary,
    /// Both column and row are odd
    Secondary,
    /// Mixed parity; the only kind that carries weave geometry
    Line,
}

impl NodeKind {
    /// Classify a coordinate
    pub const fn of(coordinate: Coordinate) -> Self {
        let col_even = coordinate.col.rem_euclid(2) == 0;
        let row_even = coordinate.row.rem_euclid(2) == 0;
        match (col_even, row_even) {
            (true, true) => Self::Primary,
            (false, false) => Self::Secondary,
            _ => Self::Line,
        }
    }

    /// Anchor nodes are the primary and secondary decorative points
    pub const fn is_anchor(self) -> bool {
        !matches!(self, Self::Line)
    }
}

/// Axis a lane runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Lane is a row; positions along it are columns
    Horizontal,
    /// Lane is a column; positions along it are rows
    Vertical,
}

impl Orientation {
    /// The other axis
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Which diagonal strand of a crossing runs unbroken
///
/// The opposite diagonal is drawn with a gap at the node centre, showing the
/// strand that passes underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagonal {
    /// Strand from the lower-left corner to the upper-right corner
    LeftDownRightUp,
    /// Strand from the upper-left corner to the lower-right corner
    LeftUpRightDown,
}

impl Diagonal {
    /// The alternate crossing direction
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::LeftDownRightUp => Self::LeftUpRightDown,
            Self::LeftUpRightDown => Self::LeftDownRightUp,
        }
    }
}
