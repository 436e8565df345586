//! Directed wall segments on a single grid lane
//!
//! A block occupies one lane (a row for horizontal blocks, a column for vertical
//! blocks) between two anchor nodes of the same kind. The endpoints keep the order
//! they were authored in; lookups use the ascending [`Block::range`]. Blocks are
//! immutable: every transform returns a freshly validated block, so an invalid
//! derivation fails at the point it is made instead of leaking into a larger
//! pattern. Arithmetic that leaves the `i32` range fails the same way.

use std::fmt;

use crate::io::error::{KnotError, Result};
use crate::spatial::coordinate::{Coordinate, NodeKind, Orientation};

/// Wall segment on one lane of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Block {
    orientation: Orientation,
    lane: i32,
    start: i32,
    end: i32,
}

impl Block {
    /// Create a validated block
    ///
    /// `start` and `end` are positions along the lane and may be given in either
    /// order; the block remembers which way it runs.
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidBlock` if any value is negative or if the two
    /// endpoints are not anchor nodes of the same kind.
    pub fn new(orientation: Orientation, lane: i32, start: i32, end: i32) -> Result<Self> {
        let block = Self {
            orientation,
            lane,
            start,
            end,
        };
        block.validate()?;
        Ok(block)
    }

    /// Create a horizontal block on `row` spanning columns `start..=end`
    ///
    /// # Errors
    ///
    /// See [`Block::new`].
    pub fn horizontal(row: i32, start: i32, end: i32) -> Result<Self> {
        Self::new(Orientation::Horizontal, row, start, end)
    }

    /// Create a vertical block on `col` spanning rows `start..=end`
    ///
    /// # Errors
    ///
    /// See [`Block::new`].
    pub fn vertical(col: i32, start: i32, end: i32) -> Result<Self> {
        Self::new(Orientation::Vertical, col, start, end)
    }

    fn validate(&self) -> Result<()> {
        if self.lane < 0 || self.start < 0 || self.end < 0 {
            return Err(self.invalid("negative lane or extent"));
        }

        let (first, last) = self.endpoints();
        let first_kind = first.kind();
        let last_kind = last.kind();

        if first_kind == NodeKind::Line || last_kind == NodeKind::Line {
            return Err(self.invalid(format!(
                "endpoints {first} and {last} must both be anchor nodes"
            )));
        }

        if first_kind != last_kind {
            return Err(self.invalid(format!(
                "endpoints {first} ({first_kind:?}) and {last} ({last_kind:?}) differ in kind"
            )));
        }

        Ok(())
    }

    pub(crate) fn invalid(&self, reason: impl ToString) -> KnotError {
        KnotError::InvalidBlock {
            orientation: self.orientation,
            lane: self.lane,
            start: self.start,
            end: self.end,
            reason: reason.to_string(),
        }
    }

    /// Axis the block's lane runs along
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Lane index (row for horizontal blocks, column for vertical blocks)
    pub const fn lane(&self) -> i32 {
        self.lane
    }

    /// Authored first position along the lane
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Authored last position along the lane (inclusive)
    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Inclusive ascending `(low, high)` range along the lane
    pub const fn range(&self) -> (i32, i32) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// Check whether two blocks wall off the same cells, ignoring direction
    pub fn same_span(&self, other: &Self) -> bool {
        self.orientation == other.orientation
            && self.lane == other.lane
            && self.range() == other.range()
    }

    /// Grid coordinates of the two endpoints, in authored order
    pub const fn endpoints(&self) -> (Coordinate, Coordinate) {
        match self.orientation {
            Orientation::Horizontal => (
                Coordinate::new(self.start, self.lane),
                Coordinate::new(self.end, self.lane),
            ),
            Orientation::Vertical => (
                Coordinate::new(self.lane, self.start),
                Coordinate::new(self.lane, self.end),
            ),
        }
    }

    /// Anchor kind shared by both endpoints
    pub const fn kind(&self) -> NodeKind {
        self.endpoints().0.kind()
    }

    /// Check whether the block covers a coordinate, endpoints included
    pub const fn covers(&self, coordinate: Coordinate) -> bool {
        let position = coordinate.along(self.orientation);
        let (low, high) = self.range();
        coordinate.along(self.orientation.perpendicular()) == self.lane
            && position >= low
            && position <= high
    }

    /// Reflect the block about `pivot`
    ///
    /// Along the block's own axis each endpoint is reflected (`v -> pivot - v`),
    /// which reverses the block's direction, and the lane is kept. Across it the
    /// lane is reflected and the endpoints are kept.
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidBlock` if the reflected block is invalid or a
    /// reflected value leaves the `i32` range.
    pub fn invert(&self, pivot: i32, axis: Orientation) -> Result<Self> {
        let reflect = |value: i32| {
            pivot
                .checked_sub(value)
                .ok_or_else(|| self.invalid(format!("reflecting {value} about {pivot} overflows")))
        };
        if axis == self.orientation {
            Self::new(
                self.orientation,
                self.lane,
                reflect(self.start)?,
                reflect(self.end)?,
            )
        } else {
            Self::new(self.orientation, reflect(self.lane)?, self.start, self.end)
        }
    }

    /// Translate the block by `delta` along `axis`
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidBlock` if the translated block is invalid, for
    /// instance when an odd shift moves its endpoints onto strand nodes or the
    /// shift leaves the `i32` range.
    pub fn offset(&self, delta: i32, axis: Orientation) -> Result<Self> {
        let shift = |value: i32| {
            value
                .checked_add(delta)
                .ok_or_else(|| self.invalid(format!("shifting {value} by {delta} overflows")))
        };
        if axis == self.orientation {
            Self::new(
                self.orientation,
                self.lane,
                shift(self.start)?,
                shift(self.end)?,
            )
        } else {
            Self::new(self.orientation, shift(self.lane)?, self.start, self.end)
        }
    }

    /// Produce `times` copies, the i-th offset by `i * stride` along `axis`
    ///
    /// # Errors
    ///
    /// Returns the first `KnotError::InvalidBlock` produced by an offset, including
    /// a stride multiple that leaves the `i32` range.
    pub fn repeat(&self, times: usize, stride: i32, axis: Orientation) -> Result<Vec<Self>> {
        (0..times)
            .map(|copy| {
                let delta = i32::try_from(copy)
                    .ok()
                    .and_then(|index| index.checked_mul(stride))
                    .ok_or_else(|| {
                        self.invalid(format!("copy {copy} at stride {stride} overflows"))
                    })?;
                self.offset(delta, axis)
            })
            .collect()
    }

    /// Transpose the block, swapping horizontal and vertical
    ///
    /// Lane and range are kept numerically identical.
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidBlock` if the transposed block is invalid.
    pub fn fold(&self) -> Result<Self> {
        Self::new(
            self.orientation.perpendicular(),
            self.lane,
            self.start,
            self.end,
        )
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, last) = self.endpoints();
        write!(f, "<{first} -> {last}>")
    }
}
