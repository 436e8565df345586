//! Per-lane index of blocked ranges over the composite grid
//!
//! Built once from the tiled patterns plus four mandatory border ranges and
//! read-only afterwards. Lookups scan the lane's range list linearly; ranges are
//! neither merged nor deduplicated, so overlapping ranges are each honoured.

use tracing::debug;

use crate::io::error::Result;
use crate::spatial::coordinate::{Coordinate, Orientation};
use crate::spatial::grid::KnotGrid;
use crate::spatial::pattern::{LaneMap, lane_position};

/// A stored range together with the lane it sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneRange {
    /// Axis the lane runs along
    pub orientation: Orientation,
    /// Lane index
    pub lane: i32,
    /// First blocked position (inclusive)
    pub start: i32,
    /// Last blocked position (inclusive)
    pub end: i32,
}

impl LaneRange {
    /// Lane endpoints as grid coordinates
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
}

/// Blocked ranges for every lane of a composite grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockingIndex {
    horizontal: LaneMap,
    vertical: LaneMap,
}

impl BlockingIndex {
    /// Materialize the index for a composite grid
    ///
    /// Each pattern's blocks are tiled at the pattern's horizontal offset, then the
    /// top, bottom, left and right border lanes are blocked across the whole
    /// composite extent.
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidBlock` if a pattern block cannot be moved to its
    /// offset (an odd offset lands anchors on strand nodes), or
    /// `KnotError::InvalidComposition` if an extent does not fit a lane index.
    pub fn build(grid: &KnotGrid) -> Result<Self> {
        let mut index = Self {
            horizontal: LaneMap::new(),
            vertical: LaneMap::new(),
        };

        for (pattern, offset) in grid.patterns().iter().zip(grid.pattern_offsets()) {
            let offset = lane_position(offset)?;
            for block in pattern.get_lines()? {
                let placed = block.offset(offset, Orientation::Horizontal)?;
                let (start, end) = placed.range();
                index.insert(placed.orientation(), placed.lane(), start, end);
            }
        }

        let last_col = lane_position(grid.width())? - 1;
        let last_row = lane_position(grid.height())? - 1;
        index.insert(Orientation::Horizontal, 0, 0, last_col);
        index.insert(Orientation::Horizontal, last_row, 0, last_col);
        index.insert(Orientation::Vertical, 0, 0, last_row);
        index.insert(Orientation::Vertical, last_col, 0, last_row);

        debug!(
            horizontal_lanes = index.horizontal.len(),
            vertical_lanes = index.vertical.len(),
            ranges = index.range_count(),
            "built blocking index"
        );

        Ok(index)
    }

    fn insert(&mut self, orientation: Orientation, lane: i32, start: i32, end: i32) {
        let lanes = match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        };
        lanes.entry(lane).or_default().push((start, end));
    }

    /// Lane map for `orientation`
    pub const fn lanes(&self, orientation: Orientation) -> &LaneMap {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    /// Check whether a coordinate is blocked
    ///
    /// With an orientation, only that axis's lane is consulted: the coordinate's
    /// row for horizontal, its column for vertical. Without one, either axis
    /// counts. Ranges are inclusive at both ends.
    pub fn is_blocked(&self, coordinate: Coordinate, orientation: Option<Orientation>) -> bool {
        match orientation {
            Some(axis) => self.is_blocked_along(coordinate, axis),
            None => {
                self.is_blocked_along(coordinate, Orientation::Horizontal)
                    || self.is_blocked_along(coordinate, Orientation::Vertical)
            }
        }
    }

    fn is_blocked_along(&self, coordinate: Coordinate, axis: Orientation) -> bool {
        let lane = coordinate.along(axis.perpendicular());
        let position = coordinate.along(axis);
        self.lanes(axis).get(&lane).is_some_and(|ranges| {
            ranges
                .iter()
                .any(|&(start, end)| position >= start && position <= end)
        })
    }

    /// Every stored range, horizontal lanes first, each by ascending lane
    pub fn ranges(&self) -> impl Iterator<Item = LaneRange> + '_ {
        [
            (Orientation::Horizontal, &self.horizontal),
            (Orientation::Vertical, &self.vertical),
        ]
        .into_iter()
        .flat_map(|(orientation, lanes)| {
            lanes.iter().flat_map(move |(&lane, ranges)| {
                ranges.iter().map(move |&(start, end)| LaneRange {
                    orientation,
                    lane,
                    start,
                    end,
                })
            })
        })
    }

    /// Total number of stored ranges, border ranges included
    pub fn range_count(&self) -> usize {
        self.horizontal
            .values()
            .chain(self.vertical.values())
            .map(Vec::len)
            .sum()
    }
}
