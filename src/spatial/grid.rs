//! Composite grid built from patterns laid out left to right

use tracing::debug;

use crate::io::configuration::{KnotParams, MAX_GRID_DIMENSION};
use crate::io::error::{KnotError, Result, invalid_composition};
use crate::spatial::coordinate::{Coordinate, NodeKind};
use crate::spatial::pattern::Pattern;

/// Ordered sequence of patterns concatenated horizontally with no gap
///
/// The composite width is the sum of the pattern widths and the height is the
/// shared pattern height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnotGrid {
    patterns: Vec<Pattern>,
    width: usize,
    height: usize,
}

impl KnotGrid {
    /// Build a composite grid from an ordered list of patterns
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidComposition` if the list is empty, if any
    /// pattern height differs from the first one, or if the composite has no area
    /// or exceeds `MAX_GRID_DIMENSION` on a side.
    pub fn new(patterns: Vec<Pattern>) -> Result<Self> {
        let Some(first) = patterns.first() else {
            return Err(invalid_composition(&"a knot grid needs at least one pattern"));
        };
        let height = first.height();

        if let Some((index, mismatch)) = patterns
            .iter()
            .enumerate()
            .find(|(_, pattern)| pattern.height() != height)
        {
            return Err(invalid_composition(&format!(
                "pattern {index} has height {} but the grid height is {height}",
                mismatch.height()
            )));
        }

        let width = patterns
            .iter()
            .try_fold(0_usize, |total, pattern| total.checked_add(pattern.width()))
            .unwrap_or(usize::MAX);
        if width == 0 || height == 0 {
            return Err(invalid_composition(&format!(
                "composite grid {width}x{height} has no area"
            )));
        }
        if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
            return Err(invalid_composition(&format!(
                "composite grid {width}x{height} exceeds {MAX_GRID_DIMENSION} nodes per side"
            )));
        }

        debug!(
            patterns = patterns.len(),
            width, height, "built composite knot grid"
        );

        Ok(Self {
            patterns,
            width,
            height,
        })
    }

    /// Plain woven fill with no insets, sized from `params`
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidParameter` if `params` describes an empty grid.
    pub fn from_params(params: &KnotParams) -> Result<Self> {
        Self::new(vec![params.default_pattern()?])
    }

    /// Patterns in layout order
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Composite width in columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Composite height in rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Horizontal offset of each pattern's origin within the composite
    pub fn pattern_offsets(&self) -> Vec<usize> {
        self.patterns
            .iter()
            .scan(0, |offset, pattern| {
                let current = *offset;
                *offset += pattern.width();
                Some(current)
            })
            .collect()
    }

    /// Check whether a coordinate lies inside the composite grid
    pub const fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.within(self.width, self.height)
    }

    /// Fail with `OutOfBounds` unless the coordinate lies inside the grid
    ///
    /// # Errors
    ///
    /// Returns `KnotError::OutOfBounds` for coordinates outside
    /// `[0, width) x [0, height)`.
    pub fn check_bounds(&self, coordinate: Coordinate) -> Result<Coordinate> {
        if self.contains(coordinate) {
            Ok(coordinate)
        } else {
            Err(KnotError::OutOfBounds {
                coordinate: [coordinate.col, coordinate.row],
                dimensions: (self.width, self.height),
            })
        }
    }

    /// Node kind of an in-bounds coordinate
    ///
    /// # Errors
    ///
    /// Returns `KnotError::OutOfBounds` for coordinates outside the grid.
    pub fn node_kind(&self, coordinate: Coordinate) -> Result<NodeKind> {
        self.check_bounds(coordinate).map(Coordinate::kind)
    }

    /// Every coordinate in row-major order
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).map(move |col| Coordinate::new(col as i32, row as i32))
        })
    }
}
