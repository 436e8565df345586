//! Layout orchestration and the query surface consumed by rendering
//!
//! A layout owns its composite grid together with the blocking index and the
//! crossing field derived from it. Both derivations run once at construction and
//! nothing is shared between separately built layouts.

use tracing::debug;

use crate::algorithm::blocking::BlockingIndex;
use crate::algorithm::crossing::CrossingField;
use crate::algorithm::segments::{NodeBehavior, SegmentGenerator};
use crate::io::configuration::KnotParams;
use crate::io::error::Result;
use crate::spatial::coordinate::{Coordinate, Diagonal, NodeKind, Orientation};
use crate::spatial::geometry::{Marker, Segment};
use crate::spatial::grid::KnotGrid;
use crate::spatial::pattern::Pattern;

/// A composite grid with its blocking index and crossing field
#[derive(Debug, Clone)]
pub struct KnotLayout {
    grid: KnotGrid,
    index: BlockingIndex,
    field: CrossingField,
}

impl KnotLayout {
    /// Derive the blocking index and crossing field for a grid
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidBlock` if a pattern block cannot be placed at
    /// its offset within the composite.
    pub fn new(grid: KnotGrid) -> Result<Self> {
        let index = BlockingIndex::build(&grid)?;
        let field = CrossingField::solve(grid.width(), grid.height());

        debug!(
            width = grid.width(),
            height = grid.height(),
            blocked_ranges = index.range_count(),
            "knot layout ready"
        );

        Ok(Self { grid, index, field })
    }

    /// Build a layout straight from an ordered pattern list
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidComposition` for an empty list or mismatched
    /// heights, or `KnotError::InvalidBlock` if a block cannot be placed.
    pub fn from_patterns(patterns: Vec<Pattern>) -> Result<Self> {
        Self::new(KnotGrid::new(patterns)?)
    }

    /// Plain woven fill sized from `params`
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidParameter` if `params` describes an empty grid.
    pub fn plain(params: &KnotParams) -> Result<Self> {
        Self::new(KnotGrid::from_params(params)?)
    }

    /// Underlying composite grid
    pub const fn grid(&self) -> &KnotGrid {
        &self.grid
    }

    /// Blocking index of the composite grid
    pub const fn blocking_index(&self) -> &BlockingIndex {
        &self.index
    }

    /// Crossing field of the composite grid
    pub const fn crossing_field(&self) -> &CrossingField {
        &self.field
    }

    /// Composite width in columns
    pub const fn composite_width(&self) -> usize {
        self.grid.width()
    }

    /// Composite height in rows
    pub const fn composite_height(&self) -> usize {
        self.grid.height()
    }

    /// Node kind at a coordinate
    ///
    /// # Errors
    ///
    /// Returns `KnotError::OutOfBounds` for coordinates outside the grid.
    pub fn node_kind(&self, coordinate: Coordinate) -> Result<NodeKind> {
        self.grid.node_kind(coordinate)
    }

    /// Check whether a coordinate is blocked, optionally along one axis only
    ///
    /// # Errors
    ///
    /// Returns `KnotError::OutOfBounds` for coordinates outside the grid.
    pub fn is_blocked(
        &self,
        coordinate: Coordinate,
        orientation: Option<Orientation>,
    ) -> Result<bool> {
        let coordinate = self.grid.check_bounds(coordinate)?;
        Ok(self.index.is_blocked(coordinate, orientation))
    }

    /// Crossing direction at a strand node, `None` for anchors
    ///
    /// # Errors
    ///
    /// Returns `KnotError::OutOfBounds` for coordinates outside the grid.
    pub fn crossing(&self, coordinate: Coordinate) -> Result<Option<Diagonal>> {
        let coordinate = self.grid.check_bounds(coordinate)?;
        Ok(self.field.get(coordinate))
    }

    /// How a node is drawn
    ///
    /// # Errors
    ///
    /// Returns `KnotError::OutOfBounds` for coordinates outside the grid.
    pub fn node_behavior(&self, coordinate: Coordinate) -> Result<NodeBehavior> {
        let coordinate = self.grid.check_bounds(coordinate)?;
        Ok(self.generator().behavior(coordinate))
    }

    /// Weave segments for a single node
    ///
    /// # Errors
    ///
    /// Returns `KnotError::OutOfBounds` for coordinates outside the grid.
    pub fn segments_for_node(&self, coordinate: Coordinate) -> Result<Vec<Segment>> {
        let coordinate = self.grid.check_bounds(coordinate)?;
        Ok(self.generator().node_segments(coordinate))
    }

    /// Every weave segment in row-major node order, then every guide line
    pub fn all_segments(&self) -> Vec<Segment> {
        self.generator().all_segments()
    }

    /// Anchor markers in row-major order
    pub fn markers(&self) -> Vec<Marker> {
        self.generator().markers()
    }

    fn generator(&self) -> SegmentGenerator<'_> {
        SegmentGenerator::new(
            self.grid.width(),
            self.grid.height(),
            &self.index,
            &self.field,
        )
    }
}
