//! Composable rectangular tiles of blocks
//!
//! A pattern stores its blocks as per-lane range lists for each axis, together
//! with an explicit width and height. The composition algebra (append, invert,
//! mirror, fold, repeat) derives larger symmetric tiles from small hand-authored
//! ones. Ranges on a lane are kept exactly as added: overlapping ranges are legal
//! and never merged.

use std::collections::BTreeMap;

use crate::io::error::{Result, invalid_composition};
use crate::spatial::block::Block;
use crate::spatial::coordinate::Orientation;

/// Lane index to the `(start, end)` pairs registered on that lane, in insertion order
///
/// Pairs keep the direction their block was authored in.
pub type LaneMap = BTreeMap<i32, Vec<(i32, i32)>>;

/// Rectangular tile of blocks with its own origin at (0, 0)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    horizontal_blocks: LaneMap,
    vertical_blocks: LaneMap,
}

impl Pattern {
    /// Create an empty pattern spanning `[0, width) x [0, height)`
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            horizontal_blocks: BTreeMap::new(),
            vertical_blocks: BTreeMap::new(),
        }
    }

    /// Create a pattern and add every block in order
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidBlock` if a block's lane lies outside the pattern.
    pub fn with_blocks(
        width: usize,
        height: usize,
        blocks: impl IntoIterator<Item = Block>,
    ) -> Result<Self> {
        let mut pattern = Self::new(width, height);
        for block in blocks {
            pattern.add_block(block)?;
        }
        Ok(pattern)
    }

    /// Pattern width in columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Pattern height in rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Extent along `axis`: width for horizontal, height for vertical
    pub const fn extent_along(&self, axis: Orientation) -> usize {
        match axis {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Ranges registered on horizontal lanes (rows)
    pub const fn horizontal_blocks(&self) -> &LaneMap {
        &self.horizontal_blocks
    }

    /// Ranges registered on vertical lanes (columns)
    pub const fn vertical_blocks(&self) -> &LaneMap {
        &self.vertical_blocks
    }

    /// Lane map for `orientation`
    pub const fn lanes(&self, orientation: Orientation) -> &LaneMap {
        match orientation {
            Orientation::Horizontal => &self.horizontal_blocks,
            Orientation::Vertical => &self.vertical_blocks,
        }
    }

    /// Total number of stored ranges across both axes
    pub fn block_count(&self) -> usize {
        self.horizontal_blocks
            .values()
            .chain(self.vertical_blocks.values())
            .map(Vec::len)
            .sum()
    }

    /// Insert a block into its lane, appending to any ranges already there
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidBlock` if the block's lane lies outside the
    /// pattern (rows must be below the height, columns below the width).
    pub fn add_block(&mut self, block: Block) -> Result<&mut Self> {
        let lane_limit = self.extent_along(block.orientation().perpendicular());
        if block.lane() as usize >= lane_limit {
            return Err(block.invalid(format!(
                "lane {} lies outside a {}x{} pattern",
                block.lane(),
                self.width,
                self.height
            )));
        }

        let lanes = match block.orientation() {
            Orientation::Horizontal => &mut self.horizontal_blocks,
            Orientation::Vertical => &mut self.vertical_blocks,
        };
        lanes
            .entry(block.lane())
            .or_default()
            .push((block.start(), block.end()));
        Ok(self)
    }

    /// Flatten both lane maps into blocks
    ///
    /// Horizontal blocks come first, then vertical, each by ascending lane and in
    /// insertion order within a lane.
    ///
    /// # Errors
    ///
    /// Stored ranges are validated on insertion, so this only fails if that
    /// invariant was broken.
    pub fn get_lines(&self) -> Result<Vec<Block>> {
        let mut blocks = Vec::with_capacity(self.block_count());
        for (orientation, lanes) in [
            (Orientation::Horizontal, &self.horizontal_blocks),
            (Orientation::Vertical, &self.vertical_blocks),
        ] {
            for (&lane, ranges) in lanes {
                for &(start, end) in ranges {
                    blocks.push(Block::new(orientation, lane, start, end)?);
                }
            }
        }
        Ok(blocks)
    }

    /// Extend this pattern along `axis` by `other`
    ///
    /// Every block of `other` is re-homed by this pattern's current extent along
    /// `axis`, after which the extent grows by `other`'s.
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidComposition` if the extents across `axis` differ
    /// or the combined extent no longer fits a lane index, or
    /// `KnotError::InvalidBlock` if a re-homed block is invalid (an odd offset
    /// moves anchors onto strand nodes). On error `self` is left unchanged.
    pub fn append(&mut self, other: &Self, axis: Orientation) -> Result<&mut Self> {
        let across = axis.perpendicular();
        if self.extent_along(across) != other.extent_along(across) {
            return Err(invalid_composition(&format!(
                "cannot append a {}x{} pattern to a {}x{} pattern along the {axis} axis",
                other.width, other.height, self.width, self.height
            )));
        }

        let delta = lane_position(self.extent_along(axis))?;
        let grown = self
            .extent_along(axis)
            .checked_add(other.extent_along(axis))
            .filter(|&extent| lane_position(extent).is_ok())
            .ok_or_else(|| {
                invalid_composition(&format!(
                    "appending along the {axis} axis overflows the lane range"
                ))
            })?;
        let moved = other
            .get_lines()?
            .iter()
            .map(|block| block.offset(delta, axis))
            .collect::<Result<Vec<_>>>()?;

        let mut extended = self.clone();
        match axis {
            Orientation::Horizontal => extended.width = grown,
            Orientation::Vertical => extended.height = grown,
        }
        for block in moved {
            extended.add_block(block)?;
        }

        *self = extended;
        Ok(self)
    }

    /// New pattern with every block reflected about this pattern's extent along `axis`
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidBlock` if a reflected block is invalid or falls
    /// outside the pattern, or `KnotError::InvalidComposition` if the extent does
    /// not fit a lane index.
    pub fn invert(&self, axis: Orientation) -> Result<Self> {
        let pivot = lane_position(self.extent_along(axis))?;
        let mut inverted = Self::new(self.width, self.height);
        for block in self.get_lines()? {
            inverted.add_block(block.invert(pivot, axis)?)?;
        }
        Ok(inverted)
    }

    /// Double the pattern along `axis` into a bilaterally symmetric tile
    ///
    /// The new extent is `2 * old - 1`, sharing the old last lane as the mirror
    /// line. Each existing block gains its reflection about `new - 1`; blocks
    /// that cover the same cells as their reflection are not duplicated.
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidComposition` for an empty extent or one whose
    /// doubled size does not fit a lane index, or
    /// `KnotError::InvalidBlock` if a reflection is invalid. On error `self` is
    /// left unchanged.
    pub fn mirror(&mut self, axis: Orientation) -> Result<&mut Self> {
        let old = self.extent_along(axis);
        if old == 0 {
            return Err(invalid_composition(&format!(
                "cannot mirror a pattern with no extent along the {axis} axis"
            )));
        }

        let new = old
            .checked_mul(2)
            .map(|doubled| doubled - 1)
            .filter(|&extent| lane_position(extent).is_ok())
            .ok_or_else(|| {
                invalid_composition(&format!(
                    "mirroring {old} along the {axis} axis overflows the lane range"
                ))
            })?;
        let pivot = lane_position(new - 1)?;
        let mut mirrored = self.clone();
        match axis {
            Orientation::Horizontal => mirrored.width = new,
            Orientation::Vertical => mirrored.height = new,
        }
        for block in self.get_lines()? {
            let reflected = block.invert(pivot, axis)?;
            if !reflected.same_span(&block) {
                mirrored.add_block(reflected)?;
            }
        }

        *self = mirrored;
        Ok(self)
    }

    /// Square the pattern and add the transposed counterpart of every block
    ///
    /// Both extents become `max(width, height)`.
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidBlock` if a transposed block is invalid. On error
    /// `self` is left unchanged.
    pub fn fold(&mut self) -> Result<&mut Self> {
        let side = self.width.max(self.height);
        let mut folded = self.clone();
        folded.width = side;
        folded.height = side;
        for block in self.get_lines()? {
            folded.add_block(block.fold()?)?;
        }

        *self = folded;
        Ok(self)
    }

    /// Independent copies of this pattern, not offset
    pub fn repeat(&self, times: usize) -> Vec<Self> {
        vec![self.clone(); times]
    }

    /// Append `times` copies of this pattern end to end along `axis`
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidComposition` when `times` is zero, otherwise the
    /// first error raised by [`Pattern::append`].
    pub fn tile(&self, times: usize, axis: Orientation) -> Result<Self> {
        let mut copies = self.repeat(times).into_iter();
        let Some(mut tiled) = copies.next() else {
            return Err(invalid_composition(&"cannot tile a pattern zero times"));
        };
        for copy in copies {
            tiled.append(&copy, axis)?;
        }
        Ok(tiled)
    }
}

// Extents are stored as `usize` but blocks address lanes with `i32`
pub(crate) fn lane_position(extent: usize) -> Result<i32> {
    i32::try_from(extent)
        .ok()
        .ok_or_else(|| invalid_composition(&format!("extent {extent} does not fit a lane index")))
}
