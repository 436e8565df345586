//! Named knot layouts authored with the block and pattern algebra

use clap::ValueEnum;

use crate::io::configuration::KnotParams;
use crate::io::error::Result;
use crate::spatial::block::Block;
use crate::spatial::coordinate::Orientation;
use crate::spatial::grid::KnotGrid;
use crate::spatial::pattern::Pattern;

/// Height shared by the authored tiles
const TILE_HEIGHT: usize = 9;

/// Built-in layouts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Preset {
    /// Plain woven fill sized by the knot parameters
    Plain,
    /// Single tile with a rectangular inset
    Inset,
    /// L-shaped corner folded, then mirrored on both axes
    Corners,
    /// Cross tile repeated into a horizontal band
    Band,
    /// Corner bracket appended to its own reflection
    Frame,
}

impl Preset {
    /// Every preset in rendering order
    pub const ALL: [Self; 5] = [
        Self::Plain,
        Self::Inset,
        Self::Corners,
        Self::Band,
        Self::Frame,
    ];

    /// Lowercase name used for output files
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Inset => "inset",
            Self::Corners => "corners",
            Self::Band => "band",
            Self::Frame => "frame",
        }
    }

    /// Build the composite grid for this preset
    ///
    /// Only the plain preset depends on `params`.
    ///
    /// # Errors
    ///
    /// Returns any block or composition error raised while authoring the layout,
    /// or `KnotError::InvalidParameter` for an empty plain grid.
    pub fn build(self, params: &KnotParams) -> Result<KnotGrid> {
        match self {
            Self::Plain => KnotGrid::from_params(params),
            Self::Inset => KnotGrid::new(vec![inset()?]),
            Self::Corners => KnotGrid::new(vec![corners()?]),
            Self::Band => band(),
            Self::Frame => frame(),
        }
    }
}

fn inset() -> Result<Pattern> {
    Pattern::with_blocks(
        13,
        TILE_HEIGHT,
        [
            Block::vertical(4, 2, 6)?,
            Block::vertical(8, 2, 6)?,
            Block::horizontal(2, 4, 8)?,
            Block::horizontal(6, 4, 8)?,
        ],
    )
}

fn corners() -> Result<Pattern> {
    let mut corner = Pattern::with_blocks(5, 5, [Block::vertical(2, 2, 4)?])?;
    corner
        .fold()?
        .mirror(Orientation::Horizontal)?
        .mirror(Orientation::Vertical)?;
    Ok(corner)
}

fn band() -> Result<KnotGrid> {
    let cross = Pattern::with_blocks(
        8,
        TILE_HEIGHT,
        [Block::vertical(4, 2, 6)?, Block::horizontal(4, 2, 6)?],
    )?;
    let mut patterns = cross.repeat(3);
    patterns.push(Pattern::new(1, TILE_HEIGHT));
    KnotGrid::new(patterns)
}

fn frame() -> Result<KnotGrid> {
    let mut bracket = Pattern::with_blocks(
        8,
        TILE_HEIGHT,
        [Block::vertical(2, 2, 6)?, Block::horizontal(2, 2, 6)?],
    )?;
    let reflected = bracket.invert(Orientation::Horizontal)?;
    bracket.append(&reflected, Orientation::Horizontal)?;
    KnotGrid::new(vec![bracket, Pattern::new(1, TILE_HEIGHT)])
}
