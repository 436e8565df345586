//! Spatial data structures for knot layouts
//!
//! This module contains the authoring-side model:
//! - Grid coordinates and parity-derived node kinds
//! - Blocks and their geometric transforms
//! - Patterns and their composition algebra
//! - The composite grid and the output geometry types

/// Directed wall segments on a single lane
pub mod block;
/// Coordinates, node kinds, orientations and crossing diagonals
pub mod coordinate;
/// Points, segments and markers in continuous grid units
pub mod geometry;
/// Composite grid assembled from patterns
pub mod grid;
/// Composable tiles of blocks
pub mod pattern;

pub use block::Block;
pub use coordinate::{Coordinate, Diagonal, NodeKind, Orientation};
pub use geometry::{Marker, Point, Segment};
pub use grid::KnotGrid;
pub use pattern::{LaneMap, Pattern};
