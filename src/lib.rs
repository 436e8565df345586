//! Layout engine for Celtic knotwork patterns on a rectangular node grid
//!
//! Authors describe walls ("blocks") carved into the weave and compose them into
//! patterns. The engine tiles the patterns into one composite grid, indexes the
//! blocked lanes, solves the alternating crossing directions and emits typed line
//! segments that any rendering surface can draw.

#![forbid(unsafe_code)]

/// Blocking index, crossing-direction solver and segment generation
pub mod algorithm;
/// Error handling, configuration, presets and the rendering/CLI surface
pub mod io;
/// Grid coordinates, blocks, patterns and output geometry
pub mod spatial;

pub use algorithm::layout::KnotLayout;
pub use io::error::{KnotError, Result};
pub use spatial::{Block, Coordinate, Diagonal, KnotGrid, NodeKind, Orientation, Pattern};
