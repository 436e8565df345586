//! Layout constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::pattern::Pattern;

// Crossing geometry
/// Fraction of the centre-to-corner distance left open on the under strand
pub const CROSSING_GAP: f64 = 0.3;
/// Distance from a node centre to each of its corners, in grid units
pub const CORNER_OFFSET: f64 = 0.5;

// Default knot size, counted in primary anchors
/// Default number of primary anchor rows
pub const DEFAULT_ROWS: usize = 4;
/// Default number of primary anchor columns
pub const DEFAULT_COLS: usize = 32;

// View defaults
/// Pixels per grid unit
pub const DEFAULT_UNIT_LENGTH: u32 = 24;
/// Radius of anchor markers in pixels
pub const DEFAULT_DOT_RADIUS: u32 = 2;
/// Stroke width of weave segments in pixels
pub const DEFAULT_STROKE_WIDTH: u32 = 3;
/// Horizontal canvas padding in pixels
pub const DEFAULT_X_PADDING: u32 = 10;
/// Vertical canvas padding in pixels
pub const DEFAULT_Y_PADDING: u32 = 10;

// Safety limits to prevent excessive memory allocation
/// Maximum rendered image side in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;
/// Maximum composite grid side in nodes
pub const MAX_GRID_DIMENSION: usize = 8_192;

// Progress bar display settings
/// Threshold for switching to a single batch progress bar
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_knot";
/// Extension of rendered outputs
pub const OUTPUT_EXTENSION: &str = "png";
/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Knot size measured in primary anchors
///
/// A knot of `rows x cols` anchors occupies a node grid of
/// `(2 * cols - 1) x (2 * rows - 1)`, so its border lanes land on anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnotParams {
    /// Number of primary anchor rows
    pub rows: usize,
    /// Number of primary anchor columns
    pub cols: usize,
}

impl Default for KnotParams {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl KnotParams {
    /// Node grid width, saturating for absurd column counts
    pub const fn grid_width(&self) -> usize {
        self.cols.saturating_mul(2).saturating_sub(1)
    }

    /// Node grid height, saturating for absurd row counts
    pub const fn grid_height(&self) -> usize {
        self.rows.saturating_mul(2).saturating_sub(1)
    }

    /// Empty pattern covering the whole node grid (plain woven fill)
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidParameter` if either anchor count is zero or
    /// the node grid would exceed `MAX_GRID_DIMENSION` on a side.
    pub fn default_pattern(&self) -> Result<Pattern> {
        for (parameter, count, nodes) in [
            ("rows", self.rows, self.grid_height()),
            ("cols", self.cols, self.grid_width()),
        ] {
            if count == 0 {
                return Err(invalid_parameter(
                    parameter,
                    &count,
                    &"a knot needs at least one anchor on each axis",
                ));
            }
            if nodes > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &count,
                    &format!("{nodes} nodes exceed the limit of {MAX_GRID_DIMENSION} per side"),
                ));
            }
        }
        Ok(Pattern::new(self.grid_width(), self.grid_height()))
    }
}

/// RGBA colour
pub type Color = [u8; 4];

/// Rendering parameters for the raster output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
// Rendering toggles are independent user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct ViewParams {
    /// Pixels per grid unit
    pub unit_length: u32,
    /// Radius of anchor markers in pixels
    pub dot_radius: u32,
    /// Stroke width of weave segments in pixels
    pub stroke_width: u32,
    /// Horizontal canvas padding in pixels
    pub x_padding: u32,
    /// Vertical canvas padding in pixels
    pub y_padding: u32,
    /// Primary anchor marker colour
    pub primary_color: Color,
    /// Secondary anchor marker colour
    pub secondary_color: Color,
    /// Weave strand colour
    pub line_color: Color,
    /// Authoring guide line colour
    pub guide_color: Color,
    /// Canvas background colour
    pub background: Color,
    /// Draw hidden authoring guides
    pub draw_guides: bool,
    /// Draw anchor markers
    pub draw_markers: bool,
    /// Smooth stroke and marker edges
    pub anti_alias: bool,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            unit_length: DEFAULT_UNIT_LENGTH,
            dot_radius: DEFAULT_DOT_RADIUS,
            stroke_width: DEFAULT_STROKE_WIDTH,
            x_padding: DEFAULT_X_PADDING,
            y_padding: DEFAULT_Y_PADDING,
            primary_color: [0, 0, 255, 255],
            secondary_color: [238, 130, 238, 255],
            line_color: [32, 32, 32, 255],
            guide_color: [144, 238, 144, 255],
            background: [255, 255, 255, 255],
            draw_guides: false,
            draw_markers: false,
            anti_alias: true,
        }
    }
}

impl ViewParams {
    /// Check that the parameters can produce an image
    ///
    /// # Errors
    ///
    /// Returns `KnotError::InvalidParameter` for a zero unit length or stroke width.
    pub fn validate(&self) -> Result<()> {
        if self.unit_length == 0 {
            return Err(invalid_parameter(
                "unit_length",
                &self.unit_length,
                &"must be at least one pixel",
            ));
        }
        if self.stroke_width == 0 {
            return Err(invalid_parameter(
                "stroke_width",
                &self.stroke_width,
                &"must be at least one pixel",
            ));
        }
        Ok(())
    }
}
