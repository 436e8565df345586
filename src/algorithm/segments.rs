//! Segment generation for every grid node
//!
//! Strand nodes become either a crossing (four half-diagonals, two of them cut
//! short to leave the under-strand gap) or a wall bounce (two parallel edges of
//! the node's corner square). Anchor nodes become markers. Authored block ranges
//! are appended as hidden guide lines.

use crate::algorithm::blocking::BlockingIndex;
use crate::algorithm::crossing::CrossingField;
use crate::io::configuration::{CORNER_OFFSET, CROSSING_GAP};
use crate::spatial::coordinate::{Coordinate, Diagonal, NodeKind, Orientation};
use crate::spatial::geometry::{Marker, Point, Segment};

/// How a node is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeBehavior {
    /// Primary or secondary anchor, drawn as a marker
    Anchor(NodeKind),
    /// Free crossing; the diagonal is the unbroken over-strand
    Crossing(Diagonal),
    /// Blocked by a vertical lane: strands bounce off left and right walls
    VerticalWall,
    /// Blocked by a horizontal lane: strands bounce off top and bottom walls
    HorizontalWall,
}

/// Corner points of a strand node, dropped when outside the canvas
#[derive(Debug, Clone, Copy)]
struct Corners {
    upper_left: Option<Point>,
    upper_right: Option<Point>,
    lower_left: Option<Point>,
    lower_right: Option<Point>,
}

/// Walks the grid and emits renderable geometry
#[derive(Debug, Clone, Copy)]
pub struct SegmentGenerator<'a> {
    width: usize,
    height: usize,
    index: &'a BlockingIndex,
    field: &'a CrossingField,
    gap: f64,
}

impl<'a> SegmentGenerator<'a> {
    /// Create a generator over a solved grid
    pub const fn new(
        width: usize,
        height: usize,
        index: &'a BlockingIndex,
        field: &'a CrossingField,
    ) -> Self {
        Self {
            width,
            height,
            index,
            field,
            gap: CROSSING_GAP,
        }
    }

    /// Override the under-strand gap, as a fraction of the centre-to-corner distance
    #[must_use]
    pub const fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Decide how a node is drawn
    ///
    /// A node blocked on both axes bounces off vertical walls.
    pub fn behavior(&self, coordinate: Coordinate) -> NodeBehavior {
        let kind = coordinate.kind();
        if kind.is_anchor() {
            return NodeBehavior::Anchor(kind);
        }

        if !self.index.is_blocked(coordinate, None) {
            let over = self
                .field
                .get(coordinate)
                .unwrap_or(Diagonal::LeftDownRightUp);
            return NodeBehavior::Crossing(over);
        }

        if self
            .index
            .is_blocked(coordinate, Some(Orientation::Vertical))
        {
            NodeBehavior::VerticalWall
        } else {
            NodeBehavior::HorizontalWall
        }
    }

    /// Segments representing one node's strand behaviour
    ///
    /// Anchor nodes produce no segments. Corners outside the canvas are dropped,
    /// so edge nodes yield fewer segments.
    pub fn node_segments(&self, coordinate: Coordinate) -> Vec<Segment> {
        let corners = self.corners(coordinate);
        let center = Point::at(coordinate);

        match self.behavior(coordinate) {
            NodeBehavior::Anchor(_) => Vec::new(),
            NodeBehavior::Crossing(over) => {
                let (over_ends, under_ends) = match over {
                    Diagonal::LeftDownRightUp => (
                        [corners.lower_left, corners.upper_right],
                        [corners.upper_left, corners.lower_right],
                    ),
                    Diagonal::LeftUpRightDown => (
                        [corners.upper_left, corners.lower_right],
                        [corners.lower_left, corners.upper_right],
                    ),
                };

                let over_segments = over_ends
                    .into_iter()
                    .flatten()
                    .map(|corner| strand(center, corner));
                let under_segments = under_ends
                    .into_iter()
                    .flatten()
                    .map(|corner| strand(center.towards(corner, self.gap), corner));

                over_segments.chain(under_segments).collect()
            }
            NodeBehavior::VerticalWall => [
                (corners.upper_left, corners.lower_left),
                (corners.upper_right, corners.lower_right),
            ]
            .into_iter()
            .filter_map(wall)
            .collect(),
            NodeBehavior::HorizontalWall => [
                (corners.upper_left, corners.upper_right),
                (corners.lower_left, corners.lower_right),
            ]
            .into_iter()
            .filter_map(wall)
            .collect(),
        }
    }

    /// Marker for an anchor node, `None` for strand nodes
    pub const fn marker(&self, coordinate: Coordinate) -> Option<Marker> {
        let kind = coordinate.kind();
        if kind.is_anchor() {
            Some(Marker { coordinate, kind })
        } else {
            None
        }
    }

    /// Weave segments for every node in row-major order
    pub fn weave_segments(&self) -> Vec<Segment> {
        self.coordinates()
            .flat_map(|coordinate| self.node_segments(coordinate))
            .collect()
    }

    /// One hidden guide line per stored blocking range, border ranges included
    pub fn guide_segments(&self) -> Vec<Segment> {
        self.index
            .ranges()
            .map(|range| {
                let (first, last) = range.endpoints();
                Segment::new(Point::at(first), Point::at(last), first.kind(), false)
            })
            .collect()
    }

    /// Weave segments followed by guide lines
    pub fn all_segments(&self) -> Vec<Segment> {
        let mut segments = self.weave_segments();
        segments.extend(self.guide_segments());
        segments
    }

    /// Markers for every anchor node in row-major order
    pub fn markers(&self) -> Vec<Marker> {
        self.coordinates()
            .filter_map(|coordinate| self.marker(coordinate))
            .collect()
    }

    fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).map(move |col| Coordinate::new(col as i32, row as i32))
        })
    }

    fn corners(&self, coordinate: Coordinate) -> Corners {
        let center = Point::at(coordinate);
        let corner = |dx: f64, dy: f64| {
            let point = Point::new(
                center.x + dx * CORNER_OFFSET,
                center.y + dy * CORNER_OFFSET,
            );
            self.on_canvas(point).then_some(point)
        };

        Corners {
            upper_left: corner(-1.0, -1.0),
            upper_right: corner(1.0, -1.0),
            lower_left: corner(-1.0, 1.0),
            lower_right: corner(1.0, 1.0),
        }
    }

    // Canvas spans the node centres, edges included
    fn on_canvas(&self, point: Point) -> bool {
        let max_x = self.width.saturating_sub(1) as f64;
        let max_y = self.height.saturating_sub(1) as f64;
        (0.0..=max_x).contains(&point.x) && (0.0..=max_y).contains(&point.y)
    }
}

fn strand(from: Point, to: Point) -> Segment {
    Segment::new(from, to, NodeKind::Line, true)
}

fn wall((from, to): (Option<Point>, Option<Point>)) -> Option<Segment> {
    Some(strand(from?, to?))
}
