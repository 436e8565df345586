//! Crossing-direction solver
//!
//! Every strand node gets a crossing direction such that diagonally adjacent
//! strand nodes always disagree: a two-colouring of the diagonal-adjacency graph
//! restricted to strand nodes. The graph is bipartite by parity, so a
//! breadth-first sweep that hands each newly discovered node the opposite of its
//! discoverer is always consistent. Blocking is not consulted; the field depends
//! on grid topology alone.

use bitvec::vec::BitVec;
use ndarray::Array2;
use std::collections::VecDeque;
use tracing::debug;

use crate::io::error::{KnotError, Result, invalid_parameter};
use crate::spatial::coordinate::{Coordinate, Diagonal, NodeKind};

/// Crossing direction for each strand node of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossingField {
    /// Indexed by `[row, col]`; `None` for anchor nodes
    directions: Array2<Option<Diagonal>>,
    width: usize,
    height: usize,
}

impl CrossingField {
    /// Solve the field from the conventional seed
    ///
    /// The seed is the strand node nearest the top-left interior, scanning
    /// interior columns first, and receives `Diagonal::LeftDownRightUp`.
    pub fn solve(width: usize, height: usize) -> Self {
        let Some(seed) = default_seed(width, height) else {
            return Self::empty(width, height);
        };
        Self::solve_from(width, height, seed, Diagonal::LeftDownRightUp)
    }

    /// Solve the field from an explicit seed and seed direction
    ///
    /// Strand nodes the seed cannot reach (only possible on grids one node wide
    /// or tall) are swept from their own seeds, coloured to stay consistent with
    /// the main seed's column parity.
    ///
    /// # Errors
    ///
    /// Returns `KnotError::OutOfBounds` if the seed lies outside the grid, or
    /// `KnotError::InvalidParameter` if the seed is an anchor node.
    pub fn solve_seeded(
        width: usize,
        height: usize,
        seed: Coordinate,
        direction: Diagonal,
    ) -> Result<Self> {
        if !seed.within(width, height) {
            return Err(KnotError::OutOfBounds {
                coordinate: [seed.col, seed.row],
                dimensions: (width, height),
            });
        }
        if seed.kind() != NodeKind::Line {
            return Err(invalid_parameter(
                "seed",
                &seed,
                &"the crossing seed must be a strand node",
            ));
        }
        Ok(Self::solve_from(width, height, seed, direction))
    }

    fn empty(width: usize, height: usize) -> Self {
        Self {
            directions: Array2::from_elem((height, width), None),
            width,
            height,
        }
    }

    fn solve_from(width: usize, height: usize, seed: Coordinate, direction: Diagonal) -> Self {
        let mut field = Self::empty(width, height);
        let mut visited: BitVec = BitVec::repeat(false, width * height);

        field.sweep(seed, direction, &mut visited);

        // Components unreachable from the seed keep the seed's column parity
        for row in 0..height {
            for col in 0..width {
                let node = Coordinate::new(col as i32, row as i32);
                if node.kind() != NodeKind::Line
                    || visited.get(row * width + col).as_deref() == Some(&true)
                {
                    continue;
                }
                let local = if (node.col - seed.col).rem_euclid(2) == 0 {
                    direction
                } else {
                    direction.opposite()
                };
                field.sweep(node, local, &mut visited);
            }
        }

        debug!(
            width,
            height,
            seed = %seed,
            assigned = field.assigned_count(),
            "solved crossing directions"
        );

        field
    }

    fn sweep(&mut self, seed: Coordinate, direction: Diagonal, visited: &mut BitVec) {
        let mut queue = VecDeque::new();
        self.assign(seed, direction, visited);
        queue.push_back(seed);

        while let Some(node) = queue.pop_front() {
            let Some(current) = self.get(node) else {
                continue;
            };
            for neighbor in node.diagonal_neighbors() {
                if !neighbor.within(self.width, self.height)
                    || neighbor.kind() != NodeKind::Line
                    || self.is_visited(neighbor, visited)
                {
                    continue;
                }
                self.assign(neighbor, current.opposite(), visited);
                queue.push_back(neighbor);
            }
        }
    }

    fn is_visited(&self, node: Coordinate, visited: &BitVec) -> bool {
        let index = node.row as usize * self.width + node.col as usize;
        visited.get(index).as_deref() == Some(&true)
    }

    fn assign(&mut self, node: Coordinate, direction: Diagonal, visited: &mut BitVec) {
        let index = node.row as usize * self.width + node.col as usize;
        visited.set(index, true);
        if let Some(slot) = self
            .directions
            .get_mut([node.row as usize, node.col as usize])
        {
            *slot = Some(direction);
        }
    }

    /// Crossing direction at a coordinate
    ///
    /// Returns `None` for anchor nodes and coordinates outside the grid.
    pub fn get(&self, coordinate: Coordinate) -> Option<Diagonal> {
        if !coordinate.within(self.width, self.height) {
            return None;
        }
        self.directions
            .get([coordinate.row as usize, coordinate.col as usize])
            .copied()
            .flatten()
    }

    /// Grid width the field was solved for
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height the field was solved for
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of strand nodes with an assigned direction
    pub fn assigned_count(&self) -> usize {
        self.directions.iter().filter(|slot| slot.is_some()).count()
    }
}

// Interior strand node nearest the top-left, scanning columns first; falls back to
// any strand node for grids without an interior
fn default_seed(width: usize, height: usize) -> Option<Coordinate> {
    let interior = (1..width.saturating_sub(1)).flat_map(|col| {
        (1..height.saturating_sub(1)).map(move |row| Coordinate::new(col as i32, row as i32))
    });
    let anywhere = (0..width)
        .flat_map(|col| (0..height).map(move |row| Coordinate::new(col as i32, row as i32)));

    interior
        .chain(anywhere)
        .find(|node| node.kind() == NodeKind::Line)
}
