//! Triangular grid of alternating up- and down-pointing cells.

use crate::error::SpaceError;
use crate::grid::Grid;
use crate::grid2d;
use smallvec::SmallVec;
use tessel_core::{Coord, GeometryDescriptor, GridShape};

/// Left, right, and the cell sharing the flat base (below).
const UP_OFFSETS: [(i32, i32); 3] = [(-1, 0), (1, 0), (0, 1)];

/// Left, right, and the cell sharing the flat top (above).
const DOWN_OFFSETS: [(i32, i32); 3] = [(-1, 0), (1, 0), (0, -1)];

/// A strip-of-triangles tessellation.
///
/// Cell `(x, y)` points up when `x + y` is even and down otherwise. Every
/// cell shares an edge with at most three others, which makes this the
/// sparsest adjacency the editor has to handle.
#[derive(Debug, Clone)]
pub struct Tri2D {
    width: u32,
    height: u32,
}

impl Tri2D {
    /// Create a `width × height` triangle map.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        grid2d::check_dims(width, height)?;
        Ok(Self { width, height })
    }

    /// Returns `true` if the cell at `coord` points up.
    pub fn points_up(coord: Coord) -> bool {
        (coord.x + coord.y).rem_euclid(2) == 0
    }
}

impl Grid for Tri2D {
    fn descriptor(&self) -> GeometryDescriptor {
        GeometryDescriptor::new(GridShape::Triangle, self.width, self.height)
    }

    fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        let offsets = if Self::points_up(coord) {
            &UP_OFFSETS
        } else {
            &DOWN_OFFSETS
        };
        grid2d::absorb_neighbours(coord, offsets, self.width, self.height)
    }
}
