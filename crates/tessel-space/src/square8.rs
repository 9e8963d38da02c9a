//! Square grid with 8-connected neighbourhood (king moves).

use crate::error::SpaceError;
use crate::grid::Grid;
use crate::grid2d;
use smallvec::SmallVec;
use tessel_core::{Coord, GeometryDescriptor, GridShape};

/// Orthogonal first (N, S, W, E), then diagonals (NW, NE, SW, SE).
const OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// A square grid where each cell touches every cell sharing an edge or corner.
#[derive(Debug, Clone)]
pub struct Square8 {
    width: u32,
    height: u32,
}

impl Square8 {
    /// Create a `width × height` grid.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        grid2d::check_dims(width, height)?;
        Ok(Self { width, height })
    }
}

impl Grid for Square8 {
    fn descriptor(&self) -> GeometryDescriptor {
        GeometryDescriptor::new(GridShape::Square8, self.width, self.height)
    }

    fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        grid2d::absorb_neighbours(coord, &OFFSETS, self.width, self.height)
    }
}
