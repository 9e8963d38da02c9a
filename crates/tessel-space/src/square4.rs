//! Square grid with 4-connected neighbourhood (N/S/W/E).

use crate::error::SpaceError;
use crate::grid::Grid;
use crate::grid2d;
use smallvec::SmallVec;
use tessel_core::{Coord, GeometryDescriptor, GridShape};

/// North, south, west, east as `(dx, dy)`.
const OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// A square grid where each cell touches its four edge-sharing cells.
///
/// Corners have 2 neighbours and edge cells 3.
///
/// # Examples
///
/// ```
/// use tessel_core::Coord;
/// use tessel_space::{Grid, Square4};
///
/// let grid = Square4::new(16, 16).unwrap();
/// assert_eq!(grid.cell_count(), 256);
/// assert_eq!(grid.neighbours(Coord::new(0, 0)).len(), 2);
/// assert_eq!(grid.neighbours(Coord::new(5, 5)).len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Square4 {
    width: u32,
    height: u32,
}

impl Square4 {
    /// Create a `width × height` grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        grid2d::check_dims(width, height)?;
        Ok(Self { width, height })
    }
}

impl Grid for Square4 {
    fn descriptor(&self) -> GeometryDescriptor {
        GeometryDescriptor::new(GridShape::Square4, self.width, self.height)
    }

    fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        grid2d::absorb_neighbours(coord, &OFFSETS, self.width, self.height)
    }
}
