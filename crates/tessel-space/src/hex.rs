//! Hexagonal grid in odd-row offset layout (pointy-top).

use crate::error::SpaceError;
use crate::grid::Grid;
use crate::grid2d;
use smallvec::SmallVec;
use tessel_core::{Coord, GeometryDescriptor, GridShape};

/// `(dx, dy)` offsets for even rows: E, NE, NW, W, SW, SE.
const EVEN_ROW_OFFSETS: [(i32, i32); 6] = [(1, 0), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)];

/// `(dx, dy)` offsets for odd rows, which are shoved half a cell right.
const ODD_ROW_OFFSETS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (0, 1), (1, 1)];

/// A rectangular map of pointy-top hexagons.
///
/// Cells use plain `(x, y)` offset coordinates so the map stays
/// rectangular; odd rows sit half a cell to the right. Interior cells have
/// six neighbours, and which six depends on the row parity.
///
/// # Examples
///
/// ```
/// use tessel_core::Coord;
/// use tessel_space::{Grid, HexOffset};
///
/// let hex = HexOffset::new(5, 5).unwrap();
/// assert_eq!(hex.neighbours(Coord::new(2, 2)).len(), 6);
/// assert_eq!(hex.neighbours(Coord::new(0, 0)).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct HexOffset {
    width: u32,
    height: u32,
}

impl HexOffset {
    /// Create a `width × height` hex map.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        grid2d::check_dims(width, height)?;
        Ok(Self { width, height })
    }
}

impl Grid for HexOffset {
    fn descriptor(&self) -> GeometryDescriptor {
        GeometryDescriptor::new(GridShape::Hex, self.width, self.height)
    }

    fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        let offsets = if coord.y.rem_euclid(2) == 0 {
            &EVEN_ROW_OFFSETS
        } else {
            &ODD_ROW_OFFSETS
        };
        grid2d::absorb_neighbours(coord, offsets, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn even_row_neighbours() {
        let h = HexOffset::new(5, 5).unwrap();
        let n = h.neighbours(c(2, 2));
        assert_eq!(
            n.as_slice(),
            &[c(3, 2), c(2, 1), c(1, 1), c(1, 2), c(1, 3), c(2, 3)]
        );
    }

    #[test]
    fn odd_row_neighbours() {
        let h = HexOffset::new(5, 5).unwrap();
        let n = h.neighbours(c(2, 1));
        assert_eq!(
            n.as_slice(),
            &[c(3, 1), c(3, 0), c(2, 0), c(1, 1), c(2, 2), c(3, 2)]
        );
    }

    #[test]
    fn odd_row_right_edge() {
        let h = HexOffset::new(3, 3).unwrap();
        // (2, 1) is shoved right, so three of its six neighbours leave the map.
        assert_eq!(h.neighbours(c(2, 1)).len(), 3);
    }

    #[test]
    fn compliance() {
        compliance::run_full_compliance(&HexOffset::new(6, 5).unwrap());
        compliance::run_full_compliance(&HexOffset::new(1, 4).unwrap());
    }
}
