//! The core `Grid` trait and `dyn Grid` downcast support.

use crate::error::SpaceError;
use crate::grid2d;
use smallvec::SmallVec;
use std::any::Any;
use tessel_core::{Coord, GeometryDescriptor};

/// Adjacency abstraction for a rectangular map of arbitrary cell shape.
///
/// Coordinates always range over `[0, width) x [0, height)`; what differs
/// between backends is which cells touch. Consumers must not assume any
/// particular neighbour count.
///
/// # Object Safety
///
/// This trait is designed for use as `dyn Grid`. Use `downcast_ref` for
/// opt-in specialization on concrete types.
pub trait Grid: Any + Send + Sync + 'static {
    /// The shape and dimensions this grid was built from.
    fn descriptor(&self) -> GeometryDescriptor;

    /// Number of columns.
    fn width(&self) -> u32 {
        self.descriptor().width
    }

    /// Number of rows.
    fn height(&self) -> u32 {
        self.descriptor().height
    }

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Returns `true` if `coord` names a cell of this grid.
    fn is_valid(&self, coord: Coord) -> bool {
        coord.in_bounds(self.width(), self.height())
    }

    /// Enumerate the neighbours of a cell.
    ///
    /// Returns coordinates in a deterministic, backend-defined order. The
    /// result is empty for an invalid coordinate.
    fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]>;

    /// All cells in row-major order.
    ///
    /// Two calls on the same grid must return the same sequence.
    fn canonical_ordering(&self) -> Vec<Coord> {
        grid2d::canonical_ordering_2d(self.width(), self.height())
    }

    /// Position of a coordinate in the canonical ordering.
    fn canonical_rank(&self, coord: Coord) -> Option<usize> {
        grid2d::canonical_rank_2d(coord, self.width(), self.height())
    }

    /// Like [`canonical_rank`](Self::canonical_rank), but reports the valid
    /// range on failure.
    fn checked_rank(&self, coord: Coord) -> Result<usize, SpaceError> {
        self.canonical_rank(coord)
            .ok_or_else(|| SpaceError::CoordOutOfBounds {
                coord,
                bounds: format!("[0, {}) x [0, {})", self.width(), self.height()),
            })
    }
}

impl dyn Grid {
    /// Attempt to downcast a trait object to a concrete grid type.
    pub fn downcast_ref<T: Grid>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
