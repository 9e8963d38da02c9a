//! Construct a grid backend from a persisted geometry descriptor.

use crate::error::SpaceError;
use crate::grid::Grid;
use crate::{HexOffset, Square4, Square8, Tri2D};
use tessel_core::{GeometryDescriptor, GridShape};

/// Build the backend named by `desc.shape` with the descriptor's dimensions.
///
/// # Errors
///
/// Propagates the backend constructor's [`SpaceError`].
pub fn build_grid(desc: &GeometryDescriptor) -> Result<Box<dyn Grid>, SpaceError> {
    let GeometryDescriptor {
        shape,
        width,
        height,
    } = *desc;
    let grid: Box<dyn Grid> = match shape {
        GridShape::Square4 => Box::new(Square4::new(width, height)?),
        GridShape::Square8 => Box::new(Square8::new(width, height)?),
        GridShape::Hex => Box::new(HexOffset::new(width, height)?),
        GridShape::Triangle => Box::new(Tri2D::new(width, height)?),
    };
    Ok(grid)
}
