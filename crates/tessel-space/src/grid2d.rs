//! Shared helpers for the 2D grid backends.

use crate::error::SpaceError;
use smallvec::SmallVec;
use tessel_core::Coord;

/// Maximum dimension size: coordinates use `i32`, so each axis must fit.
pub(crate) const MAX_DIM: u32 = i32::MAX as u32;

/// Validate constructor dimensions.
pub(crate) fn check_dims(width: u32, height: u32) -> Result<(), SpaceError> {
    if width == 0 || height == 0 {
        return Err(SpaceError::EmptySpace);
    }
    if width > MAX_DIM {
        return Err(SpaceError::DimensionTooLarge {
            name: "width",
            value: width,
            max: MAX_DIM,
        });
    }
    if height > MAX_DIM {
        return Err(SpaceError::DimensionTooLarge {
            name: "height",
            value: height,
            max: MAX_DIM,
        });
    }
    Ok(())
}

/// Row-major canonical ordering: `(0,0), (1,0), ..., (width-1, height-1)`.
pub(crate) fn canonical_ordering_2d(width: u32, height: u32) -> Vec<Coord> {
    let mut out = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            out.push(Coord::new(x, y));
        }
    }
    out
}

/// Row-major rank of a coordinate, or `None` if out of bounds.
pub(crate) fn canonical_rank_2d(coord: Coord, width: u32, height: u32) -> Option<usize> {
    if !coord.in_bounds(width, height) {
        return None;
    }
    Some(coord.y as usize * width as usize + coord.x as usize)
}

/// Apply `(dx, dy)` offsets to `coord`, dropping those that leave the grid.
pub(crate) fn absorb_neighbours(
    coord: Coord,
    offsets: &[(i32, i32)],
    width: u32,
    height: u32,
) -> SmallVec<[Coord; 8]> {
    if !coord.in_bounds(width, height) {
        return SmallVec::new();
    }
    offsets
        .iter()
        .map(|&(dx, dy)| coord.offset(dx, dy))
        .filter(|n| n.in_bounds(width, height))
        .collect()
}
