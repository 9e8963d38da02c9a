//! Edge growth/shrink arithmetic and data-loss accounting.
//!
//! A resize is described by four signed [`EdgeDeltas`]: positive values
//! add rows/columns at that edge, negative values remove them. An old cell
//! `(x, y)` lands at `(x + left, y + top)` in the new grid; cells that land
//! outside it are discarded. All queries here are pure. Committing a
//! resize is [`SyncEngine::synchronize`](crate::sync::SyncEngine::synchronize)
//! with non-zero deltas.

use crate::encode::encode_sites;
use crate::error::EditError;
use crate::world::WorldState;
use std::fmt;
use tessel_core::{AreaSection, Content, Coord, GeometryDescriptor};

// ── EdgeDeltas ─────────────────────────────────────────────────────

/// Signed row/column counts to insert (positive) or remove (negative) at
/// each edge of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdgeDeltas {
    /// Columns added at the left edge.
    pub left: i32,
    /// Rows added at the top edge.
    pub top: i32,
    /// Columns added at the right edge.
    pub right: i32,
    /// Rows added at the bottom edge.
    pub bottom: i32,
}

impl EdgeDeltas {
    /// No change at any edge.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create deltas in `left, top, right, bottom` order.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns `true` if no edge changes.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for EdgeDeltas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{left: {}, top: {}, right: {}, bottom: {}}}",
            self.left, self.top, self.right, self.bottom
        )
    }
}

// ── Resized ────────────────────────────────────────────────────────

/// A staged resize: the remapped section plus what it cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resized {
    /// The section rewritten for the new geometry.
    pub section: AreaSection,
    /// Customized sites that did not survive.
    pub discarded: usize,
}

// ── GeometryResizer ────────────────────────────────────────────────

/// Resize arithmetic for a `width × height` grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryResizer {
    width: u32,
    height: u32,
}

impl GeometryResizer {
    /// Resizer for a grid of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Resizer for the world's current size.
    pub fn for_world(world: &WorldState) -> Self {
        Self::new(world.width(), world.height())
    }

    /// Dimensions after applying `deltas`.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidResize`] if either dimension would be zero,
    /// negative, or beyond `u32`.
    pub fn resized_dims(&self, deltas: EdgeDeltas) -> Result<(u32, u32), EditError> {
        let width = self.width as i64 + deltas.left as i64 + deltas.right as i64;
        let height = self.height as i64 + deltas.top as i64 + deltas.bottom as i64;
        let invalid = EditError::InvalidResize { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => Ok((w, h)),
            _ => Err(invalid),
        }
    }

    /// Where an old-grid cell ends up, or `None` if it is discarded.
    ///
    /// # Errors
    ///
    /// As [`resized_dims`](Self::resized_dims).
    pub fn remap(&self, coord: Coord, deltas: EdgeDeltas) -> Result<Option<Coord>, EditError> {
        let (w, h) = self.resized_dims(deltas)?;
        Ok(Self::remap_into(coord, deltas, w, h))
    }

    fn remap_into(coord: Coord, deltas: EdgeDeltas, width: u32, height: u32) -> Option<Coord> {
        let x = coord.x as i64 + deltas.left as i64;
        let y = coord.y as i64 + deltas.top as i64;
        if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
            return None;
        }
        Some(Coord::new(x as i32, y as i32))
    }

    /// Old-grid coordinates, in row-major order, that fall outside the
    /// grid after applying `deltas`. Growth contributes nothing.
    ///
    /// # Errors
    ///
    /// As [`resized_dims`](Self::resized_dims).
    pub fn discarded_region(&self, deltas: EdgeDeltas) -> Result<Vec<Coord>, EditError> {
        let (w, h) = self.resized_dims(deltas)?;
        let mut out = Vec::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let coord = Coord::new(x, y);
                if Self::remap_into(coord, deltas, w, h).is_none() {
                    out.push(coord);
                }
            }
        }
        Ok(out)
    }

    /// Number of customized sites the resize would discard.
    ///
    /// A pure query: the caller decides whether to go ahead.
    ///
    /// # Errors
    ///
    /// As [`resized_dims`](Self::resized_dims).
    pub fn dry_run_data_loss(
        &self,
        world: &WorldState,
        default: &Content,
        deltas: EdgeDeltas,
    ) -> Result<usize, EditError> {
        let discarded = self.discarded_region(deltas)?;
        Ok(world.count_customized(default, &discarded))
    }

    /// Encode `world` into a section for the resized geometry.
    ///
    /// The section's default content is kept. Neither input is modified.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidResize`] as above, and
    /// [`EditError::GeometryMismatch`] if `world` is not the size this
    /// resizer was made for.
    pub fn resize_section(
        &self,
        world: &WorldState,
        section: &AreaSection,
        deltas: EdgeDeltas,
    ) -> Result<Resized, EditError> {
        let current = world.descriptor();
        if (current.width, current.height) != (self.width, self.height) {
            return Err(EditError::GeometryMismatch {
                world: current,
                section: GeometryDescriptor::new(current.shape, self.width, self.height),
            });
        }
        let (w, h) = self.resized_dims(deltas)?;
        let default = &section.default_area;
        let mut discarded = 0;
        let survivors = world.sites().iter().filter_map(|site| {
            match Self::remap_into(site.coord(), deltas, w, h) {
                Some(coord) => Some((coord, site.content())),
                None => {
                    if site.is_customized(default) {
                        discarded += 1;
                    }
                    None
                }
            }
        });
        let areas = encode_sites(survivors, default);
        Ok(Resized {
            section: AreaSection {
                areas,
                default_area: default.clone(),
                geometry: current.with_dims(w, h),
            },
            discarded,
        })
    }
}
