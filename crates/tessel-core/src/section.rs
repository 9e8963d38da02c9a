//! The sparse persisted map form.

use crate::area::Area;
use crate::content::Content;
use crate::coord::Coord;
use crate::error::SectionError;
use std::fmt;

/// Cell tessellation of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridShape {
    /// Squares, 4-connected.
    Square4,
    /// Squares, 8-connected.
    Square8,
    /// Pointy-top hexes in odd-row offset layout.
    Hex,
    /// Alternating up/down triangles.
    Triangle,
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Square4 => "square4",
            Self::Square8 => "square8",
            Self::Hex => "hex",
            Self::Triangle => "triangle",
        };
        f.write_str(name)
    }
}

/// Shape and dimensions of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeometryDescriptor {
    /// Cell tessellation.
    pub shape: GridShape,
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl GeometryDescriptor {
    /// Create a descriptor.
    pub const fn new(shape: GridShape, width: u32, height: u32) -> Self {
        Self {
            shape,
            width,
            height,
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The same shape with new dimensions.
    pub fn with_dims(&self, width: u32, height: u32) -> Self {
        Self::new(self.shape, width, height)
    }
}

impl fmt::Display for GeometryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{}", self.shape, self.width, self.height)
    }
}

/// The authoritative, sparse persisted representation of a map.
///
/// Coordinates not covered by any area use `default_area`. When areas
/// overlap, the later record wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaSection {
    /// Sparse area records, in application order.
    pub areas: Vec<Area>,
    /// Background content for uncovered cells.
    pub default_area: Content,
    /// Map shape and dimensions.
    pub geometry: GeometryDescriptor,
}

impl AreaSection {
    /// A section with no area records: every cell holds `default_area`.
    pub fn uniform(geometry: GeometryDescriptor, default_area: Content) -> Self {
        Self {
            areas: Vec::new(),
            default_area,
            geometry,
        }
    }

    /// Check that the section describes a buildable map.
    ///
    /// # Errors
    ///
    /// Returns the first [`SectionError`] found, checking the geometry
    /// before the areas in record order.
    pub fn validate(&self) -> Result<(), SectionError> {
        let GeometryDescriptor { width, height, .. } = self.geometry;
        if width == 0 || height == 0 {
            return Err(SectionError::EmptyGeometry { width, height });
        }
        for (index, area) in self.areas.iter().enumerate() {
            if area.bounds.is_empty() {
                return Err(SectionError::AreaWithoutBounds { index });
            }
            for rect in &area.bounds {
                if rect.is_empty() {
                    return Err(SectionError::EmptyRect { index, rect: *rect });
                }
                if !rect.fits_within(width, height) {
                    return Err(SectionError::RectOutOfBounds {
                        index,
                        rect: *rect,
                        width,
                        height,
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolved content at `coord`: the last covering area, else the default.
    pub fn content_at(&self, coord: Coord) -> &Content {
        self.areas
            .iter()
            .rev()
            .find(|a| a.covers(coord))
            .map(|a| &a.content)
            .unwrap_or(&self.default_area)
    }
}
