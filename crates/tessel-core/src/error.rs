//! Error types for persisted section validation.

use crate::coord::Rect;
use std::error::Error;
use std::fmt;

/// Structural problems in an [`AreaSection`](crate::AreaSection).
///
/// Returned by [`AreaSection::validate`](crate::AreaSection::validate)
/// so that a world is never built with dimensions that disagree with its
/// persisted geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionError {
    /// The geometry descriptor has a zero width or height.
    EmptyGeometry {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },
    /// An area record lists no rectangles.
    AreaWithoutBounds {
        /// Index of the area in the section.
        index: usize,
    },
    /// An area record contains a rectangle covering no cells.
    EmptyRect {
        /// Index of the area in the section.
        index: usize,
        /// The offending rectangle.
        rect: Rect,
    },
    /// An area record reaches outside the declared geometry.
    RectOutOfBounds {
        /// Index of the area in the section.
        index: usize,
        /// The offending rectangle.
        rect: Rect,
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGeometry { width, height } => {
                write!(f, "geometry {width}x{height} has no cells")
            }
            Self::AreaWithoutBounds { index } => {
                write!(f, "area {index} has no bounds")
            }
            Self::EmptyRect { index, rect } => {
                write!(f, "area {index} has empty rect {rect}")
            }
            Self::RectOutOfBounds {
                index,
                rect,
                width,
                height,
            } => write!(
                f,
                "area {index} rect {rect} exceeds geometry {width}x{height}"
            ),
        }
    }
}

impl Error for SectionError {}
