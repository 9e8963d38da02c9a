//! Grid geometry for Tessel maps.
//!
//! This crate defines the [`Grid`] trait, the adjacency abstraction that
//! flood fill, resize and world building consume, along with concrete
//! tessellation backends.
//!
//! # Backends
//!
//! - [`Square4`]: squares, 4-connected (N/S/W/E)
//! - [`Square8`]: squares, 8-connected (king moves)
//! - [`HexOffset`]: pointy-top hexes in odd-row offset layout
//! - [`Tri2D`]: alternating up/down triangles, 3-connected
//!
//! All backends absorb at the edges: neighbours that would fall outside
//! the grid are omitted. [`build_grid`] constructs the backend named by a
//! [`GeometryDescriptor`](tessel_core::GeometryDescriptor).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod build;
pub mod error;
pub mod grid;
pub(crate) mod grid2d;
pub mod hex;
pub mod square4;
pub mod square8;
pub mod tri2d;

#[cfg(test)]
pub(crate) mod compliance;

pub use build::build_grid;
pub use error::SpaceError;
pub use grid::Grid;
pub use hex::HexOffset;
pub use square4::Square4;
pub use square8::Square8;
pub use tri2d::Tri2D;
