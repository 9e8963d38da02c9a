//! Core data model for the Tessel grid editor.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types every other crate builds on: coordinates and rectangles,
//! faction and entity identifiers, cell [`Content`], the live [`Site`],
//! the location-free [`Area`] template, and the sparse persisted
//! [`AreaSection`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod area;
pub mod content;
pub mod coord;
pub mod error;
pub mod id;
pub mod section;

pub use area::{site_at, template_from, Area, Site};
pub use content::{Content, EntityStack};
pub use coord::{Coord, Rect};
pub use error::SectionError;
pub use id::{EntityKey, FactionId};
pub use section::{AreaSection, GeometryDescriptor, GridShape};
