//! Tessel: an interactive grid map editor core.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tessel sub-crates. For most users, adding `tessel` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // A 4×4 grass map with one faction.
//! let section = AreaSection::uniform(
//!     GeometryDescriptor::new(GridShape::Square4, 4, 4),
//!     Content::with_terrain(["grass"]),
//! );
//! let scenario = Scenario::with_factions(section, vec!["Red".into()]);
//! let mut session = EditorSession::new(scenario, EditorConfig::default()).unwrap();
//!
//! // Claim the corner, capture it as a template and stamp it opposite.
//! session.set_owner(Coord::new(0, 0), "Red".into()).unwrap();
//! session.apply_selection(Some(Coord::new(0, 0))).unwrap();
//! session.set_mode(EditMode::Replace);
//! session.apply_selection(Some(Coord::new(3, 3))).unwrap();
//!
//! // Shrinking from the right would lose the stamped site.
//! assert_eq!(session.dry_run_resize(EdgeDeltas::new(0, 0, -1, 0)).unwrap(), 1);
//!
//! let section = session.section().unwrap();
//! assert_eq!(section.areas.len(), 1);
//! assert_eq!(section.areas[0].bounds.len(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | Coordinates, content, sites, areas, sections |
//! | [`space`] | `tessel-space` | The `Grid` trait and grid backends |
//! | [`edit`] | `tessel-edit` | Sessions, flood fill, resize, synchronization |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data model (`tessel-core`).
///
/// Contains [`types::Coord`], [`types::Rect`], [`types::Content`], the
/// [`types::Site`] / [`types::Area`] pair and the persisted
/// [`types::AreaSection`].
pub use tessel_core as types;

/// Grid geometry (`tessel-space`).
///
/// Provides the [`space::Grid`] trait and concrete backends:
/// [`space::Square4`], [`space::Square8`], [`space::HexOffset`] and
/// [`space::Tri2D`], plus [`space::build_grid`] for descriptor-driven
/// construction.
pub use tessel_space as space;

/// Editing and synchronization (`tessel-edit`).
///
/// [`edit::EditorSession`] is the main entry point; the lower-level
/// [`edit::SyncEngine`] and [`edit::SelectionEditor`] are available for
/// callers that assemble their own session.
pub use tessel_edit as edit;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Data model
    pub use tessel_core::{
        Area, AreaSection, Content, Coord, EntityKey, FactionId, GeometryDescriptor, GridShape,
        Rect, Site,
    };

    // Errors
    pub use tessel_core::SectionError;
    pub use tessel_edit::{ConfigError, EditError};
    pub use tessel_space::SpaceError;

    // Geometry
    pub use tessel_space::{build_grid, Grid};

    // Editing
    pub use tessel_edit::{
        EdgeDeltas, EditMode, EditorConfig, EditorEvent, EditorListener, EditorSession,
        FillMatch, Scenario, Selection, SyncReport,
    };
}
