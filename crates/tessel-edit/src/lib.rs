//! Interactive editing and synchronization for Tessel maps.
//!
//! An [`EditorSession`](session::EditorSession) keeps two views of one map
//! consistent:
//!
//! - the sparse, authoritative [`AreaSection`](tessel_core::AreaSection)
//!   that the persistence layer reads and writes, and
//! - the dense, mutable [`WorldState`](world::WorldState) that edits land on.
//!
//! The [`SyncEngine`](sync::SyncEngine) moves data between the two under
//! control of two dirty flags. The [`SelectionEditor`](selection::SelectionEditor)
//! implements the Modify / Replace / Fill edit modes, using
//! [`flood_fill`](flood::flood_fill) for Fill. Structural resizes go
//! through the [`GeometryResizer`](resize::GeometryResizer), which can
//! report how many customized cells a resize would discard before any
//! change is committed.
//!
//! Everything here is single-threaded and synchronous.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod encode;
pub mod error;
pub mod events;
pub mod flood;
pub mod resize;
pub mod selection;
pub mod session;
pub mod suppress;
pub mod sync;
pub mod world;

pub use config::{ConfigError, EditorConfig, FillMatch};
pub use encode::{encode_sites, merge_rects};
pub use error::EditError;
pub use events::{EditorEvent, EditorListener};
pub use flood::flood_fill;
pub use resize::{EdgeDeltas, GeometryResizer, Resized};
pub use selection::{EditMode, Selection, SelectionEditor};
pub use session::EditorSession;
pub use suppress::{Suppression, SuppressionGuard};
pub use sync::{DirtyFlags, Scenario, SyncEngine, SyncReport};
pub use world::WorldState;
