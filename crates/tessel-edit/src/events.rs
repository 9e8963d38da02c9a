//! Notifications from the editor to the presentation layer.

use tessel_core::Coord;

/// Something the presentation layer may need to redraw for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// Site contents changed in place.
    ContentChanged {
        /// Every written coordinate, once each.
        coords: Vec<Coord>,
    },
    /// The live world was rebuilt; anything derived from it is stale.
    SchemaInvalidated,
    /// The current location changed (or was cleared).
    SelectionChanged {
        /// New current location.
        location: Option<Coord>,
    },
}

/// Receiver for [`EditorEvent`]s.
pub trait EditorListener {
    /// Called synchronously after the change has been applied.
    fn notify(&mut self, event: &EditorEvent);
}
