//! Test utilities for Tessel development.
//!
//! Provides section builders ([`fixtures`]) and a [`RecordingListener`]
//! that captures [`EditorEvent`]s for later assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::rc::Rc;

use tessel_edit::{EditorEvent, EditorListener};

pub use fixtures::{grass, owned, partitioned, red_corner, scenario, uniform, water};

/// Listener that appends every event to a shared log.
///
/// The session takes ownership of the boxed listener, so the log lives
/// behind an `Rc`: keep a [`log`](RecordingListener::log) handle before
/// installing it.
#[derive(Clone, Default)]
pub struct RecordingListener {
    events: Rc<RefCell<Vec<EditorEvent>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle to the shared event log.
    pub fn log(&self) -> EventLog {
        EventLog {
            events: Rc::clone(&self.events),
        }
    }
}

impl EditorListener for RecordingListener {
    fn notify(&mut self, event: &EditorEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Read side of a [`RecordingListener`].
#[derive(Clone)]
pub struct EventLog {
    events: Rc<RefCell<Vec<EditorEvent>>>,
}

impl EventLog {
    /// Copy of every event so far.
    pub fn events(&self) -> Vec<EditorEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return every event so far.
    pub fn drain(&self) -> Vec<EditorEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of [`EditorEvent::SchemaInvalidated`] events so far.
    pub fn schema_invalidations(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, EditorEvent::SchemaInvalidated))
            .count()
    }

    /// Every coordinate reported in `ContentChanged` events, in order.
    pub fn changed_coords(&self) -> Vec<tessel_core::Coord> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                EditorEvent::ContentChanged { coords } => Some(coords.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}
