//! The editor facade a presentation layer drives.
//!
//! [`EditorSession`] ties the [`SyncEngine`], the [`SelectionEditor`] and
//! the [`Suppression`] scope together, marks content dirty after edits,
//! and forwards [`EditorEvent`]s to a single listener.

use crate::config::{ConfigError, EditorConfig};
use crate::error::EditError;
use crate::events::{EditorEvent, EditorListener};
use crate::resize::EdgeDeltas;
use crate::selection::{EditMode, Selection, SelectionEditor};
use crate::suppress::Suppression;
use crate::sync::{Scenario, SyncEngine, SyncReport};
use crate::world::WorldState;
use smallvec::SmallVec;
use tessel_core::{Area, AreaSection, Coord, FactionId, Site};
use tracing::{debug, warn};

/// One editing session over a scenario.
pub struct EditorSession {
    engine: SyncEngine,
    editor: SelectionEditor,
    suppression: Suppression,
    config: EditorConfig,
    owner_choices: Vec<FactionId>,
    listener: Option<Box<dyn EditorListener>>,
}

impl EditorSession {
    /// Open a session. No world is built until first needed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(scenario: Scenario, config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = Self {
            engine: SyncEngine::new(scenario, config.clone()),
            editor: SelectionEditor::from_config(&config),
            suppression: Suppression::new(),
            config,
            owner_choices: Vec::new(),
            listener: None,
        };
        session.refresh_owner_choices();
        Ok(session)
    }

    /// Install the listener, returning the previous one.
    pub fn set_listener(
        &mut self,
        listener: Box<dyn EditorListener>,
    ) -> Option<Box<dyn EditorListener>> {
        self.listener.replace(listener)
    }

    /// Remove the listener.
    pub fn take_listener(&mut self) -> Option<Box<dyn EditorListener>> {
        self.listener.take()
    }

    // ── Accessors ──────────────────────────────────────────────

    /// The session configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The synchronization engine.
    pub fn engine(&self) -> &SyncEngine {
        &self.engine
    }

    /// The scenario. Its section may lag behind unsaved edits; use
    /// [`section`](Self::section) for an up-to-date copy.
    pub fn scenario(&self) -> &Scenario {
        self.engine.scenario()
    }

    /// The live world, if built.
    pub fn world(&self) -> Option<&WorldState> {
        self.engine.world()
    }

    /// A handle to the session's suppression counter.
    ///
    /// Presentation code enters a scope on it while pushing updates into
    /// widgets whose change notifications route back into the `on_*`
    /// callbacks.
    pub fn suppression(&self) -> Suppression {
        self.suppression.clone()
    }

    // ── Selection ──────────────────────────────────────────────

    /// Active edit mode.
    pub fn mode(&self) -> EditMode {
        self.editor.mode()
    }

    /// Switch edit modes.
    pub fn set_mode(&mut self, mode: EditMode) {
        self.editor.set_mode(mode);
    }

    /// Modes that can currently be applied.
    pub fn available_modes(&self) -> SmallVec<[EditMode; 3]> {
        self.editor.available_modes()
    }

    /// The captured template, if any.
    pub fn template(&self) -> Option<&Area> {
        self.editor.template()
    }

    /// The current location, if any.
    pub fn current(&self) -> Option<Coord> {
        self.editor.current()
    }

    /// Apply the active mode at `location`, building the world first if
    /// needed.
    ///
    /// # Errors
    ///
    /// Synchronization errors from building the world, and
    /// [`EditError::NoTemplate`] from Replace or Fill without a template.
    pub fn apply_selection(&mut self, location: Option<Coord>) -> Result<Selection, EditError> {
        self.prepare_world()?;
        let before = self.editor.current();
        let world = self.engine.world_mut().ok_or(EditError::WorldUnavailable)?;
        let selection = self.editor.apply_selection(world, location)?;
        if let Selection::Edited { changed } = &selection {
            self.engine.mark_content_dirty();
            self.emit(EditorEvent::ContentChanged {
                coords: changed.clone(),
            });
        }
        self.selection_moved(before);
        Ok(selection)
    }

    // ── Site properties ────────────────────────────────────────

    /// Currently offered owners: the empty id followed by the roster.
    ///
    /// The list is rebuilt inside a suppression scope.
    pub fn owner_choices(&mut self) -> &[FactionId] {
        self.refresh_owner_choices();
        &self.owner_choices
    }

    /// Set the owner of the site at `coord`.
    ///
    /// # Errors
    ///
    /// [`EditError::UnknownFaction`] if `faction` is not rostered and
    /// [`EditError::InvalidLocation`] if `coord` is off-grid.
    pub fn set_owner(&mut self, coord: Coord, faction: FactionId) -> Result<(), EditError> {
        self.check_faction(&faction)?;
        self.edit_site(coord, |site| site.set_owner(faction))
    }

    /// Set the unit owner of the site at `coord`.
    ///
    /// # Errors
    ///
    /// As [`set_owner`](Self::set_owner).
    pub fn set_unit_owner(&mut self, coord: Coord, faction: FactionId) -> Result<(), EditError> {
        self.check_faction(&faction)?;
        self.edit_site(coord, |site| site.set_unit_owner(faction))
    }

    /// Clear the unit owner of the site at `coord`, so units follow the
    /// site owner again.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidLocation`] if `coord` is off-grid.
    pub fn clear_unit_owner(&mut self, coord: Coord) -> Result<(), EditError> {
        self.edit_site(coord, Site::clear_unit_owner)
    }

    // ── Synchronization ────────────────────────────────────────

    /// Reconcile section and world.
    ///
    /// # Errors
    ///
    /// As [`SyncEngine::synchronize`].
    pub fn synchronize(&mut self) -> Result<SyncReport, EditError> {
        self.run_sync(EdgeDeltas::ZERO)
    }

    /// Customized sites a resize by `deltas` would discard.
    ///
    /// A pure query: no flag, section, world or listener sees it.
    ///
    /// # Errors
    ///
    /// As [`SyncEngine::dry_run_data_loss`].
    pub fn dry_run_resize(&self, deltas: EdgeDeltas) -> Result<usize, EditError> {
        self.engine.dry_run_data_loss(deltas)
    }

    /// Grow or shrink the map by `deltas`, moving the current location
    /// with its site.
    ///
    /// # Errors
    ///
    /// As [`SyncEngine::synchronize`]. Nothing changes on error.
    pub fn resize(&mut self, deltas: EdgeDeltas) -> Result<SyncReport, EditError> {
        self.run_sync(deltas)
    }

    /// Write pending edits back and return the section for persistence.
    ///
    /// # Errors
    ///
    /// As [`SyncEngine::synchronize`].
    pub fn section(&mut self) -> Result<&AreaSection, EditError> {
        self.run_sync(EdgeDeltas::ZERO)?;
        Ok(&self.engine.scenario().section)
    }

    /// Replace the section. The world is rebuilt on the next synchronize.
    pub fn replace_section(&mut self, section: AreaSection) {
        self.engine.replace_section(section);
    }

    /// Replace the faction roster.
    pub fn update_factions(&mut self, factions: Vec<FactionId>) {
        self.engine.update_factions(factions);
        self.refresh_owner_choices();
    }

    /// Drop unsaved edits.
    pub fn discard_edits(&mut self) {
        self.engine.discard_edits();
    }

    // ── Presentation callbacks ─────────────────────────────────

    /// The user picked a location. Ignored (`Ok(None)`) while suppressed.
    ///
    /// # Errors
    ///
    /// As [`apply_selection`](Self::apply_selection).
    pub fn on_location_chosen(
        &mut self,
        location: Option<Coord>,
    ) -> Result<Option<Selection>, EditError> {
        if self.suppression.is_active() {
            debug!(?location, "location callback suppressed");
            return Ok(None);
        }
        self.apply_selection(location).map(Some)
    }

    /// The user picked an owner for the current location. Returns
    /// `false` if suppressed.
    ///
    /// # Errors
    ///
    /// [`EditError::NoCurrentLocation`] if nothing is selected, otherwise
    /// as [`set_owner`](Self::set_owner).
    pub fn on_owner_chosen(&mut self, faction: FactionId) -> Result<bool, EditError> {
        if self.suppression.is_active() {
            debug!(%faction, "owner callback suppressed");
            return Ok(false);
        }
        let Some(coord) = self.editor.current() else {
            warn!(%faction, "owner rejected: no location selected");
            return Err(EditError::NoCurrentLocation);
        };
        self.set_owner(coord, faction)?;
        Ok(true)
    }

    /// The user picked an edit mode. Returns `false` if suppressed.
    pub fn on_mode_chosen(&mut self, mode: EditMode) -> bool {
        if self.suppression.is_active() {
            debug!(%mode, "mode callback suppressed");
            return false;
        }
        self.editor.set_mode(mode);
        true
    }

    // ── Internals ──────────────────────────────────────────────

    fn emit(&mut self, event: EditorEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener.notify(&event);
        }
    }

    fn selection_moved(&mut self, before: Option<Coord>) {
        let location = self.editor.current();
        if location != before {
            self.emit(EditorEvent::SelectionChanged { location });
        }
    }

    fn refresh_owner_choices(&mut self) {
        let _guard = self.suppression.enter();
        self.owner_choices.clear();
        self.owner_choices.push(FactionId::none());
        self.owner_choices.extend(self.engine.scenario().factions.iter().cloned());
    }

    fn check_faction(&self, faction: &FactionId) -> Result<(), EditError> {
        if self.engine.scenario().knows_faction(faction) {
            return Ok(());
        }
        warn!(%faction, "edit rejected: unknown faction");
        Err(EditError::UnknownFaction {
            faction: faction.clone(),
        })
    }

    fn edit_site<F>(&mut self, coord: Coord, edit: F) -> Result<(), EditError>
    where
        F: FnOnce(&mut Site),
    {
        self.prepare_world()?;
        let site = self
            .engine
            .world_mut()
            .and_then(|world| world.site_mut(coord))
            .ok_or(EditError::InvalidLocation { coord })?;
        edit(site);
        self.engine.mark_content_dirty();
        self.emit(EditorEvent::ContentChanged {
            coords: vec![coord],
        });
        Ok(())
    }

    fn prepare_world(&mut self) -> Result<(), EditError> {
        if self.engine.world().is_none() || self.engine.dirty().schema {
            self.run_sync(EdgeDeltas::ZERO)?;
        }
        Ok(())
    }

    fn run_sync(&mut self, deltas: EdgeDeltas) -> Result<SyncReport, EditError> {
        let report = self.engine.synchronize(deltas)?;
        if !report.rebuilt {
            return Ok(report);
        }

        let before = self.editor.current();
        if let Some(world) = self.engine.world() {
            if !deltas.is_zero() {
                let (width, height) = (world.width(), world.height());
                self.editor.translate(deltas.left, deltas.top, width, height);
            }
            if self.editor.current().is_some_and(|c| !world.is_valid(c)) {
                self.editor.set_current(None);
            }
        }
        self.selection_moved(before);

        let _guard = self.suppression.enter();
        self.refresh_owner_choices();
        self.emit(EditorEvent::SchemaInvalidated);
        Ok(report)
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("engine", &self.engine)
            .field("editor", &self.editor)
            .field("suppression_depth", &self.suppression.depth())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tessel_core::{Content, GeometryDescriptor, GridShape, Rect};

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn grass() -> Content {
        Content::with_terrain(["grass"])
    }

    fn session(w: u32, h: u32) -> EditorSession {
        let geometry = GeometryDescriptor::new(GridShape::Square4, w, h);
        let section = AreaSection::uniform(geometry, grass());
        let scenario = Scenario::with_factions(section, vec!["Red".into(), "Blue".into()]);
        EditorSession::new(scenario, EditorConfig::default()).unwrap()
    }

    /// Records events together with whether suppression was active.
    struct Probe {
        suppression: Suppression,
        seen: Rc<RefCell<Vec<(EditorEvent, bool)>>>,
    }

    impl EditorListener for Probe {
        fn notify(&mut self, event: &EditorEvent) {
            self.seen
                .borrow_mut()
                .push((event.clone(), self.suppression.is_active()));
        }
    }

    fn watch(s: &mut EditorSession) -> Rc<RefCell<Vec<(EditorEvent, bool)>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        s.set_listener(Box::new(Probe {
            suppression: s.suppression(),
            seen: Rc::clone(&seen),
        }));
        seen
    }

    #[test]
    fn invalid_config_rejected() {
        let geometry = GeometryDescriptor::new(GridShape::Square4, 2, 2);
        let section = AreaSection::uniform(geometry, grass());
        let config = EditorConfig {
            max_cells: 0,
            ..EditorConfig::default()
        };
        assert_eq!(
            EditorSession::new(Scenario::new(section), config).unwrap_err(),
            ConfigError::ZeroCellLimit
        );
    }

    #[test]
    fn replace_edit_marks_dirty_and_notifies() {
        let mut s = session(3, 3);
        let seen = watch(&mut s);
        s.set_owner(c(0, 0), "Red".into()).unwrap();
        s.apply_selection(Some(c(0, 0))).unwrap();
        s.set_mode(EditMode::Replace);
        let sel = s.apply_selection(Some(c(2, 2))).unwrap();
        assert_eq!(sel, Selection::Edited { changed: vec![c(2, 2)] });
        assert!(s.engine().dirty().content);
        assert!(seen.borrow().contains(&(
            EditorEvent::ContentChanged {
                coords: vec![c(2, 2)]
            },
            false
        )));
    }

    #[test]
    fn unknown_faction_rejected_without_change() {
        let mut s = session(2, 2);
        assert_eq!(
            s.set_owner(c(0, 0), "Green".into()),
            Err(EditError::UnknownFaction {
                faction: "Green".into()
            })
        );
        assert!(s.world().is_none_or(|w| w.content(c(0, 0)) == Some(&grass())));
        assert!(!s.engine().dirty().content);
    }

    #[test]
    fn empty_faction_always_allowed() {
        let mut s = session(2, 2);
        s.set_unit_owner(c(1, 1), FactionId::none()).unwrap();
        s.set_unit_owner(c(1, 1), "Blue".into()).unwrap();
        s.clear_unit_owner(c(1, 1)).unwrap();
        let content = s.world().unwrap().content(c(1, 1)).unwrap();
        assert!(content.unit_owner.is_none());
    }

    #[test]
    fn owner_choices_lead_with_empty() {
        let mut s = session(2, 2);
        let names: Vec<&str> = s.owner_choices().iter().map(FactionId::as_str).collect();
        assert_eq!(names, ["", "Red", "Blue"]);
        assert!(!s.suppression().is_active());
    }

    #[test]
    fn callbacks_ignored_while_suppressed() {
        let mut s = session(2, 2);
        s.apply_selection(Some(c(0, 0))).unwrap();
        let handle = s.suppression();
        {
            let _guard = handle.enter();
            assert_eq!(s.on_location_chosen(Some(c(1, 1))).unwrap(), None);
            assert!(!s.on_owner_chosen("Red".into()).unwrap());
            assert!(!s.on_mode_chosen(EditMode::Fill));
        }
        assert_eq!(s.current(), Some(c(0, 0)));
        assert_eq!(s.mode(), EditMode::Modify);
        assert!(s.on_owner_chosen("Red".into()).unwrap());
        assert_eq!(s.world().unwrap().content(c(0, 0)).unwrap().owner.as_str(), "Red");
    }

    #[test]
    fn rebuild_notifies_inside_suppression_scope() {
        let mut s = session(2, 2);
        let seen = watch(&mut s);
        s.synchronize().unwrap();
        assert_eq!(*seen.borrow(), vec![(EditorEvent::SchemaInvalidated, true)]);
        assert!(!s.suppression().is_active());
    }

    #[test]
    fn resize_moves_current_location() {
        let mut s = session(3, 3);
        s.apply_selection(Some(c(1, 1))).unwrap();
        s.resize(EdgeDeltas::new(1, 1, 0, 0)).unwrap();
        assert_eq!(s.current(), Some(c(2, 2)));
        s.resize(EdgeDeltas::new(0, 0, -2, 0)).unwrap();
        assert_eq!(s.current(), None);
    }

    #[test]
    fn dry_run_reports_without_changing() {
        let mut s = session(3, 3);
        s.set_owner(c(2, 2), "Red".into()).unwrap();
        assert_eq!(s.dry_run_resize(EdgeDeltas::new(0, 0, -1, 0)).unwrap(), 1);
        assert_eq!(s.dry_run_resize(EdgeDeltas::ZERO).unwrap(), 0);
        assert_eq!(s.world().unwrap().width(), 3);
        assert!(s.engine().dirty().content);
    }

    #[test]
    fn dry_run_with_stale_schema_commits_nothing() {
        let mut s = session(3, 3);
        s.set_owner(c(0, 0), "Blue".into()).unwrap();
        s.update_factions(vec!["Red".into(), "Blue".into(), "Green".into()]);
        let seen = watch(&mut s);
        let dirty = s.engine().dirty();
        let section = s.scenario().section.clone();

        assert_eq!(s.dry_run_resize(EdgeDeltas::new(-1, 0, 0, 0)).unwrap(), 1);
        assert_eq!(s.dry_run_resize(EdgeDeltas::new(0, 0, -1, 0)).unwrap(), 0);

        assert_eq!(s.engine().dirty(), dirty);
        assert!(dirty.content && dirty.schema);
        assert_eq!(s.scenario().section, section);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn owner_callback_needs_a_location() {
        let mut s = session(2, 2);
        assert_eq!(
            s.on_owner_chosen("Red".into()),
            Err(EditError::NoCurrentLocation)
        );
        let handle = s.suppression();
        let _guard = handle.enter();
        assert_eq!(s.on_owner_chosen("Red".into()), Ok(false));
    }

    #[test]
    fn section_flushes_edits() {
        let mut s = session(3, 2);
        s.set_owner(c(0, 1), "Blue".into()).unwrap();
        s.set_owner(c(1, 1), "Blue".into()).unwrap();
        let section = s.section().unwrap();
        assert_eq!(section.areas.len(), 1);
        assert_eq!(section.areas[0].bounds, vec![Rect::new(0, 1, 2, 1)]);
        assert!(s.engine().dirty().is_clean());
    }
}
