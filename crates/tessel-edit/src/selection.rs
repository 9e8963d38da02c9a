//! The Modify / Replace / Fill edit-mode state machine.
//!
//! Modify captures the clicked site as a template. Replace writes the
//! template into one site. Fill writes it into the connected region
//! around the clicked site. Replace and Fill are unavailable until a
//! template has been captured, and an invalid selection throws the
//! template away again.

use crate::config::{EditorConfig, FillMatch};
use crate::error::EditError;
use crate::flood::flood_fill;
use crate::world::WorldState;
use smallvec::SmallVec;
use std::fmt;
use tessel_core::{template_from, Area, Content, Coord};
use tracing::{debug, warn};

/// How a selected location is applied. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditMode {
    /// Capture the selected site as the template.
    #[default]
    Modify,
    /// Write the template into the selected site.
    Replace,
    /// Write the template into the selected site's connected region.
    Fill,
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Modify => "Modify",
            Self::Replace => "Replace",
            Self::Fill => "Fill",
        };
        f.write_str(name)
    }
}

/// What [`SelectionEditor::apply_selection`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The location was invalid; template and current location were cleared.
    Invalidated,
    /// Modify mode captured a new template. The grid is unchanged.
    Captured,
    /// Sites were written.
    Edited {
        /// Written coordinates, each listed once, selected location first.
        changed: Vec<Coord>,
    },
}

/// Edit-mode state: the active mode, the captured template, and the
/// current location.
#[derive(Clone, Debug)]
pub struct SelectionEditor {
    mode: EditMode,
    template: Option<Area>,
    current: Option<Coord>,
    fill_match: FillMatch,
}

impl SelectionEditor {
    /// An editor in `mode` with no template.
    pub fn new(mode: EditMode, fill_match: FillMatch) -> Self {
        Self {
            mode,
            template: None,
            current: None,
            fill_match,
        }
    }

    /// An editor configured from `config`.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.initial_mode, config.fill_match)
    }

    /// Active mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Switch modes. Always permitted; preconditions are checked when a
    /// selection is applied.
    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    /// The captured template, if any.
    pub fn template(&self) -> Option<&Area> {
        self.template.as_ref()
    }

    /// The most recent valid selected location.
    pub fn current(&self) -> Option<Coord> {
        self.current
    }

    /// Move the current location without applying anything.
    pub fn set_current(&mut self, location: Option<Coord>) {
        self.current = location;
    }

    /// Modes that can currently be applied.
    pub fn available_modes(&self) -> SmallVec<[EditMode; 3]> {
        let mut modes = SmallVec::new();
        modes.push(EditMode::Modify);
        if self.template.is_some() {
            modes.push(EditMode::Replace);
            modes.push(EditMode::Fill);
        }
        modes
    }

    /// Returns `true` if `mode` can currently be applied.
    pub fn is_available(&self, mode: EditMode) -> bool {
        mode == EditMode::Modify || self.template.is_some()
    }

    /// Shift the template bounds and the current location by `(dx, dy)`
    /// after a resize, dropping whatever falls outside the new
    /// `width × height` grid. The template content is kept either way.
    pub fn translate(&mut self, dx: i32, dy: i32, width: u32, height: u32) {
        if let Some(template) = self.template.as_mut() {
            template.bounds = template
                .bounds
                .iter()
                .filter_map(|r| r.translated(dx, dy).clipped(width, height))
                .collect();
        }
        self.current = self
            .current
            .map(|c| c.offset(dx, dy))
            .filter(|c| c.in_bounds(width, height));
    }

    /// Drop the template and the current location.
    pub fn clear(&mut self) {
        self.template = None;
        self.current = None;
    }

    /// Apply the active mode at `location`.
    ///
    /// `None` or an off-grid location clears the template and current
    /// location and mutates nothing.
    ///
    /// # Errors
    ///
    /// [`EditError::NoTemplate`] for Replace or Fill without a captured
    /// template. Nothing changes in that case.
    pub fn apply_selection(
        &mut self,
        world: &mut WorldState,
        location: Option<Coord>,
    ) -> Result<Selection, EditError> {
        let Some(loc) = location.filter(|c| world.is_valid(*c)) else {
            debug!(?location, "selection invalidated");
            self.clear();
            return Ok(Selection::Invalidated);
        };

        match self.mode {
            EditMode::Modify => {
                let site = world
                    .site(loc)
                    .ok_or(EditError::InvalidLocation { coord: loc })?;
                self.template = Some(template_from(site));
                self.current = Some(loc);
                debug!(%loc, "template captured");
                Ok(Selection::Captured)
            }
            EditMode::Replace => {
                let template = self.require_template()?.relocated(loc);
                world.set_content(loc, template.content.clone())?;
                self.template = Some(template);
                self.current = Some(loc);
                Ok(Selection::Edited { changed: vec![loc] })
            }
            EditMode::Fill => {
                let template = self.require_template()?;
                let start_content: Content;
                let target = match self.fill_match {
                    FillMatch::Template => &template.content,
                    FillMatch::StartContent => {
                        start_content = world
                            .content(loc)
                            .cloned()
                            .ok_or(EditError::InvalidLocation { coord: loc })?;
                        &start_content
                    }
                };
                let mut region =
                    flood_fill(world.grid(), loc, |c| world.content(c) == Some(target));
                // The start is written even when it did not match, and only once.
                if region.first() != Some(&loc) {
                    region.insert(0, loc);
                }
                let content = template.content.clone();
                for &coord in &region {
                    world.set_content(coord, content.clone())?;
                }
                debug!(%loc, cells = region.len(), "fill applied");
                self.current = Some(loc);
                Ok(Selection::Edited { changed: region })
            }
        }
    }

    fn require_template(&self) -> Result<&Area, EditError> {
        self.template.as_ref().ok_or_else(|| {
            warn!(mode = %self.mode, "edit rejected: no template captured");
            EditError::NoTemplate { mode: self.mode }
        })
    }
}
