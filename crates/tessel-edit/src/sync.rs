//! Dirty-flag driven reconciliation between the section and the world.
//!
//! Two flags decide what [`SyncEngine::synchronize`] does:
//!
//! - **content dirty**: the world holds edits the section does not.
//! - **schema dirty**: scenario data changed after the world was built.
//!
//! The write-back of content always runs before the rebuild, so pending
//! edits are never lost to a stale rebuild. All work is staged and
//! committed at the end, so a failed call changes nothing.

use crate::config::EditorConfig;
use crate::error::EditError;
use crate::resize::{EdgeDeltas, GeometryResizer};
use crate::world::WorldState;
use tessel_core::{Area, AreaSection, FactionId};
use tracing::{debug, info, warn};

// ── Scenario ───────────────────────────────────────────────────────

/// The scenario data a world is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    /// The persisted map.
    pub section: AreaSection,
    /// Factions that may own sites. The empty id is always allowed.
    pub factions: Vec<FactionId>,
}

impl Scenario {
    /// A scenario with no factions.
    pub fn new(section: AreaSection) -> Self {
        Self {
            section,
            factions: Vec::new(),
        }
    }

    /// A scenario with the given faction roster.
    pub fn with_factions(section: AreaSection, factions: Vec<FactionId>) -> Self {
        Self { section, factions }
    }

    /// Returns `true` for the empty id or a rostered faction.
    pub fn knows_faction(&self, faction: &FactionId) -> bool {
        faction.is_none() || self.factions.contains(faction)
    }
}

// ── DirtyFlags ─────────────────────────────────────────────────────

/// Pending synchronization work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyFlags {
    /// The world has edits not yet written to the section.
    pub content: bool,
    /// The world is stale with respect to the scenario.
    pub schema: bool,
}

impl DirtyFlags {
    /// Returns `true` if neither flag is set.
    pub fn is_clean(&self) -> bool {
        !self.content && !self.schema
    }
}

// ── SyncReport ─────────────────────────────────────────────────────

/// What a [`SyncEngine::synchronize`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// The world was encoded back into the section.
    pub wrote_back: bool,
    /// The world was rebuilt from the section.
    pub rebuilt: bool,
    /// Customized sites dropped by a shrinking resize.
    pub discarded: usize,
}

impl SyncReport {
    /// Returns `true` if nothing happened.
    pub fn is_noop(&self) -> bool {
        !self.wrote_back && !self.rebuilt
    }
}

// ── SyncEngine ─────────────────────────────────────────────────────

/// Owns the scenario and the live world and keeps them consistent.
///
/// The world is built lazily: a new engine has no world and a dirty
/// schema, and the first [`synchronize`](Self::synchronize) builds it.
#[derive(Debug)]
pub struct SyncEngine {
    scenario: Scenario,
    world: Option<WorldState>,
    dirty: DirtyFlags,
    config: EditorConfig,
}

impl SyncEngine {
    /// An engine over `scenario` with no world built yet.
    pub fn new(scenario: Scenario, config: EditorConfig) -> Self {
        Self {
            scenario,
            world: None,
            dirty: DirtyFlags {
                content: false,
                schema: true,
            },
            config,
        }
    }

    /// The scenario. Its section may lag behind the world while content
    /// is dirty.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// The live world, if built.
    pub fn world(&self) -> Option<&WorldState> {
        self.world.as_ref()
    }

    /// Mutable access to the live world, if built.
    ///
    /// Callers that change site content must follow up with
    /// [`mark_content_dirty`](Self::mark_content_dirty).
    pub fn world_mut(&mut self) -> Option<&mut WorldState> {
        self.world.as_mut()
    }

    /// Pending work.
    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    /// Record that the world holds unsaved edits. Ignored while no world
    /// exists.
    pub fn mark_content_dirty(&mut self) {
        if self.world.is_some() {
            self.dirty.content = true;
        }
    }

    /// Record that scenario data changed behind the world's back.
    pub fn invalidate_schema(&mut self) {
        self.dirty.schema = true;
    }

    /// Drop unsaved edits. The next synchronize rebuilds from the section.
    pub fn discard_edits(&mut self) {
        if self.dirty.content {
            self.dirty.content = false;
            self.dirty.schema = true;
        }
    }

    /// Install a new authoritative section and mark the schema dirty.
    ///
    /// Pending edits are still written back first on the next
    /// synchronize, over the new section's area records; call
    /// [`discard_edits`](Self::discard_edits) beforehand to drop them.
    pub fn replace_section(&mut self, section: AreaSection) {
        self.scenario.section = section;
        self.dirty.schema = true;
    }

    /// Install a new faction roster and mark the schema dirty.
    pub fn update_factions(&mut self, factions: Vec<FactionId>) {
        self.scenario.factions = factions;
        self.dirty.schema = true;
    }

    /// Customized sites a resize by `deltas` would discard.
    ///
    /// Counts against the live world when it is authoritative and against
    /// a throwaway build of the section otherwise. Nothing is committed.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidResize`] for non-positive dimensions, and the
    /// build errors of [`synchronize`](Self::synchronize) when no usable
    /// world exists.
    pub fn dry_run_data_loss(&self, deltas: EdgeDeltas) -> Result<usize, EditError> {
        let fresh: WorldState;
        let world = match self.authoritative_world() {
            Some(world) => world,
            None => {
                fresh = self.build_world(&self.scenario.section)?;
                &fresh
            }
        };
        let default = &self.scenario.section.default_area;
        GeometryResizer::for_world(world).dry_run_data_loss(world, default, deltas)
    }

    /// Reconcile the section and the world.
    ///
    /// 1. If content is dirty, or `deltas` is non-zero, the world is
    ///    encoded back into the section with every site moved by
    ///    `(left, top)` and sites outside the new bounds dropped.
    /// 2. If the schema is dirty, the world is missing, or the geometry
    ///    changed, the world is rebuilt from the (possibly just written)
    ///    section.
    ///
    /// With both flags clear and zero deltas this is a no-op.
    ///
    /// # Errors
    ///
    /// - [`EditError::InvalidResize`] if `deltas` leave a non-positive
    ///   dimension.
    /// - [`EditError::GeometryMismatch`] if edits are pending on a world
    ///   whose geometry differs from the section's.
    /// - [`EditError::Section`], [`EditError::Space`] or
    ///   [`EditError::Config`] if the section cannot be built.
    ///
    /// On any error both the world and the section keep their pre-call
    /// values.
    pub fn synchronize(&mut self, deltas: EdgeDeltas) -> Result<SyncReport, EditError> {
        let resizing = !deltas.is_zero();
        if !resizing && self.dirty.is_clean() && self.world.is_some() {
            debug!("synchronize: nothing to do");
            return Ok(SyncReport::default());
        }

        // ── Stage ──
        let fresh: WorldState;
        let base = if self.dirty.content || resizing {
            match self.authoritative_world() {
                Some(world) => Some(world),
                None => {
                    fresh = self.build_world(&self.scenario.section)?;
                    Some(&fresh)
                }
            }
        } else {
            None
        };

        let mut report = SyncReport::default();
        let staged_section = match base {
            Some(world) => {
                let section = &self.scenario.section;
                if self.dirty.content && world.descriptor() != section.geometry {
                    warn!(
                        world = %world.descriptor(),
                        section = %section.geometry,
                        "synchronize rejected: geometry mismatch"
                    );
                    return Err(EditError::GeometryMismatch {
                        world: world.descriptor(),
                        section: section.geometry,
                    });
                }
                let resized = GeometryResizer::for_world(world)
                    .resize_section(world, section, deltas)
                    .inspect_err(|e| warn!(%deltas, error = %e, "resize rejected"))?;
                report.wrote_back = true;
                report.discarded = resized.discarded;
                Some(resized.section)
            }
            None => None,
        };

        let rebuild = resizing || self.dirty.schema || self.world.is_none();
        let staged_world = if rebuild {
            let section = staged_section.as_ref().unwrap_or(&self.scenario.section);
            Some(self.build_world(section)?)
        } else {
            None
        };

        // ── Commit ──
        if let Some(section) = staged_section {
            let cells: usize = section.areas.iter().map(Area::cell_count).sum();
            debug!(areas = section.areas.len(), cells, "section written back");
            self.scenario.section = section;
        }
        if let Some(world) = staged_world {
            info!(geometry = %world.descriptor(), "world rebuilt");
            self.world = Some(world);
            report.rebuilt = true;
        }
        if resizing {
            info!(%deltas, discarded = report.discarded, "resize committed");
        }
        self.dirty = DirtyFlags::default();
        Ok(report)
    }

    /// The live world, unless it is stale and holds no edits.
    fn authoritative_world(&self) -> Option<&WorldState> {
        self.world
            .as_ref()
            .filter(|_| self.dirty.content || !self.dirty.schema)
    }

    fn build_world(&self, section: &AreaSection) -> Result<WorldState, EditError> {
        self.config.check_cells(section.geometry.cell_count())?;
        let world = WorldState::build(section)?;
        if !self.scenario.factions.is_empty() {
            let unknown = world
                .sites()
                .iter()
                .filter(|s| {
                    let c = s.content();
                    !self.scenario.knows_faction(&c.owner)
                        || !self.scenario.knows_faction(&c.unit_owner)
                })
                .count();
            if unknown > 0 {
                warn!(sites = unknown, "sites reference factions outside the roster");
            }
        }
        Ok(world)
    }
}
