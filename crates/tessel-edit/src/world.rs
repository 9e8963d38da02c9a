//! The dense, live grid that edits operate on.

use crate::error::EditError;
use tessel_core::{AreaSection, Content, Coord, GeometryDescriptor, Site};
use tessel_space::{build_grid, Grid};

/// A `width × height` array of [`Site`]s plus the grid backend describing
/// their adjacency.
///
/// Built from an [`AreaSection`] and owned by the editing session. Site
/// contents change in place; the dimensions never change after
/// construction (a resize builds a new `WorldState`).
pub struct WorldState {
    grid: Box<dyn Grid>,
    /// Row-major, indexed by `grid.canonical_rank`.
    sites: Vec<Site>,
}

impl WorldState {
    /// Build a world from a persisted section.
    ///
    /// Every cell starts with the section's default content; area records
    /// are then painted in order, so later records win where they overlap.
    ///
    /// # Errors
    ///
    /// [`EditError::Section`] if the section fails validation and
    /// [`EditError::Space`] if the grid backend rejects the geometry.
    pub fn build(section: &AreaSection) -> Result<Self, EditError> {
        section.validate()?;
        let grid = build_grid(&section.geometry)?;
        let mut sites: Vec<Site> = grid
            .canonical_ordering()
            .into_iter()
            .map(|coord| Site::new(coord, section.default_area.clone()))
            .collect();
        for area in &section.areas {
            for rect in &area.bounds {
                for coord in rect.cells() {
                    let rank = grid.checked_rank(coord)?;
                    sites[rank].set_content(area.content.clone());
                }
            }
        }
        Ok(Self { grid, sites })
    }

    /// The adjacency backend.
    pub fn grid(&self) -> &dyn Grid {
        self.grid.as_ref()
    }

    /// Shape and dimensions.
    pub fn descriptor(&self) -> GeometryDescriptor {
        self.grid.descriptor()
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Returns `true` if `coord` names a cell.
    pub fn is_valid(&self, coord: Coord) -> bool {
        self.grid.is_valid(coord)
    }

    /// All sites in row-major order.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// The site at `coord`, if valid.
    pub fn site(&self, coord: Coord) -> Option<&Site> {
        self.grid.canonical_rank(coord).map(|i| &self.sites[i])
    }

    /// Mutable access to the site at `coord`, if valid.
    pub fn site_mut(&mut self, coord: Coord) -> Option<&mut Site> {
        let rank = self.grid.canonical_rank(coord)?;
        Some(&mut self.sites[rank])
    }

    /// The content at `coord`, if valid.
    pub fn content(&self, coord: Coord) -> Option<&Content> {
        self.site(coord).map(Site::content)
    }

    /// Overwrite the content at `coord`.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidLocation`] if `coord` is off the grid.
    pub fn set_content(&mut self, coord: Coord, content: Content) -> Result<(), EditError> {
        let site = self
            .site_mut(coord)
            .ok_or(EditError::InvalidLocation { coord })?;
        site.set_content(content);
        Ok(())
    }

    /// How many of `coords` hold content that differs from `default`.
    ///
    /// Coordinates off the grid are ignored.
    pub fn count_customized<'a, I>(&self, default: &Content, coords: I) -> usize
    where
        I: IntoIterator<Item = &'a Coord>,
    {
        coords
            .into_iter()
            .filter_map(|c| self.site(*c))
            .filter(|s| s.is_customized(default))
            .count()
    }
}

impl std::fmt::Debug for WorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorldState")
            .field("geometry", &self.descriptor())
            .field("sites", &self.sites.len())
            .finish()
    }
}
