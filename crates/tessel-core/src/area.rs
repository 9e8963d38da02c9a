//! Live cells ([`Site`]) and location-free templates ([`Area`]).
//!
//! The two types carry the same [`Content`] but differ in whether they
//! are tied to a location. Conversion is explicit: [`template_from`]
//! lifts a site into a 1×1 template, and [`site_at`] materializes a
//! template at a coordinate.

use crate::content::Content;
use crate::coord::{Coord, Rect};
use crate::id::FactionId;

/// One grid cell's live, editable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    coord: Coord,
    content: Content,
}

impl Site {
    /// Create a site at `coord` holding `content`.
    pub fn new(coord: Coord, content: Content) -> Self {
        Self { coord, content }
    }

    /// Where this site lives.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Current content.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Replace the whole content.
    pub fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    /// Change the owner.
    ///
    /// An empty `unit_owner` keeps following the new owner; an explicit
    /// one is left untouched.
    pub fn set_owner(&mut self, owner: FactionId) {
        self.content.owner = owner;
    }

    /// Pin the unit owner to `faction`. Passing the empty id is
    /// equivalent to [`clear_unit_owner`](Self::clear_unit_owner).
    pub fn set_unit_owner(&mut self, faction: FactionId) {
        self.content.unit_owner = faction;
    }

    /// Make the unit owner follow `owner` again.
    pub fn clear_unit_owner(&mut self) {
        self.content.unit_owner = FactionId::none();
    }

    /// Returns `true` if the content differs from the background content.
    pub fn is_customized(&self, default: &Content) -> bool {
        self.content.is_customized(default)
    }
}

/// A location-free content template with a list of covered rectangles.
///
/// As an edit template it normally carries one 1×1 rectangle; as a
/// persisted sparse record it carries every rectangle sharing this
/// content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Area {
    /// Content applied to every covered cell.
    pub content: Content,
    /// Covered rectangles.
    pub bounds: Vec<Rect>,
}

impl Area {
    /// Create an area covering `bounds`.
    pub fn new(content: Content, bounds: Vec<Rect>) -> Self {
        Self { content, bounds }
    }

    /// A copy of this template moved to a single cell at `coord`.
    pub fn relocated(&self, coord: Coord) -> Self {
        Self {
            content: self.content.clone(),
            bounds: vec![Rect::cell(coord)],
        }
    }

    /// Returns `true` if any rectangle covers `coord`.
    pub fn covers(&self, coord: Coord) -> bool {
        self.bounds.iter().any(|r| r.contains(coord))
    }

    /// Total covered cells, counting overlaps once per rectangle.
    pub fn cell_count(&self) -> usize {
        self.bounds.iter().map(Rect::area).sum()
    }
}

/// Capture a site as a 1×1 edit template.
pub fn template_from(site: &Site) -> Area {
    Area::new(site.content.clone(), vec![Rect::cell(site.coord)])
}

/// Materialize a template's content as a site at `coord`.
pub fn site_at(area: &Area, coord: Coord) -> Site {
    Site::new(coord, area.content.clone())
}
