//! Cell content: ownership and entity stacks.

use crate::id::{EntityKey, FactionId};
use smallvec::SmallVec;

/// An ordered stack of entity references.
///
/// Inline capacity of 4 covers the common "base terrain plus overlays"
/// case without heap allocation.
pub type EntityStack = SmallVec<[EntityKey; 4]>;

/// Everything a cell holds, independent of where it is.
///
/// Shared by the live [`Site`](crate::Site) and the location-free
/// [`Area`](crate::Area). Equality is structural over every field; this is
/// the predicate flood fill and the "customized" check are built on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Content {
    /// Owning faction; empty means unowned.
    pub owner: FactionId,
    /// Faction owning the units; empty means "follows `owner`".
    pub unit_owner: FactionId,
    /// Terrain stack, bottom first.
    pub terrain: EntityStack,
    /// Units present in the cell.
    pub units: EntityStack,
    /// Effects applied to the cell.
    pub effects: EntityStack,
}

impl Content {
    /// Content with the given terrain stack and nothing else.
    pub fn with_terrain<I, K>(terrain: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<EntityKey>,
    {
        Self {
            terrain: terrain.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// The faction that actually controls the units.
    ///
    /// An empty `unit_owner` tracks `owner`; a non-empty one is sticky.
    pub fn effective_unit_owner(&self) -> &FactionId {
        if self.unit_owner.is_none() {
            &self.owner
        } else {
            &self.unit_owner
        }
    }

    /// Returns `true` if this content differs from `default`.
    pub fn is_customized(&self, default: &Content) -> bool {
        self != default
    }
}
