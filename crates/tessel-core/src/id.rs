//! Strongly-typed identifiers for factions and entity definitions.

use std::fmt;

/// Identifies a faction (player side) in a scenario.
///
/// The empty id is meaningful: for [`Content::owner`](crate::Content) it
/// means "unowned", and for `unit_owner` it means "follows the owner".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FactionId(String);

impl FactionId {
    /// The empty faction id.
    pub fn none() -> Self {
        Self(String::new())
    }

    /// Returns `true` for the empty id.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FactionId {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for FactionId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// Opaque reference to an entity definition (terrain, unit, or effect).
///
/// The editor never interprets entity keys; it only compares them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey(String);

impl EntityKey {
    /// Create a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityKey {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}
