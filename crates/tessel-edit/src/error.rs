//! Error types for editing and synchronization.

use crate::config::ConfigError;
use crate::selection::EditMode;
use std::error::Error;
use std::fmt;
use tessel_core::{Coord, FactionId, GeometryDescriptor, SectionError};
use tessel_space::SpaceError;

/// Errors from edit, resize, and synchronize operations.
///
/// Every variant is returned before any state changes, so the caller can
/// recover by correcting the request and retrying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditError {
    /// Replace or Fill was applied before a template was captured in
    /// Modify mode.
    NoTemplate {
        /// The mode that was applied.
        mode: EditMode,
    },
    /// A location does not name a cell of the current grid.
    InvalidLocation {
        /// The offending coordinate.
        coord: Coord,
    },
    /// An operation on the current location ran with no location selected.
    NoCurrentLocation,
    /// Edge deltas would leave the grid with a non-positive dimension.
    InvalidResize {
        /// Resulting width.
        width: i64,
        /// Resulting height.
        height: i64,
    },
    /// Pending edits were made on a grid that no longer matches the
    /// section's geometry.
    GeometryMismatch {
        /// Geometry of the live world.
        world: GeometryDescriptor,
        /// Geometry declared by the section.
        section: GeometryDescriptor,
    },
    /// A faction id is neither empty nor part of the scenario's roster.
    UnknownFaction {
        /// The offending faction.
        faction: FactionId,
    },
    /// No live world exists and none could be built.
    WorldUnavailable,
    /// The persisted section is internally inconsistent.
    Section(SectionError),
    /// The grid backend rejected the geometry.
    Space(SpaceError),
    /// The geometry violates the editor configuration.
    Config(ConfigError),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTemplate { mode } => {
                write!(f, "{mode} requires a template captured in Modify mode")
            }
            Self::InvalidLocation { coord } => write!(f, "location {coord} is not on the grid"),
            Self::NoCurrentLocation => write!(f, "no location selected"),
            Self::InvalidResize { width, height } => {
                write!(f, "resize would produce a {width}x{height} grid")
            }
            Self::GeometryMismatch { world, section } => {
                write!(f, "live world is {world} but section declares {section}")
            }
            Self::UnknownFaction { faction } => write!(f, "unknown faction '{faction}'"),
            Self::WorldUnavailable => write!(f, "no live world available"),
            Self::Section(e) => write!(f, "section: {e}"),
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Section(e) => Some(e),
            Self::Space(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SectionError> for EditError {
    fn from(e: SectionError) -> Self {
        Self::Section(e)
    }
}

impl From<SpaceError> for EditError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ConfigError> for EditError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
