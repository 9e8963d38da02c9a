//! Editor configuration and validation.
//!
//! [`EditorConfig`] is the builder-input for an
//! [`EditorSession`](crate::session::EditorSession).
//! [`validate()`](EditorConfig::validate) checks it once at construction.

use crate::selection::EditMode;
use std::error::Error;
use std::fmt;

// ── FillMatch ──────────────────────────────────────────────────────

/// Which cells a Fill spreads through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillMatch {
    /// Cells whose content equals the template's content.
    #[default]
    Template,
    /// Cells whose content equals the start cell's content before the fill
    /// (classic paint-bucket behavior).
    StartContent,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`EditorConfig::validate()`] or when a geometry
/// breaks the configured limits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_cells` is zero, so no world could ever be built.
    ZeroCellLimit,
    /// A geometry has more cells than `max_cells` allows.
    CellLimitExceeded {
        /// Cells the geometry declares.
        cells: usize,
        /// Configured limit.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCellLimit => write!(f, "max_cells must be at least 1"),
            Self::CellLimitExceeded { cells, max } => {
                write!(f, "geometry has {cells} cells, limit is {max}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── EditorConfig ───────────────────────────────────────────────────

/// Session-wide editing options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    /// Edit mode the session starts in. Default: [`EditMode::Modify`].
    pub initial_mode: EditMode,
    /// Fill predicate. Default: [`FillMatch::Template`].
    pub fill_match: FillMatch,
    /// Largest world the session will build, in cells. Default: 4 194 304
    /// (a 2048×2048 map).
    pub max_cells: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_mode: EditMode::Modify,
            fill_match: FillMatch::Template,
            max_cells: 2048 * 2048,
        }
    }
}

impl EditorConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cells == 0 {
            return Err(ConfigError::ZeroCellLimit);
        }
        Ok(())
    }

    /// Check a cell count against `max_cells`.
    pub fn check_cells(&self, cells: usize) -> Result<(), ConfigError> {
        if cells > self.max_cells {
            return Err(ConfigError::CellLimitExceeded {
                cells,
                max: self.max_cells,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(EditorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_cell_limit_rejected() {
        let cfg = EditorConfig {
            max_cells: 0,
            ..EditorConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCellLimit));
    }

    #[test]
    fn check_cells_enforces_limit() {
        let cfg = EditorConfig {
            max_cells: 100,
            ..EditorConfig::default()
        };
        assert!(cfg.check_cells(100).is_ok());
        assert_eq!(
            cfg.check_cells(101),
            Err(ConfigError::CellLimitExceeded {
                cells: 101,
                max: 100
            })
        );
    }
}
