//! Reusable section fixtures.
//!
//! - [`uniform`]: a blank grass map.
//! - [`partitioned`]: grass on the left, water on the right.
//! - [`red_corner`]: 3×3 grass with `(2, 2)` owned by `"Red"`.

use tessel_core::{Area, AreaSection, Content, Coord, GeometryDescriptor, GridShape, Rect};
use tessel_edit::Scenario;

/// Plain grass terrain, used as the default content.
pub fn grass() -> Content {
    Content::with_terrain(["grass"])
}

/// Plain water terrain.
pub fn water() -> Content {
    Content::with_terrain(["water"])
}

/// Grass owned by `faction`.
pub fn owned(faction: &str) -> Content {
    Content {
        owner: faction.into(),
        ..grass()
    }
}

/// A `width × height` grass section on `shape`.
pub fn uniform(shape: GridShape, width: u32, height: u32) -> AreaSection {
    AreaSection::uniform(GeometryDescriptor::new(shape, width, height), grass())
}

/// Columns `0..split` are grass (the default), the rest water.
///
/// # Panics
///
/// If `split` is not strictly inside `0..width`.
pub fn partitioned(shape: GridShape, width: u32, height: u32, split: u32) -> AreaSection {
    assert!(split > 0 && split < width, "split must leave two regions");
    let mut section = uniform(shape, width, height);
    section.areas.push(Area::new(
        water(),
        vec![Rect::new(split as i32, 0, width - split, height)],
    ));
    section
}

/// 3×3 Square4 grass with the bottom-right site owned by `"Red"`.
pub fn red_corner() -> AreaSection {
    let mut section = uniform(GridShape::Square4, 3, 3);
    section
        .areas
        .push(Area::new(owned("Red"), vec![Rect::cell(Coord::new(2, 2))]));
    section
}

/// Wrap `section` with a `Red`/`Blue` roster.
pub fn scenario(section: AreaSection) -> Scenario {
    Scenario::with_factions(section, vec!["Red".into(), "Blue".into()])
}
