//! Benchmark profiles for the Tessel grid editor.
//!
//! - [`reference_section`]: 100x100 map with striped owner regions.
//! - [`stress_section`]: 316x316 (~100K cells), same pattern.
//! - [`scatter_coords`]: deterministic pseudo-random coordinates.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_core::{Area, AreaSection, Content, Coord, GeometryDescriptor, GridShape, Rect};
use tessel_edit::Scenario;

const FACTIONS: [&str; 3] = ["Red", "Blue", "Green"];

/// Default content of every profile.
pub fn background() -> Content {
    Content::with_terrain(["grass"])
}

/// A `size x size` map on `shape` with horizontal owner bands of height
/// `band`, cycling through three factions. Every fourth band is left at
/// the default.
pub fn banded_section(shape: GridShape, size: u32, band: u32) -> AreaSection {
    let mut section =
        AreaSection::uniform(GeometryDescriptor::new(shape, size, size), background());
    let band = band.max(1);
    let mut y = 0;
    let mut index = 0usize;
    while y < size {
        let height = band.min(size - y);
        if index % 4 != 3 {
            let content = Content {
                owner: FACTIONS[index % FACTIONS.len()].into(),
                ..background()
            };
            section
                .areas
                .push(Area::new(content, vec![Rect::new(0, y as i32, size, height)]));
        }
        y += height;
        index += 1;
    }
    section
}

/// 100x100 Square4 reference map (10K cells).
pub fn reference_section() -> AreaSection {
    banded_section(GridShape::Square4, 100, 10)
}

/// 316x316 Square4 stress map (~100K cells).
pub fn stress_section() -> AreaSection {
    banded_section(GridShape::Square4, 316, 16)
}

/// `section` with the three-faction roster used by the profiles.
pub fn scenario(section: AreaSection) -> Scenario {
    Scenario::with_factions(section, FACTIONS.iter().map(|&f| f.into()).collect())
}

/// `count` deterministic coordinates inside `width x height`.
pub fn scatter_coords(count: usize, width: u32, height: u32) -> Vec<Coord> {
    (0..count as u64)
        .map(|i| {
            let x = i.wrapping_mul(6364136223846793007) % width as u64;
            let y = i.wrapping_mul(1442695040888963407) % height as u64;
            Coord::new(x as i32, y as i32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        reference_section().validate().unwrap();
        stress_section().validate().unwrap();
        banded_section(GridShape::Hex, 7, 3).validate().unwrap();
    }

    #[test]
    fn scatter_stays_in_bounds() {
        assert!(scatter_coords(500, 13, 7).iter().all(|c| c.in_bounds(13, 7)));
    }
}
