//! Dense-to-sparse encoding of live sites into area records.
//!
//! The persisted form only lists cells that differ from the background,
//! and groups equal contents into rectangle lists. Groups come out in
//! first-appearance row-major order, and each group's rectangles are
//! sorted by origin, so encoding the same world twice gives identical
//! sections.

use indexmap::IndexMap;
use std::mem;
use tessel_core::{Area, Content, Coord, Rect};

/// Encode `(coord, content)` pairs into sparse area records.
///
/// Pairs must arrive in row-major coordinate order without duplicates.
/// Pairs whose content equals `default` are omitted.
pub fn encode_sites<'a, I>(sites: I, default: &Content) -> Vec<Area>
where
    I: IntoIterator<Item = (Coord, &'a Content)>,
{
    let mut groups: IndexMap<&'a Content, Vec<Coord>> = IndexMap::new();
    for (coord, content) in sites {
        if content == default {
            continue;
        }
        groups.entry(content).or_default().push(coord);
    }
    groups
        .into_iter()
        .map(|(content, coords)| Area::new(content.clone(), merge_rects(&coords)))
        .collect()
}

/// Cover a row-major sorted, duplicate-free set of cells with rectangles.
///
/// Cells are first joined into horizontal runs per row; a run then
/// extends the rectangle above it when that rectangle has the same left
/// edge and width and ends on the previous row.
pub fn merge_rects(coords: &[Coord]) -> Vec<Rect> {
    debug_assert!(coords.windows(2).all(|w| w[0] < w[1]), "coords not sorted");

    // (y, x, len)
    let mut runs: Vec<(i32, i32, u32)> = Vec::new();
    for &c in coords {
        match runs.last_mut() {
            Some((y, x, len)) if *y == c.y && *x + *len as i32 == c.x => *len += 1,
            _ => runs.push((c.y, c.x, 1)),
        }
    }

    let mut rects: Vec<Rect> = Vec::new();
    // Rectangles whose bottom row is the previous / current row, keyed by (x, width).
    let mut prev_row: IndexMap<(i32, u32), usize> = IndexMap::new();
    let mut cur_row: IndexMap<(i32, u32), usize> = IndexMap::new();
    let mut cur_y: Option<i32> = None;

    for (y, x, len) in runs {
        if cur_y != Some(y) {
            if cur_y == Some(y - 1) {
                prev_row = mem::take(&mut cur_row);
            } else {
                prev_row.clear();
                cur_row.clear();
            }
            cur_y = Some(y);
        }
        if let Some(&idx) = prev_row.get(&(x, len)) {
            rects[idx].height += 1;
            cur_row.insert((x, len), idx);
        } else {
            rects.push(Rect::new(x, y, len, 1));
            cur_row.insert((x, len), rects.len() - 1);
        }
    }
    rects
}
