//! Grid coordinates and axis-aligned rectangles.

use std::fmt;

/// An integer grid coordinate: `x` is the column, `y` the row.
///
/// Ordering is row-major (`y` first, then `x`), which matches the
/// canonical ordering of every grid backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This coordinate shifted by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns `true` if the coordinate lies inside a `width × height` grid.
    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && (self.x as i64) < width as i64
            && (self.y as i64) < height as i64
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle of cells, origin inclusive.
///
/// Covers `x..x + width` and `y..y + height`. A rectangle with a zero
/// dimension covers nothing and is rejected by section validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left column.
    pub x: i32,
    /// Top row.
    pub y: i32,
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Rect {
    /// Create a rectangle.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The 1×1 rectangle covering a single cell.
    pub const fn cell(coord: Coord) -> Self {
        Self::new(coord.x, coord.y, 1, 1)
    }

    /// Returns `true` if the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of covered cells.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if `coord` is covered.
    pub fn contains(&self, coord: Coord) -> bool {
        let dx = coord.x as i64 - self.x as i64;
        let dy = coord.y as i64 - self.y as i64;
        dx >= 0 && dy >= 0 && dx < self.width as i64 && dy < self.height as i64
    }

    /// Returns `true` if the whole rectangle lies inside a `width × height` grid.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x as i64 + self.width as i64 <= width as i64
            && self.y as i64 + self.height as i64 <= height as i64
    }

    /// This rectangle shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// The part of this rectangle inside a `width × height` grid, or
    /// `None` if nothing is left.
    pub fn clipped(&self, width: u32, height: u32) -> Option<Self> {
        let x0 = (self.x as i64).max(0);
        let y0 = (self.y as i64).max(0);
        let x1 = (self.x as i64 + self.width as i64).min(width as i64);
        let y1 = (self.y as i64 + self.height as i64).min(height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Self::new(x0 as i32, y0 as i32, (x1 - x0) as u32, (y1 - y0) as u32))
    }

    /// Covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (x0, y0) = (self.x, self.y);
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |dy| (0..w).map(move |dx| Coord::new(x0 + dx, y0 + dy)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@({}, {})", self.width, self.height, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn coords_order_row_major() {
        let mut v = vec![Coord::new(1, 1), Coord::new(2, 0), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(2, 0), Coord::new(0, 1), Coord::new(1, 1)]);
    }

    #[test]
    fn in_bounds_rejects_negative_and_overflow() {
        assert!(Coord::new(0, 0).in_bounds(3, 3));
        assert!(Coord::new(2, 2).in_bounds(3, 3));
        assert!(!Coord::new(3, 0).in_bounds(3, 3));
        assert!(!Coord::new(-1, 0).in_bounds(3, 3));
    }

    #[test]
    fn rect_cells_row_major() {
        let r = Rect::new(1, 2, 2, 2);
        let cells: Vec<_> = r.cells().collect();
        assert_eq!(
            cells,
            vec![
                Coord::new(1, 2),
                Coord::new(2, 2),
                Coord::new(1, 3),
                Coord::new(2, 3)
            ]
        );
        assert_eq!(r.area(), 4);
    }

    #[test]
    fn rect_contains_and_fits() {
        let r = Rect::new(1, 1, 2, 3);
        assert!(r.contains(Coord::new(1, 1)));
        assert!(r.contains(Coord::new(2, 3)));
        assert!(!r.contains(Coord::new(3, 1)));
        assert!(!r.contains(Coord::new(1, 4)));
        assert!(r.fits_within(3, 4));
        assert!(!r.fits_within(3, 3));
        assert!(!r.translated(-2, 0).fits_within(10, 10));
    }

    #[test]
    fn clipped_keeps_the_inside() {
        assert_eq!(Rect::new(-1, 1, 3, 5).clipped(4, 4), Some(Rect::new(0, 1, 2, 3)));
        assert_eq!(Rect::new(1, 1, 2, 2).clipped(4, 4), Some(Rect::new(1, 1, 2, 2)));
        assert_eq!(Rect::new(4, 0, 2, 2).clipped(4, 4), None);
        assert_eq!(Rect::new(-3, 0, 3, 1).clipped(4, 4), None);
    }

    #[test]
    fn empty_rect_has_no_cells() {
        let r = Rect::new(0, 0, 0, 5);
        assert!(r.is_empty());
        assert_eq!(r.cells().count(), 0);
    }

    proptest! {
        #[test]
        fn rect_cells_are_contained_and_counted(
            x in -5i32..5, y in -5i32..5, w in 0u32..6, h in 0u32..6,
        ) {
            let r = Rect::new(x, y, w, h);
            let cells: Vec<_> = r.cells().collect();
            prop_assert_eq!(cells.len(), r.area());
            prop_assert!(cells.iter().all(|c| r.contains(*c)));
            prop_assert!(cells.windows(2).all(|p| p[0] < p[1]));
        }

        #[test]
        fn clipped_covers_exactly_the_in_bounds_cells(
            x in -6i32..6, y in -6i32..6, w in 0u32..8, h in 0u32..8,
            gw in 1u32..6, gh in 1u32..6,
        ) {
            let r = Rect::new(x, y, w, h);
            let inside: Vec<_> = r.cells().filter(|c| c.in_bounds(gw, gh)).collect();
            match r.clipped(gw, gh) {
                Some(clip) => {
                    prop_assert!(clip.fits_within(gw, gh));
                    prop_assert_eq!(clip.cells().collect::<Vec<_>>(), inside);
                }
                None => prop_assert!(inside.is_empty()),
            }
        }
    }
}
