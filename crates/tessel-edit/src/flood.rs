//! Connected-region discovery over an arbitrary adjacency relation.

use std::collections::VecDeque;
use tessel_core::Coord;
use tessel_space::Grid;

/// Breadth-first flood fill seeded at `start`.
///
/// Returns every cell reachable from `start` through a chain of
/// neighbours that all satisfy `predicate`, in discovery order. `start`
/// itself is part of the result iff `predicate(start)` holds; traversal
/// expands from it either way. Each cell is visited at most once, so the
/// cost is O(cells + adjacency edges). An invalid `start` yields an empty
/// region.
///
/// The order is deterministic for a given grid because neighbour
/// enumeration is.
///
/// # Examples
///
/// ```
/// use tessel_core::Coord;
/// use tessel_edit::flood_fill;
/// use tessel_space::Square4;
///
/// let grid = Square4::new(3, 3).unwrap();
/// // Everything except the middle column.
/// let region = flood_fill(&grid, Coord::new(0, 0), |c| c.x != 1);
/// assert_eq!(region.len(), 3);
/// ```
pub fn flood_fill<P>(grid: &dyn Grid, start: Coord, mut predicate: P) -> Vec<Coord>
where
    P: FnMut(Coord) -> bool,
{
    let Some(start_rank) = grid.canonical_rank(start) else {
        return Vec::new();
    };
    let mut visited = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();
    let mut region = Vec::new();

    visited[start_rank] = true;
    if predicate(start) {
        region.push(start);
    }
    queue.push_back(start);

    while let Some(coord) = queue.pop_front() {
        for nb in grid.neighbours(coord) {
            let Some(rank) = grid.canonical_rank(nb) else {
                continue;
            };
            if visited[rank] {
                continue;
            }
            visited[rank] = true;
            if predicate(nb) {
                region.push(nb);
                queue.push_back(nb);
            }
        }
    }
    region
}
