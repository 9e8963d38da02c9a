//! Grid trait compliance test helpers.
//!
//! These functions verify that a Grid implementation satisfies the
//! invariants flood fill and world building rely on. Reused across all
//! backend test modules.

use crate::grid::Grid;
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &dyn Grid) {
    for coord in grid.canonical_ordering() {
        for nb in grid.neighbours(coord) {
            let nb_neighbours = grid.neighbours(nb);
            assert!(
                nb_neighbours.contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that every neighbour is a valid, distinct, non-self cell.
pub fn assert_neighbours_well_formed(grid: &dyn Grid) {
    for coord in grid.canonical_ordering() {
        let nbs = grid.neighbours(coord);
        let unique: IndexSet<_> = nbs.iter().collect();
        assert_eq!(unique.len(), nbs.len(), "duplicate neighbours of {coord}");
        for nb in &nbs {
            assert!(grid.is_valid(*nb), "neighbour {nb} of {coord} is out of bounds");
            assert_ne!(*nb, coord, "{coord} lists itself as a neighbour");
        }
    }
}

/// Assert that two calls to `neighbours` return the same sequence.
pub fn assert_neighbours_deterministic(grid: &dyn Grid) {
    for coord in grid.canonical_ordering() {
        assert_eq!(
            grid.neighbours(coord),
            grid.neighbours(coord),
            "neighbours({coord}) is non-deterministic"
        );
    }
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique coords.
pub fn assert_canonical_ordering_complete(grid: &dyn Grid) {
    let ordering = grid.canonical_ordering();
    assert_eq!(
        ordering.len(),
        grid.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        grid.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        grid.cell_count(),
        "canonical_ordering has duplicates"
    );
}

/// Assert that `canonical_rank` inverts `canonical_ordering`.
pub fn assert_canonical_rank_consistent(grid: &dyn Grid) {
    for (i, coord) in grid.canonical_ordering().into_iter().enumerate() {
        assert_eq!(
            grid.canonical_rank(coord),
            Some(i),
            "canonical_rank({coord}) disagrees with canonical_ordering"
        );
    }
}

/// Run every compliance check on a grid.
pub fn run_full_compliance(grid: &dyn Grid) {
    assert_neighbours_symmetric(grid);
    assert_neighbours_well_formed(grid);
    assert_neighbours_deterministic(grid);
    assert_canonical_ordering_complete(grid);
    assert_canonical_rank_consistent(grid);
}
