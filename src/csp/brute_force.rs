#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Exhaustive enumeration without propagation — the baseline strategy.
//!
//! The search descends on an owned copy of the grid (grids are `Copy`, so a
//! branch simply takes the board by value) and rebuilds a fresh
//! [`DomainStore`] from that copy at every node. No incremental state is
//! carried between siblings: the rebuild is equivalent to checking each
//! candidate against the current row/column/box occupancy, and is all the
//! pruning this strategy gets. Validity is only established at full grids,
//! which makes this deliberately the least efficient of the three
//! strategies — it exists as the point of comparison.

use crate::csp::domain::DomainStore;
use crate::csp::solver::{SearchStats, Solver};
use crate::csp::validator;
use crate::sudoku::grid::Grid;
use crate::sudoku::puzzle::Puzzle;

/// The brute-force enumeration strategy.
#[derive(Debug, Clone)]
pub struct BruteForce {
    puzzle: Puzzle,
    stats: SearchStats,
}

impl Solver for BruteForce {
    fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            stats: SearchStats::default(),
        }
    }

    fn solve(&mut self) -> Option<Grid> {
        let grid = *self.puzzle.grid();
        self.descend(grid)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl BruteForce {
    fn descend(&mut self, grid: Grid) -> Option<Grid> {
        self.stats.nodes += 1;

        let Some(cell) = grid.first_empty() else {
            let solved = validator::is_complete_and_valid(&grid)
                && self.puzzle.matches_givens(&grid);
            return solved.then_some(grid);
        };

        let domains = DomainStore::new(&grid);
        for &value in domains.candidates(cell) {
            let mut branch = grid;
            branch.set(cell, value);
            if let Some(solved) = self.descend(branch) {
                return Some(solved);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::grid::{Cell, EXAMPLE_NINE};

    #[test]
    fn test_fills_the_single_missing_cell() {
        let mut grid = Grid::from_line(
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
        )
        .unwrap();
        grid.clear(Cell::new(4, 4));

        let mut solver = BruteForce::new(Puzzle::new(grid));
        let solved = solver.solve().expect("unique completion exists");

        assert_eq!(solved.value(Cell::new(4, 4)), 5);
        assert!(validator::is_complete_and_valid(&solved));
        assert!(solver.stats().nodes >= 1);
    }

    #[test]
    fn test_solves_the_example_puzzle() {
        let mut solver = BruteForce::new(Puzzle::new(Grid::from(EXAMPLE_NINE)));
        let solved = solver.solve().expect("puzzle is solvable");

        assert!(validator::is_complete_and_valid(&solved));
        assert!(solver.stats().nodes > 51);
    }

    #[test]
    fn test_reports_no_solution() {
        // A solved grid re-opened at two cells, with a duplicate given planted
        // in row 0: every completion stays invalid.
        let mut grid = Grid::from_line(
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
        )
        .unwrap();
        // Duplicate a given inside row 0.
        grid.set(Cell::new(0, 2), 5);
        grid.clear(Cell::new(8, 8));
        grid.clear(Cell::new(7, 7));

        let mut solver = BruteForce::new(Puzzle::new(grid));
        assert_eq!(solver.solve(), None);
        assert!(solver.stats().nodes >= 1);
    }
}
