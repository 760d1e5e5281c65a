#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Plain backtracking over domain-restricted candidate lists.
//!
//! One [`DomainStore`] is built from the puzzle up front and shared across
//! the whole search; the assignment grid starts empty and the search
//! re-derives every cell, givens included (a given's domain is the singleton
//! of its value, so it can only ever be re-assigned correctly). Cells are
//! selected in row-major order, candidates tried in ascending order, and a
//! tentative placement survives only if the row, column and box it touches
//! stay free of duplicates.
//!
//! Peer domains are never shrunk here: pruning comes solely from the initial
//! domain restriction and the per-placement consistency check.

use crate::csp::domain::DomainStore;
use crate::csp::solver::{SearchStats, Solver};
use crate::csp::validator;
use crate::sudoku::grid::Grid;
use crate::sudoku::puzzle::Puzzle;

/// The backtracking strategy without propagation or ordering heuristics.
#[derive(Debug, Clone)]
pub struct Backtracking {
    puzzle: Puzzle,
    domains: DomainStore,
    stats: SearchStats,
}

impl Solver for Backtracking {
    fn new(puzzle: Puzzle) -> Self {
        let domains = DomainStore::new(puzzle.grid());
        Self {
            puzzle,
            domains,
            stats: SearchStats::default(),
        }
    }

    fn solve(&mut self) -> Option<Grid> {
        let mut assignment = Grid::empty();
        self.descend(&mut assignment)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl Backtracking {
    fn descend(&mut self, assignment: &mut Grid) -> Option<Grid> {
        self.stats.nodes += 1;

        if validator::is_complete_and_valid(assignment) && self.puzzle.matches_givens(assignment) {
            return Some(*assignment);
        }

        let cell = assignment.first_empty()?;

        let candidates = self.domains.snapshot(cell);
        for &value in &candidates {
            assignment.set(cell, value);
            if validator::is_consistent_at(assignment, cell) {
                if let Some(solved) = self.descend(assignment) {
                    return Some(solved);
                }
            }
            assignment.clear(cell);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::grid::{Cell, EXAMPLE_NINE};

    const SOLVED: &str = "\
534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solves_the_example_puzzle() {
        let mut solver = Backtracking::new(Puzzle::new(Grid::from(EXAMPLE_NINE)));
        let solved = solver.solve().expect("puzzle is solvable");

        assert_eq!(solved, Grid::from_line(SOLVED).unwrap());
        assert!(validator::is_complete_and_valid(&solved));
        assert!(solver.stats().nodes >= 82);
    }

    #[test]
    fn test_fills_the_single_missing_cell() {
        let mut grid = Grid::from_line(SOLVED).unwrap();
        grid.clear(Cell::new(0, 0));

        let mut solver = Backtracking::new(Puzzle::new(grid));
        let solved = solver.solve().expect("unique completion exists");

        assert_eq!(solved.value(Cell::new(0, 0)), 5);
        assert!(solver.stats().nodes >= 1);
    }

    #[test]
    fn test_reports_no_solution_for_duplicate_givens() {
        let mut grid = Grid::from_line(SOLVED).unwrap();
        grid.set(Cell::new(0, 2), 5);

        let mut solver = Backtracking::new(Puzzle::new(grid));
        assert_eq!(solver.solve(), None);
        assert!(solver.stats().nodes >= 1);
    }

    #[test]
    fn test_solution_preserves_givens() {
        let puzzle = Puzzle::new(Grid::from(EXAMPLE_NINE));
        let mut solver = Backtracking::new(puzzle.clone());
        let solved = solver.solve().expect("puzzle is solvable");

        assert!(puzzle.matches_givens(&solved));
    }
}
