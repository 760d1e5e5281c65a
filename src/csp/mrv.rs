#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Backtracking with MRV variable ordering and forward checking.
//!
//! Two refinements over the plain backtracking strategy, sharing its store
//! and its initially-empty assignment grid:
//!
//! 1. **Minimum remaining values**: instead of the first empty cell in
//!    row-major order, the search assigns the unassigned cell with the
//!    fewest candidates left, ties broken by first-found in row-major order.
//! 2. **Forward checking**: before recursing on a consistent candidate, the
//!    value is committed on a scratch copy of the store; if that leaves any
//!    cell without candidates the value is a dead end and is rejected
//!    without recursion. This lookahead is the one pruning mechanism plain
//!    backtracking lacks.
//!
//! Accepted values are committed on the real store so deeper selections see
//! the shrunken domains, and uncommitted with the pre-try snapshot when the
//! subtree fails.

use crate::csp::domain::DomainStore;
use crate::csp::solver::{SearchStats, Solver};
use crate::csp::validator;
use crate::sudoku::grid::{Cell, Grid};
use crate::sudoku::puzzle::Puzzle;

/// The MRV + forward-checking strategy.
#[derive(Debug, Clone)]
pub struct Mrv {
    puzzle: Puzzle,
    domains: DomainStore,
    stats: SearchStats,
}

impl Solver for Mrv {
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

impl Mrv {
    /// The unassigned cell with the fewest remaining candidates.
    ///
    /// The comparison is strictly `<`, so on ties the first cell found in
    /// row-major order wins.
    fn select(&self, assignment: &Grid) -> Option<Cell> {
        let mut best = None;
        let mut minimum = usize::MAX;

        for cell in assignment.empty_cells() {
            let size = self.domains.candidates(cell).len();
            if size < minimum {
                minimum = size;
                best = Some(cell);
            }
        }

        best
    }

    /// Commits `value` on a scratch copy of the store and reports whether
    /// every cell keeps at least one candidate.
    fn forward_check(&self, cell: Cell, value: u8) -> bool {
        let mut scratch = self.domains.clone();
        scratch.commit(cell, value);
        !scratch.has_empty_domain()
    }

    fn descend(&mut self, assignment: &mut Grid) -> Option<Grid> {
        self.stats.nodes += 1;

        if validator::is_complete_and_valid(assignment) && self.puzzle.matches_givens(assignment) {
            return Some(*assignment);
        }

        let cell = self.select(assignment)?;

        let snapshot = self.domains.snapshot(cell);
        for &value in &snapshot {
            assignment.set(cell, value);
            if validator::is_consistent_at(assignment, cell) && self.forward_check(cell, value) {
                self.domains.commit(cell, value);
                if let Some(solved) = self.descend(assignment) {
                    return Some(solved);
                }
                self.domains.uncommit(cell, snapshot.clone());
            }
            assignment.clear(cell);
        }

        None
    }
}
