#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The strategy-agnostic solver interface.

use crate::sudoku::grid::Grid;
use crate::sudoku::puzzle::Puzzle;

/// Counters collected while a strategy runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Number of search-tree nodes expanded, i.e. the number of times a
    /// partial or complete assignment state was examined.
    pub nodes: usize,
}

/// An exhaustive search strategy over one puzzle.
///
/// `solve` returns the completed grid, or `None` once every candidate at
/// every level has been exhausted — a terminal outcome for that input, not
/// an error. Node counts are available through `stats` in either case.
pub trait Solver {
    /// Creates a solver for `puzzle`.
    fn new(puzzle: Puzzle) -> Self;

    /// Runs the search to success or exhaustion.
    fn solve(&mut self) -> Option<Grid>;

    /// The counters collected so far.
    fn stats(&self) -> SearchStats;
}
