#![deny(missing_docs)]
//! This crate solves 9x9 Sudoku puzzles with three exhaustive-search strategies and compares them.


/// The `csp` module implements the constraint-satisfaction core: candidate domains,
/// consistency validation, and the exhaustive search strategies.
pub mod csp;

/// The `sudoku` module implements the puzzle domain: the 9x9 grid, the givens of a
/// puzzle, and the puzzle file reader.
pub mod sudoku;
