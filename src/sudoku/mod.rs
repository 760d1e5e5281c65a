#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The puzzle domain: boards, coordinates, givens, and the file reader.

/// The `grid` module defines the 9x9 board, cell coordinates and peer groups.
pub mod grid;

/// The `puzzle` module couples a board with its immutable set of givens.
pub mod puzzle;

/// The `reader` module parses comma-separated puzzle files.
pub mod reader;
