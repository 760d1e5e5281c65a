#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for the comma-separated puzzle file format.
//!
//! A puzzle file holds 9 rows of 9 comma-separated fields; each field is a
//! digit `1..=9` or the letter `X` for an empty cell:
//!
//! ```text
//! X,6,X,2,X,4,X,5,X
//! 4,7,X,X,6,X,X,8,3
//! ...
//! ```
//!
//! The parser tolerates a UTF-8 byte order mark on the first line and
//! whitespace around fields, and skips blank lines. Wrong row or field
//! counts and unrecognised tokens are reported as `InvalidData` errors so
//! the core only ever sees well-formed 9x9 grids.

use crate::sudoku::grid::{Cell, Grid, SIZE};
use crate::sudoku::puzzle::Puzzle;
use itertools::Itertools;
use std::io::{self, BufRead};
use std::path::Path;

fn invalid<T>(message: String) -> io::Result<T> {
    Err(io::Error::new(io::ErrorKind::InvalidData, message))
}

/// Parses puzzle data from a `BufRead` source into a [`Puzzle`].
///
/// # Errors
///
/// Returns any I/O error from the reader, and `InvalidData` if the input
/// does not describe exactly 9 rows of 9 valid fields.
pub fn parse_sudoku<R: BufRead>(reader: R) -> io::Result<Puzzle> {
    let mut grid = Grid::empty();
    let mut rows = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_start_matches('\u{feff}').trim();
        if line.is_empty() {
            continue;
        }

        if rows == SIZE {
            return invalid(format!("expected {SIZE} rows, found more"));
        }

        let fields = line.split(',').map(str::trim).collect_vec();
        if fields.len() != SIZE {
            return invalid(format!(
                "row {}: expected {SIZE} fields, got {}",
                rows + 1,
                fields.len()
            ));
        }

        for (col, field) in fields.into_iter().enumerate() {
            let cell = Cell::new(rows, col);
            match field {
                "X" => {}
                _ => match field.parse::<u8>() {
                    Ok(value @ 1..=9) => grid.set(cell, value),
                    _ => {
                        return invalid(format!("row {}: invalid field '{field}'", rows + 1));
                    }
                },
            }
        }

        rows += 1;
    }

    if rows != SIZE {
        return invalid(format!("expected {SIZE} rows, got {rows}"));
    }

    Ok(Puzzle::new(grid))
}

/// Parses a puzzle file specified by its path.
///
/// This is a convenience function that opens the file, wraps it in a
/// `BufReader`, and then calls [`parse_sudoku`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if its content
/// is malformed (see [`parse_sudoku`]).
pub fn parse_sudoku_file<P: AsRef<Path>>(path: P) -> io::Result<Puzzle> {
    let file = std::fs::File::open(path)?;
    let reader = io::BufReader::new(file);
    parse_sudoku(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXAMPLE: &str = "\
X,6,X,2,X,4,X,5,X
4,7,X,X,6,X,X,8,3
X,X,5,X,7,X,1,X,X
9,X,X,1,X,3,X,X,2
X,1,2,X,X,X,3,4,X
6,X,X,7,X,9,X,X,8
X,X,6,X,8,X,7,X,X
1,4,X,X,9,X,X,2,5
X,8,X,3,X,5,X,9,X
";

    #[test]
    fn test_parse_simple_puzzle() {
        let puzzle = parse_sudoku(Cursor::new(EXAMPLE)).unwrap();

        assert_eq!(puzzle.givens().len(), 36);
        assert_eq!(puzzle.grid().value(Cell::new(0, 1)), 6);
        assert_eq!(puzzle.grid().value(Cell::new(8, 5)), 5);
        assert!(puzzle.grid().is_empty_at(Cell::new(0, 0)));
    }

    #[test]
    fn test_parse_tolerates_bom_and_blank_lines() {
        let input = format!("\u{feff}{}\n\n", EXAMPLE.replace(",X,", ", X ,"));
        let puzzle = parse_sudoku(Cursor::new(input)).unwrap();

        assert_eq!(puzzle.givens().len(), 36);
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let input = "1,2,3\n";
        let err = parse_sudoku(Cursor::new(input)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_parse_rejects_missing_rows() {
        let input = "X,6,X,2,X,4,X,5,X\n";
        let err = parse_sudoku(Cursor::new(input)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_parse_rejects_extra_rows() {
        let input = format!("{EXAMPLE}X,6,X,2,X,4,X,5,X\n");
        let err = parse_sudoku(Cursor::new(input)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let input = EXAMPLE.replacen("X", "ten", 1);
        let err = parse_sudoku(Cursor::new(input)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_parse_rejects_zero() {
        let input = EXAMPLE.replacen("X", "0", 1);
        let err = parse_sudoku(Cursor::new(input)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
