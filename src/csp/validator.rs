#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Row/column/box consistency checks and the full-grid goal test.
//!
//! Empty cells are never compared against each other: a unit (row, column or
//! box) is consistent as long as no *value* appears in it twice. The goal
//! test [`is_complete_and_valid`] additionally requires every cell to be
//! filled. It deliberately re-scans the whole grid each time it is called —
//! at 81 cells the simplicity wins over an incremental formulation.

use crate::sudoku::grid::{BOX_SIZE, Cell, EMPTY, Grid, SIZE};
use bit_vec::BitVec;
use rustc_hash::FxHashSet;

/// Duplicate detection over one unit's values; `EMPTY` is skipped.
fn all_distinct<I: IntoIterator<Item = u8>>(values: I) -> bool {
    let mut seen = BitVec::from_elem(SIZE + 1, false);
    for value in values {
        if value == EMPTY {
            continue;
        }
        if seen.get(value as usize) == Some(true) {
            return false;
        }
        seen.set(value as usize, true);
    }
    true
}

/// Whether row `row` contains no duplicate value.
#[must_use]
pub fn check_row(grid: &Grid, row: usize) -> bool {
    all_distinct((0..SIZE).map(|col| grid.value(Cell::new(row, col))))
}

/// Whether column `col` contains no duplicate value.
#[must_use]
pub fn check_column(grid: &Grid, col: usize) -> bool {
    all_distinct((0..SIZE).map(|row| grid.value(Cell::new(row, col))))
}

/// Whether the 3x3 box with index `index` (`0..9`, row-major) contains no
/// duplicate value.
#[must_use]
pub fn check_box(grid: &Grid, index: usize) -> bool {
    let band = index / BOX_SIZE * BOX_SIZE;
    let stack = index % BOX_SIZE * BOX_SIZE;
    all_distinct(
        (band..band + BOX_SIZE).flat_map(|row| {
            (stack..stack + BOX_SIZE).map(move |col| grid.value(Cell::new(row, col)))
        }),
    )
}

/// Whether the row, column and box of `cell` are all free of duplicates.
///
/// This is the incremental legality check run right after tentatively
/// placing a value at `cell`.
#[must_use]
pub fn is_consistent_at(grid: &Grid, cell: Cell) -> bool {
    check_row(grid, cell.row) && check_column(grid, cell.col) && check_box(grid, cell.box_index())
}

/// The goal test: no cell is empty and every cell is consistent.
#[must_use]
pub fn is_complete_and_valid(grid: &Grid) -> bool {
    grid.is_full() && Cell::all().all(|cell| is_consistent_at(grid, cell))
}

/// Whether every cell in `givens` holds the same value in `candidate` as in
/// `original`.
///
/// The searches cannot structurally overwrite a given, but the check is kept
/// as a final gate before a solution is declared.
#[must_use]
pub fn matches_givens(candidate: &Grid, givens: &FxHashSet<Cell>, original: &Grid) -> bool {
    givens
        .iter()
        .all(|&cell| candidate.value(cell) == original.value(cell))
}
