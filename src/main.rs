//! # `sudoku_csp`
//!
//! `sudoku_csp` is a command-line Sudoku solver built around one
//! constraint-satisfaction core and three interchangeable exhaustive search
//! strategies, so their behaviour can be compared on the same puzzle:
//!
//! 1. **Brute force**: enumeration over owned grid copies with no
//!    propagation between nodes — the baseline.
//! 2. **Backtracking**: depth-first search over domain-restricted candidate
//!    lists with an incremental consistency check.
//! 3. **MRV + forward checking**: backtracking that always assigns the cell
//!    with the fewest remaining candidates and rejects values whose
//!    propagation would empty any domain.
//!
//! Every solve reports the completed grid, the number of search-tree nodes
//! expanded, and the elapsed time; a fourth mode validates an
//! already-completed grid instead of solving.
//!
//! ## Usage
//!
//! ```sh
//! sudoku_csp <MODE> <PATH>
//! ```
//!
//! `MODE` is `1` (brute force), `2` (backtracking), `3` (MRV + forward
//! checking) or `4` (validate only); named aliases such as `mrv` are also
//! accepted. `PATH` is a `.csv` file with 9 rows of 9 comma-separated
//! fields, each a digit or `X` for an empty cell.
//!
//! ### Subcommands
//!
//! ```sh
//! # Solve every .csv puzzle under a directory
//! sudoku_csp dir puzzles/ --mode 3
//!
//! # Generate shell completion scripts
//! sudoku_csp completions zsh
//! ```
//!
//! Common flags: `-d/--debug`, `-v/--verify`, `-s/--stats`.
//!
//! This file contains the entry point; parsing and dispatch live in the
//! `command_line` module, the solving logic in the `sudoku_csp` library
//! crate.

mod command_line;

use command_line::cli;

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    if let Err(message) = cli::run() {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
