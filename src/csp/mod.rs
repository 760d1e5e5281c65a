#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The constraint-satisfaction core: domains, validation, and the three
//! exhaustive search strategies built on them.

/// The `backtracking` module implements plain backtracking search.
pub mod backtracking;

/// The `brute_force` module implements the baseline enumeration strategy.
pub mod brute_force;

/// The `domain` module tracks per-cell candidate sets with reversible
/// propagation.
pub mod domain;

/// The `mrv` module implements backtracking with MRV ordering and forward
/// checking.
pub mod mrv;

/// The `solver` module defines the strategy-agnostic solver interface.
pub mod solver;

/// The `validator` module checks row/column/box consistency.
pub mod validator;

#[cfg(test)]
mod tests {
    use crate::csp::backtracking::Backtracking;
    use crate::csp::brute_force::BruteForce;
    use crate::csp::mrv::Mrv;
    use crate::csp::solver::Solver;
    use crate::csp::validator;
    use crate::sudoku::grid::{Cell, EXAMPLE_NINE, Grid};
    use crate::sudoku::puzzle::Puzzle;

    /// Every strategy must agree on a unique-solution puzzle and preserve
    /// its givens.
    #[test]
    fn test_strategies_agree_on_the_example_puzzle() {
        let puzzle = Puzzle::new(Grid::from(EXAMPLE_NINE));

        let mut brute = BruteForce::new(puzzle.clone());
        let mut plain = Backtracking::new(puzzle.clone());
        let mut mrv = Mrv::new(puzzle.clone());

        let solved = brute.solve().expect("puzzle is solvable");
        assert_eq!(plain.solve(), Some(solved));
        assert_eq!(mrv.solve(), Some(solved));

        assert!(validator::is_complete_and_valid(&solved));
        assert!(puzzle.matches_givens(&solved));
    }

    /// Every strategy must report the unsolvable outcome for a puzzle with a
    /// duplicate given in one row.
    #[test]
    fn test_strategies_agree_on_an_unsolvable_puzzle() {
        let mut grid = Grid::from_line(
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
        )
        .unwrap();
        grid.set(Cell::new(0, 2), 5);
        grid.clear(Cell::new(4, 4));
        let puzzle = Puzzle::new(grid);

        assert_eq!(BruteForce::new(puzzle.clone()).solve(), None);
        assert_eq!(Backtracking::new(puzzle.clone()).solve(), None);
        assert_eq!(Mrv::new(puzzle).solve(), None);
    }
}
