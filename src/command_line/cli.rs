#![allow(clippy::cast_precision_loss)]

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;
use sudoku_csp::csp::backtracking::Backtracking;
use sudoku_csp::csp::brute_force::BruteForce;
use sudoku_csp::csp::mrv::Mrv;
use sudoku_csp::csp::solver::{SearchStats, Solver};
use sudoku_csp::csp::validator;
use sudoku_csp::sudoku::grid::Grid;
use sudoku_csp::sudoku::puzzle::Puzzle;
use sudoku_csp::sudoku::reader::parse_sudoku_file;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "sudoku_csp",
    version,
    about = "A Sudoku solver comparing exhaustive CSP search strategies"
)]
pub(crate) struct Cli {
    /// The search mode: 1 = brute force, 2 = backtracking, 3 = MRV with
    /// forward checking, 4 = validate a solved puzzle.
    #[arg(value_enum)]
    pub mode: Option<Mode>,

    /// Path to the puzzle file: 9 rows of 9 comma-separated fields, each a
    /// digit or `X` for an empty cell. Must end in `.csv`.
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `dir`, `completions`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands for the solver.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve every .csv puzzle file under a directory.
    Dir {
        /// The directory to scan recursively for puzzle files.
        path: PathBuf,

        /// The search mode applied to every puzzle found.
        #[arg(short, long, value_enum, default_value_t = Mode::Mrv)]
        mode: Mode,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// The four modes of operation, numbered as on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Brute-force enumeration, no propagation.
    #[value(name = "1", alias = "brute-force")]
    BruteForce,

    /// Backtracking over domain-restricted candidate lists.
    #[value(name = "2", alias = "backtracking")]
    Backtracking,

    /// Backtracking with MRV ordering and forward checking.
    #[value(name = "3", alias = "mrv")]
    Mrv,

    /// Validate an already-completed puzzle without solving.
    #[value(name = "4", alias = "validate")]
    Validate,
}

impl Mode {
    /// Human-readable algorithm name for the report header.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::BruteForce => "Brute Force Search",
            Self::Backtracking => "CSP Back-Tracking Search",
            Self::Mrv => "CSP with Forward Checking and MRV Heuristics",
            Self::Validate => "TEST",
        }
    }
}

impl Display for Mode {
    /// Renders the command-line name of the mode (used by clap defaults).
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BruteForce => "1",
            Self::Backtracking => "2",
            Self::Mrv => "3",
            Self::Validate => "4",
        };
        write!(f, "{name}")
    }
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose logging during the solving process.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Enable verification of a found solution against the validator and the
    /// original givens.
    #[arg(short, long, default_value_t = true)]
    pub(crate) verify: bool,

    /// Enable printing of performance and problem statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,
}

/// Parses the command line and dispatches to the requested operation.
///
/// # Errors
///
/// Returns a message for the binary to print before exiting nonzero:
/// missing or illegal arguments, unreadable or malformed puzzle files, or a
/// failed mode-4 validation.
pub(crate) fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Dir { path, mode, common }) => solve_dir(&path, mode, &common),
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
        None => {
            let (Some(mode), Some(path)) = (cli.mode, cli.path) else {
                return Err("ERROR: Not enough/too many/illegal input arguments.".to_string());
            };
            solve_file(&path, mode, &cli.common)
        }
    }
}

/// Solves (or validates) a single puzzle file and reports the results.
///
/// # Errors
///
/// If the path does not name an existing `.csv` file, the file is malformed,
/// or a mode-4 validation fails.
pub(crate) fn solve_file(path: &Path, mode: Mode, common: &CommonOptions) -> Result<(), String> {
    if path.extension().is_none_or(|extension| extension != "csv") {
        return Err(format!(
            "Expected a .csv puzzle file: {}",
            path.display()
        ));
    }

    if !path.is_file() {
        return Err(format!("Provided path is not a file: {}", path.display()));
    }

    let time = std::time::Instant::now();
    let puzzle =
        parse_sudoku_file(path).map_err(|e| format!("Error parsing Sudoku file: {e}"))?;
    let parse_time = time.elapsed();

    println!("Solving: {}", path.display());
    println!("Algorithm: {}", mode.label());
    println!("Input Puzzle:\n{puzzle}");

    if mode == Mode::Validate {
        return if validator::is_complete_and_valid(puzzle.grid()) {
            println!("This is a valid, solved, Sudoku puzzle.");
            Ok(())
        } else {
            Err("ERROR: This is NOT a solved Sudoku puzzle.".to_string())
        };
    }

    let (solution, elapsed, search_stats) = match mode {
        Mode::BruteForce => solve_with::<BruteForce>(puzzle.clone(), common.debug),
        Mode::Backtracking => solve_with::<Backtracking>(puzzle.clone(), common.debug),
        Mode::Mrv => solve_with::<Mrv>(puzzle.clone(), common.debug),
        Mode::Validate => unreachable!("handled above"),
    };

    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();

    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.verify {
        verify_solution(&puzzle, solution.as_ref());
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            &puzzle,
            &search_stats,
            allocated_mib,
            resident_mib,
            solution.as_ref(),
        );
    }

    if let Some(solved) = solution {
        println!("Solved puzzle:\n{solved}");
    } else {
        println!("Sudoku has no solution");
    }

    Ok(())
}

/// Solves every `.csv` puzzle under a directory.
///
/// This function iterates over all `.csv` files below the directory, parses
/// each one, solves it with `mode`, and reports the results.
///
/// # Errors
///
/// If the provided path is not a directory, or any puzzle file fails to
/// parse or validate.
pub(crate) fn solve_dir(path: &Path, mode: Mode, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!(
            "Provided path is not a directory: {}",
            path.display()
        ));
    }

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path().to_path_buf();

        if !file_path.is_file() {
            continue;
        }

        if file_path.extension().is_none_or(|extension| extension != "csv") {
            eprintln!("Skipping non-CSV file: {}", file_path.display());
            continue;
        }

        solve_file(&file_path, mode, common)?;
    }

    Ok(())
}

/// Checks a found solution against the validator and the puzzle's givens.
///
/// Prints whether the verification was successful. If verification fails, it
/// panics. If `solution` is `None` (no solution exists), it reports that
/// there is nothing to verify.
pub(crate) fn verify_solution(puzzle: &Puzzle, solution: Option<&Grid>) {
    if let Some(solved) = solution {
        let ok = validator::is_complete_and_valid(solved) && puzzle.matches_givens(solved);
        println!("Verified: {ok:?}");
        assert!(ok, "Solution failed verification!");
    } else {
        println!("No solution to verify");
    }
}

/// Runs one strategy over the puzzle.
///
/// # Returns
/// A tuple containing:
/// * `Option<Grid>`: The solved grid if one exists, otherwise `None`.
/// * `Duration`: The time taken by the search.
/// * `SearchStats`: Counters collected during the search.
fn solve_with<S: Solver>(puzzle: Puzzle, debug: bool) -> (Option<Grid>, Duration, SearchStats) {
    epoch::advance().unwrap();

    let time = std::time::Instant::now();

    let mut solver = S::new(puzzle);
    let solution = solver.solve();

    let elapsed = time.elapsed();

    if debug {
        println!("Solution: {solution:?}");
        println!("Time: {elapsed:?}");
    }

    (solution, elapsed, solver.stats())
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    puzzle: &Puzzle,
    s: &SearchStats,
    allocated: f64,
    resident: f64,
    solution: Option<&Grid>,
) {
    let elapsed_secs = elapsed.as_secs_f64();
    let givens = puzzle.givens().len();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Givens", givens);
    stat_line("Empty cells", 81 - givens);

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Nodes", s.nodes, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("Search time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");

    if solution.is_some() {
        println!("\nSOLVED");
    } else {
        println!("\nNO SOLUTION");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::BruteForce.label(), "Brute Force Search");
        assert_eq!(Mode::Backtracking.label(), "CSP Back-Tracking Search");
        assert_eq!(
            Mode::Mrv.label(),
            "CSP with Forward Checking and MRV Heuristics"
        );
        assert_eq!(Mode::Validate.label(), "TEST");
    }

    #[test]
    fn test_mode_display_matches_cli_names() {
        for (mode, name) in [
            (Mode::BruteForce, "1"),
            (Mode::Backtracking, "2"),
            (Mode::Mrv, "3"),
            (Mode::Validate, "4"),
        ] {
            assert_eq!(mode.to_string(), name);
        }
    }

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }
}
