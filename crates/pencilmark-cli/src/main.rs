//! Command-line front end for the pencilmark solver.
//!
//! Reads a puzzle from an argument, a file, or standard input, runs the
//! propagation engine, and prints the resulting grid. The exit code encodes
//! the outcome: 0 for solved, 1 for stuck, 2 for a contradiction or invalid
//! input.

use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use derive_more::{Display, Error, From};
use log::info;
use pencilmark_core::{Givens, InputError};
use pencilmark_solver::{Outcome, Solver};

/// Solves 9x9 Sudoku puzzles by pure constraint propagation.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle text: 81 cells with digits for givens and `.`, `_`, or `0`
    /// for blanks; whitespace between cells is ignored.
    puzzle: Option<String>,

    /// Read the puzzle from a file instead of the command line.
    #[arg(short, long, conflicts_with = "puzzle")]
    file: Option<PathBuf>,
}

#[derive(Debug, Display, Error, From)]
enum CliError {
    #[display("failed to read puzzle: {_0}")]
    Io(io::Error),
    #[display("invalid puzzle: {_0}")]
    Input(InputError),
}

/// Parses puzzle text, accepting both the whitespace-insensitive format and
/// the row-major format where a space marks a blank cell.
fn parse_puzzle(text: &str) -> Result<Givens, InputError> {
    match text.parse() {
        Ok(givens) => Ok(givens),
        Err(err) => {
            let line: String = text.lines().collect();
            Givens::from_row_major(&line).map_err(|_| err)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, CliError> {
    let text = match (&args.puzzle, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => io::read_to_string(io::stdin())?,
    };
    let givens = parse_puzzle(&text)?;
    info!("solving a puzzle with {} givens", givens.len());

    let solver = Solver::with_all_strategies();
    let (grid, outcome) = solver.solve(&givens);
    println!("{grid}");

    match outcome {
        Outcome::Solved => Ok(ExitCode::SUCCESS),
        Outcome::Partial(_) => {
            eprintln!("{outcome}");
            Ok(ExitCode::from(1))
        }
        Outcome::Contradiction(_) => {
            eprintln!("{outcome}");
            Ok(ExitCode::from(2))
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use pencilmark_core::{Digit, Position};

    use super::*;

    #[test]
    fn parses_the_dotted_format() {
        let text = "5".to_owned() + &".".repeat(80);
        let givens = parse_puzzle(&text).unwrap();
        assert_eq!(givens.get(Position::new(0, 0)), Some(Digit::D5));
    }

    #[test]
    fn falls_back_to_space_blank_rows() {
        let mut rows = vec![" 5   9   ".to_owned()];
        rows.extend(std::iter::repeat_n("         ".to_owned(), 8));
        let text = rows.join("\n");

        let givens = parse_puzzle(&text).unwrap();
        assert_eq!(givens.len(), 2);
        assert_eq!(givens.get(Position::new(1, 0)), Some(Digit::D5));
        assert_eq!(givens.get(Position::new(5, 0)), Some(Digit::D9));
    }

    #[test]
    fn reports_the_original_error_when_both_formats_fail() {
        let err = parse_puzzle("not a puzzle").unwrap_err();
        assert_eq!(
            err,
            InputError::UnexpectedCharacter { character: 'n' }
        );
    }

    #[test]
    fn cli_arguments_parse() {
        use clap::CommandFactory as _;
        Args::command().debug_assert();
    }
}
