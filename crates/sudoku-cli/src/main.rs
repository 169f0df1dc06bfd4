//! Solve Sudoku puzzles from the command line.
//!
//! ```text
//! sudoku-cli [OPTIONS] [PUZZLE]
//!
//! PUZZLE     81 digits, row by row, 0 for an empty cell (stdin if omitted)
//!
//! OPTIONS
//!   -b, --brute-force   solve by backtracking instead of logic
//!   -s, --steps         print the deduction trace
//!   -h, --help          print this help
//! ```

mod render;

use std::io::{self, Read, Write};
use std::process::ExitCode;

use sudoku_engine::{Board, Solver};

struct Args {
    brute_force: bool,
    steps: bool,
    puzzle: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        brute_force: false,
        steps: false,
        puzzle: None,
    };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-b" | "--brute-force" => args.brute_force = true,
            "-s" | "--steps" => args.steps = true,
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            _ if arg.starts_with('-') => return Err(format!("unknown option: {arg}")),
            _ if args.puzzle.is_some() => return Err("more than one puzzle given".to_string()),
            _ => args.puzzle = Some(arg),
        }
    }

    Ok(args)
}

fn print_usage() {
    println!("usage: sudoku-cli [-b|--brute-force] [-s|--steps] [PUZZLE]");
    println!();
    println!("PUZZLE is 81 digits, row by row, 0 for an empty cell.");
    println!("When omitted, the puzzle is read from standard input.");
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {msg}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let puzzle_string = match args.puzzle {
        Some(s) => s,
        None => {
            let mut buf = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut buf) {
                eprintln!("error: reading stdin: {err}");
                return ExitCode::FAILURE;
            }
            buf.trim().to_string()
        }
    };

    let puzzle = match Board::from_string(&puzzle_string, false) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let solver = if args.brute_force {
        Solver::brute_force()
    } else {
        Solver::logical()
    };
    let report = solver.solve(&puzzle);

    let mut stdout = io::stdout();
    let result = (|| -> io::Result<()> {
        render::print_board(&mut stdout, &report.board, &puzzle)?;

        if args.steps {
            writeln!(stdout)?;
            render::print_steps(&mut stdout, &report.steps)?;
        }

        writeln!(stdout)?;
        match report.error {
            None => writeln!(stdout, "Solved in {} steps.", report.steps.len()),
            Some(err) => writeln!(stdout, "Gave up after {} steps: {err}", report.steps.len()),
        }
    })();

    if let Err(err) = result {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    if report.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
