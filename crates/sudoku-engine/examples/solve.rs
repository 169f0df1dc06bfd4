//! Basic example of using the solving engine.

use sudoku_engine::{Board, Solver};

fn main() {
    let puzzle_string =
        "081000670000007050003280000030000890708301260002800104010530040350000000890004000";
    let puzzle = Board::from_string(puzzle_string, false).expect("known-good puzzle string");

    println!("Puzzle:  {}", puzzle.to_board_string(false));

    // Solve logically first, falling back to brute force.
    let report = Solver::logical().solve(&puzzle);
    let report = if report.is_solved() {
        report
    } else {
        println!("Logic stalled after {} steps, guessing instead.", report.steps.len());
        Solver::brute_force().solve(&puzzle)
    };

    match report.error {
        None => println!("Solved:  {}", report.board.to_board_string(false)),
        Some(err) => println!("Failed:  {err}"),
    }

    println!("\nDeductions:");
    for (i, step) in report.steps.iter().enumerate() {
        println!("{:3}. [{}] {}", i + 1, step.technique, step.description);
    }

    // Or ask for a single hint instead.
    if let Ok((_, step)) = Solver::logical().take_a_step(&puzzle) {
        println!("\nFirst hint: [{}] {}", step.technique, step.description);
    }
}
