//! Terminal rendering of boards and step traces.

use std::io::{self, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use sudoku_engine::{Board, Coordinates, Step, EMPTY_CELL, SIZE};

/// Prints the board as a bordered grid.
///
/// Cells that were given in `original` render plain; values the solver
/// filled in render green. Empty cells render as dots.
pub fn print_board(out: &mut impl Write, board: &Board, original: &Board) -> io::Result<()> {
    for row in 0..SIZE {
        if row % 3 == 0 {
            execute!(out, Print("+-------+-------+-------+\n"))?;
        }

        for col in 0..SIZE {
            if col % 3 == 0 {
                execute!(out, Print("| "))?;
            }

            let coords = Coordinates { row, col };
            let value = board.cell_at(coords).value();

            if value == EMPTY_CELL {
                execute!(out, SetForegroundColor(Color::DarkGrey), Print(". "), ResetColor)?;
            } else if original.cell_at(coords).value() == value {
                execute!(out, Print(format!("{value} ")))?;
            } else {
                execute!(
                    out,
                    SetForegroundColor(Color::Green),
                    Print(format!("{value} ")),
                    ResetColor
                )?;
            }
        }

        execute!(out, Print("|\n"))?;
    }

    execute!(out, Print("+-------+-------+-------+\n"))?;
    Ok(())
}

/// Prints the deduction trace, one numbered line per step.
pub fn print_steps(out: &mut impl Write, steps: &[Step]) -> io::Result<()> {
    for (i, step) in steps.iter().enumerate() {
        execute!(
            out,
            SetForegroundColor(Color::Cyan),
            Print(format!("{:3}. {}", i + 1, step.technique)),
            ResetColor,
            Print(format!(": {}\n", step.description.replace('\n', "; "))),
        )?;
    }
    Ok(())
}
