//! Error types shared across the engine.

use thiserror::Error;

/// Everything that can go wrong inside the engine, from malformed input to
/// a solver running out of deductions.
///
/// `CannotProgress` and `CannotSolve` are expected outcomes of individual
/// techniques and are consumed by the solver loop; the remaining variants
/// surface to callers unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SudokuError {
    /// A cell value outside `0..=9`.
    #[error("invalid cell value")]
    InvalidValue,

    /// A coordinate, cell index, or box index outside the board.
    #[error("index out of bounds")]
    IndexOutOfBounds,

    /// A constrained write was rejected because the target cell's
    /// candidate set does not include the value.
    #[error("value is not a candidate for this cell")]
    ValueNotACandidate,

    /// A board string of the wrong length, or one ending in a dangling
    /// candidate prefix.
    #[error("invalid string representation")]
    InvalidStringRep,

    /// A character that is neither a digit nor the candidate prefix.
    #[error("invalid character in string representation")]
    InvalidRuneInStringRep,

    /// A technique found no applicable deduction on this board.
    #[error("cannot progress in this step")]
    CannotProgress,

    /// Backtracking exhausted every branch, or was handed a board that is
    /// already invalid.
    #[error("cannot solve in this step")]
    CannotSolve,

    /// The solver's verdict when a full pass over its techniques makes no
    /// progress and the board is not solved.
    #[error("puzzle is unsolvable with the configured techniques")]
    Unsolvable,

    /// A step tried to write a value the board rejected; the step was
    /// built against a different board.
    #[error("step cannot be applied to this board")]
    UnapplicableStep,
}
