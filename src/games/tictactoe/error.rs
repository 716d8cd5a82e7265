//! Rejections raised by the strict engine operations.

use super::Position;

/// Why an engine operation was refused.
///
/// The plain engine operations swallow these and leave state untouched;
/// the `try_*` variants return them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is not on the board (must be 0-8)", _0)]
    InvalidCell(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board at the cursor already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// A history index past the end.
    #[display("Move {} is out of range (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time.
        len: usize,
    },

    /// Undo at the start of history.
    #[display("Nothing to undo")]
    NothingToUndo,

    /// Redo at the end of history.
    #[display("Nothing to redo")]
    NothingToRedo,
}

impl std::error::Error for MoveError {}
