//! Board snapshots recorded in history, and their move-list labels.

use super::Position;
use super::rules::winning_line;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// One history entry: the board after a move and the square that move filled.
///
/// The initial entry has no filled square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    board: Board,
    filled: Option<Position>,
}

impl Move {
    /// The empty starting snapshot.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            filled: None,
        }
    }

    /// Snapshot of `board` after `filled` was just marked.
    pub fn new(board: Board, filled: Position) -> Self {
        Self {
            board,
            filled: Some(filled),
        }
    }

    /// Board as it stood after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Square filled by this move; `None` for the start.
    pub fn filled(&self) -> Option<Position> {
        self.filled
    }

    /// Player who made this move.
    pub fn player(&self) -> Option<Player> {
        self.filled.and_then(|pos| self.board.get(pos).player())
    }

    /// Move-list label for this snapshot at history index `number`.
    pub fn label(&self, number: usize) -> MoveLabel {
        match (number, self.filled, self.player()) {
            (0, _, _) | (_, None, _) | (_, _, None) => MoveLabel::Start,
            (number, Some(position), Some(player)) => {
                if winning_line(&self.board).is_some() {
                    MoveLabel::FinalMove {
                        number,
                        player,
                        position,
                    }
                } else {
                    MoveLabel::Move {
                        number,
                        player,
                        position,
                    }
                }
            }
        }
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::start()
    }
}

/// Move-list entry text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveLabel {
    /// History index 0.
    Start,
    /// A move that did not finish the game with a line.
    Move {
        /// History index.
        number: usize,
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// A move whose board has a completed line.
    FinalMove {
        /// History index.
        number: usize,
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveLabel::Start => write!(f, "Start"),
            MoveLabel::Move {
                number,
                player,
                position,
            } => {
                let (row, col) = position.coordinates();
                write!(f, "Move {}: {} at ({}, {})", number, player, row, col)
            }
            MoveLabel::FinalMove {
                number,
                player,
                position,
            } => {
                let (row, col) = position.coordinates();
                write!(f, "Final move {}: {} at ({}, {})", number, player, row, col)
            }
        }
    }
}
