//! Derived game status for a single board.

use super::rules::{WinningLine, is_full, winning_line};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a board, as shown above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Moves remain; `next` plays.
    #[display("Next player: {next}")]
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// Someone completed a line.
    #[display("Winner: {winner}")]
    Won {
        /// Owner of the line.
        winner: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board full, no line.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Evaluates `board`, with `next` used only when the game is still open.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, next: Player) -> Self {
        if let Some(line) = winning_line(board)
            && let Some(winner) = line.owner(board)
        {
            return GameStatus::Won { winner, line };
        }
        if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// True once the board is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// The winning line, if the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Square};

    #[test]
    fn test_status_text() {
        let board = Board::new();
        assert_eq!(
            GameStatus::evaluate(&board, Player::O).to_string(),
            "Next player: O"
        );

        let mut won = Board::new();
        for pos in [Position::TopRight, Position::Center, Position::BottomLeft] {
            won.set(pos, Square::Occupied(Player::O));
        }
        let status = GameStatus::evaluate(&won, Player::X);
        assert_eq!(status.to_string(), "Winner: O");
        assert_eq!(status.winning_line().map(|l| l.indices()), Some([2, 4, 6]));
        assert!(status.is_over());
    }

    #[test]
    fn test_draw_text() {
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let board = Board::from_squares([x, o, x, o, o, x, o, x, o]);
        let status = GameStatus::evaluate(&board, Player::X);
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(status.to_string(), "Draw");
    }
}
