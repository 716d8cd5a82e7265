//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that make three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// All eight lines in scan order: rows, then columns, then diagonals.
    pub const ALL: [WinningLine; 8] = [
        // Rows
        WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        WinningLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        WinningLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        WinningLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        WinningLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
        WinningLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
        WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The player holding all three squares on `board`, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.player()
        } else {
            None
        }
    }
}

/// Returns the first completed line on the board, in [`WinningLine::ALL`] order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    WinningLine::ALL
        .into_iter()
        .find(|line| line.owner(board).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|line| line.owner(board))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_code(mut code: usize) -> Board {
        let mut squares = [Square::Empty; 9];
        for sq in squares.iter_mut() {
            *sq = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    }

    fn has_three_in_a_row(board: &Board) -> bool {
        let at = |row: usize, col: usize| board.squares()[row * 3 + col];
        let same = |a: Square, b: Square, c: Square| a != Square::Empty && a == b && b == c;
        (0..3).any(|i| same(at(i, 0), at(i, 1), at(i, 2)) || same(at(0, i), at(1, i), at(2, i)))
            || same(at(0, 0), at(1, 1), at(2, 2))
            || same(at(0, 2), at(1, 1), at(2, 0))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(winning_line(&board).map(|l| l.indices()), Some([0, 1, 2]));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(winning_line(&board).map(|l| l.indices()), Some([0, 4, 8]));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_scan_order_prefers_rows_over_columns() {
        // X holds both the top row and the left column.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(winning_line(&board).map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_winning_line_matches_exhaustive_check() {
        for code in 0..3usize.pow(9) {
            let board = board_from_code(code);
            assert_eq!(
                winning_line(&board).is_some(),
                has_three_in_a_row(&board),
                "board {}",
                board.display()
            );
        }
    }
}
