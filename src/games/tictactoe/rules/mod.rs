//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). History and turn
//! order live elsewhere; these only look at the squares.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, check_winner, winning_line};
