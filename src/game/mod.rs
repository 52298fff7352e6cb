//! Core Connect Four game logic: board representation, player types, and
//! win/terminal detection.

mod board;
mod player;
mod win;

pub use board::{Board, Cell, MoveError, COLS, ROWS};
pub use player::Player;
pub use win::{has_four_in_a_row, is_terminal};
