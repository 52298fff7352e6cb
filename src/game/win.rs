//! Win and terminal detection: a four-direction run-length scan over every
//! occupied cell of the queried color.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

/// Walk directions as (row delta, col delta): vertical, horizontal, and
/// both diagonals. Scanning every cell means one direction per axis is
/// enough to find any run.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// True iff `player` has four same-colored cells in a row along any axis.
pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();

    for row in 0..ROWS {
        for col in 0..COLS {
            if board.get(row, col) != cell {
                continue;
            }

            for (dr, dc) in DIRECTIONS {
                let mut count = 1;
                let mut r = row as i32 + dr;
                let mut c = col as i32 + dc;

                while r >= 0
                    && r < ROWS as i32
                    && c >= 0
                    && c < COLS as i32
                    && board.get(r as usize, c as usize) == cell
                {
                    count += 1;
                    if count == 4 {
                        return true;
                    }
                    r += dr;
                    c += dc;
                }
            }
        }
    }
    false
}

/// True iff either player has connected four or the board is full (draw).
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Player::Red)
        || has_four_in_a_row(board, Player::Yellow)
        || board.valid_columns().is_empty()
}
