//! Static position scoring used at search cutoff.
//!
//! Every term is derived as own-terms minus opponent-terms, which gives the
//! antisymmetry `evaluate(b, red) == -evaluate(b, yellow)` that the
//! negamax-family sign flip depends on.

use crate::game::{Board, Cell, Player, COLS, ROWS};

pub const CENTER_COL: usize = COLS / 2;

const CENTER_WEIGHT: i32 = 3;
const FOUR_WINDOW: i32 = 100;
const THREE_WINDOW: i32 = 5;
const TWO_WINDOW: i32 = 2;
const THREAT_WEIGHT: i32 = 1_000;
// An immediately playable three-in-a-row is a near-certain win; it has to
// outrank every line-score term in the sum.
const PLAYABLE_THREAT_BONUS: i32 = 9_000;

/// One direction per axis: vertical, horizontal, and both diagonals.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// Score `board` from `player`'s perspective.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let own = player.to_cell();
    let opp = player.other().to_cell();
    let mut score = 0;

    // Center column occupancy
    for row in 0..ROWS {
        let cell = board.get(row, CENTER_COL);
        if cell == own {
            score += CENTER_WEIGHT;
        } else if cell == opp {
            score -= CENTER_WEIGHT;
        }
    }

    // Every contiguous 4-cell window on each axis

    // Horizontal
    for row in 0..ROWS {
        for col in 0..COLS - 3 {
            score += score_window(
                board,
                [(row, col), (row, col + 1), (row, col + 2), (row, col + 3)],
                own,
                opp,
            );
        }
    }

    // Vertical
    for col in 0..COLS {
        for row in 0..ROWS - 3 {
            score += score_window(
                board,
                [(row, col), (row + 1, col), (row + 2, col), (row + 3, col)],
                own,
                opp,
            );
        }
    }

    // Diagonal (top-left to bottom-right)
    for row in 0..ROWS - 3 {
        for col in 0..COLS - 3 {
            score += score_window(
                board,
                [
                    (row, col),
                    (row + 1, col + 1),
                    (row + 2, col + 2),
                    (row + 3, col + 3),
                ],
                own,
                opp,
            );
        }
    }

    // Diagonal (bottom-left to top-right)
    for row in 3..ROWS {
        for col in 0..COLS - 3 {
            score += score_window(
                board,
                [
                    (row, col),
                    (row - 1, col + 1),
                    (row - 2, col + 2),
                    (row - 3, col + 3),
                ],
                own,
                opp,
            );
        }
    }

    // Open-ended run scoring
    score += open_runs(board, own) - open_runs(board, opp);

    score
}

/// Line and threat scores for one 4-cell window, own minus opponent.
fn score_window(board: &Board, coords: [(usize, usize); 4], own: Cell, opp: Cell) -> i32 {
    let mut own_count = 0;
    let mut opp_count = 0;
    let mut empty_count = 0;
    let mut empty_at = (0, 0);

    for &(row, col) in &coords {
        match board.get(row, col) {
            c if c == own => own_count += 1,
            c if c == opp => opp_count += 1,
            _ => {
                empty_count += 1;
                empty_at = (row, col);
            }
        }
    }

    let mut score = line_score(own_count, empty_count) - line_score(opp_count, empty_count);

    // Exactly-three-with-one-empty is a threat; the hole position is
    // unique, so playability is well defined.
    if own_count == 3 && empty_count == 1 {
        score += THREAT_WEIGHT;
        if is_playable(board, empty_at.0, empty_at.1) {
            score += PLAYABLE_THREAT_BONUS;
        }
    }
    if opp_count == 3 && empty_count == 1 {
        score -= THREAT_WEIGHT;
        if is_playable(board, empty_at.0, empty_at.1) {
            score -= PLAYABLE_THREAT_BONUS;
        }
    }

    score
}

fn line_score(count: usize, empty: usize) -> i32 {
    match (count, empty) {
        (4, _) => FOUR_WINDOW,
        (3, 1) => THREE_WINDOW,
        (2, 2) => TWO_WINDOW,
        _ => 0,
    }
}

/// A cell is immediately playable when it sits on the bottom row or
/// directly above an occupied cell.
fn is_playable(board: &Board, row: usize, col: usize) -> bool {
    row == ROWS - 1 || board.get(row + 1, col) != Cell::Empty
}

/// For each disc of `cell` and each axis, the length of the contiguous
/// same-color run leaving the disc, counted once when the run ends on an
/// empty cell. Rewards building toward open-ended lines.
fn open_runs(board: &Board, cell: Cell) -> i32 {
    let mut total = 0;

    for row in 0..ROWS {
        for col in 0..COLS {
            if board.get(row, col) != cell {
                continue;
            }

            for (dr, dc) in DIRECTIONS {
                let mut run = 1;
                let mut r = row as i32 + dr;
                let mut c = col as i32 + dc;

                while r >= 0
                    && r < ROWS as i32
                    && c >= 0
                    && c < COLS as i32
                    && board.get(r as usize, c as usize) == cell
                {
                    run += 1;
                    r += dr;
                    c += dc;
                }

                let open = r >= 0
                    && r < ROWS as i32
                    && c >= 0
                    && c < COLS as i32
                    && board.get(r as usize, c as usize) == Cell::Empty;
                if open {
                    total += run;
                }
            }
        }
    }

    total
}
