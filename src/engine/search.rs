//! The three interchangeable tree-search strategies: minimax with
//! alpha-beta pruning, negamax, and negascout (principal variation search).
//!
//! All three recurse depth-limited over `valid_columns` in ascending order,
//! mutating one board via apply/undo around each call. Ties between equal
//! best scores go to the first-encountered (lowest) column.

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::SearchSpec;
use super::eval::evaluate;
use crate::game::{has_four_in_a_row, Board, Player};

/// Sentinel for a forced win/loss in the minimax formulation. Kept well
/// inside `i32` so window negation cannot overflow.
pub const INFINITY: i32 = 1_000_000_000;

/// Per-ply magnitude of the negamax win sentinel.
pub const WIN_SCORE: i32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Minimax,
    Negamax,
    Negascout,
}

/// Outcome of one search call: the chosen column (absent at leaves and on
/// already-terminal roots) and the score under the caller's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

/// Run the requested strategy from the root.
pub fn search(board: &mut Board, color: Player, spec: SearchSpec, rng: &mut StdRng) -> SearchResult {
    match spec.algorithm {
        Algorithm::Minimax => minimax(board, spec.depth, -INFINITY, INFINITY, true, color, rng),
        Algorithm::Negamax => negamax(board, spec.depth, -INFINITY, INFINITY, color),
        Algorithm::Negascout => negascout(board, spec.depth, -INFINITY, INFINITY, color),
    }
}

/// Minimax with alpha-beta pruning, maximizing-player formulation: every
/// leaf is scored from `ai`'s perspective regardless of the side to move.
///
/// When no child improves on the starting sentinel (every move is a proven
/// loss), the returned column is a uniformly random valid one, drawn from
/// the injected `rng` so outcomes stay reproducible under a fixed seed.
pub fn minimax(
    board: &mut Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ai: Player,
    rng: &mut StdRng,
) -> SearchResult {
    let opponent = ai.other();
    let valid = board.valid_columns();
    let ai_won = has_four_in_a_row(board, ai);
    let opponent_won = has_four_in_a_row(board, opponent);
    let terminal = ai_won || opponent_won || valid.is_empty();

    if depth == 0 || terminal {
        let score = if ai_won {
            INFINITY
        } else if opponent_won {
            -INFINITY
        } else if terminal {
            0
        } else {
            evaluate(board, ai)
        };
        return SearchResult { column: None, score };
    }

    let mut best_column = valid[rng.random_range(0..valid.len())];

    if maximizing {
        let mut value = -INFINITY;
        for &col in &valid {
            board
                .apply_move(col, ai.to_cell())
                .expect("column came from valid_columns");
            let score = minimax(board, depth - 1, alpha, beta, false, ai, rng).score;
            board.undo_move(col);

            if score > value {
                value = score;
                best_column = col;
            }
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        SearchResult {
            column: Some(best_column),
            score: value,
        }
    } else {
        let mut value = INFINITY;
        for &col in &valid {
            board
                .apply_move(col, opponent.to_cell())
                .expect("column came from valid_columns");
            let score = minimax(board, depth - 1, alpha, beta, true, ai, rng).score;
            board.undo_move(col);

            if score < value {
                value = score;
                best_column = col;
            }
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        SearchResult {
            column: Some(best_column),
            score: value,
        }
    }
}

/// Win sentinel scaled by remaining depth so that, compared at the same
/// node, a faster win outranks a slower one. The +1 keeps a win found at
/// the horizon (`depth == 0`) above every heuristic score.
fn win_sentinel(depth: u32) -> i32 {
    WIN_SCORE * (depth as i32 + 1)
}

/// Negamax with alpha-beta. Relies on the evaluator's antisymmetry: each
/// level negates the child score instead of branching on max/min.
pub fn negamax(board: &mut Board, depth: u32, mut alpha: i32, beta: i32, color: Player) -> SearchResult {
    if has_four_in_a_row(board, color) {
        return SearchResult {
            column: None,
            score: win_sentinel(depth),
        };
    }
    if has_four_in_a_row(board, color.other()) {
        return SearchResult {
            column: None,
            score: -win_sentinel(depth),
        };
    }

    let valid = board.valid_columns();
    if valid.is_empty() {
        return SearchResult { column: None, score: 0 };
    }
    if depth == 0 {
        return SearchResult {
            column: None,
            score: evaluate(board, color),
        };
    }

    let mut best_score = -INFINITY;
    let mut best_column = valid[0];

    for &col in &valid {
        board
            .apply_move(col, color.to_cell())
            .expect("column came from valid_columns");
        let score = -negamax(board, depth - 1, -beta, -alpha, color.other()).score;
        board.undo_move(col);

        if score > best_score {
            best_score = score;
            best_column = col;
        }
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    SearchResult {
        column: Some(best_column),
        score: best_score,
    }
}

/// Negascout / principal variation search. The first child gets a full
/// window; later children get a null-window probe first and are
/// re-searched only when the probe lands strictly inside (alpha, beta).
/// Returns the same root score as [`negamax`], visiting fewer nodes when
/// move ordering is good.
pub fn negascout(board: &mut Board, depth: u32, mut alpha: i32, beta: i32, color: Player) -> SearchResult {
    if has_four_in_a_row(board, color) {
        return SearchResult {
            column: None,
            score: win_sentinel(depth),
        };
    }
    if has_four_in_a_row(board, color.other()) {
        return SearchResult {
            column: None,
            score: -win_sentinel(depth),
        };
    }

    let valid = board.valid_columns();
    if valid.is_empty() {
        return SearchResult { column: None, score: 0 };
    }
    if depth == 0 {
        return SearchResult {
            column: None,
            score: evaluate(board, color),
        };
    }

    let mut best_score = -INFINITY;
    let mut best_column = valid[0];

    for (i, &col) in valid.iter().enumerate() {
        board
            .apply_move(col, color.to_cell())
            .expect("column came from valid_columns");

        let score = if i == 0 {
            -negascout(board, depth - 1, -beta, -alpha, color.other()).score
        } else {
            let probe = -negascout(board, depth - 1, -alpha - 1, -alpha, color.other()).score;
            if alpha < probe && probe < beta {
                // Inconclusive probe: re-search with the full window,
                // lower-bounded by what the probe proved.
                -negascout(board, depth - 1, -beta, -probe, color.other()).score
            } else {
                probe
            }
        };

        board.undo_move(col);

        if score > best_score {
            best_score = score;
            best_column = col;
        }
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    SearchResult {
        column: Some(best_column),
        score: best_score,
    }
}
