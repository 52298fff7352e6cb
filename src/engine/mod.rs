//! Move selection: static evaluation, the three search strategies, and the
//! difficulty-to-search binding.

pub mod difficulty;
pub mod eval;
pub mod search;

pub use difficulty::{Difficulty, SearchSpec};
pub use search::{Algorithm, SearchResult, INFINITY, WIN_SCORE};

use rand::rngs::StdRng;

use crate::config::SearchConfig;
use crate::game::{Board, Player};

/// Pick the column to play for `color` at the given difficulty.
///
/// Returns `None` only when the board has no valid column left. The board
/// is mutated in place during search and restored before returning.
pub fn select_move(
    board: &mut Board,
    color: Player,
    difficulty: Difficulty,
    config: &SearchConfig,
    rng: &mut StdRng,
) -> Option<usize> {
    let valid = board.valid_columns();
    if valid.is_empty() {
        return None;
    }

    let spec = config.spec_for(difficulty);
    let result = search::search(board, color, spec, rng);

    // A root that is already terminal carries no column (caller error per
    // the interface contract); answer with a legal column regardless.
    result.column.or_else(|| valid.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use rand::SeedableRng;

    fn drawn_board() -> Board {
        // Rows paired by color group, columns alternating: no axis holds
        // four in a row anywhere.
        let r = Cell::Red;
        let y = Cell::Yellow;
        Board::from_cells([
            [r, y, r, y, r, y, r],
            [r, y, r, y, r, y, r],
            [y, r, y, r, y, r, y],
            [y, r, y, r, y, r, y],
            [r, y, r, y, r, y, r],
            [r, y, r, y, r, y, r],
        ])
    }

    #[test]
    fn test_full_board_yields_no_column() {
        let board = drawn_board();
        assert!(crate::game::is_terminal(&board));

        let config = SearchConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        for difficulty in [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ] {
            let mut board = board;
            assert_eq!(
                select_move(&mut board, Player::Red, difficulty, &config, &mut rng),
                None
            );
        }
    }

    #[test]
    fn test_empty_board_expert_plays_center() {
        let config = SearchConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut board = Board::new();

        let column = select_move(&mut board, Player::Red, Difficulty::Expert, &config, &mut rng);
        assert_eq!(column, Some(3), "center column dominates on an empty board");
        assert_eq!(board, Board::new(), "search must restore the board");
    }

    #[test]
    fn test_easy_returns_some_valid_column() {
        let config = SearchConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new();

        let column = select_move(&mut board, Player::Yellow, Difficulty::Easy, &config, &mut rng)
            .expect("empty board has moves");
        assert!(column < crate::game::COLS);
    }
}
