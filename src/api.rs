//! Wire-format request/response types exchanged with the HTTP collaborator.
//!
//! The request carries a 6x7 grid of `null | {"color": ...}` cells plus the
//! AI's color and difficulty; the response is `{"column": <int|null>}`.

use serde::{Deserialize, Serialize};

use crate::dispatch::Job;
use crate::engine::Difficulty;
use crate::error::RequestError;
use crate::game::{Board, Cell, Player, COLS, ROWS};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub board: Vec<Vec<Option<CellPayload>>>,
    #[serde(default)]
    pub ai_difficulty: String,
    pub ai_color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CellPayload {
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveResponse {
    pub column: Option<usize>,
}

impl MoveRequest {
    /// Decode the payload into a search job. The board is trusted to be
    /// gravity-consistent; an unrecognized difficulty recovers to the
    /// default instead of erroring.
    pub fn into_job(self) -> Result<Job, RequestError> {
        let color = Player::from_name(&self.ai_color)
            .ok_or_else(|| RequestError::UnknownColor(self.ai_color.clone()))?;
        let difficulty = Difficulty::from_name(&self.ai_difficulty);

        if self.board.len() != ROWS || self.board.iter().any(|row| row.len() != COLS) {
            return Err(RequestError::MalformedBoard);
        }

        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (r, row) in self.board.iter().enumerate() {
            for (c, slot) in row.iter().enumerate() {
                if let Some(payload) = slot {
                    cells[r][c] = Player::from_name(&payload.color)
                        .ok_or_else(|| RequestError::UnknownColor(payload.color.clone()))?
                        .to_cell();
                }
            }
        }

        Ok(Job {
            board: Board::from_cells(cells),
            color,
            difficulty,
        })
    }
}
