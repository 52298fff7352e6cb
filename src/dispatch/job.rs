use crate::engine::Difficulty;
use crate::game::{Board, Player};

/// Unit of work sent to a worker. Immutable once dispatched; the worker
/// owns the board copy it mutates during search.
#[derive(Debug, Clone)]
pub struct Job {
    pub board: Board,
    pub color: Player,
    pub difficulty: Difficulty,
}

/// Outcome of a search job. `column` is `None` only when the submitted
/// board had no valid column left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobResult {
    pub column: Option<usize>,
}
