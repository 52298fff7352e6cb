//! # Connect Four Move Engine
//!
//! Computes the best next move for an automated Connect Four player.
//! Callers submit a board snapshot, the AI's color, and a difficulty;
//! the engine answers with the column to play.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, win detection
//! - [`engine`]: Heuristic evaluation, the three search strategies,
//!   and the difficulty resolver
//! - [`dispatch`]: Fixed worker pool executing search jobs in parallel
//! - [`api`]: Wire-format request/response types
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod api;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod game;
