//! Core Connect Four game logic: board representation, player types, win
//! detection, and the game state machine.

mod board;
mod player;
pub mod rules;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use rules::WINDOW_LENGTH;
pub use state::{GameOutcome, GameState, MoveError};

/// Columns currently open for a move.
pub type LegalActions = Vec<usize>;
