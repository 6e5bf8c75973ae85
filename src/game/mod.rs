//! Gravity-board rules engine: token type, per-column grid store, win
//! evaluation around the last move, and per-move outcome classification.

mod board;
mod token;

pub use board::{Board, GameOutcome, DEFAULT_NUM_COLUMNS, DEFAULT_NUM_ROWS, DEFAULT_WIN_LENGTH};
pub use token::Token;
