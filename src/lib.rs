//! # Connect Four
//!
//! A two-player, gravity-based token-drop game for the terminal. The rules
//! engine tracks token placement under gravity, enforces move legality, and
//! classifies every move as ongoing, a draw, or a win along one of four
//! axes. A Ratatui front end drives the engine interactively.
//!
//! ## Modules
//!
//! - [`game`] — Core rules engine: board, tokens, win evaluation, outcomes
//! - [`ui`] — Terminal UI: interactive two-player game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
