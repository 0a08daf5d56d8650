//! # Connect Four Engine
//!
//! A two-player Connect Four engine: board state, terminal detection, and a
//! depth-limited full-width minimax player with a weighted positional
//! heuristic. The binary wraps it in a small terminal driver for human or
//! automated play on either side.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ai`] — Agent trait, minimax search, heuristic evaluator, random baseline
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
