//! # Connect Four
//!
//! A Connect Four engine: chip placement on a 7x6 board, win and draw
//! detection, a computer opponent, and save files holding the move log.
//! Rendering and input belong to the caller, which drives a
//! [`game::GameSession`].
//!
//! ## Modules
//!
//! - [`game`] — Board, players, win detection, session state machine
//! - [`ai`] — Opponent strategies (random and one-ply heuristic)
//! - [`history`] — Move log, text encoding, timestamped save files
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
