//! Core Connect Four game logic: board representation, players, win
//! detection and the session that ties them to the move log.

mod board;
mod player;
mod session;
pub mod win;

pub use board::{Board, PlacementError, COLS, ROWS};
pub use player::Player;
pub use session::{GameOutcome, GameSession, LoadReport, MoveError, SessionConfig};
pub use win::{is_winning_move, CONNECT};
