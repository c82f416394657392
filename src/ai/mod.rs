//! Computer opponents.

mod heuristic;
mod random;
mod strategy;

pub use heuristic::{HeuristicStrategy, PREFERRED_COLUMNS};
pub use random::RandomStrategy;
pub use strategy::{strategy_for, Difficulty, ParseDifficultyError, Strategy};
