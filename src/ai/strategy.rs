use std::fmt;
use std::str::FromStr;

use crate::game::{Board, Player};

use super::heuristic::HeuristicStrategy;
use super::random::RandomStrategy;

/// Universal interface for opponent policies.
pub trait Strategy {
    /// Pick a column for `me` to play. `me.other()` is the opponent.
    ///
    /// Implementations must not change `board`; they only read it.
    fn select_column(&mut self, board: &Board, me: Player) -> usize;

    /// Return the strategy's display name.
    fn name(&self) -> &str;
}

/// How hard the computer opponent plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal column.
    Easy,
    /// Win if possible, otherwise block, otherwise prefer central columns.
    #[default]
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected 'easy' or 'hard')")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Build the strategy that plays at `difficulty`.
pub fn strategy_for(difficulty: Difficulty) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomStrategy::new()),
        Difficulty::Hard => Box::new(HeuristicStrategy),
    }
}
