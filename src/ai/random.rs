use crate::game::{Board, Player};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;

use super::strategy::Strategy;

/// A strategy that selects uniformly at random from the non-full columns.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic strategy for reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_column(&mut self, board: &Board, me: Player) -> usize {
        let columns = board.legal_columns();
        if columns.is_empty() {
            return 0;
        }
        let col = columns[self.rng.random_range(0..columns.len())];
        debug!(player = %me, column = col, "random column");
        col
    }

    fn name(&self) -> &str {
        "Random"
    }
}
