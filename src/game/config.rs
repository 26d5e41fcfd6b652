//! Game configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Probability the computer plays a uniformly random move instead of
    /// searching (default: 0.3).
    pub random_move_chance: f64,

    /// Delay between an accepted human move and the computer's reply
    /// (default: 500 ms).
    pub think_delay: Duration,

    /// Random seed for the opponent RNG.
    /// Same seed and same inputs produce identical games.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            random_move_chance: 0.3,
            think_delay: Duration::from_millis(500),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom random-move probability.
    pub fn with_random_move_chance(mut self, chance: f64) -> Self {
        self.random_move_chance = chance;
        self
    }

    /// Create a new config with custom think delay.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
