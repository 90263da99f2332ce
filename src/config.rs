//! Configuration values consumed by the engine and game sessions.

use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_SIZE;
use crate::error::EngineError;

/// Probability that a spawned tile is a 2 (otherwise it is a 4).
pub const DEFAULT_TWO_PROBABILITY: f64 = 0.9;

/// Tile spawn distribution. Defaults to the standard 90% 2 / 10% 4.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Probability in `[0, 1]` that a new tile is a 2.
    pub two_probability: f64,
}

impl SpawnConfig {
    pub fn new(two_probability: f64) -> Result<Self, EngineError> {
        let cfg = Self { two_probability };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if (0.0..=1.0).contains(&self.two_probability) {
            Ok(())
        } else {
            Err(EngineError::InvalidSpawnProbability(self.two_probability))
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self { two_probability: DEFAULT_TWO_PROBABILITY }
    }
}

/// Knobs for a single game session.
///
/// - `size`: board edge length (default 4).
/// - `spawn`: tile spawn distribution.
/// - `seed`: RNG seed; `None` seeds from entropy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: usize,
    pub spawn: SpawnConfig,
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.size == 0 {
            return Err(EngineError::InvalidBoardSize(self.size));
        }
        self.spawn.validate()
    }

    /// Same configuration with a fixed seed.
    pub fn seeded(&self, seed: u64) -> Self {
        Self { seed: Some(seed), ..self.clone() }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE, spawn: SpawnConfig::default(), seed: None }
    }
}
