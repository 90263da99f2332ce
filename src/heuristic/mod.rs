//! Heuristic board evaluation.
//!
//! A board's score is a weighted sum of three features:
//!
//! ```text
//! score = empty_cells × empty + corner_tile × corner + inversions × mono
//! ```
//!
//! - `empty_cells`: number of empty cells.
//! - `corner_tile`: value of the top-left tile.
//! - `inversions`: direction changes along every row and column
//!   (see [`features::monotonicity`]); higher means less monotonic, so
//!   presets give it a negative weight.
//!
//! Weights are plain values handed to an [`Evaluator`] at construction.
//! [`Strategy`] names the built-in presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::Board;
use crate::error::EngineError;

mod cache;
pub mod features;

pub use cache::{CacheStats, Evaluator, SharedEvalCache};

/// Feature weights for [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Multiplies the top-left tile value.
    pub corner: f64,
    /// Multiplies the empty-cell count.
    pub empty: f64,
    /// Multiplies the row/column inversion count.
    pub mono: f64,
}

impl Weights {
    pub const fn new(corner: f64, empty: f64, mono: f64) -> Self {
        Self { corner, empty, mono }
    }

    /// Bit-exact identity of these weights, usable as a hash key.
    #[inline]
    pub(crate) fn key(&self) -> WeightsKey {
        WeightsKey([self.corner.to_bits(), self.empty.to_bits(), self.mono.to_bits()])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct WeightsKey([u64; 3]);

/// Named weight presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Keep the biggest tile anchored in the corner.
    CornerFocused,
    /// Keep the board open so merges stay available.
    MergeFocused,
    Balanced,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::CornerFocused, Strategy::MergeFocused, Strategy::Balanced];

    pub const fn weights(self) -> Weights {
        match self {
            Strategy::CornerFocused => Weights::new(1.0, 2.0, -1.0),
            Strategy::MergeFocused => Weights::new(0.1, 10.0, -1.0),
            Strategy::Balanced => Weights::new(0.5, 5.0, -3.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::CornerFocused => "corner-focused",
            Strategy::MergeFocused => "merge-focused",
            Strategy::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| EngineError::UnknownStrategy(s.to_string()))
    }
}

/// Score a board under `weights`. Pure: equal inputs give bit-identical output.
///
/// ```
/// use sim_2048::engine::Board;
/// use sim_2048::heuristic::{evaluate, Weights};
/// let b = Board::from_rows(&[[4, 2], [0, 0]]).unwrap();
/// assert_eq!(evaluate(&b, &Weights::new(1.0, 10.0, -1.0)), 24.0);
/// ```
pub fn evaluate(board: &Board, weights: &Weights) -> f64 {
    let empty = features::count_empty(board) as f64;
    let corner = features::corner_value(board) as f64;
    let mono = features::monotonicity(board) as f64;
    empty * weights.empty + corner * weights.corner + mono * weights.mono
}
