//! Input-validation errors raised at the engine boundary.
//!
//! Nothing in the engine fails for any other reason: moves, spawns and
//! evaluations are total once their inputs are valid.

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid direction: {0:?} (expected up, right, down or left)")]
    InvalidDirection(String),
    #[error("invalid board size {0}: boards must be at least 1x1")]
    InvalidBoardSize(usize),
    #[error("board is not square: {rows} rows but row {row} has {len} cells")]
    NonSquare { rows: usize, row: usize, len: usize },
    #[error("a {size}x{size} board needs {} cells, got {len}", .size * .size)]
    CellCount { size: usize, len: usize },
    #[error("invalid tile {value} at cell {index}: tiles are 0 or a power of two >= 2")]
    InvalidTile { index: usize, value: u64 },
    #[error("spawn probability {0} is outside [0, 1]")]
    InvalidSpawnProbability(f64),
    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),
}
