//! Board representation and the deterministic move mechanics of 2048.
//!
//! - [`Board`]: an N×N grid of tile values (0 = empty).
//! - [`Board::slide`]: the single pure transition used for real moves,
//!   legality probing and speculative evaluation alike.
//! - [`Board::spawn_tile`] / [`Board::with_random_tile`]: random 2/4 insertion.
//! - [`Board::is_game_over`]: terminal detection.
//!
//! Free functions mirror the most common `Board` methods for call sites that
//! read better in function form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

mod board;
mod slide;
mod spawn;

pub use board::{Board, Tile, DEFAULT_SIZE, MAX_TILE};
pub use slide::Slide;
pub use spawn::random_tile;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Up,
    Right,
    Down,
    Left,
}

impl Move {
    /// Every direction, in the order agents enumerate (and break ties) by.
    pub const ALL: [Move; 4] = [Move::Up, Move::Right, Move::Down, Move::Left];

    /// Position of this direction within [`Move::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Move::Up => 0,
            Move::Right => 1,
            Move::Down => 2,
            Move::Left => 3,
        }
    }

    #[inline]
    pub(crate) fn is_vertical(self) -> bool {
        matches!(self, Move::Up | Move::Down)
    }

    /// Right and Down compact toward the high-index end of each line.
    #[inline]
    pub(crate) fn toward_end(self) -> bool {
        matches!(self, Move::Right | Move::Down)
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Right => "right",
            Move::Down => "down",
            Move::Left => "left",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Move::Up),
            "right" | "r" => Ok(Move::Right),
            "down" | "d" => Ok(Move::Down),
            "left" | "l" => Ok(Move::Left),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = EngineError;

    /// Decode a direction from its [`Move::index`].
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| EngineError::InvalidDirection(value.to_string()))
    }
}

impl From<Move> for u8 {
    fn from(m: Move) -> Self {
        m.index() as u8
    }
}

/// Slide/merge tiles in the given direction. No randomness.
pub fn slide(board: &Board, direction: Move) -> Slide {
    board.slide(direction)
}

/// Slide/merge tiles and return only the resulting board.
pub fn shift(board: &Board, direction: Move) -> Board {
    board.shift(direction)
}

/// True if no direction can change the board.
pub fn is_game_over(board: &Board) -> bool {
    board.is_game_over()
}

/// Count the number of empty cells.
pub fn count_empty(board: &Board) -> usize {
    board.count_empty()
}

/// Highest tile value on the board (0 for an empty board).
pub fn highest_tile(board: &Board) -> Tile {
    board.highest_tile()
}
