//! JSON save/load of a game session.
//!
//! A record holds exactly what is needed to resume play: board size, grid
//! values, score, move count and the terminal flag. The RNG state is not
//! saved; a restored session draws spawns from the seed in its `GameConfig`.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::engine::{Board, Tile};
use crate::error::EngineError;
use crate::game::Game;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub size: usize,
    pub grid: Vec<Vec<Tile>>,
    pub score: u64,
    pub moves: u64,
    pub terminal: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid board in record: {0}")]
    Board(#[from] EngineError),
    #[error("record says size {declared} but grid has {actual} rows")]
    SizeMismatch { declared: usize, actual: usize },
}

impl SessionRecord {
    pub fn from_game(game: &Game) -> Self {
        let board = game.board();
        Self {
            size: board.size(),
            grid: board.to_rows(),
            score: game.score(),
            moves: game.move_count(),
            terminal: game.is_terminal(),
        }
    }

    /// Rebuild a session. A record whose board is already locked comes back
    /// terminal even if the flag was cleared.
    pub fn into_game(self, config: GameConfig) -> Result<Game, RecordError> {
        if self.grid.len() != self.size {
            return Err(RecordError::SizeMismatch { declared: self.size, actual: self.grid.len() });
        }
        let board = Board::from_rows(&self.grid)?;
        Ok(Game::restore(board, self.score, self.moves, self.terminal, config)?)
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Game {
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord::from_game(self)
    }

    pub fn from_record(record: SessionRecord, config: GameConfig) -> Result<Self, RecordError> {
        record.into_game(config)
    }
}

pub fn save_to_path<P: AsRef<Path>>(path: P, record: &SessionRecord) -> Result<(), RecordError> {
    fs::write(path, record.to_json()?)?;
    Ok(())
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<SessionRecord, RecordError> {
    let text = fs::read_to_string(path)?;
    SessionRecord::from_json(&text)
}
