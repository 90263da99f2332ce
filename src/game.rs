//! Stateful game session: the authoritative board plus score and move bookkeeping.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::engine::{Board, Move, Tile};
use crate::error::EngineError;

/// One 2048 game.
///
/// A session is Active until no move can change the board, then Terminal.
/// Terminal is absorbing: [`Game::apply_move`] becomes a no-op returning false.
///
/// ```
/// use sim_2048::config::GameConfig;
/// use sim_2048::engine::Move;
/// use sim_2048::game::Game;
///
/// let mut game = Game::with_config(GameConfig::default().seeded(42)).unwrap();
/// assert_eq!(game.board().count_empty(), 14);
/// let moved = Move::ALL.into_iter().any(|m| game.apply_move(m));
/// assert!(moved);
/// assert_eq!(game.move_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    score: u64,
    moves: u64,
    terminal: bool,
    config: GameConfig,
    rng: StdRng,
}

impl Game {
    /// A default 4x4 game seeded from entropy.
    pub fn new() -> Self {
        let config = GameConfig::default();
        let mut game = Self::blank(Board::empty(), config, StdRng::from_entropy());
        game.spawn_initial_tiles();
        game
    }

    /// A new game with two tiles spawned on an otherwise empty board.
    pub fn with_config(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let board = Board::new(config.size)?;
        let rng = rng_for(&config);
        let mut game = Self::blank(board, config, rng);
        game.spawn_initial_tiles();
        Ok(game)
    }

    /// A session around an existing board (score and move count start at 0).
    ///
    /// `config.size` is ignored in favour of the board's own size.
    pub fn from_board(board: Board, config: GameConfig) -> Result<Self, EngineError> {
        let config = GameConfig { size: board.size(), ..config };
        config.validate()?;
        let rng = rng_for(&config);
        let mut game = Self::blank(board, config, rng);
        game.terminal = game.board.is_game_over();
        Ok(game)
    }

    pub(crate) fn restore(
        board: Board,
        score: u64,
        moves: u64,
        terminal: bool,
        config: GameConfig,
    ) -> Result<Self, EngineError> {
        let mut game = Self::from_board(board, config)?;
        game.score = score;
        game.moves = moves;
        game.terminal |= terminal;
        Ok(game)
    }

    fn blank(board: Board, config: GameConfig, rng: StdRng) -> Self {
        Self { board, score: 0, moves: 0, terminal: false, config, rng }
    }

    fn spawn_initial_tiles(&mut self) {
        for _ in 0..2 {
            self.board.spawn_tile(&mut self.rng, &self.config.spawn);
        }
        self.terminal = self.board.is_game_over();
    }

    /// Apply a move: slide, score, spawn, then re-check for game over.
    ///
    /// Returns false (and changes nothing) if the game is over or the move
    /// would not change the board.
    pub fn apply_move(&mut self, direction: Move) -> bool {
        if self.terminal {
            return false;
        }
        let slide = self.board.slide(direction);
        if !slide.changed {
            return false;
        }
        self.board = slide.board;
        self.score = self.score.saturating_add(slide.score_delta);
        self.moves += 1;
        let spawned = self.board.spawn_tile(&mut self.rng, &self.config.spawn);
        log::trace!(
            "move {} {}: +{} points, spawned {:?}",
            self.moves,
            direction,
            slide.score_delta,
            spawned
        );
        if self.board.is_game_over() {
            self.terminal = true;
            log::debug!(
                "game over after {} moves: score {}, highest tile {}",
                self.moves,
                self.score,
                self.board.highest_tile()
            );
        }
        true
    }

    /// Start over on an empty board of the same size with two fresh tiles.
    ///
    /// The RNG stream continues; it is not re-seeded.
    pub fn reset(&mut self) {
        self.board = Board::zeroed(self.board.size());
        self.score = 0;
        self.moves = 0;
        self.terminal = false;
        self.spawn_initial_tiles();
    }

    /// Borrow the current board.
    #[inline]
    pub fn board(&self) -> &Board { &self.board }

    /// Independent copy of the current board for analysis.
    #[inline]
    pub fn board_snapshot(&self) -> Board { self.board.clone() }

    #[inline]
    pub fn score(&self) -> u64 { self.score }

    #[inline]
    pub fn move_count(&self) -> u64 { self.moves }

    #[inline]
    pub fn is_terminal(&self) -> bool { self.terminal }

    #[inline]
    pub fn highest_tile(&self) -> Tile { self.board.highest_tile() }

    #[inline]
    pub fn size(&self) -> usize { self.board.size() }

    #[inline]
    pub fn config(&self) -> &GameConfig { &self.config }
}

impl Default for Game {
    fn default() -> Self { Self::new() }
}

fn rng_for(config: &GameConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
