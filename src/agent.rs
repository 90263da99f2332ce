//! Single-ply heuristic move selection.
//!
//! For every legal direction the agent slides a copy of the board (no spawn),
//! scores the result with its [`Evaluator`], and picks the best. Ties go to
//! the earliest direction in [`Move::ALL`].

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::engine::{Board, Move, Tile};
use crate::game::Game;
use crate::heuristic::{Evaluator, SharedEvalCache, Strategy, Weights};

/// Per-agent counters, read at the end of a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Metrics {
    /// Number of move decisions requested.
    pub moves: u64,
    /// Wall-clock time spent deciding.
    pub execution_time: Duration,
    /// Session score recorded by [`HeuristicAgent::record_outcome`].
    pub score: u64,
    /// Highest tile recorded by [`HeuristicAgent::record_outcome`].
    pub highest_tile: Tile,
}

/// Heuristic score of one direction at the root.
///
/// `legal` is false when sliding in `dir` leaves the board unchanged, in
/// which case `score` is meaningless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchEval {
    pub dir: Move,
    pub score: f64,
    pub legal: bool,
}

/// Greedy one-move-lookahead agent.
pub struct HeuristicAgent {
    evaluator: Evaluator,
    strategy: Option<Strategy>,
    metrics: Metrics,
}

impl HeuristicAgent {
    /// Agent for a named preset with a private evaluation cache.
    pub fn new(strategy: Strategy) -> Self {
        let mut agent = Self::with_evaluator(Evaluator::new(strategy.weights()));
        agent.strategy = Some(strategy);
        agent
    }

    /// Agent for a named preset sharing `cache` with other agents.
    pub fn with_shared_cache(strategy: Strategy, cache: SharedEvalCache) -> Self {
        let mut agent = Self::with_evaluator(Evaluator::with_shared_cache(strategy.weights(), cache));
        agent.strategy = Some(strategy);
        agent
    }

    /// Agent for arbitrary weights.
    pub fn with_weights(weights: Weights) -> Self {
        Self::with_evaluator(Evaluator::new(weights))
    }

    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self { evaluator, strategy: None, metrics: Metrics::default() }
    }

    /// The preset this agent was built from, if any.
    #[inline]
    pub fn strategy(&self) -> Option<Strategy> { self.strategy }

    #[inline]
    pub fn evaluator(&self) -> &Evaluator { &self.evaluator }

    /// Pick a move for the session's current board without touching the session.
    ///
    /// Returns `None` when no direction changes the board.
    ///
    /// ```
    /// use sim_2048::agent::HeuristicAgent;
    /// use sim_2048::config::GameConfig;
    /// use sim_2048::game::Game;
    /// use sim_2048::heuristic::Strategy;
    ///
    /// let mut game = Game::with_config(GameConfig::default().seeded(7)).unwrap();
    /// let mut agent = HeuristicAgent::new(Strategy::Balanced);
    /// let dir = agent.select_move(&game).unwrap();
    /// assert!(game.apply_move(dir));
    /// assert_eq!(agent.metrics().moves, 1);
    /// ```
    pub fn select_move(&mut self, game: &Game) -> Option<Move> {
        self.best_move(game.board())
    }

    /// Pick a move for a raw board. Counts toward [`Metrics`] like `select_move`.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        let start = Instant::now();
        let mut best: Option<(Move, f64)> = None;
        for branch in self.branch_evals(board) {
            if !branch.legal {
                continue;
            }
            if best.map_or(true, |(_, score)| branch.score > score) {
                best = Some((branch.dir, branch.score));
            }
        }
        self.metrics.moves += 1;
        self.metrics.execution_time += start.elapsed();
        best.map(|(dir, _)| dir)
    }

    /// Score every direction, in [`Move::ALL`] order.
    pub fn branch_evals(&mut self, board: &Board) -> [BranchEval; 4] {
        Move::ALL.map(|dir| {
            let slide = board.slide(dir);
            if slide.changed {
                BranchEval { dir, score: self.evaluator.score(&slide.board), legal: true }
            } else {
                BranchEval { dir, score: 0.0, legal: false }
            }
        })
    }

    /// Copy the session's final score and highest tile into the metrics.
    pub fn record_outcome(&mut self, game: &Game) {
        self.metrics.score = game.score();
        self.metrics.highest_tile = game.highest_tile();
    }

    /// Play `game` until it ends, no move is available, or `max_moves` is reached.
    pub fn play(&mut self, game: &mut Game, max_moves: Option<u64>) -> Metrics {
        while !game.is_terminal() {
            if max_moves.is_some_and(|cap| game.move_count() >= cap) {
                break;
            }
            let Some(dir) = self.select_move(game) else { break };
            let applied = game.apply_move(dir);
            debug_assert!(applied, "agent chose an illegal move");
        }
        self.record_outcome(game);
        log::debug!(
            "{} finished: score {}, highest tile {}, {} moves",
            self.strategy.map_or("custom", Strategy::name),
            self.metrics.score,
            self.metrics.highest_tile,
            game.move_count()
        );
        self.metrics
    }

    #[inline]
    pub fn metrics(&self) -> Metrics { self.metrics }

    /// Reset accumulated metrics to zero.
    #[inline]
    pub fn reset_metrics(&mut self) { self.metrics = Metrics::default(); }
}
