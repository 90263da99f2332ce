//! Parallel strategy comparison.
//!
//! Every run owns its own [`Game`] and [`HeuristicAgent`]; runs share nothing
//! except, optionally, a [`SharedEvalCache`]. Game `i` of every strategy uses
//! seed `base_seed + i`, so strategies start from identical boards.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::agent::HeuristicAgent;
use crate::config::GameConfig;
use crate::engine::Tile;
use crate::error::EngineError;
use crate::game::Game;
use crate::heuristic::{SharedEvalCache, Strategy};

/// Knobs for a batch of games.
///
/// - `games`: games per strategy.
/// - `max_moves`: optional per-game move cap.
/// - `base_seed`: seed of game 0; game `i` uses `base_seed + i`.
/// - `shared_cache`: share one evaluation cache across all runs.
/// - `game`: board size and spawn distribution (its `seed` is ignored).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub games: usize,
    pub max_moves: Option<u64>,
    pub base_seed: u64,
    pub shared_cache: bool,
    pub game: GameConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { games: 100, max_moves: None, base_seed: 0, shared_cache: false, game: GameConfig::default() }
    }
}

/// Outcome of one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub strategy: Strategy,
    pub seed: u64,
    pub score: u64,
    pub highest_tile: Tile,
    pub moves: u64,
    pub terminal: bool,
    pub decision_time_s: f64,
}

/// Aggregate over every run of one strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategySummary {
    pub strategy: Strategy,
    pub games: usize,
    pub mean_score: f64,
    pub max_score: u64,
    pub best_tile: Tile,
    pub mean_moves: f64,
    /// Mean wall-clock time per decision, in microseconds.
    pub mean_decision_us: f64,
    /// Highest tile reached → number of games that ended with it.
    pub tile_reach: BTreeMap<Tile, usize>,
}

/// Play one seeded game with `strategy`.
pub fn run_single(
    strategy: Strategy,
    seed: u64,
    cfg: &BatchConfig,
    cache: Option<&SharedEvalCache>,
) -> Result<RunSummary, EngineError> {
    let mut game = Game::with_config(cfg.game.seeded(seed))?;
    let mut agent = match cache {
        Some(cache) => HeuristicAgent::with_shared_cache(strategy, cache.clone()),
        None => HeuristicAgent::new(strategy),
    };
    let metrics = agent.play(&mut game, cfg.max_moves);
    Ok(RunSummary {
        strategy,
        seed,
        score: metrics.score,
        highest_tile: metrics.highest_tile,
        moves: game.move_count(),
        terminal: game.is_terminal(),
        decision_time_s: metrics.execution_time.as_secs_f64(),
    })
}

/// Run `cfg.games` games for every strategy on the current rayon pool.
///
/// `on_done` is called from worker threads as each game finishes.
pub fn run_batch<F>(strategies: &[Strategy], cfg: &BatchConfig, on_done: F) -> Result<Vec<RunSummary>, EngineError>
where
    F: Fn(&RunSummary) + Sync,
{
    cfg.game.validate()?;
    let cache = cfg.shared_cache.then(SharedEvalCache::new);
    log::info!(
        "running {} games for {} strategies (shared cache: {})",
        cfg.games,
        strategies.len(),
        cfg.shared_cache
    );
    let jobs: Vec<(Strategy, u64)> = strategies
        .iter()
        .flat_map(|&s| (0..cfg.games as u64).map(move |i| (s, cfg.base_seed.wrapping_add(i))))
        .collect();
    let runs = jobs
        .into_par_iter()
        .map(|(strategy, seed)| -> Result<RunSummary, EngineError> {
            let run = run_single(strategy, seed, cfg, cache.as_ref())?;
            on_done(&run);
            Ok(run)
        })
        .collect::<Result<Vec<_>, EngineError>>()?;
    if let Some(cache) = &cache {
        log::info!("shared cache holds {} boards", cache.len());
    }
    Ok(runs)
}

/// Group runs by strategy, in [`Strategy`] order.
pub fn summarize(runs: &[RunSummary]) -> Vec<StrategySummary> {
    let mut grouped: BTreeMap<Strategy, Vec<&RunSummary>> = BTreeMap::new();
    for run in runs {
        grouped.entry(run.strategy).or_default().push(run);
    }
    grouped
        .into_iter()
        .map(|(strategy, runs)| {
            let games = runs.len();
            let n = games as f64;
            let total_moves: u64 = runs.iter().map(|r| r.moves).sum();
            let total_time: f64 = runs.iter().map(|r| r.decision_time_s).sum();
            let mut tile_reach = BTreeMap::new();
            for r in &runs {
                *tile_reach.entry(r.highest_tile).or_insert(0) += 1;
            }
            StrategySummary {
                strategy,
                games,
                mean_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / n,
                max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
                best_tile: runs.iter().map(|r| r.highest_tile).max().unwrap_or(0),
                mean_moves: total_moves as f64 / n,
                mean_decision_us: if total_moves == 0 { 0.0 } else { total_time * 1e6 / total_moves as f64 },
                tile_reach,
            }
        })
        .collect()
}
