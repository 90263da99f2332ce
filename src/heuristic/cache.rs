use std::collections::HashMap;
use std::sync::Arc;

use ahash::RandomState as AHasher;
use dashmap::DashMap;
use serde::Serialize;

use crate::engine::Board;

use super::{evaluate, Weights, WeightsKey};

/// Cross-run evaluation cache, safe to share between rayon workers.
///
/// Entries are keyed by weights as well as board, so agents with different
/// strategies can share one cache without collisions.
#[derive(Clone, Default)]
pub struct SharedEvalCache(Arc<DashMap<(WeightsKey, Board), f64, AHasher>>);

impl SharedEvalCache {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn clear(&self) { self.0.clear() }
}

enum Store {
    Disabled,
    Local(HashMap<Board, f64, AHasher>),
    Shared(SharedEvalCache),
}

/// Cache hit/miss counters for one [`Evaluator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Memoizing board evaluator bound to one set of weights.
///
/// ```
/// use sim_2048::engine::Board;
/// use sim_2048::heuristic::{Evaluator, Strategy};
/// let mut ev = Evaluator::new(Strategy::Balanced.weights());
/// let b = Board::from_rows(&[[2, 4], [0, 0]]).unwrap();
/// assert_eq!(ev.score(&b), ev.score(&b));
/// assert_eq!(ev.cache_stats().hits, 1);
/// ```
pub struct Evaluator {
    weights: Weights,
    key: WeightsKey,
    store: Store,
    stats: CacheStats,
}

impl Evaluator {
    /// Evaluator with a private, per-run cache.
    pub fn new(weights: Weights) -> Self {
        Self::with_store(weights, Store::Local(HashMap::with_hasher(AHasher::new())))
    }

    /// Evaluator that recomputes every score.
    pub fn uncached(weights: Weights) -> Self {
        Self::with_store(weights, Store::Disabled)
    }

    /// Evaluator backed by a cache shared with other evaluators.
    pub fn with_shared_cache(weights: Weights, cache: SharedEvalCache) -> Self {
        Self::with_store(weights, Store::Shared(cache))
    }

    fn with_store(weights: Weights, store: Store) -> Self {
        Self { weights, key: weights.key(), store, stats: CacheStats::default() }
    }

    #[inline]
    pub fn weights(&self) -> Weights { self.weights }

    /// Heuristic score of `board`, served from the cache when possible.
    pub fn score(&mut self, board: &Board) -> f64 {
        match &mut self.store {
            Store::Disabled => {
                self.stats.misses += 1;
                evaluate(board, &self.weights)
            }
            Store::Local(map) => {
                if let Some(&score) = map.get(board) {
                    self.stats.hits += 1;
                    return score;
                }
                self.stats.misses += 1;
                let score = evaluate(board, &self.weights);
                map.insert(board.clone(), score);
                score
            }
            Store::Shared(shared) => {
                let key = (self.key, board.clone());
                if let Some(score) = shared.0.get(&key) {
                    self.stats.hits += 1;
                    return *score;
                }
                self.stats.misses += 1;
                let score = evaluate(board, &self.weights);
                shared.0.insert(key, score);
                score
            }
        }
    }

    #[inline]
    pub fn cache_stats(&self) -> CacheStats { self.stats }

    /// Drop every locally cached score. Shared caches are left alone.
    pub fn clear_cache(&mut self) {
        if let Store::Local(map) = &mut self.store {
            map.clear();
        }
    }
}
