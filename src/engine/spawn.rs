use rand::Rng;

use crate::config::SpawnConfig;

use super::{Board, Tile};

/// Draw a new tile: 2 with `cfg.two_probability`, otherwise 4.
#[inline]
pub fn random_tile<R: Rng + ?Sized>(rng: &mut R, cfg: &SpawnConfig) -> Tile {
    if rng.gen::<f64>() < cfg.two_probability { 2 } else { 4 }
}

impl Board {
    /// Place a random tile in a uniformly chosen empty cell.
    ///
    /// Returns the row-major index and value placed, or `None` (leaving the
    /// board untouched) when there is no empty cell.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R, cfg: &SpawnConfig) -> Option<(usize, Tile)> {
        let empty = self.count_empty();
        if empty == 0 {
            return None;
        }
        let nth = rng.gen_range(0..empty);
        let idx = self
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .nth(nth)
            .map(|(idx, _)| idx)?;
        let tile = random_tile(rng, cfg);
        self.set(idx, tile);
        Some((idx, tile))
    }

    /// Copy of this board with one random tile inserted, using the provided RNG.
    ///
    /// ```
    /// use sim_2048::config::SpawnConfig;
    /// use sim_2048::engine::Board;
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let cfg = SpawnConfig::default();
    /// let b = Board::empty().with_random_tile(&mut rng, &cfg).with_random_tile(&mut rng, &cfg);
    /// assert_eq!(b.count_empty(), 14);
    /// ```
    pub fn with_random_tile<R: Rng + ?Sized>(&self, rng: &mut R, cfg: &SpawnConfig) -> Board {
        let mut next = self.clone();
        next.spawn_tile(rng, cfg);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn it_fills_board() {
        let mut rng = StdRng::seed_from_u64(5);
        let cfg = SpawnConfig::default();
        let mut b = Board::empty();
        for _ in 0..16 {
            assert!(b.spawn_tile(&mut rng, &cfg).is_some());
        }
        assert_eq!(b.count_empty(), 0);
        assert!(b.cells().iter().all(|&v| v == 2 || v == 4));
    }

    #[test]
    fn full_board_is_untouched() {
        let mut rng = StdRng::seed_from_u64(9);
        let full = Board::from_rows(&[[2, 4], [8, 16]]).unwrap();
        let mut b = full.clone();
        assert_eq!(b.spawn_tile(&mut rng, &SpawnConfig::default()), None);
        assert_eq!(b, full);
        assert_eq!(full.with_random_tile(&mut rng, &SpawnConfig::default()), full);
    }

    #[test]
    fn spawns_only_into_empty_cells() {
        let mut rng = StdRng::seed_from_u64(11);
        let b = Board::from_rows(&[[2, 4, 8], [16, 0, 32], [64, 128, 256]]).unwrap();
        for _ in 0..20 {
            let mut next = b.clone();
            let (idx, tile) = next.spawn_tile(&mut rng, &SpawnConfig::default()).unwrap();
            assert_eq!(idx, 4);
            assert!(tile == 2 || tile == 4);
        }
    }

    #[test]
    fn probability_overrides_are_honoured() {
        let mut rng = StdRng::seed_from_u64(3);
        let always_two = SpawnConfig { two_probability: 1.0 };
        let always_four = SpawnConfig { two_probability: 0.0 };
        for _ in 0..100 {
            assert_eq!(random_tile(&mut rng, &always_two), 2);
            assert_eq!(random_tile(&mut rng, &always_four), 4);
        }
    }

    #[test]
    fn default_distribution_is_mostly_twos() {
        let mut rng = StdRng::seed_from_u64(2048);
        let cfg = SpawnConfig::default();
        let fours = (0..10_000).filter(|_| random_tile(&mut rng, &cfg) == 4).count();
        assert!((700..1300).contains(&fours), "fours = {fours}");
    }
}
