use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sim_2048::config::GameConfig;
use sim_2048::engine::{Board, Move};
use sim_2048::game::Game;

/// Positions from seeded random play on a 4x4 board, starting with an empty one.
///
/// Games restart whenever they lock up, so the corpus mixes sparse openings
/// with crowded late positions.
pub fn positions(seed: u64, count: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::with_config(GameConfig::default().seeded(seed)).unwrap();
    let mut boards = vec![Board::empty(), game.board_snapshot()];
    while boards.len() < count {
        if game.is_terminal() {
            game.reset();
        }
        if game.apply_move(Move::ALL[rng.gen_range(0..4)]) {
            boards.push(game.board_snapshot());
        }
    }
    boards
}
