//! sim-2048: a 2048 engine + heuristic move-selection agents
//!
//! This crate provides:
//! - An N×N `Board` with a single pure transition (`slide`), random tile
//!   spawning and game-over detection (`engine` module)
//! - A stateful `Game` session that tracks score, moves and the terminal state
//! - A weighted heuristic evaluator with memoization (`heuristic` module)
//! - A greedy one-ply agent that picks the best-scoring move (`agent` module)
//! - JSON session records (`record`) and a parallel strategy comparison
//!   driver (`batch`)
//!
//! Quick start:
//! ```
//! use sim_2048::engine::{Board, Move};
//!
//! let b = Board::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let s = b.slide(Move::Left);
//! assert!(s.changed);
//! assert_eq!(s.score_delta, 4);
//! ```
//!
//! Full loop (simplest possible)
//! ```
//! use sim_2048::agent::HeuristicAgent;
//! use sim_2048::config::GameConfig;
//! use sim_2048::game::Game;
//! use sim_2048::heuristic::Strategy;
//!
//! // 1) Seeded session and a preset agent
//! let mut game = Game::with_config(GameConfig::default().seeded(123)).unwrap();
//! let mut agent = HeuristicAgent::new(Strategy::CornerFocused);
//!
//! // 2) Let the agent pick, the session apply
//! let mut moves = 0u32;
//! while !game.is_terminal() && moves < 4 {
//!     match agent.select_move(&game) {
//!         Some(dir) => { game.apply_move(dir); moves += 1; }
//!         None => break,
//!     }
//! }
//!
//! // 3) Inspect final state
//! agent.record_outcome(&game);
//! assert_eq!(agent.metrics().score, game.score());
//! assert!(moves > 0);
//! ```
//!
pub mod agent;
pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod logging;
pub mod record;

pub use error::EngineError;
