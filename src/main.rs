use std::path::PathBuf;

use clap::Parser;
use sim_2048::agent::HeuristicAgent;
use sim_2048::config::{GameConfig, SpawnConfig, DEFAULT_TWO_PROBABILITY};
use sim_2048::engine::DEFAULT_SIZE;
use sim_2048::game::Game;
use sim_2048::heuristic::Strategy;
use sim_2048::logging::init_logging;
use sim_2048::record;

#[derive(Debug, Parser)]
#[command(name = "sim-2048", about = "Play one 2048 game with a heuristic agent")]
struct Args {
    /// Weight preset: corner-focused, merge-focused or balanced
    #[arg(long, default_value = "balanced")]
    strategy: Strategy,

    /// Board edge length
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a spawned tile is a 2
    #[arg(long, default_value_t = DEFAULT_TWO_PROBABILITY)]
    two_probability: f64,

    /// Stop after this many moves
    #[arg(long)]
    max_moves: Option<u64>,

    /// Only print the final summary
    #[arg(long)]
    quiet: bool,

    /// Save the final session as JSON to this path
    #[arg(long)]
    save: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = init_logging(&args.log_level)?;

    let config = GameConfig { size: args.size, spawn: SpawnConfig::new(args.two_probability)?, seed: args.seed };
    let mut game = Game::with_config(config)?;
    let mut agent = HeuristicAgent::new(args.strategy);
    if !args.quiet {
        println!("{}", game.board());
    }
    while !game.is_terminal() {
        if args.max_moves.is_some_and(|cap| game.move_count() >= cap) {
            break;
        }
        let Some(direction) = agent.select_move(&game) else { break };
        game.apply_move(direction);
        if !args.quiet {
            println!("{direction} (score {}){}", game.score(), game.board());
        }
    }
    agent.record_outcome(&game);

    let metrics = agent.metrics();
    println!(
        "Strategy: {} | Moves: {} | Score: {} | Highest tile: {} | Decision time: {:.3}s",
        args.strategy,
        game.move_count(),
        metrics.score,
        metrics.highest_tile,
        metrics.execution_time.as_secs_f64()
    );

    if let Some(path) = args.save {
        record::save_to_path(&path, &game.to_record())?;
        log::info!("saved session to {}", path.display());
    }
    Ok(())
}
