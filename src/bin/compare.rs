use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use sim_2048::batch::{self, BatchConfig, RunSummary, StrategySummary};
use sim_2048::heuristic::Strategy;
use sim_2048::logging::init_logging;

#[derive(Debug, Parser)]
#[command(name = "compare", about = "Compare heuristic strategies over many parallel 2048 games")]
struct Args {
    /// Strategies to compare (comma separated; all presets when omitted)
    #[arg(long, value_delimiter = ',')]
    strategies: Vec<Strategy>,

    /// JSON batch config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Games per strategy
    #[arg(long)]
    games: Option<usize>,

    /// Per-game move cap
    #[arg(long)]
    max_moves: Option<u64>,

    /// Seed of the first game; game i uses seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// Board edge length
    #[arg(long)]
    size: Option<usize>,

    /// Share one evaluation cache across all games
    #[arg(long)]
    shared_cache: bool,

    /// Worker threads (rayon default when omitted)
    #[arg(long)]
    threads: Option<usize>,

    /// Write per-run and per-strategy results as JSON to this path
    #[arg(long)]
    out: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(long)]
    quiet: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a BatchConfig,
    elapsed_s: f64,
    summaries: &'a [StrategySummary],
    runs: &'a [RunSummary],
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = init_logging(&args.log_level)?;
    let cfg = batch_config(&args)?;
    let strategies = if args.strategies.is_empty() { Strategy::ALL.to_vec() } else { args.strategies.clone() };

    let pool = {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(n) = args.threads {
            builder = builder.num_threads(n);
        }
        builder.build()?
    };

    let total = (cfg.games * strategies.len()) as u64;
    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::with_template("{spinner} {elapsed_precise} [{bar:40}] {pos}/{len} games | {msg}")?
                .tick_chars("⠁⠃⠇⠧⠷⠿⠻⠟⠯⠷⠧⠇⠃")
                .progress_chars("=> "),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    };

    let start = Instant::now();
    let runs = pool.install(|| {
        batch::run_batch(&strategies, &cfg, |run| {
            pb.inc(1);
            pb.set_message(format!("last: {} scored {}", run.strategy, run.score));
        })
    })?;
    pb.finish_and_clear();
    let elapsed = start.elapsed().as_secs_f64();

    let summaries = batch::summarize(&runs);
    print_table(&summaries);
    println!("{} games in {:.1}s", runs.len(), elapsed);

    if let Some(out) = &args.out {
        let report = Report { config: &cfg, elapsed_s: elapsed, summaries: &summaries, runs: &runs };
        fs::write(out, serde_json::to_string_pretty(&report)?)?;
        log::info!("wrote report to {}", out.display());
    }
    Ok(())
}

fn batch_config(args: &Args) -> anyhow::Result<BatchConfig> {
    let mut cfg = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => BatchConfig::default(),
    };
    if let Some(games) = args.games {
        cfg.games = games;
    }
    if args.max_moves.is_some() {
        cfg.max_moves = args.max_moves;
    }
    if let Some(seed) = args.seed {
        cfg.base_seed = seed;
    }
    if let Some(size) = args.size {
        cfg.game.size = size;
    }
    cfg.shared_cache |= args.shared_cache;
    cfg.game.validate()?;
    Ok(cfg)
}

fn print_table(summaries: &[StrategySummary]) {
    println!(
        "{:<16} {:>6} {:>10} {:>9} {:>8} {:>9} {:>11}",
        "strategy", "games", "mean", "max", "tile", "moves", "us/move"
    );
    for s in summaries {
        println!(
            "{:<16} {:>6} {:>10.1} {:>9} {:>8} {:>9.1} {:>11.2}",
            s.strategy.name(),
            s.games,
            s.mean_score,
            s.max_score,
            s.best_tile,
            s.mean_moves,
            s.mean_decision_us
        );
    }
    for s in summaries {
        let reach: Vec<String> = s.tile_reach.iter().rev().map(|(tile, n)| format!("{tile}:{n}")).collect();
        println!("{:<16} highest tiles {}", s.strategy.name(), reach.join(" "));
    }
}
