mod common;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use sim_2048::config::{GameConfig, SpawnConfig};
use sim_2048::engine::{Board, Move};
use sim_2048::game::Game;
use std::hint::black_box;

fn corpus() -> Vec<Board> {
    common::positions(42, 22)
}

fn bench_slide(c: &mut Criterion) {
    let boards = corpus();
    for dir in Move::ALL {
        c.bench_function(&format!("slide/{dir}"), |bch| {
            bch.iter(|| {
                let mut acc = 0u64;
                for bd in &boards { acc = acc.wrapping_add(bd.slide(dir).score_delta); }
                black_box(acc)
            })
        });
    }
}

fn bench_spawn_and_apply(c: &mut Criterion) {
    let spawn = SpawnConfig::default();
    c.bench_function("board/spawn_tile", |bch| {
        bch.iter_batched(
            || (Board::empty(), StdRng::seed_from_u64(7)),
            |(mut bd, mut rng)| {
                for _ in 0..16 { bd.spawn_tile(&mut rng, &spawn); }
                black_box(bd)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("game/apply_move_cycle", |bch| {
        bch.iter_batched(
            || Game::with_config(GameConfig::default().seeded(9)).expect("valid config"),
            |mut game| {
                for dir in Move::ALL.into_iter().cycle().take(64) { game.apply_move(dir); }
                black_box(game.score())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_queries(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("query/is_game_over", |bch| {
        bch.iter(|| boards.iter().filter(|bd| bd.is_game_over()).count())
    });
    c.bench_function("query/count_empty", |bch| {
        bch.iter(|| {
            let mut acc = 0usize;
            for bd in &boards { acc ^= bd.count_empty(); }
            black_box(acc)
        })
    });
}

criterion_group!(engine_ops, bench_slide, bench_spawn_and_apply, bench_queries);
criterion_main!(engine_ops);
