//! Full-game throughput on the standard board.

use criterion::{criterion_group, criterion_main, Criterion};
use paddock::{
    BuyAll, BuyNothing, Cautious, PlayerSpec, SessionBuilder, Tournament, TournamentConfig,
};
use std::sync::Arc;

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_3_players", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut session = SessionBuilder::new()
                .player(PlayerSpec::new("BuyAll", Arc::new(BuyAll)))
                .player(PlayerSpec::new("BuyNothing", Arc::new(BuyNothing)))
                .player(PlayerSpec::new("Cautious5000", Arc::new(Cautious::new(5_000))))
                .build(seed);
            session.play()
        });
    });
}

fn bench_small_tournament(c: &mut Criterion) {
    c.bench_function("tournament_3x3x4", |b| {
        b.iter(|| {
            Tournament::new(
                TournamentConfig::new()
                    .with_players_per_game(3)
                    .with_games_per_matchup(4)
                    .with_seed(1),
            )
            .entry("BuyAll", Arc::new(BuyAll))
            .entry("BuyNothing", Arc::new(BuyNothing))
            .entry("Cautious5000", Arc::new(Cautious::new(5_000)))
            .run()
        });
    });
}

criterion_group!(benches, bench_full_game, bench_small_tournament);
criterion_main!(benches);
