//! Turn-recording throughput.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use oche::{GameBuilder, PlayerId};

fn bench_full_leg(c: &mut Criterion) {
    c.bench_function("record_full_501_leg", |b| {
        b.iter(|| {
            let mut game = GameBuilder::new(PlayerId::new(1)).build();
            for score in [180, 140, 100, 40, 0, 41] {
                black_box(game.record_turn(black_box(score)));
            }
            black_box(game.stats())
        });
    });
}

criterion_group!(benches, bench_full_leg);
criterion_main!(benches);
