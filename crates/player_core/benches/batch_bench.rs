use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use player_core::batch::BatchExecutor;
use player_core::model::player::Player;
use player_core::model::position::Position;
use player_core::model::uid::PersonUid;
use player_core::ratings::ability::calculate_ca;

fn roster(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| {
            Player::generate(
                PersonUid(i as u32),
                format!("Bench {i}"),
                Position::ALL[i % 4],
                16.0,
                (40, 110),
                (115, 175),
                i as u64,
            )
            .expect("bench roster generation")
        })
        .collect()
}

fn bench_single_ca(c: &mut Criterion) {
    let players = roster(1);
    c.bench_function("ca_single", |b| {
        b.iter(|| calculate_ca(black_box(&players[0].attributes), players[0].position))
    });
}

fn bench_ca_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("ca_batch");
    for count in [100usize, 1_000, 10_000] {
        let players = roster(count);
        let executor = BatchExecutor::new();
        group.bench_with_input(BenchmarkId::from_parameter(count), &players, |b, players| {
            b.iter(|| executor.calculate_ca_batch(black_box(players)))
        });
    }
    group.finish();
}

fn bench_summary_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary_batch");
    for count in [100usize, 10_000] {
        let players = roster(count);
        let executor = BatchExecutor::new();
        group.bench_with_input(BenchmarkId::from_parameter(count), &players, |b, players| {
            b.iter(|| executor.derive_summary_batch(black_box(players)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_ca, bench_ca_batches, bench_summary_batches);
criterion_main!(benches);
