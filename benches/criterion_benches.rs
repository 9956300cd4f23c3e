use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sokoban_bfs::config::{Dedup, SolverConfig};
use sokoban_bfs::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_two_blocks(c: &mut Criterion) {
    bench_level(c, Dedup::Identity, "levels/grid/04-two-blocks.txt", 100);
}

#[allow(unused)]
fn bench_four_blocks(c: &mut Criterion) {
    // ~27k unique states
    bench_level(c, Dedup::Identity, "levels/grid/05-four-blocks.txt", 20);
}

#[allow(unused)]
fn bench_four_blocks_by_set(c: &mut Criterion) {
    bench_level(c, Dedup::BlockSet, "levels/grid/05-four-blocks.txt", 20);
}

fn bench_level(c: &mut Criterion, dedup: Dedup, level_path: &str, samples: usize) {
    let level = level_path.load_level().unwrap();
    let config = SolverConfig::default().dedup(dedup);

    let mut group = c.benchmark_group(dedup.to_string());
    group.sample_size(samples);
    group.bench_function(level_path, |b| {
        b.iter(|| black_box(level.solve(black_box(&config))))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_two_blocks,
    bench_four_blocks,
    bench_four_blocks_by_set,
);
criterion_main!(benches);
