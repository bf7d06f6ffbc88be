use criterion::{criterion_group, criterion_main, Criterion, BenchmarkId};
use entailment_prover::prove;

pub fn bench_wumpus_queries(c: &mut Criterion) {
    let givens = [
        "b11 iff (p12 or p21)",
        "not b11",
    ];
    let mut group = c.benchmark_group("Breeze world queries");
    let goals = [
        "not p12",
        "p12",
    ];
    for goal in goals.iter() {
        group.bench_with_input(BenchmarkId::new("prove", goal), goal,
            |b, goal| {
                b.iter(|| prove(&givens, goal))
            });
    }
    group.finish();
}

criterion_group!(benches, bench_wumpus_queries);
criterion_main!(benches);
