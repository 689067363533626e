use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fib_sssp::graph::generators::generate_random_graph;
use fib_sssp::{run, Strategy};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    group.sample_size(20);

    for &(size, density) in &[(500usize, 0.01f64), (500, 0.2), (1_000, 0.1)] {
        let graph = generate_random_graph(size, density, 7);
        let label = format!("n{}_d{}", size, density);

        group.bench_with_input(BenchmarkId::new("sequential", &label), &graph, |b, g| {
            b.iter(|| run(&Strategy::Sequential, black_box(g), 0).unwrap())
        });
        for threads in [2usize, 4] {
            let strategy = Strategy::parallel(threads);
            group.bench_with_input(
                BenchmarkId::new(format!("parallel_{}", threads), &label),
                &graph,
                |b, g| b.iter(|| run(&strategy, black_box(g), 0).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
