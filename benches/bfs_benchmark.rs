use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pargraphs::{bfs_matrix_with, bfs_par_with, bfs_seq, CsrGraph, ParallelConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random directed graph with `n` vertices and about `n * degree` edges,
/// plus a ring so every vertex is reachable from 0.
fn random_graph(n: usize, degree: usize, seed: u64) -> CsrGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges: Vec<(usize, usize)> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    edges.extend((0..n * degree).map(|_| (rng.gen_range(0..n), rng.gen_range(0..n))));
    CsrGraph::from_edges(n, &edges).unwrap()
}

fn bench_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs");
    group.sample_size(20);

    for &n in &[10_000usize, 100_000] {
        let graph = random_graph(n, 8, 42);

        group.bench_with_input(BenchmarkId::new("sequential", n), &graph, |b, g| {
            b.iter(|| black_box(bfs_seq(g, 0).unwrap()));
        });

        for threads in [2usize, 4] {
            let cfg = ParallelConfig::default().with_threads(threads);
            group.bench_with_input(
                BenchmarkId::new(format!("parallel_{threads}t"), n),
                &graph,
                |b, g| b.iter(|| black_box(bfs_par_with(g, 0, &cfg).unwrap())),
            );
        }

        let cfg = ParallelConfig::default();
        group.bench_with_input(BenchmarkId::new("matrix", n), &graph, |b, g| {
            b.iter(|| black_box(bfs_matrix_with(g, 0, &cfg).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bfs);
criterion_main!(benches);
