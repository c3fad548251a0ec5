use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use euler_trail::{build_cycle, trail_iterative, trail_recursive, Graph};

// The recursive timings include spawning its sized worker thread.
const SIZES: [usize; 4] = [100, 1_000, 5_000, 10_000];

fn triangle_fan(k: usize) -> Graph {
    // k triangles glued at vertex 0
    let mut edges = Vec::with_capacity(3 * k);
    for i in 0..k {
        let a = 2 * i + 1;
        let b = 2 * i + 2;
        edges.push((0, a));
        edges.push((a, b));
        edges.push((b, 0));
    }
    Graph::new(2 * k + 1, &edges)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");
    for &n in &SIZES {
        let g = build_cycle(n);
        group.bench_with_input(BenchmarkId::new("iterative", n), &g, |b, g| {
            b.iter_batched(
                || g.clone(),
                |copy| trail_iterative(black_box(0), copy),
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("recursive", n), &g, |b, g| {
            b.iter_batched(
                || g.clone(),
                |copy| trail_recursive(black_box(0), copy, n + 1),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();

    let triangles = triangle_fan(1_000);
    c.bench_function("triangles 1000 iterative", |b| {
        b.iter_batched(
            || triangles.clone(),
            |copy| trail_iterative(black_box(0), copy),
            BatchSize::LargeInput,
        )
    });
    c.bench_function("triangles 1000 recursive", |b| {
        b.iter_batched(
            || triangles.clone(),
            |copy| trail_recursive(black_box(0), copy, 10_000),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
