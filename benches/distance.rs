use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use itertools::Itertools;
use zhang_shasha::{distance, distance_by, SimpleNode, UnitCost};

fn tree(leaves: Vec<SimpleNode<usize>>, r: usize) -> SimpleNode<usize> {
    let label = leaves.len();
    if leaves.len() < r {
        SimpleNode::from((label, leaves))
    } else {
        let chunks = (leaves.len() + r - 1) / r;
        let children = leaves
            .into_iter()
            .chunks(chunks)
            .into_iter()
            .map(|c| tree(c.collect(), r))
            .collect();

        SimpleNode::from((label, children))
    }
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("n-tree distance");
    for r in [2, 4, 8, 16] {
        let leaves = (0..100).map(SimpleNode::new).collect();
        group.bench_with_input(BenchmarkId::from_parameter(r), &tree(leaves, r), |b, t| {
            b.iter(|| distance(t, t, UnitCost))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("path distance");
    for n in [100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| distance_by(0, 1, |i| (i < n).then_some(i + 2), |i| i % 2, UnitCost))
        });
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
