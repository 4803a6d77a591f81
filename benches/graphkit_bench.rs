// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Benchmarks for graph construction and conversions

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphkit::types::VertexLabel;
use graphkit::Graph;

/// Ring of `n` vertices with a chord from every vertex to its opposite
fn ring(n: i64, directed: bool) -> Graph {
    let mut graph = Graph::new(directed, true);
    for i in 0..n {
        graph.put_edge(i, (i + 1) % n, Some(1.0)).unwrap();
        graph.put_edge(i, (i + n / 2) % n, Some(2.0)).unwrap();
    }
    graph
}

fn bench_put_edge(c: &mut Criterion) {
    c.bench_function("put_edge ring 1000", |b| {
        b.iter(|| ring(black_box(1000), true));
    });
}

fn bench_conversions(c: &mut Criterion) {
    let graph = ring(500, false);

    c.bench_function("to_adjacency_matrix 500", |b| {
        b.iter(|| graph.to_adjacency_matrix().unwrap());
    });
    c.bench_function("to_incidence_matrix 500", |b| {
        b.iter(|| graph.to_incidence_matrix().unwrap());
    });
}

fn bench_search(c: &mut Criterion) {
    let graph = ring(1000, true);
    let from = VertexLabel::Index(0);
    let to = VertexLabel::Index(777);

    c.bench_function("bfs 1000", |b| b.iter(|| graph.bfs(black_box(&from))));
    c.bench_function("shortest_path 1000", |b| {
        b.iter(|| graph.shortest_path(black_box(&from), black_box(&to)));
    });
}

criterion_group!(benches, bench_put_edge, bench_conversions, bench_search);
criterion_main!(benches);
