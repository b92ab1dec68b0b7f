//! 图操作基准测试

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use labeled_graph::{EdgeGraph, Graph, VertexGraph};

fn build<G: Graph<String>>(mut graph: G, n: usize) -> G {
    for i in 0..n {
        let weight = (i % 7 + 1) as i64;
        let _ = graph.set(format!("v{}", i), format!("v{}", (i * 31 + 7) % n), weight);
        let _ = graph.set(format!("v{}", i), format!("v{}", (i + 1) % n), weight);
    }
    graph
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    for n in [64, 512] {
        group.bench_with_input(BenchmarkId::new("vertices", n), &n, |b, &n| {
            b.iter(|| build(VertexGraph::<String>::new(), black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("edges", n), &n, |b, &n| {
            b.iter(|| build(EdgeGraph::<String>::new(), black_box(n)))
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let n = 512;
    let vertex_graph = build(VertexGraph::<String>::new(), n);
    let edge_graph = build(EdgeGraph::<String>::new(), n);
    let label = "v100".to_string();

    let mut group = c.benchmark_group("queries");
    group.bench_function("vertices/sources", |b| {
        b.iter(|| vertex_graph.sources(black_box(&label)))
    });
    group.bench_function("edges/sources", |b| {
        b.iter(|| edge_graph.sources(black_box(&label)))
    });
    group.bench_function("vertices/targets", |b| {
        b.iter(|| vertex_graph.targets(black_box(&label)))
    });
    group.bench_function("edges/targets", |b| {
        b.iter(|| edge_graph.targets(black_box(&label)))
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let n = 512;
    let vertex_graph = build(VertexGraph::<String>::new(), n);
    let edge_graph = build(EdgeGraph::<String>::new(), n);
    let label = "v100".to_string();

    c.bench_function("remove/vertices", |b| {
        b.iter(|| vertex_graph.clone().remove(black_box(&label)))
    });
    c.bench_function("remove/edges", |b| {
        b.iter(|| edge_graph.clone().remove(black_box(&label)))
    });
}

criterion_group!(benches, bench_set, bench_queries, bench_remove);
criterion_main!(benches);
