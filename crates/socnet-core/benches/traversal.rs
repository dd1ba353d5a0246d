//! Criterion benchmarks for the traversal engine on synthetic graphs.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use socnet_core::query::{connected_components, degree_of_separation, suggest_friends};
use socnet_core::SocialGraph;

/// Random graph with `users` nodes and roughly `degree` declared friends
/// per user, declared symmetrically like typical datasets.
fn synthetic_graph(users: usize, degree: usize, seed: u64) -> SocialGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(users * degree * 2);
    for u in 0..users {
        for _ in 0..degree {
            let v = rng.gen_range(0..users);
            edges.push((format!("u{u}"), format!("u{v}")));
            edges.push((format!("u{v}"), format!("u{u}")));
        }
    }
    SocialGraph::from_edges(edges.iter().map(|(a, b)| (a.as_str(), b.as_str())))
}

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest_friends");
    for users in [1_000usize, 10_000] {
        let graph = synthetic_graph(users, 8, 42);
        group.bench_with_input(BenchmarkId::from_parameter(users), &graph, |b, g| {
            b.iter(|| suggest_friends(g, "u0"));
        });
    }
    group.finish();
}

fn bench_separation(c: &mut Criterion) {
    let mut group = c.benchmark_group("degree_of_separation");
    for users in [1_000usize, 10_000] {
        let graph = synthetic_graph(users, 8, 42);
        let far = format!("u{}", users - 1);
        group.bench_with_input(BenchmarkId::from_parameter(users), &graph, |b, g| {
            b.iter(|| degree_of_separation(g, "u0", &far));
        });
    }
    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("connected_components");
    for users in [1_000usize, 10_000] {
        let graph = synthetic_graph(users, 2, 42);
        group.bench_with_input(BenchmarkId::from_parameter(users), &graph, |b, g| {
            b.iter(|| connected_components(g));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_suggest, bench_separation, bench_components);
criterion_main!(benches);
