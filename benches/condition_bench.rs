//! Benchmarks for predicate rendering and clause joining.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use wherehouse::clause::{join_where, render_where};
use wherehouse::condition::{between, equal, has_any, in_list, like};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("condition_render");

    let eq = equal("env", "prod", false);
    group.bench_function("equal_string", |b| b.iter(|| black_box(eq.render())));

    let rng = between("ts", [1000i64, 2000], false);
    group.bench_function("between", |b| b.iter(|| black_box(rng.render())));

    let fuzzy = like("message", "connection timed out");
    group.bench_function("like", |b| b.iter(|| black_box(fuzzy.render())));

    for size in [2usize, 8, 32] {
        let values: Vec<String> = (0..size).map(|i| format!("v{i}")).collect();
        let membership = in_list("status", values.clone(), false);
        group.bench_with_input(BenchmarkId::new("in_list", size), &membership, |b, cond| {
            b.iter(|| black_box(cond.render()))
        });

        let array = has_any("tags", values, false);
        group.bench_with_input(BenchmarkId::new("has_any", size), &array, |b, cond| {
            b.iter(|| black_box(cond.render()))
        });
    }

    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("clause_join");

    let predicates: Vec<String> = (0..8).map(|i| format!("col{i} = {i}")).collect();
    group.bench_function("join_where_8", |b| {
        b.iter(|| black_box(join_where(&predicates)))
    });

    let conditions: Vec<_> = (0..8)
        .map(|i| equal(format!("col{i}").as_str(), i, false))
        .collect();
    group.bench_function("render_where_8", |b| {
        b.iter(|| black_box(render_where(&conditions)))
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_join);
criterion_main!(benches);
