//! Benchmarks for registry lookups and nearest-name search.
//!
//! Performance budgets:
//! - get_by_name / get_by_color: **< 200ns**
//! - nearest over the built-in table (~140 values): **< 5us**
//! - parse_hex: **< 100ns**

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use colorlist::{Color, ColorRegistry, parse_hex};

fn bench_exact_lookups(c: &mut Criterion) {
    let registry = ColorRegistry::with_builtins();
    let mut group = c.benchmark_group("registry/exact");

    group.bench_function("get_by_name", |b| {
        b.iter(|| registry.get_by_name(black_box("WhiteSmoke")));
    });
    group.bench_function("get_by_color", |b| {
        b.iter(|| registry.get_by_color(black_box(Color::rgb(245, 245, 245))));
    });
    group.bench_function("resolve_hex", |b| {
        b.iter(|| registry.resolve_color(black_box("#f5f5f5")));
    });

    group.finish();
}

/// Nearest-name scan cost as the registry grows past the built-in table.
fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/nearest");

    for &extra in &[0usize, 100, 1_000] {
        let registry = ColorRegistry::with_builtins();
        for i in 0..extra {
            let [_, _, hi, lo] = (i as u32).to_be_bytes();
            registry.put(&format!("extra-{i}"), Color::new(hi, lo, lo ^ 0x55, 200));
        }
        let (_, values) = registry.size();

        group.throughput(Throughput::Elements(values as u64));
        group.bench_with_input(BenchmarkId::new("scan", values), &registry, |b, registry| {
            b.iter(|| registry.nearest(black_box(Color::rgb(244, 244, 240))));
        });
    }

    group.finish();
}

fn bench_parse_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex/parse");
    for input in ["#ccc", "#0c0c0c", "#0c0Z0c"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), &input, |b, s| {
            b.iter(|| parse_hex(black_box(s)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_exact_lookups, bench_nearest, bench_parse_hex);
criterion_main!(benches);
