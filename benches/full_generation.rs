//! Performance measurement for complete map generation at varying sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glademap::{GenerationConfig, LevelGenerator};
use std::hint::black_box;

/// Measures time to run the full pipeline on the default configuration
fn bench_generate_default(c: &mut Criterion) {
    c.bench_function("generate_default", |b| {
        let Ok(generator) = LevelGenerator::new(GenerationConfig::default()) else {
            return;
        };

        b.iter(|| {
            black_box(generator.generate());
        });
    });
}

/// Measures pipeline cost as the interior grid grows from 50 to 200 per side
fn bench_generate_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_by_size");

    for size in &[50_usize, 100, 200] {
        let Ok(generator) = LevelGenerator::new(GenerationConfig {
            width: *size,
            height: *size,
            ..GenerationConfig::default()
        }) else {
            group.finish();
            return;
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                black_box(generator.generate());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_default, bench_generate_by_size);
criterion_main!(benches);
