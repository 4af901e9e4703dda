#![allow(missing_docs)]
//! Benchmarks for the legacy random source.

use criterion::{Criterion, criterion_group, criterion_main};
use golem_utils::random::{LegacyRandom, Random, TimeUtil};
use std::hint::black_box;

fn bench_next_i32_bounded(c: &mut Criterion) {
    let mut rand = LegacyRandom::from_seed(12345);
    c.bench_function("legacy_next_i32_bounded", |b| {
        b.iter(|| black_box(rand.next_i32_bounded(black_box(15))));
    });
}

fn bench_anger_range_sample(c: &mut Criterion) {
    let mut rand = LegacyRandom::from_seed(12345);
    let range = TimeUtil::range_of_seconds(20, 39);
    c.bench_function("uniform_int_sample", |b| {
        b.iter(|| black_box(range.sample(&mut rand)));
    });
}

criterion_group!(benches, bench_next_i32_bounded, bench_anger_range_sample);
criterion_main!(benches);
