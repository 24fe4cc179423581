// SPDX-License-Identifier: MPL-2.0

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use daterange::{DateRange, DateRangeSet};

/// Deterministic scatter of bounded ranges across roughly fifty years.
fn scattered_ranges(count: usize, seed: i64) -> Vec<DateRange> {
    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).expect("fixed calendar date");
    (0..count as i64)
        .map(|i| {
            let offset = (i.wrapping_mul(2_654_435_761).wrapping_add(seed)).rem_euclid(18_000);
            let length = (i * 37 + seed).rem_euclid(90);
            let start = epoch + Duration::days(offset);
            DateRange::between(start, start + Duration::days(length)).expect("length is positive")
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let input = scattered_ranges(1_000, 1);
    c.bench_function("normalize 1000 ranges", |b| {
        b.iter(|| DateRangeSet::new(black_box(&input).iter().copied()))
    });
}

fn bench_set_overlap(c: &mut Criterion) {
    let left = DateRangeSet::new(scattered_ranges(1_000, 1));
    let right = DateRangeSet::new(scattered_ranges(1_000, 7_919));
    c.bench_function("merge-scan overlap of two sets", |b| {
        b.iter(|| black_box(&left).overlaps_set(black_box(&right)))
    });
}

criterion_group!(benches, bench_normalize, bench_set_overlap);
criterion_main!(benches);
