use std::collections::BTreeSet;
use std::hint::black_box;

use absence_engine::{compress_to_ranges, compute_new_dates, format_absence_summary};
use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};

/// Alternating two-week blocks of absence across a school year.
fn school_year() -> BTreeSet<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    (0..300)
        .map(|offset| start + Duration::days(offset))
        .filter(|d| (*d - start).num_days() / 14 % 2 == 0)
        .collect()
}

fn bench_compression(c: &mut Criterion) {
    let dates = school_year();
    let existing: BTreeSet<NaiveDate> = dates.iter().step_by(3).copied().collect();
    let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

    c.bench_function("compress_to_ranges", |b| {
        b.iter(|| compress_to_ranges(black_box(&dates)))
    });
    c.bench_function("compute_new_dates", |b| {
        b.iter(|| compute_new_dates(black_box(&dates), black_box(&existing)))
    });
    c.bench_function("format_absence_summary", |b| {
        b.iter(|| format_absence_summary("Emma Johnson", black_box(&dates), "holiday", today))
    });
}

criterion_group!(benches, bench_compression);
criterion_main!(benches);
