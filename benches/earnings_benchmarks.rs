//! Performance benchmarks for the worklog engine.
//!
//! Covers the hot paths a calendar UI hits on every repaint: monthly and
//! yearly earnings over a fully populated year, and the yearly CSV export.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use worklog_engine::catalog::ShiftCatalog;
use worklog_engine::earnings::{monthly_breakdown, monthly_earnings, yearly_earnings};
use worklog_engine::locale::Locale;
use worklog_engine::models::CurrencyConfig;
use worklog_engine::report::ReportFormatter;
use worklog_engine::store::WorkedDayStore;

/// Builds a store with every day of 2024 assigned, cycling the built-ins.
fn populated_year() -> WorkedDayStore {
    let mut store = WorkedDayStore::new();
    let keys = ["day", "evening", "night", "overtime"];
    let mut i = 0;
    for month in 1..=12 {
        for day in 1..=31 {
            if store.set_day(2024, month, day, Some(keys[i % 4])).is_ok() {
                i += 1;
            }
        }
    }
    store
}

fn bench_monthly_earnings(c: &mut Criterion) {
    let store = populated_year();
    let catalog = ShiftCatalog::with_defaults(Locale::En);
    let rate = Decimal::from_str("300").unwrap();

    c.bench_function("monthly_earnings_full_month", |b| {
        b.iter(|| {
            monthly_earnings(
                black_box(&store),
                black_box(&catalog),
                black_box(rate),
                2024,
                3,
            )
        })
    });

    c.bench_function("monthly_breakdown_full_month", |b| {
        b.iter(|| {
            monthly_breakdown(
                black_box(&store),
                black_box(&catalog),
                black_box(rate),
                2024,
                3,
            )
        })
    });
}

fn bench_yearly_earnings(c: &mut Criterion) {
    let store = populated_year();
    let catalog = ShiftCatalog::with_defaults(Locale::En);
    let rate = Decimal::from_str("300").unwrap();

    c.bench_function("yearly_earnings_full_year", |b| {
        b.iter(|| {
            yearly_earnings(
                black_box(&store),
                black_box(&catalog),
                black_box(rate),
                2024,
            )
        })
    });
}

fn bench_year_csv(c: &mut Criterion) {
    let store = populated_year();
    let catalog = ShiftCatalog::with_defaults(Locale::Nb);
    let rate = Decimal::from_str("300").unwrap();
    let formatter = ReportFormatter::new(
        &store,
        &catalog,
        rate,
        Locale::Nb,
        CurrencyConfig::default(),
    );

    c.bench_function("year_csv_full_year", |b| {
        b.iter(|| formatter.year_csv(black_box(2024)))
    });
}

criterion_group!(
    benches,
    bench_monthly_earnings,
    bench_yearly_earnings,
    bench_year_csv
);
criterion_main!(benches);
