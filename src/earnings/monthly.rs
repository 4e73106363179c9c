//! Per-month earnings and the per-type monthly breakdown.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::ShiftCatalog;
use crate::store::WorkedDayStore;

use super::{daily_earnings, shift_pay};

/// Number of days in a Gregorian calendar month, or 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(0)
}

/// Earnings for one calendar month: the sum of `daily_earnings` over every
/// day the month has (28-31, leap years included).
pub fn monthly_earnings(
    store: &WorkedDayStore,
    catalog: &ShiftCatalog,
    base_rate: Decimal,
    year: i32,
    month: u32,
) -> Decimal {
    (1..=days_in_month(year, month))
        .map(|day| daily_earnings(store, catalog, base_rate, year, month, day))
        .sum()
}

/// Aggregate for one shift type within a month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftTypeBreakdown {
    /// The shift-type key.
    pub type_key: String,
    /// Sum of the shift pay over all occurrences.
    pub earnings: Decimal,
    /// Number of days the type occurs in the month.
    pub days: u32,
}

/// Per-shift-type aggregation for one month, in catalog-insertion order.
///
/// Only shift types with at least one occurrence appear; zero-occurrence
/// types are omitted, not zero-filled. Occurrences of deleted (orphaned)
/// types are skipped entirely.
pub fn monthly_breakdown(
    store: &WorkedDayStore,
    catalog: &ShiftCatalog,
    base_rate: Decimal,
    year: i32,
    month: u32,
) -> Vec<ShiftTypeBreakdown> {
    let month_days = store.get_month(year, month);

    catalog
        .iter()
        .filter_map(|shift| {
            let days = month_days
                .values()
                .filter(|type_key| **type_key == shift.type_key)
                .count() as u32;
            if days == 0 {
                return None;
            }
            Some(ShiftTypeBreakdown {
                type_key: shift.type_key.clone(),
                earnings: shift_pay(shift, base_rate) * Decimal::from(days),
                days,
            })
        })
        .collect()
}
