//! Per-year earnings.

use rust_decimal::Decimal;

use crate::catalog::ShiftCatalog;
use crate::store::WorkedDayStore;

use super::monthly_earnings;

/// Earnings for one calendar year: the sum of the twelve monthly totals.
pub fn yearly_earnings(
    store: &WorkedDayStore,
    catalog: &ShiftCatalog,
    base_rate: Decimal,
    year: i32,
) -> Decimal {
    (1..=12)
        .map(|month| monthly_earnings(store, catalog, base_rate, year, month))
        .sum()
}
