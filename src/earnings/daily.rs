//! Per-day earnings.

use rust_decimal::Decimal;

use crate::catalog::ShiftCatalog;
use crate::store::WorkedDayStore;

use super::shift_pay;

/// Earnings for one calendar date.
///
/// Returns zero when the date has no assigned shift, and also when the
/// assigned shift-type key is missing from the catalog (an orphaned
/// reference after a catalog delete). Orphans are deliberately not an
/// error: deleting a shift type must never corrupt historical calendar data.
pub fn daily_earnings(
    store: &WorkedDayStore,
    catalog: &ShiftCatalog,
    base_rate: Decimal,
    year: i32,
    month: u32,
    day: u32,
) -> Decimal {
    store
        .get_day(year, month, day)
        .and_then(|type_key| catalog.get(type_key))
        .map(|shift| shift_pay(shift, base_rate))
        .unwrap_or(Decimal::ZERO)
}
