//! Earnings computation for the worklog engine.
//!
//! Pure, stateless functions over a worked-day store snapshot, a shift
//! catalog snapshot and an hourly base rate: per-shift pay, per-day,
//! per-month and per-year totals, per-type monthly breakdowns, and the
//! cosmetic achievement tier. Nothing here errors; days without an
//! assignment, and days whose shift type is missing from the catalog, earn
//! zero.

mod daily;
mod monthly;
mod shift_pay;
mod tier;
mod yearly;

pub use daily::daily_earnings;
pub use monthly::{ShiftTypeBreakdown, days_in_month, monthly_breakdown, monthly_earnings};
pub use shift_pay::shift_pay;
pub use tier::{AchievementTier, achievement_tier};
pub use yearly::yearly_earnings;
