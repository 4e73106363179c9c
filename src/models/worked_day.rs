//! Worked-day model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The assignment of one shift type to one calendar date.
///
/// This is the flat record shape used for persistence and export; the live
/// collection lives in [`crate::store::WorkedDayStore`], which enforces the
/// at-most-one-per-date invariant. The `shift_type` key is not guaranteed to
/// exist in the catalog (see orphan tolerance in the earnings engine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedDay {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Key of the assigned shift type.
    pub shift_type: String,
}

impl WorkedDay {
    /// The calendar date of this record, if the triple names a real date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}
