//! The worked-day store.
//!
//! A sparse mapping from calendar dates to shift-type keys, keyed by year and
//! then by (month, day). At most one shift type is assigned per date;
//! assigning to an occupied date replaces the previous assignment.
//!
//! The store never validates shift-type keys against the catalog: a day may
//! reference a type that does not exist yet, or whose definition was deleted
//! later. Destructive catalog edits must never corrupt historical calendar
//! data; tolerating dangling keys here is what makes that hold.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkedDay;

/// Sparse collection of worked days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkedDayStore {
    // year -> (month, day) -> shift-type key
    years: BTreeMap<i32, BTreeMap<(u32, u32), String>>,
}

impl WorkedDayStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        WorkedDayStore::default()
    }

    /// Assigns, replaces or erases the shift type for one calendar date.
    ///
    /// `None` (or an empty key) erases any existing assignment. Fails with
    /// `InvalidDate` when the triple does not name a real Gregorian date.
    pub fn set_day(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        shift_type: Option<&str>,
    ) -> EngineResult<()> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(EngineError::InvalidDate { year, month, day });
        }

        match shift_type {
            None | Some("") => {
                if let Some(months) = self.years.get_mut(&year) {
                    months.remove(&(month, day));
                    if months.is_empty() {
                        self.years.remove(&year);
                    }
                }
            }
            Some(type_key) => {
                self.years
                    .entry(year)
                    .or_default()
                    .insert((month, day), type_key.to_string());
            }
        }
        Ok(())
    }

    /// The shift-type key assigned to a date, if any.
    pub fn get_day(&self, year: i32, month: u32, day: u32) -> Option<&str> {
        self.years
            .get(&year)?
            .get(&(month, day))
            .map(String::as_str)
    }

    /// Read-only projection of one month: day of month -> shift-type key.
    ///
    /// Unassigned days are absent from the result, never defaulted.
    pub fn get_month(&self, year: i32, month: u32) -> BTreeMap<u32, &str> {
        match self.years.get(&year) {
            Some(months) => months
                .range((month, 1)..=(month, 31))
                .map(|((_, day), type_key)| (*day, type_key.as_str()))
                .collect(),
            None => BTreeMap::new(),
        }
    }

    /// Total number of worked days across all years.
    pub fn len(&self) -> usize {
        self.years.values().map(BTreeMap::len).sum()
    }

    /// Whether no day is assigned at all.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Flattens the store into persistence records, ordered by date.
    pub fn to_records(&self) -> Vec<WorkedDay> {
        self.years
            .iter()
            .flat_map(|(year, months)| {
                months.iter().map(|((month, day), type_key)| WorkedDay {
                    year: *year,
                    month: *month,
                    day: *day,
                    shift_type: type_key.clone(),
                })
            })
            .collect()
    }

    /// Rebuilds a store from persisted records.
    ///
    /// Records with impossible dates or empty keys are dropped individually;
    /// when two records claim the same date the later one wins. Loading never
    /// fails.
    pub fn from_records(records: Vec<WorkedDay>) -> Self {
        let mut store = WorkedDayStore::new();
        for record in records {
            if record.shift_type.is_empty() {
                continue;
            }
            // Invalid dates are silently skipped by set_day's validation.
            let _ = store.set_day(
                record.year,
                record.month,
                record.day,
                Some(&record.shift_type),
            );
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_day_inserts_entry() {
        let mut store = WorkedDayStore::new();
        store.set_day(2024, 3, 5, Some("day")).unwrap();
        assert_eq!(store.get_day(2024, 3, 5), Some("day"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_day_is_idempotent() {
        let mut store = WorkedDayStore::new();
        store.set_day(2024, 3, 5, Some("day")).unwrap();
        let snapshot = store.clone();
        store.set_day(2024, 3, 5, Some("day")).unwrap();
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_set_day_replaces_existing_assignment() {
        let mut store = WorkedDayStore::new();
        store.set_day(2024, 3, 5, Some("day")).unwrap();
        store.set_day(2024, 3, 5, Some("night")).unwrap();
        assert_eq!(store.get_day(2024, 3, 5), Some("night"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_day_none_erases() {
        let mut store = WorkedDayStore::new();
        store.set_day(2024, 3, 5, Some("day")).unwrap();
        store.set_day(2024, 3, 5, None).unwrap();
        assert_eq!(store.get_day(2024, 3, 5), None);
        assert!(!store.get_month(2024, 3).contains_key(&5));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_day_empty_string_erases() {
        let mut store = WorkedDayStore::new();
        store.set_day(2024, 3, 5, Some("day")).unwrap();
        store.set_day(2024, 3, 5, Some("")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_erasing_unassigned_day_is_a_no_op() {
        let mut store = WorkedDayStore::new();
        store.set_day(2024, 3, 5, None).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_day_rejects_impossible_date() {
        let mut store = WorkedDayStore::new();
        let result = store.set_day(2023, 2, 29, Some("day"));
        assert!(matches!(result, Err(EngineError::InvalidDate { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_day_accepts_leap_day() {
        let mut store = WorkedDayStore::new();
        store.set_day(2024, 2, 29, Some("day")).unwrap();
        assert_eq!(store.get_day(2024, 2, 29), Some("day"));
    }

    #[test]
    fn test_set_day_accepts_unknown_shift_type_key() {
        // No catalog validation at write time.
        let mut store = WorkedDayStore::new();
        store.set_day(2024, 3, 5, Some("not-in-catalog")).unwrap();
        assert_eq!(store.get_day(2024, 3, 5), Some("not-in-catalog"));
    }

    #[test]
    fn test_get_month_projects_only_that_month() {
        let mut store = WorkedDayStore::new();
        store.set_day(2024, 3, 5, Some("day")).unwrap();
        store.set_day(2024, 3, 31, Some("night")).unwrap();
        store.set_day(2024, 4, 1, Some("day")).unwrap();
        store.set_day(2023, 3, 5, Some("day")).unwrap();

        let month = store.get_month(2024, 3);
        assert_eq!(month.len(), 2);
        assert_eq!(month.get(&5), Some(&"day"));
        assert_eq!(month.get(&31), Some(&"night"));
    }

    #[test]
    fn test_get_month_empty_for_unpopulated_month() {
        let store = WorkedDayStore::new();
        assert!(store.get_month(2024, 7).is_empty());
    }

    #[test]
    fn test_records_round_trip() {
        let mut store = WorkedDayStore::new();
        store.set_day(2023, 12, 31, Some("night")).unwrap();
        store.set_day(2024, 1, 1, Some("overtime")).unwrap();
        store.set_day(2024, 6, 15, Some("day")).unwrap();

        let records = store.to_records();
        assert_eq!(records.len(), 3);
        // Ordered by date.
        assert_eq!(records[0].year, 2023);
        assert_eq!(records[2], WorkedDay {
            year: 2024,
            month: 6,
            day: 15,
            shift_type: "day".to_string(),
        });

        assert_eq!(WorkedDayStore::from_records(records), store);
    }

    #[test]
    fn test_from_records_drops_invalid_and_keeps_rest() {
        let records = vec![
            WorkedDay {
                year: 2024,
                month: 2,
                day: 30,
                shift_type: "day".to_string(),
            },
            WorkedDay {
                year: 2024,
                month: 2,
                day: 29,
                shift_type: "day".to_string(),
            },
            WorkedDay {
                year: 2024,
                month: 3,
                day: 1,
                shift_type: String::new(),
            },
        ];
        let store = WorkedDayStore::from_records(records);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_day(2024, 2, 29), Some("day"));
    }
}
