//! Export rows, summary blocks and CSV assembly.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::ShiftCatalog;
use crate::earnings::shift_pay;
use crate::locale::Locale;
use crate::models::{CurrencyConfig, ShiftType};
use crate::store::WorkedDayStore;

use super::AmountFormatter;

/// Field delimiter of the export format.
///
/// A literal pipe, not a comma: amounts contain spaces and locale-dependent
/// separators, and existing exported files rely on this delimiter.
const DELIMITER: char = '|';

/// UTF-8 byte-order mark prefixed to every export so spreadsheet tools
/// detect the encoding.
const BOM: char = '\u{FEFF}';

/// Preferred summary ordering for the built-in shift types; custom types
/// follow in catalog-insertion order.
const PREFERRED_ORDER: [&str; 4] = ["day", "overtime", "evening", "night"];

/// One formatted export row: a single worked day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    /// ISO calendar date.
    pub date: String,
    /// Localized weekday abbreviation.
    pub weekday: String,
    /// Shift-type display label.
    pub label: String,
    /// Start of the work-time window, or a placeholder.
    pub start_time: String,
    /// End of the work-time window, or a placeholder.
    pub end_time: String,
    /// Paid hours, one decimal digit.
    pub hours: String,
    /// Formatted earnings with currency symbol.
    pub earnings: String,
}

impl ExportRow {
    fn to_line(&self) -> String {
        [
            self.date.as_str(),
            self.weekday.as_str(),
            self.label.as_str(),
            self.start_time.as_str(),
            self.end_time.as_str(),
            self.hours.as_str(),
            self.earnings.as_str(),
        ]
        .join(&DELIMITER.to_string())
    }
}

/// Produces localized summary rows and CSV exports from engine snapshots.
#[derive(Debug)]
pub struct ReportFormatter<'a> {
    store: &'a WorkedDayStore,
    catalog: &'a ShiftCatalog,
    base_rate: Decimal,
    locale: Locale,
    amounts: AmountFormatter,
}

impl<'a> ReportFormatter<'a> {
    /// Creates a formatter over snapshots of the store and catalog.
    pub fn new(
        store: &'a WorkedDayStore,
        catalog: &'a ShiftCatalog,
        base_rate: Decimal,
        locale: Locale,
        currency: CurrencyConfig,
    ) -> Self {
        ReportFormatter {
            store,
            catalog,
            base_rate,
            locale,
            amounts: AmountFormatter::new(locale, currency),
        }
    }

    /// One row per worked day in the month, in date order.
    ///
    /// Days referencing a deleted shift type are skipped. The work-time
    /// columns carry the localized "not defined" placeholder only when both
    /// start and end time are absent; a one-sided window prints the present
    /// side and leaves the other empty.
    pub fn month_rows(&self, year: i32, month: u32) -> Vec<ExportRow> {
        self.store
            .get_month(year, month)
            .iter()
            .filter_map(|(day, type_key)| {
                let shift = self.catalog.get(type_key)?;
                let date = chrono::NaiveDate::from_ymd_opt(year, month, *day)?;
                let (start_time, end_time) = match (&shift.start_time, &shift.end_time) {
                    (None, None) => (
                        self.locale.not_defined().to_string(),
                        self.locale.not_defined().to_string(),
                    ),
                    (start, end) => (
                        start.clone().unwrap_or_default(),
                        end.clone().unwrap_or_default(),
                    ),
                };
                Some(ExportRow {
                    date: date.format("%Y-%m-%d").to_string(),
                    weekday: self.locale.weekday_abbrev(date.weekday()).to_string(),
                    label: shift.label.clone(),
                    start_time,
                    end_time,
                    hours: self.amounts.hours(shift.hours),
                    earnings: self.amounts.currency(shift_pay(shift, self.base_rate)),
                })
            })
            .collect()
    }

    /// Summary lines for a month: one per shift type with at least one
    /// occurrence, then a totals line.
    pub fn month_summary(&self, year: i32, month: u32) -> Vec<String> {
        self.summary_lines(year, month..=month)
    }

    /// Summary lines for a whole year.
    pub fn year_summary(&self, year: i32) -> Vec<String> {
        self.summary_lines(year, 1..=12)
    }

    /// The monthly CSV export: header, rows, blank line, summary block.
    pub fn month_csv(&self, year: i32, month: u32) -> String {
        let mut out = String::new();
        out.push(BOM);
        out.push_str(&self.month_block(year, month));
        out.push('\n');
        out
    }

    /// The yearly CSV export.
    ///
    /// Per-month blocks (months with at least one worked day) separated by
    /// two blank lines, then three blank lines and a grand-total line.
    pub fn year_csv(&self, year: i32) -> String {
        let blocks: Vec<String> = (1..=12)
            .filter(|&month| !self.store.get_month(year, month).is_empty())
            .map(|month| self.month_block(year, month))
            .collect();

        let mut out = String::new();
        out.push(BOM);
        out.push_str(&blocks.join("\n\n\n"));
        out.push_str("\n\n\n\n");
        out.push_str(&self.grand_total_line(year, 1..=12));
        out.push('\n');
        out
    }

    /// Export filename for a month or (with `month` absent) a whole year.
    ///
    /// Encodes the period and the active currency-locale tag, e.g.
    /// `worklog-2024-03_nb-NO.csv`.
    pub fn export_file_name(&self, year: i32, month: Option<u32>) -> String {
        match month {
            Some(month) => format!("worklog-{}-{:02}_{}.csv", year, month, self.locale.tag()),
            None => format!("worklog-{}_{}.csv", year, self.locale.tag()),
        }
    }

    fn month_block(&self, year: i32, month: u32) -> String {
        let mut lines: Vec<String> = Vec::new();
        lines.push(self.locale.export_headers().join(&DELIMITER.to_string()));
        lines.extend(self.month_rows(year, month).iter().map(ExportRow::to_line));
        lines.push(String::new());
        lines.extend(self.month_summary(year, month));
        lines.join("\n")
    }

    /// Shift types in report order: the preferred built-in order first, then
    /// custom types in catalog-insertion order.
    fn ordered_types(&self) -> Vec<&ShiftType> {
        let mut ordered: Vec<&ShiftType> = PREFERRED_ORDER
            .iter()
            .filter_map(|key| self.catalog.get(key))
            .collect();
        ordered.extend(
            self.catalog
                .iter()
                .filter(|shift| !PREFERRED_ORDER.contains(&shift.type_key.as_str())),
        );
        ordered
    }

    /// Occurrence count for one shift type over a month range.
    fn count_occurrences(
        &self,
        year: i32,
        months: std::ops::RangeInclusive<u32>,
        type_key: &str,
    ) -> u32 {
        months
            .map(|month| {
                self.store
                    .get_month(year, month)
                    .values()
                    .filter(|key| **key == type_key)
                    .count() as u32
            })
            .sum()
    }

    fn summary_lines(&self, year: i32, months: std::ops::RangeInclusive<u32>) -> Vec<String> {
        let mut lines = Vec::new();
        for shift in self.ordered_types() {
            let days = self.count_occurrences(year, months.clone(), &shift.type_key);
            if days == 0 {
                continue;
            }
            let label = if shift.overtime_multiplier > Decimal::ZERO {
                format!(
                    "{} (+{}%)",
                    shift.label,
                    self.amounts.plain(shift.overtime_multiplier)
                )
            } else {
                shift.label.clone()
            };
            let hours = shift.hours * Decimal::from(days);
            let earnings = shift_pay(shift, self.base_rate) * Decimal::from(days);
            lines.push(format!(
                "{label}{DELIMITER}{} {}{DELIMITER}{}",
                self.amounts.hours(hours),
                self.locale.hours_unit(),
                self.amounts.currency(earnings)
            ));
        }
        lines.push(self.grand_total_line(year, months));
        lines
    }

    fn grand_total_line(&self, year: i32, months: std::ops::RangeInclusive<u32>) -> String {
        let mut total_hours = Decimal::ZERO;
        let mut total_earnings = Decimal::ZERO;
        for shift in self.catalog.iter() {
            let days = self.count_occurrences(year, months.clone(), &shift.type_key);
            if days == 0 {
                continue;
            }
            total_hours += shift.hours * Decimal::from(days);
            total_earnings += shift_pay(shift, self.base_rate) * Decimal::from(days);
        }
        format!(
            "{}{DELIMITER}{} {}{DELIMITER}{}",
            self.locale.totals_label(),
            self.amounts.hours(total_hours),
            self.locale.hours_unit(),
            self.amounts.currency(total_earnings)
        )
    }
}
