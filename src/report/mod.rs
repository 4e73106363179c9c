//! Report formatting: on-screen summary rows and CSV export.
//!
//! Turns earnings-engine output into formatted, localized tabular data. The
//! export format contract: fields are separated by a literal pipe (`|`), the
//! byte stream starts with a UTF-8 byte-order mark, amounts use a space as
//! the thousands separator with zero or exactly two decimal digits.

mod amount;
mod export;

pub use amount::AmountFormatter;
pub use export::{ExportRow, ReportFormatter};
