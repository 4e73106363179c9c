//! Earnings and export engine for a calendar-based work shift tracker.
//!
//! This crate provides the data layer behind a shift-tracking calendar: a
//! catalog of shift types, a sparse store of worked days, pure earnings
//! computation from an hourly base rate, and formatted summary/CSV export.

#![warn(missing_docs)]

pub mod api;
pub mod catalog;
pub mod earnings;
pub mod error;
pub mod locale;
pub mod models;
pub mod report;
pub mod storage;
pub mod store;
