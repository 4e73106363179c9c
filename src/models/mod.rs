//! Core data models for the worklog engine.
//!
//! This module contains all the domain models used throughout the engine.

mod settings;
mod shift_type;
mod worked_day;

pub use settings::{CurrencyConfig, SymbolPosition};
pub use shift_type::{ShiftType, ShiftTypePatch};
pub use worked_day::WorkedDay;
