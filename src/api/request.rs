//! Request types for the worklog engine API.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{CurrencyConfig, ShiftType};

/// Body of `PUT /calendar/{year}/{month}/{day}`.
///
/// A `null` (or omitted) shift type erases the day.
#[derive(Debug, Clone, Deserialize)]
pub struct SetDayRequest {
    /// The shift-type key to assign, or nothing to erase.
    #[serde(default)]
    pub shift_type: Option<String>,
}

/// Body of `POST /catalog`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShiftTypeRequest {
    /// Unique key for the new shift type.
    #[serde(rename = "type")]
    pub type_key: String,
    /// Display label.
    pub label: String,
    /// Display color; a neutral default is used when omitted.
    #[serde(default = "default_color")]
    pub color: String,
    /// Paid hours for one instance.
    pub hours: Decimal,
    /// Overtime percentage, defaults to none.
    #[serde(default)]
    pub overtime_multiplier: Decimal,
    /// Display-only start of the work-time window.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Display-only end of the work-time window.
    #[serde(default)]
    pub end_time: Option<String>,
}

fn default_color() -> String {
    "#9e9e9e".to_string()
}

impl From<CreateShiftTypeRequest> for ShiftType {
    fn from(request: CreateShiftTypeRequest) -> Self {
        ShiftType {
            type_key: request.type_key,
            label: request.label,
            color: request.color,
            hours: request.hours,
            overtime_multiplier: request.overtime_multiplier,
            start_time: request.start_time,
            end_time: request.end_time,
        }
    }
}

/// Body of `PUT /settings`. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    /// New hourly base rate.
    pub base_rate: Option<Decimal>,
    /// New currency configuration.
    pub currency: Option<CurrencyConfig>,
    /// New locale code ("en" or "nb"; unknown codes fall back to "en").
    pub locale: Option<String>,
}
