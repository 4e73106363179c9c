//! Shift-type model and related types.
//!
//! A shift type is a named template of paid hours, an overtime percentage and
//! display attributes. Worked days reference shift types by key.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{EngineError, EngineResult};

/// A shift-type definition.
///
/// The `type_key` is the identity: unique within a catalog, referenced by
/// worked days, and stable across label changes. `hours` and
/// `overtime_multiplier` drive pay computation; everything else is display
/// data carried through to reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftType {
    /// Unique key within the catalog (e.g. "day", "night").
    #[serde(rename = "type")]
    pub type_key: String,
    /// Display label in the active locale.
    pub label: String,
    /// Display color, cosmetic only.
    pub color: String,
    /// Paid hours for one instance of this shift. Must be positive.
    pub hours: Decimal,
    /// Percentage added on top of base pay. Applies only when positive.
    pub overtime_multiplier: Decimal,
    /// Display-only start of the work-time window (e.g. "07:00").
    #[serde(default)]
    pub start_time: Option<String>,
    /// Display-only end of the work-time window.
    #[serde(default)]
    pub end_time: Option<String>,
}

impl ShiftType {
    /// Validates the definition.
    ///
    /// A shift type must have a non-empty label, positive hours and a
    /// non-negative overtime multiplier.
    pub fn validate(&self) -> EngineResult<()> {
        if self.label.trim().is_empty() {
            return Err(EngineError::InvalidShift {
                type_key: self.type_key.clone(),
                message: "label must not be empty".to_string(),
            });
        }
        if self.hours <= Decimal::ZERO {
            return Err(EngineError::InvalidShift {
                type_key: self.type_key.clone(),
                message: "hours must be positive".to_string(),
            });
        }
        if self.overtime_multiplier < Decimal::ZERO {
            return Err(EngineError::InvalidShift {
                type_key: self.type_key.clone(),
                message: "overtime multiplier must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Applies a patch, returning the merged definition. The key never
    /// changes; the merged result is not validated here.
    pub fn merged(&self, patch: &ShiftTypePatch) -> ShiftType {
        ShiftType {
            type_key: self.type_key.clone(),
            label: patch.label.clone().unwrap_or_else(|| self.label.clone()),
            color: patch.color.clone().unwrap_or_else(|| self.color.clone()),
            hours: patch.hours.unwrap_or(self.hours),
            overtime_multiplier: patch
                .overtime_multiplier
                .unwrap_or(self.overtime_multiplier),
            start_time: match &patch.start_time {
                Some(value) => value.clone(),
                None => self.start_time.clone(),
            },
            end_time: match &patch.end_time {
                Some(value) => value.clone(),
                None => self.end_time.clone(),
            },
        }
    }
}

/// A partial update to a shift type.
///
/// Absent fields keep their current value. For the work-time window an
/// explicit `null` clears the value, while omitting the field keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShiftTypePatch {
    /// New display label.
    pub label: Option<String>,
    /// New display color.
    pub color: Option<String>,
    /// New paid hours.
    pub hours: Option<Decimal>,
    /// New overtime percentage.
    pub overtime_multiplier: Option<Decimal>,
    /// New start time; `Some(None)` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub start_time: Option<Option<String>>,
    /// New end time; `Some(None)` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub end_time: Option<Option<String>>,
}

/// Distinguishes an absent field from an explicit `null`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample() -> ShiftType {
        ShiftType {
            type_key: "day".to_string(),
            label: "Day".to_string(),
            color: "#4caf50".to_string(),
            hours: dec("7.5"),
            overtime_multiplier: Decimal::ZERO,
            start_time: Some("07:00".to_string()),
            end_time: Some("14:30".to_string()),
        }
    }

    #[test]
    fn test_valid_shift_type_passes_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_zero_hours_fails_validation() {
        let mut shift = sample();
        shift.hours = Decimal::ZERO;
        match shift.validate().unwrap_err() {
            EngineError::InvalidShift { type_key, message } => {
                assert_eq!(type_key, "day");
                assert!(message.contains("hours"));
            }
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_hours_fails_validation() {
        let mut shift = sample();
        shift.hours = dec("-1");
        assert!(shift.validate().is_err());
    }

    #[test]
    fn test_negative_overtime_multiplier_fails_validation() {
        let mut shift = sample();
        shift.overtime_multiplier = dec("-5");
        assert!(shift.validate().is_err());
    }

    #[test]
    fn test_blank_label_fails_validation() {
        let mut shift = sample();
        shift.label = "  ".to_string();
        assert!(shift.validate().is_err());
    }

    #[test]
    fn test_merged_keeps_unpatched_fields() {
        let shift = sample();
        let patch = ShiftTypePatch {
            hours: Some(dec("8")),
            ..ShiftTypePatch::default()
        };
        let merged = shift.merged(&patch);
        assert_eq!(merged.hours, dec("8"));
        assert_eq!(merged.label, "Day");
        assert_eq!(merged.start_time.as_deref(), Some("07:00"));
    }

    #[test]
    fn test_merged_clears_times_on_explicit_null() {
        let shift = sample();
        let patch = ShiftTypePatch {
            start_time: Some(None),
            end_time: Some(None),
            ..ShiftTypePatch::default()
        };
        let merged = shift.merged(&patch);
        assert_eq!(merged.start_time, None);
        assert_eq!(merged.end_time, None);
    }

    #[test]
    fn test_merged_never_changes_key() {
        let shift = sample();
        let patch = ShiftTypePatch {
            label: Some("Renamed".to_string()),
            ..ShiftTypePatch::default()
        };
        assert_eq!(shift.merged(&patch).type_key, "day");
    }

    #[test]
    fn test_patch_deserializes_missing_vs_null_times() {
        let patch: ShiftTypePatch = serde_json::from_str(r#"{"hours": "8"}"#).unwrap();
        assert_eq!(patch.start_time, None);

        let patch: ShiftTypePatch = serde_json::from_str(r#"{"start_time": null}"#).unwrap();
        assert_eq!(patch.start_time, Some(None));

        let patch: ShiftTypePatch = serde_json::from_str(r#"{"start_time": "06:00"}"#).unwrap();
        assert_eq!(patch.start_time, Some(Some("06:00".to_string())));
    }

    #[test]
    fn test_shift_type_serialization_round_trip() {
        let shift = sample();
        let json = serde_json::to_string(&shift).unwrap();
        assert!(json.contains("\"type\":\"day\""));
        let back: ShiftType = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, back);
    }
}
