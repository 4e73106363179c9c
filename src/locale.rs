//! Bundled locales and the strings the engine consumes from them.
//!
//! The engine does not own translation: the UI carries full string tables.
//! Only the handful of strings that leak into computed data — default labels
//! for the built-in shift types, weekday abbreviations, export headers and
//! placeholders — are bundled here so reports can be produced without a UI.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    En,
    /// Norwegian Bokmål.
    Nb,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl Locale {
    /// The two-letter locale code, as persisted.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Nb => "nb",
        }
    }

    /// Resolves a persisted locale code; unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "nb" => Locale::Nb,
            _ => Locale::En,
        }
    }

    /// The currency-locale tag used in export filenames.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Nb => "nb-NO",
        }
    }

    /// The decimal separator used when formatting amounts.
    pub fn decimal_separator(self) -> char {
        match self {
            Locale::En => '.',
            Locale::Nb => ',',
        }
    }

    /// Default display label for a built-in shift-type slot.
    pub fn builtin_label(self, slot: BuiltinSlot) -> &'static str {
        match (self, slot) {
            (Locale::En, BuiltinSlot::Day) => "Day",
            (Locale::En, BuiltinSlot::Evening) => "Evening",
            (Locale::En, BuiltinSlot::Night) => "Night",
            (Locale::En, BuiltinSlot::Overtime) => "Overtime",
            (Locale::Nb, BuiltinSlot::Day) => "Dag",
            (Locale::Nb, BuiltinSlot::Evening) => "Kveld",
            (Locale::Nb, BuiltinSlot::Night) => "Natt",
            (Locale::Nb, BuiltinSlot::Overtime) => "Overtid",
        }
    }

    /// Abbreviation for a weekday, as shown in export rows.
    pub fn weekday_abbrev(self, weekday: Weekday) -> &'static str {
        match self {
            Locale::En => match weekday {
                Weekday::Mon => "Mon",
                Weekday::Tue => "Tue",
                Weekday::Wed => "Wed",
                Weekday::Thu => "Thu",
                Weekday::Fri => "Fri",
                Weekday::Sat => "Sat",
                Weekday::Sun => "Sun",
            },
            Locale::Nb => match weekday {
                Weekday::Mon => "man",
                Weekday::Tue => "tir",
                Weekday::Wed => "ons",
                Weekday::Thu => "tor",
                Weekday::Fri => "fre",
                Weekday::Sat => "lør",
                Weekday::Sun => "søn",
            },
        }
    }

    /// Column headers for the export row table.
    pub fn export_headers(self) -> [&'static str; 7] {
        match self {
            Locale::En => ["Date", "Day", "Shift", "From", "To", "Hours", "Earnings"],
            Locale::Nb => ["Dato", "Dag", "Vakt", "Fra", "Til", "Timer", "Lønn"],
        }
    }

    /// Placeholder printed when a shift type has no work-time window.
    pub fn not_defined(self) -> &'static str {
        match self {
            Locale::En => "not defined",
            Locale::Nb => "ikke angitt",
        }
    }

    /// Label of the totals line in summary blocks.
    pub fn totals_label(self) -> &'static str {
        match self {
            Locale::En => "Total",
            Locale::Nb => "Totalt",
        }
    }

    /// Unit suffix for hour totals in summary blocks.
    pub fn hours_unit(self) -> &'static str {
        match self {
            Locale::En => "h",
            Locale::Nb => "t",
        }
    }
}

/// The four built-in shift-type slots.
///
/// These exist in every fresh catalog and are restored by a catalog reset;
/// their keys double as the stable `ShiftType::type_key` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinSlot {
    /// Ordinary daytime shift.
    Day,
    /// Evening shift.
    Evening,
    /// Night shift.
    Night,
    /// Overtime shift.
    Overtime,
}

impl BuiltinSlot {
    /// All slots, in canonical order.
    pub const ALL: [BuiltinSlot; 4] = [
        BuiltinSlot::Day,
        BuiltinSlot::Evening,
        BuiltinSlot::Night,
        BuiltinSlot::Overtime,
    ];

    /// The stable catalog key for this slot.
    pub fn key(self) -> &'static str {
        match self {
            BuiltinSlot::Day => "day",
            BuiltinSlot::Evening => "evening",
            BuiltinSlot::Night => "night",
            BuiltinSlot::Overtime => "overtime",
        }
    }

    /// Looks a slot up by its catalog key.
    pub fn from_key(key: &str) -> Option<Self> {
        BuiltinSlot::ALL.into_iter().find(|slot| slot.key() == key)
    }
}
