//! The shift-type catalog.
//!
//! Holds the set of shift-type definitions, preserving insertion order (the
//! order matters for report layout). A fresh catalog contains the four
//! built-in shift types; users may add, edit and delete entries, and a reset
//! restores the built-ins.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::locale::{BuiltinSlot, Locale};
use crate::models::{ShiftType, ShiftTypePatch};

/// Canonical default color per built-in slot.
fn default_color(slot: BuiltinSlot) -> &'static str {
    match slot {
        BuiltinSlot::Day => "#4caf50",
        BuiltinSlot::Evening => "#ff9800",
        BuiltinSlot::Night => "#3f51b5",
        BuiltinSlot::Overtime => "#f44336",
    }
}

/// The built-in definition for a slot, labeled for the given locale.
pub fn builtin_shift_type(slot: BuiltinSlot, locale: Locale) -> ShiftType {
    let (hours, overtime, window) = match slot {
        BuiltinSlot::Day => (Decimal::new(75, 1), Decimal::ZERO, Some(("07:00", "14:30"))),
        BuiltinSlot::Evening => (
            Decimal::new(75, 1),
            Decimal::new(25, 0),
            Some(("14:30", "22:00")),
        ),
        BuiltinSlot::Night => (
            Decimal::new(75, 1),
            Decimal::new(50, 0),
            Some(("22:00", "05:30")),
        ),
        BuiltinSlot::Overtime => (Decimal::new(75, 1), Decimal::new(100, 0), None),
    };

    ShiftType {
        type_key: slot.key().to_string(),
        label: locale.builtin_label(slot).to_string(),
        color: default_color(slot).to_string(),
        hours,
        overtime_multiplier: overtime,
        start_time: window.map(|(start, _)| start.to_string()),
        end_time: window.map(|(_, end)| end.to_string()),
    }
}

/// An ordered collection of shift-type definitions, unique by key.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftCatalog {
    entries: Vec<ShiftType>,
}

impl ShiftCatalog {
    /// Creates a catalog seeded with the four built-in shift types.
    pub fn with_defaults(locale: Locale) -> Self {
        ShiftCatalog {
            entries: BuiltinSlot::ALL
                .into_iter()
                .map(|slot| builtin_shift_type(slot, locale))
                .collect(),
        }
    }

    /// Rebuilds a catalog from persisted entries.
    ///
    /// Invalid entries and duplicate keys are dropped (first occurrence
    /// wins); persistence is loaded tolerantly, never rejected.
    pub fn from_entries(entries: Vec<ShiftType>) -> Self {
        let mut catalog = ShiftCatalog {
            entries: Vec::with_capacity(entries.len()),
        };
        for entry in entries {
            if entry.validate().is_ok() && catalog.get(&entry.type_key).is_none() {
                catalog.entries.push(entry);
            }
        }
        catalog
    }

    /// The entries in insertion order.
    pub fn entries(&self) -> &[ShiftType] {
        &self.entries
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ShiftType> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a shift type by key.
    pub fn get(&self, type_key: &str) -> Option<&ShiftType> {
        self.entries.iter().find(|entry| entry.type_key == type_key)
    }

    /// Adds a new shift type at the end of the catalog.
    ///
    /// Fails with `DuplicateType` if the key is taken, or `InvalidShift` if
    /// the definition does not validate. The catalog is unchanged on error.
    pub fn add(&mut self, shift: ShiftType) -> EngineResult<()> {
        if self.get(&shift.type_key).is_some() {
            return Err(EngineError::DuplicateType {
                type_key: shift.type_key,
            });
        }
        shift.validate()?;
        self.entries.push(shift);
        Ok(())
    }

    /// Applies a patch to an existing shift type.
    ///
    /// The merged result is validated before it replaces the old definition,
    /// so a rejected update leaves the entry untouched.
    pub fn update(&mut self, type_key: &str, patch: &ShiftTypePatch) -> EngineResult<()> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.type_key == type_key)
            .ok_or_else(|| EngineError::ShiftTypeNotFound {
                type_key: type_key.to_string(),
            })?;

        let merged = self.entries[index].merged(patch);
        merged.validate()?;
        self.entries[index] = merged;
        Ok(())
    }

    /// Removes a shift type, returning the removed definition.
    ///
    /// Worked days referencing the key are NOT touched; they become orphaned
    /// and earn zero until the key is recreated (see the earnings engine).
    pub fn remove(&mut self, type_key: &str) -> EngineResult<ShiftType> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.type_key == type_key)
            .ok_or_else(|| EngineError::ShiftTypeNotFound {
                type_key: type_key.to_string(),
            })?;
        Ok(self.entries.remove(index))
    }

    /// Replaces the whole catalog with the built-in defaults.
    ///
    /// Custom entries are discarded.
    pub fn reset_to_defaults(&mut self, locale: Locale) {
        *self = ShiftCatalog::with_defaults(locale);
    }

    /// Switches the active locale.
    ///
    /// Built-in entries get the locale's label and their canonical default
    /// color back; custom entries keep their stored label and color.
    pub fn apply_locale(&mut self, locale: Locale) {
        for entry in &mut self.entries {
            if let Some(slot) = BuiltinSlot::from_key(&entry.type_key) {
                entry.label = locale.builtin_label(slot).to_string();
                entry.color = default_color(slot).to_string();
            }
        }
    }
}

impl Default for ShiftCatalog {
    fn default() -> Self {
        ShiftCatalog::with_defaults(Locale::default())
    }
}
