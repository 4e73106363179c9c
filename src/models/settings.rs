//! Persisted user settings that shape formatting, not magnitudes.

use serde::{Deserialize, Serialize};

/// Where the currency symbol is placed relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// Symbol precedes the amount, no separating space ("$100").
    Before,
    /// Symbol follows the amount, separated by a single space ("100 kr").
    After,
}

/// Currency display configuration.
///
/// Cosmetic only: it never changes a computed magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// The currency symbol, e.g. "kr" or "$".
    pub symbol: String,
    /// Placement of the symbol.
    pub position: SymbolPosition,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        CurrencyConfig {
            symbol: "kr".to_string(),
            position: SymbolPosition::After,
        }
    }
}
