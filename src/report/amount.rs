//! Locale- and currency-aware number formatting.
//!
//! All locale-conditional formatting lives here, selected once by
//! configuration instead of branching at every call site.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::locale::Locale;
use crate::models::{CurrencyConfig, SymbolPosition};

/// Formats amounts and hour totals for one locale and currency.
#[derive(Debug, Clone)]
pub struct AmountFormatter {
    locale: Locale,
    currency: CurrencyConfig,
}

impl AmountFormatter {
    /// Creates a formatter for the given locale and currency configuration.
    pub fn new(locale: Locale, currency: CurrencyConfig) -> Self {
        AmountFormatter { locale, currency }
    }

    /// Formats a monetary amount without the currency symbol.
    ///
    /// Thousands are grouped with a space. Whole amounts show no decimal
    /// digits; fractional amounts show exactly two, using the locale's
    /// decimal separator. Amounts are rounded to cents first.
    pub fn amount(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = rounded.abs().to_string();

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, format!("{:0<2}", frac_part)),
            None => (digits.as_str(), String::new()),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&group_thousands(int_part));
        if frac_part.chars().any(|c| c != '0') {
            out.push(self.locale.decimal_separator());
            out.push_str(&frac_part);
        }
        out
    }

    /// Formats a monetary amount with the configured currency symbol.
    pub fn currency(&self, value: Decimal) -> String {
        let amount = self.amount(value);
        match self.currency.position {
            SymbolPosition::Before => format!("{}{}", self.currency.symbol, amount),
            SymbolPosition::After => format!("{} {}", amount, self.currency.symbol),
        }
    }

    /// Formats an hour count with exactly one decimal digit.
    pub fn hours(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        let digits = rounded.to_string();
        match digits.split_once('.') {
            Some((int_part, frac_part)) => format!(
                "{}{}{}",
                int_part,
                self.locale.decimal_separator(),
                &frac_part[..1]
            ),
            None => format!("{}{}0", digits, self.locale.decimal_separator()),
        }
    }

    /// Formats a bare number with the locale's decimal separator, trailing
    /// zeros trimmed. Used for overtime-percentage annotations.
    pub fn plain(&self, value: Decimal) -> String {
        value
            .normalize()
            .to_string()
            .replace('.', &self.locale.decimal_separator().to_string())
    }
}

/// Inserts a space between every group of three digits, from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
