//! Pay for a single shift instance.

use rust_decimal::Decimal;

use crate::models::ShiftType;

/// Computes the pay for one instance of a shift.
///
/// The pay is `base_rate * hours`, increased by the overtime percentage when
/// that percentage is strictly positive:
///
/// ```text
/// pay = base_rate * hours * (1 + overtime_multiplier / 100)
/// ```
///
/// An overtime multiplier of zero (or below) applies no premium at all: the
/// multiplicative term is skipped, not computed as a degenerate `* 1`, so
/// `shift_pay(s, r) == r * s.hours` holds exactly for such shifts.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use worklog_engine::earnings::shift_pay;
/// use worklog_engine::models::ShiftType;
///
/// let evening = ShiftType {
///     type_key: "evening".to_string(),
///     label: "Evening".to_string(),
///     color: "#ff9800".to_string(),
///     hours: Decimal::from_str("7.3").unwrap(),
///     overtime_multiplier: Decimal::from_str("50").unwrap(),
///     start_time: None,
///     end_time: None,
/// };
/// assert_eq!(
///     shift_pay(&evening, Decimal::from_str("300").unwrap()),
///     Decimal::from_str("3285.0").unwrap()
/// );
/// ```
pub fn shift_pay(shift: &ShiftType, base_rate: Decimal) -> Decimal {
    let base_pay = base_rate * shift.hours;
    if shift.overtime_multiplier > Decimal::ZERO {
        base_pay * (Decimal::ONE + shift.overtime_multiplier / Decimal::ONE_HUNDRED)
    } else {
        base_pay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn shift(hours: &str, overtime: &str) -> ShiftType {
        ShiftType {
            type_key: "test".to_string(),
            label: "Test".to_string(),
            color: "#000000".to_string(),
            hours: dec(hours),
            overtime_multiplier: dec(overtime),
            start_time: None,
            end_time: None,
        }
    }

    /// SP-001: day shift without overtime
    #[test]
    fn test_day_shift_without_overtime() {
        assert_eq!(shift_pay(&shift("7.3", "0"), dec("300")), dec("2190.0"));
    }

    /// SP-002: evening shift with 50% overtime
    #[test]
    fn test_evening_shift_with_50_percent_overtime() {
        assert_eq!(shift_pay(&shift("7.3", "50"), dec("300")), dec("3285.0"));
    }

    /// SP-003: 100% overtime doubles the pay
    #[test]
    fn test_100_percent_overtime_doubles_pay() {
        assert_eq!(shift_pay(&shift("7.5", "100"), dec("200")), dec("3000.0"));
    }

    /// SP-004: zero base rate yields zero pay
    #[test]
    fn test_zero_base_rate_yields_zero() {
        assert_eq!(shift_pay(&shift("7.5", "50"), dec("0")), dec("0"));
    }

    #[test]
    fn test_zero_multiplier_is_exact_base_times_hours() {
        let s = shift("7.3", "0");
        let rate = dec("300");
        assert_eq!(shift_pay(&s, rate), rate * s.hours);
    }

    #[test]
    fn test_fractional_multiplier() {
        // 12.5% on 8 hours at 100/h: 800 * 1.125 = 900
        assert_eq!(shift_pay(&shift("8", "12.5"), dec("100")), dec("900.000"));
    }

    proptest! {
        #[test]
        fn prop_zero_overtime_equals_rate_times_hours(
            rate in 0u32..100_000,
            hours_tenths in 1u32..240,
        ) {
            let s = shift(&format!("{}.{}", hours_tenths / 10, hours_tenths % 10), "0");
            let rate = Decimal::from(rate);
            prop_assert_eq!(shift_pay(&s, rate), rate * s.hours);
        }

        #[test]
        fn prop_general_formula_holds(
            rate in 0u32..100_000,
            hours_tenths in 1u32..240,
            overtime in 1u32..400,
        ) {
            let s = shift(
                &format!("{}.{}", hours_tenths / 10, hours_tenths % 10),
                &overtime.to_string(),
            );
            let rate = Decimal::from(rate);
            let expected = rate
                * s.hours
                * (Decimal::ONE + s.overtime_multiplier / Decimal::ONE_HUNDRED);
            prop_assert_eq!(shift_pay(&s, rate), expected);
        }

        #[test]
        fn prop_pay_scales_linearly_with_rate(
            rate in 1u32..10_000,
            overtime in 0u32..200,
        ) {
            let s = shift("7.5", &overtime.to_string());
            let single = shift_pay(&s, Decimal::from(rate));
            let double = shift_pay(&s, Decimal::from(rate) * Decimal::TWO);
            prop_assert_eq!(double, single * Decimal::TWO);
        }
    }
}
