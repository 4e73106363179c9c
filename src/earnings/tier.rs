//! Achievement tiers.
//!
//! A cosmetic signal for a day's earnings relative to the base rate. The UI
//! shows the tier symbol next to exceptional days; nothing else in the
//! engine depends on it.

use rust_decimal::Decimal;

/// Achievement tier for a single day's earnings, rarest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementTier {
    /// Earnings of at least 25x the base rate.
    Trophy,
    /// Earnings of at least 20x the base rate.
    Gold,
    /// Earnings of at least 15x the base rate.
    Silver,
    /// Earnings of at least 10x the base rate.
    Bronze,
}

impl AchievementTier {
    /// The symbol shown for this tier.
    pub fn symbol(self) -> &'static str {
        match self {
            AchievementTier::Trophy => "\u{1F3C6}",
            AchievementTier::Gold => "\u{1F947}",
            AchievementTier::Silver => "\u{1F948}",
            AchievementTier::Bronze => "\u{1F949}",
        }
    }

    /// Earnings threshold as a multiple of the base rate.
    fn threshold(self) -> Decimal {
        match self {
            AchievementTier::Trophy => Decimal::from(25),
            AchievementTier::Gold => Decimal::from(20),
            AchievementTier::Silver => Decimal::from(15),
            AchievementTier::Bronze => Decimal::from(10),
        }
    }
}

/// Determines the achievement tier for a day's earnings.
///
/// Thresholds are inclusive and checked from the rarest tier down, so the
/// highest matching tier wins; earnings below 10x the base rate (or any
/// earnings with a non-positive base rate) yield no tier.
pub fn achievement_tier(daily_earnings: Decimal, base_rate: Decimal) -> Option<AchievementTier> {
    if base_rate <= Decimal::ZERO {
        return None;
    }
    [
        AchievementTier::Trophy,
        AchievementTier::Gold,
        AchievementTier::Silver,
        AchievementTier::Bronze,
    ]
    .into_iter()
    .find(|tier| daily_earnings >= base_rate * tier.threshold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_below_lowest_threshold_yields_no_tier() {
        assert_eq!(achievement_tier(dec("2999"), dec("300")), None);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let rate = dec("300");
        assert_eq!(
            achievement_tier(dec("3000"), rate),
            Some(AchievementTier::Bronze)
        );
        assert_eq!(
            achievement_tier(dec("4500"), rate),
            Some(AchievementTier::Silver)
        );
        assert_eq!(
            achievement_tier(dec("6000"), rate),
            Some(AchievementTier::Gold)
        );
        assert_eq!(
            achievement_tier(dec("7500"), rate),
            Some(AchievementTier::Trophy)
        );
    }

    #[test]
    fn test_highest_matching_tier_wins() {
        assert_eq!(
            achievement_tier(dec("100000"), dec("300")),
            Some(AchievementTier::Trophy)
        );
    }

    #[test]
    fn test_just_under_a_boundary_takes_the_tier_below() {
        assert_eq!(
            achievement_tier(dec("5999.99"), dec("300")),
            Some(AchievementTier::Silver)
        );
    }

    #[test]
    fn test_non_positive_base_rate_yields_no_tier() {
        assert_eq!(achievement_tier(dec("1000"), Decimal::ZERO), None);
        assert_eq!(achievement_tier(Decimal::ZERO, Decimal::ZERO), None);
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols = [
            AchievementTier::Trophy.symbol(),
            AchievementTier::Gold.symbol(),
            AchievementTier::Silver.symbol(),
            AchievementTier::Bronze.symbol(),
        ];
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
