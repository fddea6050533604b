use crate::entities::TierThreshold;
use crate::value_objects::{Metric, VolumeSnapshot};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Percentage of the way from `min` to `max`, clamped to `[0, 100]`.
///
/// Values at or above `max` are full, values below `min` are empty. A
/// degenerate band (`max <= min`) is treated as full once reached.
pub fn progress_toward(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    if value >= max {
        return Decimal::ONE_HUNDRED;
    }
    if value < min {
        return Decimal::ZERO;
    }
    let span = max - min;
    if span <= Decimal::ZERO {
        return Decimal::ONE_HUNDRED;
    }
    let pct = (value - min) / span * Decimal::ONE_HUNDRED;
    pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Per-metric progress toward a tier, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierProgress {
    pub self_volume: Decimal,
    pub direct_volume: Decimal,
    pub indirect_volume: Decimal,
}

impl TierProgress {
    pub fn toward(snapshot: &VolumeSnapshot, tier: &TierThreshold) -> Self {
        let pct = |m: Metric| tier.range(m).progress(snapshot.get(m));
        Self {
            self_volume: pct(Metric::SelfVolume),
            direct_volume: pct(Metric::Direct),
            indirect_volume: pct(Metric::Indirect),
        }
    }

    pub fn get(&self, metric: Metric) -> Decimal {
        match metric {
            Metric::SelfVolume => self.self_volume,
            Metric::Direct => self.direct_volume,
            Metric::Indirect => self.indirect_volume,
        }
    }

    /// Mean of the three metrics.
    pub fn overall(&self) -> Decimal {
        (self.self_volume + self.direct_volume + self.indirect_volume) / Decimal::from(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(progress_toward(dec!(300), dec!(300), dec!(500)), dec!(0));
        assert_eq!(progress_toward(dec!(500), dec!(300), dec!(500)), dec!(100));
        assert_eq!(progress_toward(dec!(400), dec!(300), dec!(500)), dec!(50));
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress_toward(dec!(10), dec!(300), dec!(500)), dec!(0));
        assert_eq!(progress_toward(dec!(24000), dec!(15000), dec!(30000)), dec!(60));
        assert_eq!(progress_toward(dec!(99999), dec!(300), dec!(500)), dec!(100));
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(progress_toward(dec!(300), dec!(300), dec!(300)), dec!(100));
        assert_eq!(progress_toward(dec!(299), dec!(300), dec!(300)), dec!(0));
    }

    #[test]
    fn test_progress_is_monotonic_and_bounded() {
        let (min, max) = (dec!(1000), dec!(3000));
        let mut previous = Decimal::ZERO;
        let mut value = Decimal::ZERO;
        while value <= dec!(4000) {
            let pct = progress_toward(value, min, max);
            assert!(pct >= previous, "progress dropped at {value}");
            assert!(pct >= Decimal::ZERO && pct <= Decimal::ONE_HUNDRED);
            previous = pct;
            value += dec!(37.5);
        }
    }

    #[test]
    fn test_tier_progress_overall() {
        let progress = TierProgress {
            self_volume: dec!(100),
            direct_volume: dec!(50),
            indirect_volume: dec!(0),
        };
        assert_eq!(progress.overall(), dec!(50));
        assert_eq!(progress.get(Metric::Direct), dec!(50));
    }
}
