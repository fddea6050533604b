use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the three volume axes used for tier qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// The user's own investment.
    SelfVolume,
    /// First-line referrals' investment.
    Direct,
    /// Deeper-network investment.
    Indirect,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::SelfVolume, Metric::Direct, Metric::Indirect];

    pub fn label(self) -> &'static str {
        match self {
            Metric::SelfVolume => "self",
            Metric::Direct => "direct",
            Metric::Indirect => "indirect",
        }
    }
}

/// Volumes of one user for one evaluation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolumeSnapshot {
    pub self_volume: Decimal,
    pub direct_volume: Decimal,
    pub indirect_volume: Decimal,
}

impl VolumeSnapshot {
    pub fn new(self_volume: Decimal, direct_volume: Decimal, indirect_volume: Decimal) -> Self {
        Self {
            self_volume,
            direct_volume,
            indirect_volume,
        }
    }

    /// Builds a snapshot, rejecting negative volumes.
    ///
    /// # Errors
    /// Returns [`DomainError::NegativeVolume`] for the first negative metric.
    pub fn try_new(
        self_volume: Decimal,
        direct_volume: Decimal,
        indirect_volume: Decimal,
    ) -> Result<Self, DomainError> {
        let snapshot = Self::new(self_volume, direct_volume, indirect_volume);
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match Metric::ALL.into_iter().find(|m| self.get(*m) < Decimal::ZERO) {
            Some(metric) => Err(DomainError::NegativeVolume {
                metric: metric.label(),
            }),
            None => Ok(()),
        }
    }

    pub fn get(&self, metric: Metric) -> Decimal {
        match metric {
            Metric::SelfVolume => self.self_volume,
            Metric::Direct => self.direct_volume,
            Metric::Indirect => self.indirect_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_negative_volumes_rejected() {
        assert!(VolumeSnapshot::try_new(dec!(0), dec!(0), dec!(0)).is_ok());
        assert_eq!(
            VolumeSnapshot::try_new(dec!(100), dec!(-5), dec!(-1)),
            Err(DomainError::NegativeVolume { metric: "direct" })
        );
        assert_eq!(
            VolumeSnapshot::new(dec!(-0.01), dec!(0), dec!(0)).validate(),
            Err(DomainError::NegativeVolume { metric: "self" })
        );
    }
}
