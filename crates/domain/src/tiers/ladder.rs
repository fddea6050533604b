use crate::entities::TierThreshold;
use crate::error::DomainError;
use crate::value_objects::{Metric, MetricRange, VolumeSnapshot};
use rust_decimal::Decimal;

use super::{TierLocation, TierSelection, locate_tier_with};

/// A validated, ordered tier list.
///
/// Every range has `min <= max`, names are non-empty and neither bound of a
/// metric decreases from one tier to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierLadder {
    tiers: Vec<TierThreshold>,
}

impl TierLadder {
    pub fn new(tiers: Vec<TierThreshold>) -> Result<Self, DomainError> {
        for (index, tier) in tiers.iter().enumerate() {
            if tier.name.trim().is_empty() {
                return Err(DomainError::UnnamedTier { index });
            }
            tier.validate()?;
        }
        for pair in tiers.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            for metric in Metric::ALL {
                let (a, b) = (prev.range(metric), next.range(metric));
                if b.min < a.min || b.max < a.max {
                    return Err(DomainError::TierOrder {
                        tier: next.name.clone(),
                        metric: metric.label(),
                    });
                }
            }
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[TierThreshold] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn locate(&self, snapshot: &VolumeSnapshot, selection: TierSelection) -> TierLocation<'_> {
        locate_tier_with(snapshot, &self.tiers, selection)
    }

    pub fn into_inner(self) -> Vec<TierThreshold> {
        self.tiers
    }
}

fn band(min: i64, max: i64) -> MetricRange {
    MetricRange {
        min: Decimal::from(min),
        max: Decimal::from(max),
    }
}

/// The monthly star salary ladder.
pub fn star_ladder() -> TierLadder {
    let tier = |name: &str, s: (i64, i64), d: (i64, i64), i: (i64, i64)| {
        TierThreshold::new(name, band(s.0, s.1), band(d.0, d.1), band(i.0, i.1))
    };
    TierLadder {
        tiers: vec![
            tier("Bronze Star", (100, 300), (1_000, 3_000), (3_000, 9_000)),
            tier("Silver Star", (300, 500), (3_000, 5_000), (9_000, 15_000)),
            tier("Gold Star", (500, 800), (5_000, 10_000), (15_000, 30_000)),
            tier("Platinum Star", (800, 1_600), (10_000, 16_000), (30_000, 48_000)),
        ],
    }
}
