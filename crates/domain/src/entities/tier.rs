use crate::error::DomainError;
use crate::value_objects::{Metric, MetricRange, VolumeSnapshot};
use serde::{Deserialize, Serialize};

/// A named star level and the volume bands that unlock it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThreshold {
    pub name: String,
    pub self_range: MetricRange,
    pub direct_range: MetricRange,
    pub indirect_range: MetricRange,
}

impl TierThreshold {
    pub fn new(
        name: impl Into<String>,
        self_range: MetricRange,
        direct_range: MetricRange,
        indirect_range: MetricRange,
    ) -> Self {
        Self {
            name: name.into(),
            self_range,
            direct_range,
            indirect_range,
        }
    }

    pub fn range(&self, metric: Metric) -> &MetricRange {
        match metric {
            Metric::SelfVolume => &self.self_range,
            Metric::Direct => &self.direct_range,
            Metric::Indirect => &self.indirect_range,
        }
    }

    /// True when every metric of the snapshot reaches this tier's minimum.
    pub fn is_qualified(&self, snapshot: &VolumeSnapshot) -> bool {
        Metric::ALL
            .iter()
            .all(|&m| self.range(m).is_met_by(snapshot.get(m)))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for metric in Metric::ALL {
            self.range(metric).validate()?;
        }
        Ok(())
    }
}
