use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Volume band `[min, max]` for one metric of a tier.
///
/// `min` is the qualification threshold; `max` is where the progress bar
/// toward this tier fills up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl MetricRange {
    pub fn new(min: Decimal, max: Decimal) -> Result<Self, DomainError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Checks `min <= max`. Ranges built through serde skip `new`, so loaders
    /// call this after decoding.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.min > self.max {
            return Err(DomainError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn is_met_by(&self, value: Decimal) -> bool {
        value >= self.min
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// Percentage of the way from `min` to `max`, see
    /// [`progress_toward`](crate::tiers::progress_toward).
    pub fn progress(&self, value: Decimal) -> Decimal {
        crate::tiers::progress_toward(value, self.min, self.max)
    }
}
