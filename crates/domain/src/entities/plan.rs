use crate::enums::PlanStatus;
use crate::error::DomainError;
use crate::value_objects::Percentage;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog entry for a purchasable plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    pub id: String,
    pub name: String,
    pub min_invest: Decimal,
    pub max_invest: Decimal,
    pub roi_percent: Percentage,
    pub duration_days: u32,
    #[serde(default)]
    pub description: String,
}

impl InvestmentPlan {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        min_invest: Decimal,
        max_invest: Decimal,
        roi_percent: Decimal,
        duration_days: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            min_invest,
            max_invest,
            roi_percent: Percentage(roi_percent),
            duration_days,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidPlan {
            plan: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.min_invest <= Decimal::ZERO {
            return Err(invalid("minimum investment must be positive"));
        }
        if self.min_invest > self.max_invest {
            return Err(invalid("minimum investment exceeds maximum"));
        }
        if self.roi_percent.0 < Decimal::ZERO {
            return Err(invalid("roi cannot be negative"));
        }
        if self.duration_days == 0 {
            return Err(invalid("duration must be at least one day"));
        }
        Ok(())
    }
}

/// A plan the user already bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasedPlan {
    pub id: String,
    pub plan_name: String,
    pub amount: Decimal,
    pub roi_percent: Percentage,
    pub status: PlanStatus,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub earned: Decimal,
    pub total_payout: Decimal,
}

impl PurchasedPlan {
    /// Days between purchase and expiry.
    pub fn term_days(&self) -> i64 {
        (self.expiry_date - self.purchase_date).num_days()
    }

    /// Share of the total payout already earned, in `[0, 100]`.
    ///
    /// A plan with no payout shows an empty bar.
    pub fn earnings_progress(&self) -> Decimal {
        if self.total_payout <= Decimal::ZERO || self.earned <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        if self.earned >= self.total_payout {
            return Decimal::ONE_HUNDRED;
        }
        self.earned / self.total_payout * Decimal::ONE_HUNDRED
    }
}

/// Purchased plans, optionally restricted to one status.
pub fn filter_purchased(plans: &[PurchasedPlan], status: Option<PlanStatus>) -> Vec<&PurchasedPlan> {
    plans
        .iter()
        .filter(|p| status.is_none_or(|s| p.status == s))
        .collect()
}
