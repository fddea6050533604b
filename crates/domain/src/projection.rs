//! Investment projection calculator.

use crate::entities::InvestmentPlan;
use crate::error::ValidationError;
use crate::value_objects::{Percentage, ProjectionResult};
use rust_decimal::Decimal;

/// Flat referral commission paid to the direct sponsor (10%).
pub const DIRECT_COMMISSION_RATE: Percentage = Percentage(Decimal::TEN);

/// Projects the payout of investing `principal` into `plan`.
///
/// The principal must be positive and inside the plan's `[min, max]` bounds.
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first bound that fails.
pub fn project(principal: Decimal, plan: &InvestmentPlan) -> Result<ProjectionResult, ValidationError> {
    if principal <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    if principal < plan.min_invest {
        return Err(ValidationError::BelowPlanMinimum {
            plan: plan.name.clone(),
            minimum: plan.min_invest,
        });
    }
    if principal > plan.max_invest {
        return Err(ValidationError::AbovePlanMaximum {
            plan: plan.name.clone(),
            maximum: plan.max_invest,
        });
    }

    let too_large = || ValidationError::AmountTooLarge {
        plan: plan.name.clone(),
    };
    let roi_amount = plan.roi_percent.checked_of(principal).ok_or_else(too_large)?;
    let expected_payout = principal.checked_add(roi_amount).ok_or_else(too_large)?;
    let commission_amount = DIRECT_COMMISSION_RATE
        .checked_of(principal)
        .ok_or_else(too_large)?;
    Ok(ProjectionResult {
        principal,
        roi_amount,
        expected_payout,
        commission_amount,
        maturity_days: plan.duration_days,
    })
}
