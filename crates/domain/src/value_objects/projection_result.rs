use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expected outcome of investing `principal` into a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub principal: Decimal,
    pub roi_amount: Decimal,
    pub expected_payout: Decimal,
    pub commission_amount: Decimal,
    pub maturity_days: u32,
}
