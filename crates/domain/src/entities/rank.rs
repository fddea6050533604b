use crate::enums::{RankBadge, RankStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One-off reward unlocked by reaching a rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankReward {
    pub id: String,
    pub name: String,
    pub requirement: String,
    pub reward: Decimal,
    pub status: RankStatus,
    pub badge: RankBadge,
}

/// Receipt issued when a rank reward is claimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardClaim {
    pub claim_id: Uuid,
    pub rank_id: String,
    pub rank_name: String,
    pub amount: Decimal,
}
