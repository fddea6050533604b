//! Rank reward rules.

use crate::entities::{RankReward, RewardClaim};
use crate::enums::RankStatus;
use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which ranks to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankFilter {
    #[default]
    All,
    Status(RankStatus),
}

impl RankFilter {
    pub fn matches(&self, rank: &RankReward) -> bool {
        match self {
            RankFilter::All => true,
            RankFilter::Status(status) => rank.status == *status,
        }
    }
}

pub fn filter_ranks(ranks: &[RankReward], filter: RankFilter) -> Vec<&RankReward> {
    ranks.iter().filter(|r| filter.matches(r)).collect()
}

/// Counts shown under the rank list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankSummary {
    pub claimable: usize,
    pub claimed: usize,
    pub locked: usize,
    /// Sum of rewards waiting to be claimed.
    pub claimable_total: Decimal,
}

impl RankSummary {
    pub fn from_ranks(ranks: &[RankReward]) -> Self {
        ranks.iter().fold(Self::default(), |mut acc, rank| {
            match rank.status {
                RankStatus::Claimable => {
                    acc.claimable += 1;
                    acc.claimable_total += rank.reward;
                }
                RankStatus::Claimed => acc.claimed += 1,
                RankStatus::Locked => acc.locked += 1,
            }
            acc
        })
    }
}

/// Claims a rank reward, moving it from `Claimable` to `Claimed`.
///
/// # Errors
///
/// Returns [`ValidationError::NotClaimable`] for locked or already claimed
/// ranks; the rank is left untouched.
pub fn claim_rank(rank: &mut RankReward) -> Result<RewardClaim, ValidationError> {
    if rank.status != RankStatus::Claimable {
        return Err(ValidationError::NotClaimable {
            rank: rank.name.clone(),
            status: rank.status.to_string(),
        });
    }
    rank.status = RankStatus::Claimed;
    Ok(RewardClaim {
        claim_id: Uuid::new_v4(),
        rank_id: rank.id.clone(),
        rank_name: rank.name.clone(),
        amount: rank.reward,
    })
}
