//! In-memory account data for the signed-in user.

use super::{AccountRepository, read_fixture};
use crate::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use investdash_domain::entities::{
    DepositRecord, DrawWinner, MonthlySalary, PurchasedPlan, RankReward, RewardClaim, TeamLevel,
    TransactionRecord, UserProfile, WalletBalances, WithdrawalRecord,
};
use investdash_domain::rewards::claim_rank;
use investdash_domain::wallet::cancel_withdrawal;
use investdash_domain::value_objects::VolumeSnapshot;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::RwLock;
use tracing::info;

const EMBEDDED_ACCOUNT: &str = include_str!("../../fixtures/account.json");

/// On-disk shape of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountFixture {
    pub profile: UserProfile,
    pub wallet: WalletBalances,
    pub salary: MonthlySalary,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    #[serde(default)]
    pub purchased_plans: Vec<PurchasedPlan>,
    #[serde(default)]
    pub ranks: Vec<RankReward>,
    #[serde(default)]
    pub team_levels: Vec<TeamLevel>,
    #[serde(default)]
    pub draw_winners: Vec<DrawWinner>,
    #[serde(default)]
    pub deposits: Vec<DepositRecord>,
    #[serde(default)]
    pub withdrawals: Vec<WithdrawalRecord>,
}

/// Account state behind a lock so claims and cancellations can update it.
#[derive(Debug)]
pub struct InMemoryAccount {
    state: RwLock<AccountFixture>,
}

impl InMemoryAccount {
    /// Validates a decoded account.
    ///
    /// # Errors
    /// Returns `Invalid` if the salary volumes are negative.
    pub fn new(fixture: AccountFixture) -> RepositoryResult<Self> {
        fixture.salary.volumes.validate()?;
        Ok(Self {
            state: RwLock::new(fixture),
        })
    }

    /// Decodes and validates a JSON account.
    ///
    /// # Errors
    /// Returns `Decode` for malformed JSON and `Invalid` for bad data.
    pub fn from_json(json: &str) -> RepositoryResult<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Account compiled into the binary.
    ///
    /// # Errors
    /// Fails only if the embedded fixture is broken.
    pub fn embedded() -> RepositoryResult<Self> {
        Self::from_json(EMBEDDED_ACCOUNT)
    }

    /// Reads an account file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read.
    pub async fn load(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let json = read_fixture(path.as_ref()).await?;
        Self::from_json(&json)
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccount {
    async fn profile(&self) -> RepositoryResult<UserProfile> {
        Ok(self.state.read().await.profile.clone())
    }

    async fn wallet(&self) -> RepositoryResult<WalletBalances> {
        Ok(self.state.read().await.wallet)
    }

    async fn volumes(&self) -> RepositoryResult<VolumeSnapshot> {
        Ok(self.state.read().await.salary.volumes)
    }

    async fn salary(&self) -> RepositoryResult<MonthlySalary> {
        Ok(self.state.read().await.salary.clone())
    }

    async fn transactions(&self) -> RepositoryResult<Vec<TransactionRecord>> {
        Ok(self.state.read().await.transactions.clone())
    }

    async fn purchased_plans(&self) -> RepositoryResult<Vec<PurchasedPlan>> {
        Ok(self.state.read().await.purchased_plans.clone())
    }

    async fn ranks(&self) -> RepositoryResult<Vec<RankReward>> {
        Ok(self.state.read().await.ranks.clone())
    }

    async fn team_levels(&self) -> RepositoryResult<Vec<TeamLevel>> {
        Ok(self.state.read().await.team_levels.clone())
    }

    async fn draw_winners(&self) -> RepositoryResult<Vec<DrawWinner>> {
        Ok(self.state.read().await.draw_winners.clone())
    }

    async fn deposits(&self) -> RepositoryResult<Vec<DepositRecord>> {
        Ok(self.state.read().await.deposits.clone())
    }

    async fn withdrawals(&self) -> RepositoryResult<Vec<WithdrawalRecord>> {
        Ok(self.state.read().await.withdrawals.clone())
    }

    async fn cancel_withdrawal(&self, id: &str) -> RepositoryResult<WithdrawalRecord> {
        let mut state = self.state.write().await;
        let record = state
            .withdrawals
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "withdrawal",
                id: id.to_string(),
            })?;
        cancel_withdrawal(record)?;
        info!(withdrawal = %record.id, amount = %record.amount, "withdrawal canceled");
        Ok(record.clone())
    }

    async fn claim_rank(&self, id: &str) -> RepositoryResult<RewardClaim> {
        let mut state = self.state.write().await;
        let rank = state
            .ranks
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "rank",
                id: id.to_string(),
            })?;
        let claim = claim_rank(rank)?;
        info!(rank = %claim.rank_name, amount = %claim.amount, "rank reward claimed");
        Ok(claim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use investdash_domain::DomainError;
    use investdash_domain::entities::funding::{active_withdrawal, filter_deposits};
    use investdash_domain::enums::{RankStatus, SalaryMode, TransactionStatus};
    use investdash_domain::rewards::RankSummary;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_embedded_account() {
        let account = InMemoryAccount::embedded().unwrap();

        let profile = account.profile().await.unwrap();
        assert_eq!(profile.full_name(), "Sarah Johnson");
        assert_eq!(profile.upline.as_deref(), Some("john_doe"));

        let wallet = account.wallet().await.unwrap();
        assert_eq!(wallet.deposit_balance, dec!(5420.50));

        let salary = account.salary().await.unwrap();
        assert_eq!(salary.mode, SalaryMode::Preview);
        assert_eq!(salary.display_salary(), dec!(1850));

        let volumes = account.volumes().await.unwrap();
        assert_eq!(volumes.indirect_volume, dec!(24000));

        assert_eq!(account.transactions().await.unwrap().len(), 8);
        assert_eq!(account.purchased_plans().await.unwrap().len(), 3);
        assert_eq!(account.team_levels().await.unwrap().len(), 3);
        assert_eq!(account.draw_winners().await.unwrap().len(), 5);
        assert_eq!(account.deposits().await.unwrap().len(), 5);
        assert_eq!(account.withdrawals().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_deposit_history_by_status() {
        let account = InMemoryAccount::embedded().unwrap();
        let deposits = account.deposits().await.unwrap();
        assert_eq!(
            filter_deposits(&deposits, Some(TransactionStatus::Approved)).len(),
            3
        );
        assert_eq!(
            filter_deposits(&deposits, Some(TransactionStatus::Expired))[0].amount,
            dec!(750)
        );
    }

    #[tokio::test]
    async fn test_cancel_active_withdrawal() {
        let account = InMemoryAccount::embedded().unwrap();

        let withdrawals = account.withdrawals().await.unwrap();
        let active = active_withdrawal(&withdrawals).unwrap();
        assert_eq!(active.id, "2");
        assert_eq!(active.amount, dec!(500));

        let canceled = account.cancel_withdrawal("2").await.unwrap();
        assert_eq!(canceled.status, TransactionStatus::Canceled);

        let withdrawals = account.withdrawals().await.unwrap();
        assert!(active_withdrawal(&withdrawals).is_none());
        assert_eq!(withdrawals[1].status, TransactionStatus::Canceled);
    }

    #[tokio::test]
    async fn test_cancel_withdrawal_rejections() {
        let account = InMemoryAccount::embedded().unwrap();

        let err = account.cancel_withdrawal("1").await.unwrap_err();
        assert!(matches!(err, RepositoryError::Rejected(_)));
        assert_eq!(
            account.withdrawals().await.unwrap()[0].status,
            TransactionStatus::Completed
        );

        let err = account.cancel_withdrawal("99").await.unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::NotFound {
                entity: "withdrawal",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_fixture_volumes_rejected() {
        let mut fixture: AccountFixture = serde_json::from_str(EMBEDDED_ACCOUNT).unwrap();
        fixture.salary.volumes.indirect_volume = dec!(-1);
        let err = InMemoryAccount::new(fixture).unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::Invalid(DomainError::NegativeVolume { metric: "indirect" })
        ));
    }

    #[tokio::test]
    async fn test_claim_rank_updates_state() {
        let account = InMemoryAccount::embedded().unwrap();

        let before = RankSummary::from_ranks(&account.ranks().await.unwrap());
        assert_eq!(before.claimable, 1);

        let claim = account.claim_rank("3").await.unwrap();
        assert_eq!(claim.amount, dec!(1000));

        let ranks = account.ranks().await.unwrap();
        assert_eq!(ranks[2].status, RankStatus::Claimed);
        let after = RankSummary::from_ranks(&ranks);
        assert_eq!(after.claimable, 0);
        assert_eq!(after.claimed, 3);
    }

    #[tokio::test]
    async fn test_claim_rejections() {
        let account = InMemoryAccount::embedded().unwrap();

        let err = account.claim_rank("4").await.unwrap_err();
        assert!(matches!(err, RepositoryError::Rejected(_)));

        let err = account.claim_rank("99").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { entity: "rank", .. }));
    }
}
