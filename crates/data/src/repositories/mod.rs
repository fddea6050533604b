//! Repository traits and their in-memory implementations.
//!
//! Callers depend on [`CatalogRepository`] and [`AccountRepository`] only;
//! [`DataProvider`] bundles one of each for injection.

mod account_repository;
mod catalog_repository;

pub use account_repository::{AccountFixture, InMemoryAccount};
pub use catalog_repository::{CatalogFixture, InMemoryCatalog};

use crate::error::RepositoryResult;
use async_trait::async_trait;
use investdash_domain::entities::{
    DepositRecord, DrawWinner, InvestmentPlan, MonthlySalary, PurchasedPlan, RankReward,
    RewardClaim, TeamLevel, TransactionRecord, UserProfile, WalletBalances, WithdrawalRecord,
};
use investdash_domain::tiers::TierLadder;
use investdash_domain::value_objects::VolumeSnapshot;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Static catalog shared by every user.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Star salary tiers in ascending order.
    async fn tiers(&self) -> RepositoryResult<TierLadder>;

    /// Purchasable plans.
    async fn plans(&self) -> RepositoryResult<Vec<InvestmentPlan>>;

    /// One plan by id.
    ///
    /// # Errors
    /// Returns `NotFound` for unknown ids.
    async fn plan(&self, id: &str) -> RepositoryResult<InvestmentPlan>;
}

/// Data belonging to the signed-in user.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn profile(&self) -> RepositoryResult<UserProfile>;

    async fn wallet(&self) -> RepositoryResult<WalletBalances>;

    /// Volumes for the current evaluation month.
    async fn volumes(&self) -> RepositoryResult<VolumeSnapshot>;

    async fn salary(&self) -> RepositoryResult<MonthlySalary>;

    async fn transactions(&self) -> RepositoryResult<Vec<TransactionRecord>>;

    async fn purchased_plans(&self) -> RepositoryResult<Vec<PurchasedPlan>>;

    async fn ranks(&self) -> RepositoryResult<Vec<RankReward>>;

    async fn team_levels(&self) -> RepositoryResult<Vec<TeamLevel>>;

    async fn draw_winners(&self) -> RepositoryResult<Vec<DrawWinner>>;

    /// Deposit request history.
    async fn deposits(&self) -> RepositoryResult<Vec<DepositRecord>>;

    /// Withdrawal request history.
    async fn withdrawals(&self) -> RepositoryResult<Vec<WithdrawalRecord>>;

    /// Cancels a pending or processing withdrawal by id.
    ///
    /// # Errors
    /// Returns `NotFound` for unknown ids and `Rejected` when the withdrawal
    /// has already settled or closed.
    async fn cancel_withdrawal(&self, id: &str) -> RepositoryResult<WithdrawalRecord>;

    /// Claims a rank reward by id.
    ///
    /// # Errors
    /// Returns `NotFound` for unknown ids and `Rejected` when the rank is
    /// not claimable.
    async fn claim_rank(&self, id: &str) -> RepositoryResult<RewardClaim>;
}

/// Catalog and account handles passed to callers.
#[derive(Clone)]
pub struct DataProvider {
    pub catalog: Arc<dyn CatalogRepository>,
    pub account: Arc<dyn AccountRepository>,
}

impl DataProvider {
    pub fn new(catalog: Arc<dyn CatalogRepository>, account: Arc<dyn AccountRepository>) -> Self {
        Self { catalog, account }
    }

    /// Provider backed by the embedded fixtures.
    ///
    /// # Errors
    /// Returns an error if an embedded fixture fails to decode.
    pub fn embedded() -> RepositoryResult<Self> {
        Ok(Self::new(
            Arc::new(InMemoryCatalog::embedded()?),
            Arc::new(InMemoryAccount::embedded()?),
        ))
    }

    /// Provider that reads fixture files when paths are given and falls
    /// back to the embedded fixtures otherwise.
    ///
    /// # Errors
    /// Returns an error if a file cannot be read or decoded.
    pub async fn load(
        catalog_path: Option<&Path>,
        account_path: Option<&Path>,
    ) -> RepositoryResult<Self> {
        let catalog = match catalog_path {
            Some(path) => {
                info!(path = %path.display(), "loading catalog fixture");
                InMemoryCatalog::load(path).await?
            }
            None => InMemoryCatalog::embedded()?,
        };
        let account = match account_path {
            Some(path) => {
                info!(path = %path.display(), "loading account fixture");
                InMemoryAccount::load(path).await?
            }
            None => InMemoryAccount::embedded()?,
        };
        Ok(Self::new(Arc::new(catalog), Arc::new(account)))
    }
}

async fn read_fixture(path: &Path) -> RepositoryResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| crate::error::RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })
}
