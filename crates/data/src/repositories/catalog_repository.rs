//! In-memory catalog of tiers and plans.

use super::{CatalogRepository, read_fixture};
use crate::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use investdash_domain::entities::{InvestmentPlan, TierThreshold};
use investdash_domain::tiers::TierLadder;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const EMBEDDED_CATALOG: &str = include_str!("../../fixtures/catalog.json");

/// On-disk shape of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFixture {
    pub tiers: Vec<TierThreshold>,
    pub plans: Vec<InvestmentPlan>,
}

/// Catalog held in memory after validation.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    tiers: TierLadder,
    plans: Vec<InvestmentPlan>,
}

impl InMemoryCatalog {
    /// Validates a decoded fixture.
    ///
    /// # Errors
    /// Returns `Invalid` if the tiers or any plan break catalog invariants.
    pub fn new(fixture: CatalogFixture) -> RepositoryResult<Self> {
        let tiers = TierLadder::new(fixture.tiers)?;
        for plan in &fixture.plans {
            plan.validate()?;
        }
        debug!(
            tiers = tiers.len(),
            plans = fixture.plans.len(),
            "catalog loaded"
        );
        Ok(Self {
            tiers,
            plans: fixture.plans,
        })
    }

    /// Decodes and validates a JSON catalog.
    ///
    /// # Errors
    /// Returns `Decode` for malformed JSON and `Invalid` for bad data.
    pub fn from_json(json: &str) -> RepositoryResult<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Catalog compiled into the binary.
    ///
    /// # Errors
    /// Fails only if the embedded fixture is broken.
    pub fn embedded() -> RepositoryResult<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Reads a catalog file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read.
    pub async fn load(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let json = read_fixture(path.as_ref()).await?;
        Self::from_json(&json)
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn tiers(&self) -> RepositoryResult<TierLadder> {
        Ok(self.tiers.clone())
    }

    async fn plans(&self) -> RepositoryResult<Vec<InvestmentPlan>> {
        Ok(self.plans.clone())
    }

    async fn plan(&self, id: &str) -> RepositoryResult<InvestmentPlan> {
        self.plans
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "plan",
                id: id.to_string(),
            })
    }
}
