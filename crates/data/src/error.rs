//! Repository error types.

use investdash_domain::{DomainError, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Lookup by id found nothing.
    #[error("{entity} '{id}' not found")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// Fixture file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fixture content is not valid JSON for the expected schema.
    #[error("failed to decode fixture: {0}")]
    Decode(#[from] serde_json::Error),

    /// Fixture decoded but breaks a catalog invariant.
    #[error("invalid fixture data: {0}")]
    Invalid(#[from] DomainError),

    /// A requested mutation was rejected by domain rules.
    #[error(transparent)]
    Rejected(#[from] ValidationError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
