//! Data access for the InvestDash demo.
//!
//! Repositories are read through async traits so the in-memory fixtures used
//! today can be swapped for a networked backend without touching callers.

/// Error types.
pub mod error;
/// Repository traits and in-memory implementations.
pub mod repositories;

pub use error::RepositoryError;
pub use repositories::{
    AccountFixture, AccountRepository, CatalogFixture, CatalogRepository, DataProvider,
    InMemoryAccount, InMemoryCatalog,
};
