//! Core domain types and calculations for the InvestDash demo.
//!
//! Everything in this crate is a pure function of its inputs:
//! - Tier progression (star levels) and progress-bar math
//! - Investment plan projections and referral commission
//! - Wallet, rank reward, salary and team calculations
//! - Transaction categories and display formatting

/// Error types.
pub mod error;
/// Shared enumerations.
pub mod enums;
/// Domain entities.
pub mod entities;
/// Value objects.
pub mod value_objects;

/// Transaction categories.
pub mod category;
/// Display formatting helpers.
pub mod format;
/// Investment projection calculator.
pub mod projection;
/// Rank reward rules.
pub mod rewards;
/// Tier progression engine.
pub mod tiers;
/// Wallet validation rules.
pub mod wallet;

pub use error::{DomainError, ValidationError};
