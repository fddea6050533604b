//! Error types for domain calculations.

use rust_decimal::Decimal;
use thiserror::Error;

/// Violations of catalog invariants (tier tables, plan bounds, draw settings).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A range whose minimum exceeds its maximum.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Lower bound.
        min: Decimal,
        /// Upper bound.
        max: Decimal,
    },

    /// A tier with an empty name.
    #[error("tier at index {index} has an empty name")]
    UnnamedTier {
        /// Position in the tier list.
        index: usize,
    },

    /// Tier bounds that decrease from one tier to the next.
    #[error("tier '{tier}' has a lower {metric} band than the tier before it")]
    TierOrder {
        /// Offending tier name.
        tier: String,
        /// Metric label.
        metric: &'static str,
    },

    /// A plan whose bounds or rates are unusable.
    #[error("invalid plan '{plan}': {reason}")]
    InvalidPlan {
        /// Plan name.
        plan: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Volume below zero.
    #[error("{metric} volume cannot be negative")]
    NegativeVolume {
        /// Metric label.
        metric: &'static str,
    },

    /// Any other invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Recoverable input validation failures.
///
/// These are reported back to the user and never abort the program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Zero or negative amount.
    #[error("please enter a valid amount")]
    NonPositiveAmount,

    /// Amount below a global minimum (deposit or investment).
    #[error("minimum {operation} amount is ${minimum}")]
    BelowMinimum {
        /// Operation being validated.
        operation: &'static str,
        /// Required minimum.
        minimum: Decimal,
    },

    /// Amount below the selected plan's minimum.
    #[error("minimum investment for {plan} is ${minimum}")]
    BelowPlanMinimum {
        /// Plan name.
        plan: String,
        /// Plan minimum.
        minimum: Decimal,
    },

    /// Amount above the selected plan's maximum.
    #[error("maximum investment for {plan} is ${maximum}")]
    AbovePlanMaximum {
        /// Plan name.
        plan: String,
        /// Plan maximum.
        maximum: Decimal,
    },

    /// Amount whose projection does not fit in a decimal.
    #[error("amount is too large to project for {plan}")]
    AmountTooLarge {
        /// Plan name.
        plan: String,
    },

    /// Not enough funds in the relevant wallet.
    #[error("insufficient balance in {wallet} wallet: requested ${requested}, available ${available}")]
    InsufficientBalance {
        /// Wallet label.
        wallet: &'static str,
        /// Amount requested.
        requested: Decimal,
        /// Amount available.
        available: Decimal,
    },

    /// Withdrawal without a destination address.
    #[error("please enter a wallet address")]
    MissingAddress,

    /// Rank reward that is not in the claimable state.
    #[error("rank '{rank}' is not claimable (status: {status})")]
    NotClaimable {
        /// Rank name.
        rank: String,
        /// Current status label.
        status: String,
    },

    /// Withdrawal that is no longer pending or processing.
    #[error("withdrawal '{id}' cannot be canceled (status: {status})")]
    NotCancelable {
        /// Withdrawal id.
        id: String,
        /// Current status label.
        status: String,
    },

    /// Team level that has not been unlocked yet.
    #[error("level {level} is locked")]
    LevelLocked {
        /// Level number.
        level: u8,
    },

    /// Team level that does not exist.
    #[error("level {level} does not exist")]
    UnknownLevel {
        /// Level number.
        level: u8,
    },

    /// Required form field left blank.
    #[error("{field} is required")]
    MissingField {
        /// Field name.
        field: &'static str,
    },
}
