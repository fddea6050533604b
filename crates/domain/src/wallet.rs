//! Validation rules for wallet operations.
//!
//! Each validator is pure and returns the first failing rule so the caller
//! can report it and send the user back to the form.

use crate::entities::{InvestmentPlan, WalletBalances, WithdrawalRecord};
use crate::enums::TransactionStatus;
use crate::error::ValidationError;
use crate::projection::project;
use crate::value_objects::ProjectionResult;
use rust_decimal::Decimal;

/// Smallest accepted deposit.
pub const MIN_DEPOSIT: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
/// Smallest accepted investment regardless of plan.
pub const MIN_INVESTMENT: Decimal = Decimal::TEN;
/// Seconds the user has to send funds after creating a deposit.
pub const DEPOSIT_WINDOW_SECS: u64 = 1800;

fn positive(amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(())
}

fn covered(wallet: &'static str, requested: Decimal, available: Decimal) -> Result<(), ValidationError> {
    if requested > available {
        return Err(ValidationError::InsufficientBalance {
            wallet,
            requested,
            available,
        });
    }
    Ok(())
}

pub fn validate_deposit(amount: Decimal) -> Result<(), ValidationError> {
    positive(amount)?;
    if amount < MIN_DEPOSIT {
        return Err(ValidationError::BelowMinimum {
            operation: "deposit",
            minimum: MIN_DEPOSIT,
        });
    }
    Ok(())
}

/// Withdrawals are paid from the earnings wallet to an external address.
pub fn validate_withdrawal(
    amount: Decimal,
    address: &str,
    wallet: &WalletBalances,
) -> Result<(), ValidationError> {
    positive(amount)?;
    if address.trim().is_empty() {
        return Err(ValidationError::MissingAddress);
    }
    covered("earnings", amount, wallet.earnings_balance)
}

/// Moves funds from the earnings wallet to the deposit wallet.
pub fn validate_transfer(amount: Decimal, wallet: &WalletBalances) -> Result<(), ValidationError> {
    positive(amount)?;
    covered("earnings", amount, wallet.earnings_balance)
}

/// Full purchase check: global minimum, plan bounds, then deposit balance.
pub fn validate_investment(
    amount: Decimal,
    plan: &InvestmentPlan,
    wallet: &WalletBalances,
) -> Result<ProjectionResult, ValidationError> {
    positive(amount)?;
    if amount < MIN_INVESTMENT {
        return Err(ValidationError::BelowMinimum {
            operation: "investment",
            minimum: MIN_INVESTMENT,
        });
    }
    let projection = project(amount, plan)?;
    covered("deposit", amount, wallet.deposit_balance)?;
    Ok(projection)
}

/// Cancels a pending or processing withdrawal.
///
/// # Errors
///
/// Returns [`ValidationError::NotCancelable`] once the withdrawal has
/// settled or been closed; the record is left untouched.
pub fn cancel_withdrawal(record: &mut WithdrawalRecord) -> Result<(), ValidationError> {
    if !record.is_open() {
        return Err(ValidationError::NotCancelable {
            id: record.id.clone(),
            status: record.status.to_string(),
        });
    }
    record.status = TransactionStatus::Canceled;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn wallet() -> WalletBalances {
        WalletBalances {
            deposit_balance: dec!(5420.50),
            earnings_balance: dec!(2340.75),
            total_earned: dec!(8650.25),
            total_deposit: dec!(10000),
            total_withdraw: dec!(3200),
            total_invested: dec!(4579.50),
            token_rate: dec!(0.85),
            tokens: dec!(6377.06),
        }
    }

    #[test]
    fn test_deposit_minimum() {
        assert_eq!(MIN_DEPOSIT, dec!(5));
        assert!(validate_deposit(dec!(5)).is_ok());
        assert!(matches!(
            validate_deposit(dec!(4.99)),
            Err(ValidationError::BelowMinimum { operation: "deposit", .. })
        ));
        assert_eq!(validate_deposit(dec!(0)), Err(ValidationError::NonPositiveAmount));
    }

    #[test]
    fn test_withdrawal_rules() {
        let w = wallet();
        assert!(validate_withdrawal(dec!(800), "0x742d35Cc", &w).is_ok());
        assert_eq!(
            validate_withdrawal(dec!(800), "   ", &w),
            Err(ValidationError::MissingAddress)
        );
        assert_eq!(
            validate_withdrawal(dec!(2340.76), "0x742d35Cc", &w),
            Err(ValidationError::InsufficientBalance {
                wallet: "earnings",
                requested: dec!(2340.76),
                available: dec!(2340.75),
            })
        );
    }

    #[test]
    fn test_transfer_uses_earnings_balance() {
        let w = wallet();
        assert!(validate_transfer(dec!(2340.75), &w).is_ok());
        assert!(validate_transfer(dec!(3000), &w).is_err());
        assert_eq!(validate_transfer(dec!(-1), &w), Err(ValidationError::NonPositiveAmount));
    }

    #[test]
    fn test_investment_checks_in_order() {
        let w = wallet();
        let premium = InvestmentPlan::new("3", "Premium Plan", dec!(2000), dec!(10000), dec!(25), 90);

        assert!(matches!(
            validate_investment(dec!(9), &premium, &w),
            Err(ValidationError::BelowMinimum { operation: "investment", .. })
        ));
        assert!(matches!(
            validate_investment(dec!(1500), &premium, &w),
            Err(ValidationError::BelowPlanMinimum { .. })
        ));
        // Within plan bounds but more than the deposit wallet holds.
        assert!(matches!(
            validate_investment(dec!(6000), &premium, &w),
            Err(ValidationError::InsufficientBalance { wallet: "deposit", .. })
        ));

        let projection = validate_investment(dec!(4000), &premium, &w).unwrap();
        assert_eq!(projection.expected_payout, dec!(5000));
    }

    #[test]
    fn test_cancel_withdrawal_transitions() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 10, 28)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let mut record = WithdrawalRecord {
            id: "2".to_string(),
            amount: dec!(500),
            status: TransactionStatus::Processing,
            date,
            address: "0x742d35Cc".to_string(),
            reason: None,
        };

        assert!(cancel_withdrawal(&mut record).is_ok());
        assert_eq!(record.status, TransactionStatus::Canceled);

        assert_eq!(
            cancel_withdrawal(&mut record),
            Err(ValidationError::NotCancelable {
                id: "2".to_string(),
                status: "Canceled".to_string(),
            })
        );

        record.status = TransactionStatus::Pending;
        assert!(cancel_withdrawal(&mut record).is_ok());

        record.status = TransactionStatus::Completed;
        assert!(cancel_withdrawal(&mut record).is_err());
        assert_eq!(record.status, TransactionStatus::Completed);
    }
}
