use crate::enums::TransactionStatus;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A deposit request and its on-chain settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRecord {
    pub id: String,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub date: NaiveDateTime,
    /// Abbreviated transaction hash.
    pub tx_hash: String,
}

/// A withdrawal request from the earnings wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalRecord {
    pub id: String,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub date: NaiveDateTime,
    /// Destination address.
    pub address: String,
    /// Why the request was rejected, if it was.
    #[serde(default)]
    pub reason: Option<String>,
}

impl WithdrawalRecord {
    /// Still waiting to be paid out.
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            TransactionStatus::Pending | TransactionStatus::Processing
        )
    }
}

pub fn filter_deposits(
    records: &[DepositRecord],
    status: Option<TransactionStatus>,
) -> Vec<&DepositRecord> {
    records
        .iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .collect()
}

pub fn filter_withdrawals(
    records: &[WithdrawalRecord],
    status: Option<TransactionStatus>,
) -> Vec<&WithdrawalRecord> {
    records
        .iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .collect()
}

/// The withdrawal currently being processed, if any.
pub fn active_withdrawal(records: &[WithdrawalRecord]) -> Option<&WithdrawalRecord> {
    records
        .iter()
        .find(|r| r.status == TransactionStatus::Processing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn withdrawal(id: &str, status: TransactionStatus) -> WithdrawalRecord {
        WithdrawalRecord {
            id: id.to_string(),
            amount: dec!(500),
            status,
            date: at(20),
            address: "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb".to_string(),
            reason: None,
        }
    }

    #[test]
    fn test_filter_deposits_by_status() {
        let deposits: Vec<DepositRecord> = [
            TransactionStatus::Approved,
            TransactionStatus::Pending,
            TransactionStatus::Approved,
            TransactionStatus::Expired,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, status)| DepositRecord {
            id: (i + 1).to_string(),
            amount: dec!(250),
            status,
            date: at(i as u32 + 1),
            tx_hash: "0x7a3f...8d2e".to_string(),
        })
        .collect();

        assert_eq!(filter_deposits(&deposits, None).len(), 4);
        assert_eq!(
            filter_deposits(&deposits, Some(TransactionStatus::Approved)).len(),
            2
        );
        assert_eq!(
            filter_deposits(&deposits, Some(TransactionStatus::Expired))[0].id,
            "4"
        );
    }

    #[test]
    fn test_active_withdrawal_is_first_processing() {
        let records = vec![
            withdrawal("1", TransactionStatus::Completed),
            withdrawal("2", TransactionStatus::Pending),
            withdrawal("3", TransactionStatus::Processing),
            withdrawal("4", TransactionStatus::Processing),
        ];
        assert_eq!(active_withdrawal(&records).map(|r| r.id.as_str()), Some("3"));
        assert!(records[1].is_open());
        assert!(!records[0].is_open());

        assert_eq!(
            filter_withdrawals(&records, Some(TransactionStatus::Processing)).len(),
            2
        );
        assert!(active_withdrawal(&records[..2]).is_none());
    }
}
