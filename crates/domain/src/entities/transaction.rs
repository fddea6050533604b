use crate::category::Category;
use crate::enums::{TransactionKind, TransactionStatus};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of the user's transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub kind: TransactionKind,
    /// Signed amount; purchases are negative.
    pub amount: Decimal,
    pub timestamp: NaiveDateTime,
    pub status: TransactionStatus,
    #[serde(default)]
    pub details: String,
}

impl TransactionRecord {
    pub fn category(&self) -> Category {
        Category::from(self.kind)
    }
}

/// Records of one kind, or all records when `kind` is `None`.
pub fn filter_transactions(
    records: &[TransactionRecord],
    kind: Option<TransactionKind>,
) -> Vec<&TransactionRecord> {
    records
        .iter()
        .filter(|r| kind.is_none_or(|k| r.kind == k))
        .collect()
}

/// Net of settled records.
pub fn settled_total(records: &[TransactionRecord]) -> Decimal {
    records
        .iter()
        .filter(|r| r.status.is_settled())
        .map(|r| r.amount)
        .sum()
}
