use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Entry on the recent lucky-draw winners board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawWinner {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// Total paid out to the winners on the board.
pub fn winners_total(winners: &[DrawWinner]) -> Decimal {
    winners.iter().map(|w| w.amount).sum()
}
