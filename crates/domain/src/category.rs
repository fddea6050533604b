use crate::enums::TransactionKind;
use serde::{Deserialize, Serialize};

/// Display grouping of transaction kinds.
///
/// Resolved by an exhaustive match, so every kind has exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Inflow,
    Outflow,
    Income,
    Purchase,
    Reward,
    Draw,
}

impl From<TransactionKind> for Category {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Deposit => Category::Inflow,
            TransactionKind::Withdraw => Category::Outflow,
            TransactionKind::DailyIncome
            | TransactionKind::TeamIncome
            | TransactionKind::DirectIncome => Category::Income,
            TransactionKind::PlanPurchase => Category::Purchase,
            TransactionKind::RankIncome | TransactionKind::MonthlySalary => Category::Reward,
            TransactionKind::LuckyDraw => Category::Draw,
        }
    }
}

impl Category {
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Inflow => "⬇",
            Category::Outflow => "⬆",
            Category::Income => "↗",
            Category::Purchase => "📅",
            Category::Reward => "🏆",
            Category::Draw => "🎲",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Inflow => "inflow",
            Category::Outflow => "outflow",
            Category::Income => "income",
            Category::Purchase => "purchase",
            Category::Reward => "reward",
            Category::Draw => "draw",
        }
    }
}
