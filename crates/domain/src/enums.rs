use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a purchased plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Active,
    Expired,
}

/// Status of a rank reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStatus {
    Claimed,
    Claimable,
    Locked,
}

/// Badge shown next to a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBadge {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl RankBadge {
    /// Glyph rendered for the badge.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            RankBadge::Bronze => "🥉",
            RankBadge::Silver => "🥈",
            RankBadge::Gold => "🥇",
            RankBadge::Platinum => "💎",
            RankBadge::Diamond => "💠",
        }
    }
}

/// Whether a salary figure is final or still moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryMode {
    /// Live estimate that changes as volume accrues.
    Preview,
    /// Locked value for a closed month.
    Snapshot,
}

/// Whether a team level pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelStatus {
    Unlocked,
    Locked,
}

/// Kind of ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    PlanPurchase,
    DailyIncome,
    TeamIncome,
    DirectIncome,
    RankIncome,
    MonthlySalary,
    Deposit,
    Withdraw,
    LuckyDraw,
}

impl TransactionKind {
    /// All kinds in display order.
    pub const ALL: [TransactionKind; 9] = [
        TransactionKind::PlanPurchase,
        TransactionKind::DailyIncome,
        TransactionKind::TeamIncome,
        TransactionKind::RankIncome,
        TransactionKind::MonthlySalary,
        TransactionKind::Deposit,
        TransactionKind::Withdraw,
        TransactionKind::LuckyDraw,
        TransactionKind::DirectIncome,
    ];

    /// Human readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::PlanPurchase => "Plan Purchase",
            TransactionKind::DailyIncome => "Daily Income",
            TransactionKind::TeamIncome => "Team Income",
            TransactionKind::DirectIncome => "Direct Income",
            TransactionKind::RankIncome => "Rank Income",
            TransactionKind::MonthlySalary => "Monthly Salary",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdraw",
            TransactionKind::LuckyDraw => "Lucky Draw",
        }
    }
}

/// Status of a ledger entry, deposit or withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Approved,
    Pending,
    Processing,
    Expired,
    Rejected,
    Canceled,
    Failed,
}

impl TransactionStatus {
    /// Returns true for settled, successful entries.
    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(self, TransactionStatus::Completed | TransactionStatus::Approved)
    }
}

macro_rules! debug_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Debug::fmt(self, f)
                }
            }
        )*
    };
}

debug_display!(PlanStatus, RankStatus, SalaryMode, LevelStatus, TransactionStatus);

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
