pub mod draw;
pub mod funding;
pub mod plan;
pub mod rank;
pub mod salary;
pub mod team;
pub mod tier;
pub mod transaction;
pub mod user;
pub mod wallet;

// Re-export for easier access
pub use draw::DrawWinner;
pub use funding::{DepositRecord, WithdrawalRecord};
pub use plan::{InvestmentPlan, PurchasedPlan};
pub use rank::{RankReward, RewardClaim};
pub use salary::MonthlySalary;
pub use team::{TeamLevel, TeamMember};
pub use tier::TierThreshold;
pub use transaction::TransactionRecord;
pub use user::UserProfile;
pub use wallet::WalletBalances;
