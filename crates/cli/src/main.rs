//! Command Line Interface for the InvestDash demo.
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use investdash_data::DataProvider;
use investdash_domain::enums::{
    LevelStatus, PlanStatus, RankStatus, TransactionKind, TransactionStatus,
};
use investdash_domain::tiers::TierSelection;
use investdash_domain::value_objects::VolumeSnapshot;
use rust_decimal::Decimal;
use std::env;
use std::path::PathBuf;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "investdash")]
#[command(about = "InvestDash tier, plan and reward calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate the current star tier and progress toward the next one
    Tier {
        /// Self volume (defaults to the account's current month)
        #[arg(long = "self")]
        self_volume: Option<Decimal>,

        /// Direct volume
        #[arg(long)]
        direct: Option<Decimal>,

        /// Indirect volume
        #[arg(long)]
        indirect: Option<Decimal>,

        /// Tier selection rule
        #[arg(long, value_enum, default_value_t = RuleArg::First)]
        rule: RuleArg,
    },
    /// Project payout and commission for an amount in a plan
    Project {
        /// Plan id
        plan: String,
        /// Amount in USD
        amount: Decimal,
    },
    /// Validate a plan purchase against the deposit wallet
    Invest {
        /// Plan id
        plan: String,
        /// Amount in USD
        amount: Decimal,
    },
    /// List purchasable plans
    Plans,
    /// List purchased plans
    Purchased {
        #[arg(long, value_enum)]
        status: Option<PlanStatusArg>,
    },
    /// List rank rewards
    Ranks {
        #[arg(long, value_enum)]
        status: Option<RankStatusArg>,
    },
    /// Claim a rank reward
    Claim {
        /// Rank id
        rank: String,
    },
    /// Show the monthly star salary
    Salary,
    /// Show wallet balances
    Wallet,
    /// Show the profile, or validate an edit when fields are given
    Profile {
        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },
    /// Validate a deposit
    Deposit {
        /// Amount in USD
        amount: Decimal,
    },
    /// Validate a withdrawal from the earnings wallet
    Withdraw {
        /// Amount in USD
        amount: Decimal,
        /// Destination wallet address
        #[arg(long, default_value = "")]
        address: String,
    },
    /// Validate a transfer from earnings to the deposit wallet
    Transfer {
        /// Amount in USD
        amount: Decimal,
    },
    /// List deposit requests
    Deposits {
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },
    /// List withdrawal requests and the one in progress
    Withdrawals {
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },
    /// Cancel a pending or processing withdrawal
    CancelWithdrawal {
        /// Withdrawal id
        id: String,
    },
    /// List transactions
    Transactions {
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    /// Show team levels
    Team {
        #[arg(long, value_enum)]
        status: Option<LevelStatusArg>,

        /// Open one level and list its members
        #[arg(long)]
        level: Option<u8>,
    },
    /// Enter the lucky draw
    Draw {
        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Number of draws
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        runs: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleArg {
    First,
    Highest,
}

impl From<RuleArg> for TierSelection {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::First => TierSelection::First,
            RuleArg::Highest => TierSelection::Highest,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PlanStatusArg {
    Active,
    Expired,
}

impl From<PlanStatusArg> for PlanStatus {
    fn from(status: PlanStatusArg) -> Self {
        match status {
            PlanStatusArg::Active => PlanStatus::Active,
            PlanStatusArg::Expired => PlanStatus::Expired,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RankStatusArg {
    Claimed,
    Claimable,
    Locked,
}

impl From<RankStatusArg> for RankStatus {
    fn from(status: RankStatusArg) -> Self {
        match status {
            RankStatusArg::Claimed => RankStatus::Claimed,
            RankStatusArg::Claimable => RankStatus::Claimable,
            RankStatusArg::Locked => RankStatus::Locked,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelStatusArg {
    Unlocked,
    Locked,
}

impl From<LevelStatusArg> for LevelStatus {
    fn from(status: LevelStatusArg) -> Self {
        match status {
            LevelStatusArg::Unlocked => LevelStatus::Unlocked,
            LevelStatusArg::Locked => LevelStatus::Locked,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Completed,
    Approved,
    Pending,
    Processing,
    Expired,
    Rejected,
    Canceled,
    Failed,
}

impl From<StatusArg> for TransactionStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Completed => TransactionStatus::Completed,
            StatusArg::Approved => TransactionStatus::Approved,
            StatusArg::Pending => TransactionStatus::Pending,
            StatusArg::Processing => TransactionStatus::Processing,
            StatusArg::Expired => TransactionStatus::Expired,
            StatusArg::Rejected => TransactionStatus::Rejected,
            StatusArg::Canceled => TransactionStatus::Canceled,
            StatusArg::Failed => TransactionStatus::Failed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
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

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::PlanPurchase => TransactionKind::PlanPurchase,
            KindArg::DailyIncome => TransactionKind::DailyIncome,
            KindArg::TeamIncome => TransactionKind::TeamIncome,
            KindArg::DirectIncome => TransactionKind::DirectIncome,
            KindArg::RankIncome => TransactionKind::RankIncome,
            KindArg::MonthlySalary => TransactionKind::MonthlySalary,
            KindArg::Deposit => TransactionKind::Deposit,
            KindArg::Withdraw => TransactionKind::Withdraw,
            KindArg::LuckyDraw => TransactionKind::LuckyDraw,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let catalog_path = env::var_os("INVESTDASH_CATALOG").map(PathBuf::from);
    let account_path = env::var_os("INVESTDASH_ACCOUNT").map(PathBuf::from);
    let data = DataProvider::load(catalog_path.as_deref(), account_path.as_deref()).await?;

    match cli.command {
        Commands::Tier {
            self_volume,
            direct,
            indirect,
            rule,
        } => {
            let current = data.account.volumes().await?;
            match VolumeSnapshot::try_new(
                self_volume.unwrap_or(current.self_volume),
                direct.unwrap_or(current.direct_volume),
                indirect.unwrap_or(current.indirect_volume),
            ) {
                Ok(snapshot) => commands::tier(&data, snapshot, rule.into()).await?,
                Err(err) => println!("❌ {err}"),
            }
        }
        Commands::Project { plan, amount } => commands::project_plan(&data, &plan, amount).await?,
        Commands::Invest { plan, amount } => commands::invest(&data, &plan, amount).await?,
        Commands::Plans => commands::plans(&data).await?,
        Commands::Purchased { status } => {
            commands::purchased(&data, status.map(Into::into)).await?
        }
        Commands::Ranks { status } => commands::ranks(&data, status.map(Into::into)).await?,
        Commands::Claim { rank } => commands::claim(&data, &rank).await?,
        Commands::Salary => commands::salary(&data).await?,
        Commands::Wallet => commands::wallet(&data).await?,
        Commands::Profile { username, email } => {
            commands::profile(&data, username.as_deref(), email.as_deref()).await?
        }
        Commands::Deposit { amount } => commands::deposit(amount),
        Commands::Withdraw { amount, address } => {
            commands::withdraw(&data, amount, &address).await?
        }
        Commands::Transfer { amount } => commands::transfer(&data, amount).await?,
        Commands::Deposits { status } => commands::deposits(&data, status.map(Into::into)).await?,
        Commands::Withdrawals { status } => {
            commands::withdrawals(&data, status.map(Into::into)).await?
        }
        Commands::CancelWithdrawal { id } => commands::cancel_withdrawal(&data, &id).await?,
        Commands::Transactions { kind } => {
            commands::transactions(&data, kind.map(Into::into)).await?
        }
        Commands::Team { status, level } => {
            commands::team(&data, status.map(Into::into), level).await?
        }
        Commands::Draw { seed, runs } => commands::draw(&data, seed, runs as usize).await?,
    }

    Ok(())
}
