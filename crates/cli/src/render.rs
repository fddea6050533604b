//! Table rendering for list commands.
use investdash_domain::entities::{
    DepositRecord, InvestmentPlan, PurchasedPlan, RankReward, TeamLevel, TeamMember,
    TransactionRecord, WithdrawalRecord,
};
use investdash_domain::format::format_usd;
use prettytable::{Table, row};

pub fn plans_table(plans: &[InvestmentPlan]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["ID", "Plan", "Min", "Max", "ROI %", "Days"]);
    for plan in plans {
        table.add_row(row![
            plan.id,
            plan.name,
            format_usd(plan.min_invest),
            format_usd(plan.max_invest),
            plan.roi_percent.0,
            plan.duration_days
        ]);
    }
    table
}

pub fn purchased_table(plans: &[&PurchasedPlan]) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "ID", "Plan", "Amount", "ROI %", "Status", "Purchased", "Expires", "Days", "Earned",
        "Payout", "Progress"
    ]);
    for plan in plans {
        table.add_row(row![
            plan.id,
            plan.plan_name,
            format_usd(plan.amount),
            plan.roi_percent.0,
            plan.status,
            plan.purchase_date,
            plan.expiry_date,
            plan.term_days(),
            format_usd(plan.earned),
            format_usd(plan.total_payout),
            format!("{}%", plan.earnings_progress().round_dp(1))
        ]);
    }
    table
}

pub fn ranks_table(ranks: &[&RankReward]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["ID", "Rank", "Requirement", "Reward", "Status"]);
    for rank in ranks {
        table.add_row(row![
            rank.id,
            format!("{} {}", rank.badge.glyph(), rank.name),
            rank.requirement,
            format_usd(rank.reward),
            rank.status
        ]);
    }
    table
}

pub fn transactions_table(records: &[&TransactionRecord]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["", "Type", "Amount", "Date", "Status", "Details"]);
    for record in records {
        table.add_row(row![
            record.category().glyph(),
            record.kind,
            format_usd(record.amount),
            record.timestamp.format("%Y-%m-%d %H:%M"),
            record.status,
            record.details
        ]);
    }
    table
}

pub fn team_table(levels: &[&TeamLevel]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Level", "Status", "Members", "Today", "Total"]);
    for level in levels {
        table.add_row(row![
            level.level,
            level.status,
            level.members,
            format_usd(level.today_income),
            format_usd(level.total_income)
        ]);
    }
    table
}

pub fn members_table(members: &[TeamMember]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["ID", "Name", "Email", "Joined", "Invested"]);
    for member in members {
        table.add_row(row![
            member.id,
            member.name,
            member.email,
            member.joined,
            format_usd(member.invested)
        ]);
    }
    table
}

pub fn deposits_table(records: &[&DepositRecord]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["ID", "Amount", "Date", "Status", "Tx"]);
    for record in records {
        table.add_row(row![
            record.id,
            format_usd(record.amount),
            record.date.format("%Y-%m-%d %H:%M"),
            record.status,
            record.tx_hash
        ]);
    }
    table
}

pub fn withdrawals_table(records: &[&WithdrawalRecord]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["ID", "Amount", "Date", "Status", "Address", "Reason"]);
    for record in records {
        table.add_row(row![
            record.id,
            format_usd(record.amount),
            record.date.format("%Y-%m-%d %H:%M"),
            record.status,
            record.address,
            record.reason.as_deref().unwrap_or("")
        ]);
    }
    table
}
