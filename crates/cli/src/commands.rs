//! Subcommand handlers.
//!
//! Validation failures are printed and the command returns `Ok`; only
//! data-loading errors propagate.
use crate::render;
use anyhow::Result;
use investdash_data::{DataProvider, RepositoryError};
use investdash_domain::entities::draw::winners_total;
use investdash_domain::entities::funding::{active_withdrawal, filter_deposits, filter_withdrawals};
use investdash_domain::entities::plan::filter_purchased;
use investdash_domain::entities::team::{TeamSummary, filter_levels, open_level};
use investdash_domain::entities::transaction::{filter_transactions, settled_total};
use investdash_domain::entities::user::validate_profile_update;
use investdash_domain::enums::{
    LevelStatus, PlanStatus, RankStatus, TransactionKind, TransactionStatus,
};
use investdash_domain::format::{format_compact_k, format_countdown, format_usd};
use investdash_domain::projection::{DIRECT_COMMISSION_RATE, project};
use investdash_domain::rewards::{RankFilter, RankSummary, filter_ranks};
use investdash_domain::tiers::TierSelection;
use investdash_domain::value_objects::{Metric, VolumeSnapshot};
use investdash_domain::wallet::{
    DEPOSIT_WINDOW_SECS, validate_deposit, validate_investment, validate_transfer,
    validate_withdrawal,
};
use investdash_simulation::prelude::{DrawOutcome, DrawRunner, LuckyDraw};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use tracing::info;

pub async fn tier(data: &DataProvider, snapshot: VolumeSnapshot, rule: TierSelection) -> Result<()> {
    let ladder = data.catalog.tiers().await?;
    let location = ladder.locate(&snapshot, rule);

    match location.current {
        Some(tier) => println!("⭐ Current tier: {}", tier.name),
        None => println!("⭐ Current tier: none"),
    }

    let Some(next) = location.next else {
        if location.is_max_tier() {
            println!("🏆 Max tier reached");
        } else {
            println!("❌ No tiers configured");
        }
        return Ok(());
    };

    println!("➡️  Next tier: {}", next.name);
    if let Some(progress) = location.progress(&snapshot) {
        println!(
            "{:<10} | {:<10} | {:<14} | {:<8}",
            "Metric", "Volume", "Band", "Progress"
        );
        println!("{}", "-".repeat(50));
        for metric in Metric::ALL {
            let band = next.range(metric);
            println!(
                "{:<10} | {:<10} | {:<14} | {:>7}%",
                metric.label(),
                snapshot.get(metric),
                format!("{}-{}", format_compact_k(band.min), format_compact_k(band.max)),
                progress.get(metric).round_dp(1)
            );
        }
        println!("📊 Overall: {}%", progress.overall().round_dp(1));
    }
    Ok(())
}

pub async fn project_plan(data: &DataProvider, plan_id: &str, amount: Decimal) -> Result<()> {
    let plan = data.catalog.plan(plan_id).await?;
    match project(amount, &plan) {
        Ok(result) => {
            println!("📈 {} for {} days", plan.name, result.maturity_days);
            println!("   Principal:        {}", format_usd(result.principal));
            println!("   ROI ({}%):        {}", plan.roi_percent.0, format_usd(result.roi_amount));
            println!("   Expected payout:  {}", format_usd(result.expected_payout));
            println!(
                "   Sponsor commission ({}%): {}",
                DIRECT_COMMISSION_RATE.0,
                format_usd(result.commission_amount)
            );
        }
        Err(err) => println!("❌ {err}"),
    }
    Ok(())
}

pub async fn invest(data: &DataProvider, plan_id: &str, amount: Decimal) -> Result<()> {
    let plan = data.catalog.plan(plan_id).await?;
    let wallet = data.account.wallet().await?;
    match validate_investment(amount, &plan, &wallet) {
        Ok(result) => {
            info!(plan = %plan.id, amount = %amount, "investment accepted");
            println!(
                "✅ {} in {} accepted, expected payout {}",
                format_usd(amount),
                plan.name,
                format_usd(result.expected_payout)
            );
            println!(
                "   Deposit balance after purchase: {}",
                format_usd(wallet.deposit_balance - amount)
            );
        }
        Err(err) => println!("❌ {err}"),
    }
    Ok(())
}

pub async fn plans(data: &DataProvider) -> Result<()> {
    let plans = data.catalog.plans().await?;
    render::plans_table(&plans).printstd();
    Ok(())
}

pub async fn purchased(data: &DataProvider, status: Option<PlanStatus>) -> Result<()> {
    let plans = data.account.purchased_plans().await?;
    let shown = filter_purchased(&plans, status);
    if shown.is_empty() {
        println!("No purchased plans");
        return Ok(());
    }
    render::purchased_table(&shown).printstd();
    Ok(())
}

pub async fn ranks(data: &DataProvider, status: Option<RankStatus>) -> Result<()> {
    let ranks = data.account.ranks().await?;
    let filter = status.map_or(RankFilter::All, RankFilter::Status);
    render::ranks_table(&filter_ranks(&ranks, filter)).printstd();

    let summary = RankSummary::from_ranks(&ranks);
    println!(
        "🏅 {} claimable ({}), {} claimed, {} locked",
        summary.claimable,
        format_usd(summary.claimable_total),
        summary.claimed,
        summary.locked
    );
    Ok(())
}

pub async fn claim(data: &DataProvider, rank_id: &str) -> Result<()> {
    match data.account.claim_rank(rank_id).await {
        Ok(claim) => println!(
            "🎉 Claimed {} from {} (claim {})",
            format_usd(claim.amount),
            claim.rank_name,
            claim.claim_id
        ),
        Err(RepositoryError::Rejected(err)) => println!("❌ {err}"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

pub async fn salary(data: &DataProvider) -> Result<()> {
    let salary = data.account.salary().await?;
    let label = if salary.is_final() { "final" } else { "preview" };
    println!("💰 {} salary ({label}): {}", salary.month, format_usd(salary.display_salary()));
    println!("   Star: {}", salary.current_star);
    for metric in Metric::ALL {
        println!("   {:<9} {}", metric.label(), format_usd(salary.volumes.get(metric)));
    }
    Ok(())
}

pub async fn wallet(data: &DataProvider) -> Result<()> {
    let profile = data.account.profile().await?;
    let wallet = data.account.wallet().await?;
    println!("👛 {} (@{})", profile.full_name(), profile.username);
    println!("   Deposit balance:  {}", format_usd(wallet.deposit_balance));
    println!("   Earnings balance: {}", format_usd(wallet.earnings_balance));
    println!("   Total earned:     {}", format_usd(wallet.total_earned));
    println!("   Total deposit:    {}", format_usd(wallet.total_deposit));
    println!("   Total withdrawn:  {}", format_usd(wallet.total_withdraw));
    println!("   Total invested:   {}", format_usd(wallet.total_invested));
    println!(
        "   Tokens:           {} @ {} = {}",
        wallet.tokens,
        format_usd(wallet.token_rate),
        format_usd(wallet.token_value())
    );
    Ok(())
}

pub async fn profile(
    data: &DataProvider,
    username: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let profile = data.account.profile().await?;
    if username.is_none() && email.is_none() {
        println!("👤 {} (@{})", profile.full_name(), profile.username);
        println!("   Email:    {}", profile.email);
        println!("   Upline:   {}", profile.upline.as_deref().unwrap_or("-"));
        println!("   Referral: {}", profile.referral_link);
        println!("   Joined:   {}", profile.joined_date);
        return Ok(());
    }

    let username = username.unwrap_or(&profile.username);
    let email = email.unwrap_or(&profile.email);
    match validate_profile_update(username, email) {
        Ok(()) => println!("✅ Profile update for @{username} <{email}> accepted"),
        Err(err) => println!("❌ {err}"),
    }
    Ok(())
}

pub fn deposit(amount: Decimal) {
    match validate_deposit(amount) {
        Ok(()) => println!(
            "✅ Deposit of {} accepted, send funds within {}",
            format_usd(amount),
            format_countdown(DEPOSIT_WINDOW_SECS)
        ),
        Err(err) => println!("❌ {err}"),
    }
}

pub async fn withdraw(data: &DataProvider, amount: Decimal, address: &str) -> Result<()> {
    let wallet = data.account.wallet().await?;
    match validate_withdrawal(amount, address, &wallet) {
        Ok(()) => println!("✅ Withdrawal of {} to {address} accepted", format_usd(amount)),
        Err(err) => println!("❌ {err}"),
    }
    Ok(())
}

pub async fn transfer(data: &DataProvider, amount: Decimal) -> Result<()> {
    let wallet = data.account.wallet().await?;
    match validate_transfer(amount, &wallet) {
        Ok(()) => println!(
            "✅ Transfer of {} to the deposit wallet accepted",
            format_usd(amount)
        ),
        Err(err) => println!("❌ {err}"),
    }
    Ok(())
}

pub async fn deposits(data: &DataProvider, status: Option<TransactionStatus>) -> Result<()> {
    let records = data.account.deposits().await?;
    render::deposits_table(&filter_deposits(&records, status)).printstd();
    Ok(())
}

pub async fn withdrawals(data: &DataProvider, status: Option<TransactionStatus>) -> Result<()> {
    let records = data.account.withdrawals().await?;
    if let Some(active) = active_withdrawal(&records) {
        println!(
            "⏳ Withdrawal {} of {} is processing",
            active.id,
            format_usd(active.amount)
        );
    }
    render::withdrawals_table(&filter_withdrawals(&records, status)).printstd();
    Ok(())
}

pub async fn cancel_withdrawal(data: &DataProvider, id: &str) -> Result<()> {
    match data.account.cancel_withdrawal(id).await {
        Ok(record) => println!(
            "✅ Withdrawal {} of {} canceled",
            record.id,
            format_usd(record.amount)
        ),
        Err(RepositoryError::Rejected(err)) => println!("❌ {err}"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

pub async fn transactions(data: &DataProvider, kind: Option<TransactionKind>) -> Result<()> {
    let records = data.account.transactions().await?;
    let shown = filter_transactions(&records, kind);
    render::transactions_table(&shown).printstd();
    println!("Settled net: {}", format_usd(settled_total(&records)));
    Ok(())
}

pub async fn team(
    data: &DataProvider,
    status: Option<LevelStatus>,
    level: Option<u8>,
) -> Result<()> {
    let levels = data.account.team_levels().await?;
    if let Some(level) = level {
        match open_level(&levels, level) {
            Ok(opened) => {
                println!(
                    "👥 Level {}: {} members, total {}",
                    opened.level,
                    opened.members,
                    format_usd(opened.total_income)
                );
                render::members_table(&opened.users).printstd();
            }
            Err(err) => println!("❌ {err}"),
        }
        return Ok(());
    }
    render::team_table(&filter_levels(&levels, status)).printstd();

    let summary = TeamSummary::from_levels(&levels);
    println!(
        "👥 {} members across {} unlocked levels, today {}, total {}",
        summary.members,
        summary.unlocked_levels,
        format_usd(summary.today_income),
        format_usd(summary.total_income)
    );
    Ok(())
}

pub async fn draw(data: &DataProvider, seed: Option<u64>, runs: usize) -> Result<()> {
    let lucky_draw = LuckyDraw::default();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if runs == 1 {
        match lucky_draw.draw(&mut rng) {
            DrawOutcome::Win { prize } => println!("🎉 You won {}!", format_usd(prize)),
            DrawOutcome::NoWin => println!("🎲 Better luck next time"),
        }
    } else {
        let summary = DrawRunner::new(lucky_draw, runs).run(&mut rng);
        println!("🎲 {} draws, {} wins ({:.1}%)", summary.iterations, summary.wins, summary.win_rate * 100.0);
        println!("   Total prizes:  {}", format_usd(summary.total_prize));
        println!("   Mean prize:    {}", format_usd(summary.mean_prize));
        println!("   Largest prize: {}", format_usd(summary.largest_prize));
    }

    let winners = data.account.draw_winners().await?;
    println!("🏆 Recent winners ({} paid out):", format_usd(winners_total(&winners)));
    for winner in &winners {
        println!("   {:<16} {:>12}  {}", winner.name, format_usd(winner.amount), winner.date);
    }
    Ok(())
}
