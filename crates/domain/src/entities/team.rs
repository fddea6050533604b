use crate::enums::LevelStatus;
use crate::error::ValidationError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A referral in the user's downline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub joined: NaiveDate,
    pub invested: Decimal,
}

/// One depth level of the referral tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLevel {
    pub level: u8,
    pub status: LevelStatus,
    pub members: u32,
    pub today_income: Decimal,
    pub total_income: Decimal,
    #[serde(default)]
    pub users: Vec<TeamMember>,
}

impl TeamLevel {
    pub fn is_unlocked(&self) -> bool {
        self.status == LevelStatus::Unlocked
    }
}

/// Totals across all team levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamSummary {
    pub today_income: Decimal,
    pub total_income: Decimal,
    pub unlocked_levels: usize,
    pub members: u32,
}

impl TeamSummary {
    pub fn from_levels(levels: &[TeamLevel]) -> Self {
        levels.iter().fold(Self::default(), |mut acc, level| {
            acc.today_income += level.today_income;
            acc.total_income += level.total_income;
            acc.members += level.members;
            if level.is_unlocked() {
                acc.unlocked_levels += 1;
            }
            acc
        })
    }
}

/// Levels, optionally restricted to one status.
pub fn filter_levels(levels: &[TeamLevel], status: Option<LevelStatus>) -> Vec<&TeamLevel> {
    levels
        .iter()
        .filter(|l| status.is_none_or(|s| l.status == s))
        .collect()
}

/// Opens one level to list its members.
///
/// # Errors
///
/// Returns [`ValidationError::LevelLocked`] for locked levels and
/// [`ValidationError::UnknownLevel`] when no level has that number.
pub fn open_level(levels: &[TeamLevel], level: u8) -> Result<&TeamLevel, ValidationError> {
    let found = levels
        .iter()
        .find(|l| l.level == level)
        .ok_or(ValidationError::UnknownLevel { level })?;
    if !found.is_unlocked() {
        return Err(ValidationError::LevelLocked { level });
    }
    Ok(found)
}
