//! Tier progression engine.
//!
//! Locates a user's star level from their three volume metrics and computes
//! how far along they are toward the next level.

mod ladder;
mod progress;

pub use ladder::{TierLadder, star_ladder};
pub use progress::{TierProgress, progress_toward};

use crate::entities::TierThreshold;
use crate::value_objects::VolumeSnapshot;
use serde::{Deserialize, Serialize};

/// How to pick among several qualifying tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierSelection {
    /// First qualifying tier scanning from index 0.
    #[default]
    First,
    /// Last qualifying tier in list order.
    Highest,
}

/// Where a snapshot sits on a tier list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierLocation<'a> {
    /// Index of the current tier, `None` when nothing qualifies.
    pub current_index: Option<usize>,
    pub current: Option<&'a TierThreshold>,
    /// `None` once the last tier is reached (or the list is empty).
    pub next: Option<&'a TierThreshold>,
}

impl<'a> TierLocation<'a> {
    pub fn is_max_tier(&self) -> bool {
        self.current.is_some() && self.next.is_none()
    }

    /// Progress toward the next tier, `None` at the top of the ladder.
    pub fn progress(&self, snapshot: &VolumeSnapshot) -> Option<TierProgress> {
        self.next.map(|next| TierProgress::toward(snapshot, next))
    }
}

/// Locates the current and next tier using the first-match rule.
pub fn locate_tier<'a>(snapshot: &VolumeSnapshot, tiers: &'a [TierThreshold]) -> TierLocation<'a> {
    locate_tier_with(snapshot, tiers, TierSelection::First)
}

/// Locates the current and next tier with an explicit selection rule.
pub fn locate_tier_with<'a>(
    snapshot: &VolumeSnapshot,
    tiers: &'a [TierThreshold],
    selection: TierSelection,
) -> TierLocation<'a> {
    let current_index = match selection {
        TierSelection::First => tiers.iter().position(|t| t.is_qualified(snapshot)),
        TierSelection::Highest => tiers.iter().rposition(|t| t.is_qualified(snapshot)),
    };

    match current_index {
        None => TierLocation {
            current_index: None,
            current: None,
            next: tiers.first(),
        },
        Some(index) => TierLocation {
            current_index: Some(index),
            current: tiers.get(index),
            next: tiers.get(index + 1),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::MetricRange;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn range(min: Decimal, max: Decimal) -> MetricRange {
        MetricRange::new(min, max).unwrap()
    }

    fn self_only(name: &str, min: Decimal, max: Decimal) -> TierThreshold {
        TierThreshold::new(
            name,
            range(min, max),
            range(dec!(0), dec!(0)),
            range(dec!(0), dec!(0)),
        )
    }

    fn metals() -> Vec<TierThreshold> {
        vec![
            self_only("Bronze", dec!(100), dec!(300)),
            self_only("Silver", dec!(300), dec!(500)),
            self_only("Gold", dec!(500), dec!(800)),
        ]
    }

    fn snapshot(self_volume: Decimal, direct: Decimal, indirect: Decimal) -> VolumeSnapshot {
        VolumeSnapshot::new(self_volume, direct, indirect)
    }

    #[test]
    fn test_below_every_tier() {
        let tiers = star_ladder();
        let snap = snapshot(dec!(50), dec!(500), dec!(1000));
        let loc = locate_tier(&snap, tiers.tiers());

        assert_eq!(loc.current_index, None);
        assert!(loc.current.is_none());
        assert_eq!(loc.next.map(|t| t.name.as_str()), Some("Bronze Star"));
        assert!(!loc.is_max_tier());
    }

    #[test]
    fn test_one_metric_short_does_not_qualify() {
        let tiers = star_ladder();
        // Self and direct meet Bronze, indirect does not.
        let snap = snapshot(dec!(150), dec!(1500), dec!(2999.99));
        let loc = locate_tier(&snap, tiers.tiers());
        assert_eq!(loc.current_index, None);
    }

    #[test]
    fn test_first_match_rule() {
        let tiers = metals();
        let snap = snapshot(dec!(450), dec!(0), dec!(0));

        // Bronze and Silver both qualify; the scan stops at the first.
        let loc = locate_tier(&snap, &tiers);
        assert_eq!(loc.current_index, Some(0));
        assert_eq!(loc.current.map(|t| t.name.as_str()), Some("Bronze"));
        assert_eq!(loc.next.map(|t| t.name.as_str()), Some("Silver"));
    }

    #[test]
    fn test_highest_match_rule() {
        let tiers = metals();
        let snap = snapshot(dec!(450), dec!(0), dec!(0));

        let loc = locate_tier_with(&snap, &tiers, TierSelection::Highest);
        assert_eq!(loc.current.map(|t| t.name.as_str()), Some("Silver"));
        assert_eq!(loc.next.map(|t| t.name.as_str()), Some("Gold"));
    }

    #[test]
    fn test_rules_never_pick_unqualified_tier() {
        let tiers = metals();
        let snap = snapshot(dec!(450), dec!(0), dec!(0));
        for rule in [TierSelection::First, TierSelection::Highest] {
            let loc = locate_tier_with(&snap, &tiers, rule);
            assert_ne!(loc.current.map(|t| t.name.as_str()), Some("Gold"));
        }
    }

    #[test]
    fn test_max_tier_has_no_next() {
        let tiers = metals();
        let snap = snapshot(dec!(900), dec!(0), dec!(0));

        let loc = locate_tier_with(&snap, &tiers, TierSelection::Highest);
        assert_eq!(loc.current_index, Some(2));
        assert!(loc.next.is_none());
        assert!(loc.is_max_tier());
        assert!(loc.progress(&snap).is_none());

        let single = vec![self_only("Only", dec!(100), dec!(200))];
        let loc = locate_tier(&snap, &single);
        assert_eq!(loc.current_index, Some(0));
        assert!(loc.next.is_none());
    }

    #[test]
    fn test_star_ladder_above_last_minimums() {
        let tiers = star_ladder();
        let snap = snapshot(dec!(2000), dec!(20000), dec!(60000));
        let loc = locate_tier_with(&snap, tiers.tiers(), TierSelection::Highest);
        assert_eq!(loc.current.map(|t| t.name.as_str()), Some("Platinum Star"));
        assert!(loc.next.is_none());
    }

    #[test]
    fn test_first_rule_above_last_minimums_stays_on_bronze() {
        // Every tier qualifies; first match holds Bronze and points at Silver.
        let tiers = star_ladder();
        let snap = snapshot(dec!(2000), dec!(20000), dec!(60000));
        let loc = locate_tier(&snap, tiers.tiers());

        assert_eq!(loc.current_index, Some(0));
        assert_eq!(loc.current.map(|t| t.name.as_str()), Some("Bronze Star"));
        assert_eq!(loc.next.map(|t| t.name.as_str()), Some("Silver Star"));
        assert!(!loc.is_max_tier());

        // Silver's bands are all exceeded, so every bar is full.
        let progress = loc.progress(&snap).unwrap();
        assert_eq!(progress.overall(), dec!(100));
    }

    #[test]
    fn test_empty_tier_list() {
        let snap = snapshot(dec!(100), dec!(100), dec!(100));
        let loc = locate_tier(&snap, &[]);
        assert_eq!(loc.current_index, None);
        assert!(loc.current.is_none());
        assert!(loc.next.is_none());
    }

    #[test]
    fn test_progress_toward_next_tier() {
        let tiers = metals();
        let snap = snapshot(dec!(400), dec!(0), dec!(0));
        let loc = locate_tier(&snap, &tiers);

        let progress = loc.progress(&snap).unwrap();
        // Next is Silver [300, 500]; 400 is halfway.
        assert_eq!(progress.self_volume, dec!(50));
        // Degenerate [0, 0] bands are full.
        assert_eq!(progress.direct_volume, dec!(100));
        assert_eq!(progress.indirect_volume, dec!(100));
    }
}
