//! Lucky draw outcome selector.
//!
//! One uniform draw decides win or loss; a second picks the prize. There is
//! no fairness proof here: the random source is whatever the caller injects.

use investdash_domain::DomainError;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    Win { prize: Decimal },
    NoWin,
}

impl DrawOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, DrawOutcome::Win { .. })
    }

    pub fn prize(&self) -> Decimal {
        match self {
            DrawOutcome::Win { prize } => *prize,
            DrawOutcome::NoWin => Decimal::ZERO,
        }
    }
}

/// Draw settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuckyDraw {
    /// A uniform value strictly above this wins.
    pub win_threshold: f64,
    /// Smallest prize in whole dollars.
    pub prize_min: u32,
    /// Largest prize in whole dollars.
    pub prize_max: u32,
}

impl Default for LuckyDraw {
    fn default() -> Self {
        Self {
            win_threshold: 0.7,
            prize_min: 100,
            prize_max: 1099,
        }
    }
}

impl LuckyDraw {
    /// Creates draw settings.
    ///
    /// # Errors
    ///
    /// Fails when the threshold is outside `[0, 1]` or the prize range is
    /// inverted.
    pub fn new(win_threshold: f64, prize_min: u32, prize_max: u32) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&win_threshold) {
            return Err(DomainError::InvalidConfig(format!(
                "win threshold {win_threshold} must be within [0, 1]"
            )));
        }
        if prize_min > prize_max {
            return Err(DomainError::InvalidConfig(format!(
                "prize range {prize_min}..={prize_max} is inverted"
            )));
        }
        Ok(Self {
            win_threshold,
            prize_min,
            prize_max,
        })
    }

    /// Probability of winning a single draw.
    pub fn win_probability(&self) -> f64 {
        1.0 - self.win_threshold
    }

    /// Runs one draw against `rng`.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> DrawOutcome {
        let roll: f64 = rng.random();
        if roll <= self.win_threshold {
            debug!(roll, "draw lost");
            return DrawOutcome::NoWin;
        }
        let prize = rng.random_range(self.prize_min..=self.prize_max);
        debug!(roll, prize, "draw won");
        DrawOutcome::Win {
            prize: Decimal::from(prize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rejects_bad_settings() {
        assert!(LuckyDraw::new(1.5, 100, 1099).is_err());
        assert!(LuckyDraw::new(-0.1, 100, 1099).is_err());
        assert!(LuckyDraw::new(0.7, 500, 100).is_err());
        assert!(LuckyDraw::new(0.7, 100, 100).is_ok());
    }

    #[test]
    fn test_prize_within_range() {
        let draw = LuckyDraw::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            if let DrawOutcome::Win { prize } = draw.draw(&mut rng) {
                assert!(prize >= Decimal::from(100));
                assert!(prize <= Decimal::from(1099));
            }
        }
    }

    #[test]
    fn test_threshold_one_never_wins() {
        let draw = LuckyDraw::new(1.0, 100, 1099).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..1_000).all(|_| !draw.draw(&mut rng).is_win()));
    }

    #[test]
    fn test_fixed_prize() {
        let draw = LuckyDraw::new(0.0, 250, 250).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let wins: Vec<DrawOutcome> = (0..100)
            .map(|_| draw.draw(&mut rng))
            .filter(DrawOutcome::is_win)
            .collect();
        assert!(!wins.is_empty());
        assert!(wins.iter().all(|o| o.prize() == Decimal::from(250)));
    }

    #[test]
    fn test_same_seed_same_outcomes() {
        let draw = LuckyDraw::default();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(draw.draw(&mut a), draw.draw(&mut b));
        }
    }
}
