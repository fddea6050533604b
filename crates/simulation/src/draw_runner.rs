use crate::lucky_draw::{DrawOutcome, LuckyDraw};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Runs many draws with the same settings.
pub struct DrawRunner {
    pub draw: LuckyDraw,
    pub iterations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawSummary {
    pub iterations: usize,
    pub wins: usize,
    pub total_prize: Decimal,
    /// Mean prize per winning draw.
    pub mean_prize: Decimal,
    pub largest_prize: Decimal,
    pub win_rate: f64,
}

impl DrawRunner {
    pub fn new(draw: LuckyDraw, iterations: usize) -> Self {
        Self { draw, iterations }
    }

    pub fn run<R: Rng>(&self, rng: &mut R) -> DrawSummary {
        let outcomes: Vec<DrawOutcome> = (0..self.iterations)
            .map(|_| self.draw.draw(rng))
            .collect();

        let summary = Self::aggregate(&outcomes);
        info!(
            iterations = summary.iterations,
            wins = summary.wins,
            total_prize = %summary.total_prize,
            "draw run complete"
        );
        summary
    }

    fn aggregate(outcomes: &[DrawOutcome]) -> DrawSummary {
        let prizes: Vec<Decimal> = outcomes
            .iter()
            .filter(|o| o.is_win())
            .map(DrawOutcome::prize)
            .collect();

        let wins = prizes.len();
        let total_prize: Decimal = prizes.iter().sum();
        let mean_prize = if wins == 0 {
            Decimal::ZERO
        } else {
            total_prize / Decimal::from(wins)
        };
        let largest_prize = prizes.iter().max().copied().unwrap_or(Decimal::ZERO);
        let win_rate = if outcomes.is_empty() {
            0.0
        } else {
            wins as f64 / outcomes.len() as f64
        };

        DrawSummary {
            iterations: outcomes.len(),
            wins,
            total_prize,
            mean_prize,
            largest_prize,
            win_rate,
        }
    }
}
