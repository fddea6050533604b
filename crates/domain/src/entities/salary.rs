use crate::enums::SalaryMode;
use crate::value_objects::VolumeSnapshot;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly star salary for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySalary {
    /// Month label, e.g. "October 2024".
    pub month: String,
    pub mode: SalaryMode,
    pub preview_salary: Decimal,
    pub snapshot_salary: Decimal,
    pub current_star: String,
    pub volumes: VolumeSnapshot,
}

impl MonthlySalary {
    /// The figure to show: the live estimate in preview mode, the locked
    /// value otherwise.
    pub fn display_salary(&self) -> Decimal {
        match self.mode {
            SalaryMode::Preview => self.preview_salary,
            SalaryMode::Snapshot => self.snapshot_salary,
        }
    }

    pub fn is_final(&self) -> bool {
        self.mode == SalaryMode::Snapshot
    }
}
