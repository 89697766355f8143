use serde::{Deserialize, Serialize};

/// Summary of a single simulated equity trajectory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Capital after the last trade.
    pub final_capital: f64,
    /// Realized return relative to initial capital, in percent.
    pub return_pct: f64,
    /// Largest peak-to-trough decline along the trajectory, in percent.
    pub max_drawdown_pct: f64,
    /// Whether capital ever fell to the ruin threshold.
    pub ruined: bool,
}
