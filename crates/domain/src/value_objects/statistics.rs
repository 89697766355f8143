use crate::value_objects::position_size::PositionSize;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over many Monte Carlo runs at one position size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSizeStatistics {
    /// Position size these statistics describe.
    pub size: PositionSize,
    /// Number of runs aggregated.
    pub runs: usize,
    /// Arithmetic mean of final capital.
    pub mean_final_capital: f64,
    /// Median of final capital.
    pub median_final_capital: f64,
    /// Smallest final capital observed.
    pub min_final_capital: f64,
    /// Largest final capital observed.
    pub max_final_capital: f64,
    /// Arithmetic mean return, in percent.
    pub mean_return_pct: f64,
    /// Median return, in percent.
    pub median_return_pct: f64,
    /// Geometric mean return, in percent.
    pub geometric_mean_return_pct: f64,
    /// Sample standard deviation of returns, in percent.
    pub return_std_dev_pct: f64,
    /// Mean of per-run max drawdowns, in percent.
    pub mean_max_drawdown_pct: f64,
    /// Largest per-run max drawdown, in percent.
    pub worst_max_drawdown_pct: f64,
    /// Fraction of runs that hit the ruin threshold.
    pub ruin_probability: f64,
    /// Fraction of runs that ended above initial capital.
    pub profitability_rate: f64,
    /// Mean return divided by return standard deviation; 0 when the
    /// standard deviation is 0.
    pub risk_adjusted_score: f64,
}

impl PositionSizeStatistics {
    /// Statistics for an empty run set, all aggregates zero.
    #[must_use]
    pub fn empty(size: PositionSize) -> Self {
        Self {
            size,
            runs: 0,
            mean_final_capital: 0.0,
            median_final_capital: 0.0,
            min_final_capital: 0.0,
            max_final_capital: 0.0,
            mean_return_pct: 0.0,
            median_return_pct: 0.0,
            geometric_mean_return_pct: 0.0,
            return_std_dev_pct: 0.0,
            mean_max_drawdown_pct: 0.0,
            worst_max_drawdown_pct: 0.0,
            ruin_probability: 0.0,
            profitability_rate: 0.0,
            risk_adjusted_score: 0.0,
        }
    }
}
