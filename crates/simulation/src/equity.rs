//! Equity curve simulation.
//!
//! Applies one win/loss sequence to a starting capital at a fixed position
//! size, risking the fraction of *current* capital on every trade (fully
//! compounding position sizing).

use serde::{Deserialize, Serialize};
use sizer_domain::value_objects::position_size::PositionSize;

/// Capital at or below this threshold counts as ruin.
pub const RUIN_EPSILON: f64 = 1e-9;

/// Capital values over one simulated run, starting with the initial capital.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityTrajectory {
    pub values: Vec<f64>,
}

impl EquityTrajectory {
    /// Capital before the first trade.
    #[must_use]
    pub fn initial_capital(&self) -> f64 {
        self.values.first().copied().unwrap_or(0.0)
    }

    /// Capital after the last trade.
    #[must_use]
    pub fn final_capital(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    /// Number of trades applied.
    #[must_use]
    pub fn trades(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// Whether capital ever fell to the ruin threshold.
    #[must_use]
    pub fn hit_ruin(&self) -> bool {
        self.values.iter().any(|&v| v <= RUIN_EPSILON)
    }
}

/// Simulates one equity curve.
///
/// Per trade: a win multiplies capital by `1 + f × r`, a loss by `1 − f`,
/// where `f` is the risked fraction and `r` the risk/reward ratio. Capital is
/// recorded after every trade, so the trajectory has `outcomes.len() + 1`
/// values. Ruin is terminal: once capital reaches [`RUIN_EPSILON`] it is
/// capped at 0 and every remaining trade records 0. `f ≥ 1` is valid input;
/// a single loss then zeroes the account.
pub fn simulate_equity(
    outcomes: &[bool],
    size: PositionSize,
    initial_capital: f64,
    risk_reward: f64,
) -> EquityTrajectory {
    let f = size.fraction();
    let mut values = Vec::with_capacity(outcomes.len() + 1);
    let mut capital = initial_capital;
    values.push(capital);

    for &win in outcomes {
        if capital <= RUIN_EPSILON {
            values.push(0.0);
            continue;
        }
        capital = if win {
            capital * (1.0 + f * risk_reward)
        } else {
            capital * (1.0 - f)
        };
        if capital <= RUIN_EPSILON {
            capital = 0.0;
        }
        values.push(capital);
    }

    EquityTrajectory { values }
}
