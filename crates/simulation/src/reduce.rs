//! Run statistics reduction.
//!
//! Collapses many equity trajectories at one position size into a single
//! [`PositionSizeStatistics`] record. Degenerate inputs produce well-defined
//! values, never NaN: zero return dispersion scores 0, an all-ruined run set
//! reports a geometric mean return of exactly −100%.

use crate::equity::EquityTrajectory;
use sizer_domain::metrics;
use sizer_domain::value_objects::position_size::PositionSize;
use sizer_domain::value_objects::run_outcome::RunOutcome;
use sizer_domain::value_objects::statistics::PositionSizeStatistics;

/// Derives the summary of a single trajectory.
#[must_use]
pub fn run_outcome(trajectory: &EquityTrajectory) -> RunOutcome {
    let initial_capital = trajectory.initial_capital();
    let final_capital = trajectory.final_capital();
    RunOutcome {
        final_capital,
        return_pct: metrics::percent_return(initial_capital, final_capital),
        max_drawdown_pct: metrics::max_drawdown_pct(&trajectory.values),
        ruined: trajectory.hit_ruin(),
    }
}

/// Reduces trajectories to aggregate statistics.
#[must_use]
pub fn reduce_trajectories(
    size: PositionSize,
    initial_capital: f64,
    trajectories: &[EquityTrajectory],
) -> PositionSizeStatistics {
    let outcomes: Vec<RunOutcome> = trajectories.iter().map(run_outcome).collect();
    reduce_outcomes(size, initial_capital, &outcomes)
}

/// Reduces per-run outcomes to aggregate statistics.
#[must_use]
pub fn reduce_outcomes(
    size: PositionSize,
    initial_capital: f64,
    outcomes: &[RunOutcome],
) -> PositionSizeStatistics {
    if outcomes.is_empty() || initial_capital <= 0.0 {
        return PositionSizeStatistics::empty(size);
    }

    let finals: Vec<f64> = outcomes.iter().map(|o| o.final_capital).collect();
    let returns: Vec<f64> = outcomes.iter().map(|o| o.return_pct).collect();
    let drawdowns: Vec<f64> = outcomes.iter().map(|o| o.max_drawdown_pct).collect();
    let runs = outcomes.len();

    let geometric_mean_return_pct = if outcomes.iter().all(|o| o.ruined) {
        -100.0
    } else {
        let ratios: Vec<f64> = finals.iter().map(|f| f / initial_capital).collect();
        metrics::geometric_mean_return_pct(&ratios)
    };

    let mean_return_pct = metrics::mean(&returns);
    let return_std_dev_pct = metrics::sample_std_dev(&returns);
    let risk_adjusted_score = if return_std_dev_pct > 0.0 {
        mean_return_pct / return_std_dev_pct
    } else {
        0.0
    };

    let ruined = outcomes.iter().filter(|o| o.ruined).count();
    let profitable = outcomes
        .iter()
        .filter(|o| o.final_capital > initial_capital)
        .count();

    PositionSizeStatistics {
        size,
        runs,
        mean_final_capital: metrics::mean(&finals),
        median_final_capital: metrics::median(&finals),
        min_final_capital: finals.iter().copied().fold(f64::INFINITY, f64::min),
        max_final_capital: finals.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        mean_return_pct,
        median_return_pct: metrics::median(&returns),
        geometric_mean_return_pct,
        return_std_dev_pct,
        mean_max_drawdown_pct: metrics::mean(&drawdowns),
        worst_max_drawdown_pct: drawdowns.iter().copied().fold(0.0, f64::max),
        ruin_probability: ruined as f64 / runs as f64,
        profitability_rate: profitable as f64 / runs as f64,
        risk_adjusted_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity::simulate_equity;

    fn trajectory(outcomes: &[bool], fraction: f64) -> EquityTrajectory {
        simulate_equity(outcomes, PositionSize::new(fraction), 10_000.0, 1.0)
    }

    #[test]
    fn test_run_outcome_fields() {
        let outcome = run_outcome(&trajectory(&[true, true, false], 0.1));

        // 10_000 × 1.1 × 1.1 × 0.9 = 10_890.
        assert!((outcome.final_capital - 10_890.0).abs() < 1e-9);
        assert!((outcome.return_pct - 8.9).abs() < 1e-9);
        // Peak 12_100 to 10_890 is a 10% drawdown.
        assert!((outcome.max_drawdown_pct - 10.0).abs() < 1e-9);
        assert!(!outcome.ruined);
    }

    #[test]
    fn test_identical_runs_geometric_mean_matches_single_return() {
        let runs: Vec<EquityTrajectory> =
            (0..8).map(|_| trajectory(&[true; 10], 0.05)).collect();
        let single_return = run_outcome(&runs[0]).return_pct;

        let stats = reduce_trajectories(PositionSize::new(0.05), 10_000.0, &runs);

        assert!((stats.geometric_mean_return_pct - single_return).abs() < 1e-9);
        assert!((stats.mean_return_pct - single_return).abs() < 1e-9);
        assert!((stats.median_return_pct - single_return).abs() < 1e-9);
    }

    #[test]
    fn test_zero_dispersion_scores_zero() {
        let runs: Vec<EquityTrajectory> =
            (0..5).map(|_| trajectory(&[true, false], 0.1)).collect();
        let stats = reduce_trajectories(PositionSize::new(0.1), 10_000.0, &runs);

        assert_eq!(stats.return_std_dev_pct, 0.0);
        assert_eq!(stats.risk_adjusted_score, 0.0);
    }

    #[test]
    fn test_all_ruined_reports_minus_hundred() {
        let runs: Vec<EquityTrajectory> =
            (0..4).map(|_| trajectory(&[false, false], 1.0)).collect();
        let stats = reduce_trajectories(PositionSize::new(1.0), 10_000.0, &runs);

        assert_eq!(stats.geometric_mean_return_pct, -100.0);
        assert_eq!(stats.ruin_probability, 1.0);
        assert_eq!(stats.profitability_rate, 0.0);
        assert!((stats.worst_max_drawdown_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rates_and_extremes() {
        let runs = vec![
            trajectory(&[true; 4], 0.1),   // profitable
            trajectory(&[false; 4], 0.1),  // losing but alive
            trajectory(&[false; 2], 1.0),  // ruined
        ];
        let stats = reduce_trajectories(PositionSize::new(0.1), 10_000.0, &runs);

        assert_eq!(stats.runs, 3);
        assert!((stats.ruin_probability - 1.0 / 3.0).abs() < 1e-12);
        assert!((stats.profitability_rate - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.min_final_capital, 0.0);
        assert!((stats.max_final_capital - 10_000.0 * 1.1_f64.powi(4)).abs() < 1e-9);
        // Mixed run set: geometric mean is finite and between the extremes.
        assert!(stats.geometric_mean_return_pct > -100.0);
        assert!(stats.geometric_mean_return_pct < stats.mean_return_pct);
    }

    #[test]
    fn test_empty_run_set() {
        let stats = reduce_trajectories(PositionSize::new(0.1), 10_000.0, &[]);
        assert_eq!(stats.runs, 0);
        assert_eq!(stats.mean_final_capital, 0.0);
        assert_eq!(stats.risk_adjusted_score, 0.0);
    }
}
