//! Shared-sequence comparison across several position sizes.
//!
//! Every run draws one trade outcome sequence and replays it at each
//! candidate size, so the resulting equity curves differ only through
//! the fraction risked. Raw trajectories are kept for inspection.

use crate::equity::{EquityTrajectory, simulate_equity};
use crate::outcomes::{BernoulliOutcomes, TradeOutcomeGenerator};
use crate::reduce::reduce_trajectories;
use crate::state::SimulationParameters;
use serde::{Deserialize, Serialize};
use sizer_domain::error::InvalidParameter;
use sizer_domain::value_objects::position_size::PositionSize;
use sizer_domain::value_objects::statistics::PositionSizeStatistics;

/// Aggregate statistics plus the raw equity curves for one size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub stats: PositionSizeStatistics,
    pub trajectories: Vec<EquityTrajectory>,
}

impl ComparisonEntry {
    /// The trajectory whose final capital is the median of the batch.
    ///
    /// For an even run count the upper of the two middle runs is used so
    /// the result is always a curve that was actually simulated.
    #[must_use]
    pub fn median_trajectory(&self) -> Option<&EquityTrajectory> {
        if self.trajectories.is_empty() {
            return None;
        }
        let mut order: Vec<usize> = (0..self.trajectories.len()).collect();
        order.sort_by(|&a, &b| {
            self.trajectories[a]
                .final_capital()
                .partial_cmp(&self.trajectories[b].final_capital())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mid = order[order.len() / 2];
        self.trajectories.get(mid)
    }
}

/// Results of a shared-sequence comparison, one entry per size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub entries: Vec<ComparisonEntry>,
}

/// Replays identical outcome sequences across all candidate sizes.
pub struct ComparisonRunner {
    pub params: SimulationParameters,
    pub sizes: Vec<PositionSize>,
    pub seed: Option<u64>,
}

impl ComparisonRunner {
    #[must_use]
    pub fn new(params: SimulationParameters, sizes: Vec<PositionSize>) -> Self {
        Self {
            params,
            sizes,
            seed: None,
        }
    }

    /// Fixes the generator seed for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs the comparison with a Bernoulli outcome generator.
    pub fn run(&self) -> Result<ComparisonReport, InvalidParameter> {
        let mut generator = match self.seed {
            Some(seed) => BernoulliOutcomes::seeded(self.params.win_probability, seed),
            None => BernoulliOutcomes::new(self.params.win_probability),
        }?;
        self.run_with(&mut generator)
    }

    /// Runs the comparison against a caller-supplied generator.
    ///
    /// One `generate` call is consumed per run and the sequence is shared
    /// by every size in that run.
    pub fn run_with<G: TradeOutcomeGenerator>(
        &self,
        generator: &mut G,
    ) -> Result<ComparisonReport, InvalidParameter> {
        self.params.validate()?;
        if self.sizes.is_empty() {
            return Err(InvalidParameter::EmptySizeGrid);
        }
        for size in &self.sizes {
            size.validate()?;
        }

        let mut per_size: Vec<Vec<EquityTrajectory>> = self
            .sizes
            .iter()
            .map(|_| Vec::with_capacity(self.params.runs))
            .collect();

        for _ in 0..self.params.runs {
            let outcomes = generator.generate(self.params.trades);
            for (slot, &size) in per_size.iter_mut().zip(&self.sizes) {
                slot.push(simulate_equity(
                    &outcomes,
                    size,
                    self.params.initial_capital,
                    self.params.risk_reward,
                ));
            }
        }

        let entries = self
            .sizes
            .iter()
            .zip(per_size)
            .map(|(&size, trajectories)| ComparisonEntry {
                stats: reduce_trajectories(size, self.params.initial_capital, &trajectories),
                trajectories,
            })
            .collect();

        Ok(ComparisonReport { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcomes::FixedOutcomes;

    #[test]
    fn test_empty_size_list_is_rejected() {
        let runner = ComparisonRunner::new(SimulationParameters::new(0.5, 1.0), Vec::new());
        assert_eq!(runner.run().unwrap_err(), InvalidParameter::EmptySizeGrid);
    }

    #[test]
    fn test_shared_sequence_moves_all_sizes_in_lockstep() {
        let params = SimulationParameters::new(0.5, 2.0)
            .with_trades(40)
            .with_runs(25);
        let sizes = vec![PositionSize::new(0.05), PositionSize::new(0.2)];
        let report = ComparisonRunner::new(params, sizes)
            .with_seed(7)
            .run()
            .unwrap();

        let small = &report.entries[0].trajectories;
        let large = &report.entries[1].trajectories;
        assert_eq!(small.len(), 25);
        assert_eq!(large.len(), 25);

        // Below full risk neither size can hit ruin here, so each step of
        // each run must move both curves in the same direction.
        for (a, b) in small.iter().zip(large) {
            for step in 1..a.values.len() {
                let up_a = a.values[step] > a.values[step - 1];
                let up_b = b.values[step] > b.values[step - 1];
                assert_eq!(up_a, up_b);
            }
        }
    }

    #[test]
    fn test_fixed_sequence_reduces_to_deterministic_stats() {
        let params = SimulationParameters::new(0.5, 1.0)
            .with_trades(4)
            .with_runs(3);
        let sizes = vec![PositionSize::new(0.1)];
        let mut generator = FixedOutcomes::new(vec![true, false, true, false]);

        let report = ComparisonRunner::new(params, sizes)
            .run_with(&mut generator)
            .unwrap();

        let entry = &report.entries[0];
        let expected = 10_000.0 * 1.1 * 0.9 * 1.1 * 0.9;
        assert_eq!(entry.stats.runs, 3);
        assert!((entry.stats.mean_final_capital - expected).abs() < 1e-9);
        assert!((entry.stats.return_std_dev_pct).abs() < 1e-12);
    }

    #[test]
    fn test_median_trajectory_picks_middle_final_capital() {
        let make = |values: Vec<f64>| EquityTrajectory { values };
        let entry = ComparisonEntry {
            stats: PositionSizeStatistics::empty(PositionSize::new(0.1)),
            trajectories: vec![
                make(vec![10_000.0, 15_000.0]),
                make(vec![10_000.0, 8_000.0]),
                make(vec![10_000.0, 11_000.0]),
            ],
        };
        let median = entry.median_trajectory().unwrap();
        assert_eq!(median.final_capital(), 11_000.0);

        // Even count takes the upper of the two middle runs.
        let even = ComparisonEntry {
            stats: PositionSizeStatistics::empty(PositionSize::new(0.1)),
            trajectories: vec![
                make(vec![10_000.0, 15_000.0]),
                make(vec![10_000.0, 8_000.0]),
                make(vec![10_000.0, 11_000.0]),
                make(vec![10_000.0, 9_000.0]),
            ],
        };
        assert_eq!(even.median_trajectory().unwrap().final_capital(), 11_000.0);

        let empty = ComparisonEntry {
            stats: PositionSizeStatistics::empty(PositionSize::new(0.1)),
            trajectories: Vec::new(),
        };
        assert!(empty.median_trajectory().is_none());
    }

    #[test]
    fn test_report_serializes_with_trajectories() {
        let params = SimulationParameters::new(0.5, 1.0)
            .with_trades(6)
            .with_runs(4);
        let sizes = vec![PositionSize::new(0.05), PositionSize::new(0.1)];
        let report = ComparisonRunner::new(params, sizes)
            .with_seed(3)
            .run()
            .unwrap();

        let dump = serde_json::to_string(&report).unwrap();
        let decoded: ComparisonReport = serde_json::from_str(&dump).unwrap();
        assert_eq!(decoded.entries.len(), 2);
        assert_eq!(decoded.entries[0].trajectories.len(), 4);
        assert_eq!(decoded.entries[0].trajectories[0].values.len(), 7);
        assert_eq!(
            decoded.entries[1].stats.mean_final_capital,
            report.entries[1].stats.mean_final_capital
        );
    }
}
