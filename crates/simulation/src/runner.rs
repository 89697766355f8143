//! Independent-sequence Monte Carlo driver.
//!
//! Runs many simulations at one position size, drawing a fresh outcome
//! sequence for every run, and reduces them to aggregate statistics.

use crate::equity::simulate_equity;
use crate::outcomes::{BernoulliOutcomes, TradeOutcomeGenerator};
use crate::reduce::reduce_trajectories;
use crate::state::SimulationParameters;
use sizer_domain::error::InvalidParameter;
use sizer_domain::value_objects::position_size::PositionSize;
use sizer_domain::value_objects::statistics::PositionSizeStatistics;

/// Monte Carlo driver for a single position size.
pub struct MonteCarloRunner {
    pub params: SimulationParameters,
    pub size: PositionSize,
    pub seed: Option<u64>,
}

impl MonteCarloRunner {
    #[must_use]
    pub fn new(params: SimulationParameters, size: PositionSize) -> Self {
        Self {
            params,
            size,
            seed: None,
        }
    }

    /// Fixes the generator seed for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs all simulations with a Bernoulli outcome generator.
    pub fn run(&self) -> Result<PositionSizeStatistics, InvalidParameter> {
        let mut generator = match self.seed {
            Some(seed) => BernoulliOutcomes::seeded(self.params.win_probability, seed),
            None => BernoulliOutcomes::new(self.params.win_probability),
        }?;
        self.run_with(&mut generator)
    }

    /// Runs all simulations against a caller-supplied generator.
    ///
    /// Each run consumes one `generate` call, so sequences are independent
    /// across runs.
    pub fn run_with<G: TradeOutcomeGenerator>(
        &self,
        generator: &mut G,
    ) -> Result<PositionSizeStatistics, InvalidParameter> {
        self.params.validate()?;
        self.size.validate()?;

        let mut trajectories = Vec::with_capacity(self.params.runs);
        for _ in 0..self.params.runs {
            let outcomes = generator.generate(self.params.trades);
            trajectories.push(simulate_equity(
                &outcomes,
                self.size,
                self.params.initial_capital,
                self.params.risk_reward,
            ));
        }

        Ok(reduce_trajectories(
            self.size,
            self.params.initial_capital,
            &trajectories,
        ))
    }
}
