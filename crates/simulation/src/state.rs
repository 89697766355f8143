//! Simulation parameters.
//!
//! This module provides the immutable configuration value passed into every
//! simulation driver. There is no process-wide state; each driver receives
//! its own copy.

use sizer_domain::error::InvalidParameter;

/// Configuration for a Monte Carlo simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimulationParameters {
    /// Probability that a single trade wins.
    pub win_probability: f64,
    /// Win multiple relative to the amount risked.
    pub risk_reward: f64,
    /// Number of trades per run.
    pub trades: usize,
    /// Starting capital.
    pub initial_capital: f64,
    /// Number of Monte Carlo runs.
    pub runs: usize,
}

impl SimulationParameters {
    /// Creates parameters with defaults: 500 trades, 10 000 initial capital,
    /// 500 runs.
    #[must_use]
    pub fn new(win_probability: f64, risk_reward: f64) -> Self {
        Self {
            win_probability,
            risk_reward,
            trades: 500,
            initial_capital: 10_000.0,
            runs: 500,
        }
    }

    /// Sets the number of trades per run.
    #[must_use]
    pub fn with_trades(mut self, trades: usize) -> Self {
        self.trades = trades;
        self
    }

    /// Sets the initial capital.
    #[must_use]
    pub fn with_initial_capital(mut self, capital: f64) -> Self {
        self.initial_capital = capital;
        self
    }

    /// Sets the number of Monte Carlo runs.
    #[must_use]
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Validates all parameters, rejecting rather than clamping.
    ///
    /// Win probabilities of exactly 0 or 1 are degenerate but accepted.
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        if !(0.0..=1.0).contains(&self.win_probability) {
            return Err(InvalidParameter::WinProbability(self.win_probability));
        }
        if !self.risk_reward.is_finite() || self.risk_reward <= 0.0 {
            return Err(InvalidParameter::RiskReward(self.risk_reward));
        }
        if self.trades == 0 {
            return Err(InvalidParameter::TradeCount);
        }
        if !self.initial_capital.is_finite() || self.initial_capital <= 0.0 {
            return Err(InvalidParameter::InitialCapital(self.initial_capital));
        }
        if self.runs == 0 {
            return Err(InvalidParameter::RunCount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_builders() {
        let params = SimulationParameters::new(0.57, 1.0)
            .with_trades(200)
            .with_initial_capital(5_000.0)
            .with_runs(50);

        assert_eq!(params.trades, 200);
        assert_eq!(params.runs, 50);
        assert!((params.initial_capital - 5_000.0).abs() < 1e-12);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_win_probability() {
        assert_eq!(
            SimulationParameters::new(1.2, 1.0).validate(),
            Err(InvalidParameter::WinProbability(1.2))
        );
        assert!(SimulationParameters::new(f64::NAN, 1.0).validate().is_err());
        // Degenerate but accepted.
        assert!(SimulationParameters::new(0.0, 1.0).validate().is_ok());
        assert!(SimulationParameters::new(1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_values() {
        assert!(SimulationParameters::new(0.5, 0.0).validate().is_err());
        assert!(SimulationParameters::new(0.5, -2.0).validate().is_err());
        assert!(
            SimulationParameters::new(0.5, 1.0)
                .with_trades(0)
                .validate()
                .is_err()
        );
        assert!(
            SimulationParameters::new(0.5, 1.0)
                .with_initial_capital(0.0)
                .validate()
                .is_err()
        );
        assert!(
            SimulationParameters::new(0.5, 1.0)
                .with_runs(0)
                .validate()
                .is_err()
        );
    }
}
