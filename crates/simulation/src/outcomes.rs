//! Trade outcome generators.
//!
//! A trade outcome is a single boolean: `true` for a win, `false` for a loss.
//! Generators are restartable; every `generate` call yields a fresh sequence
//! with no state shared between callers.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Bernoulli, Distribution};
use sizer_domain::error::InvalidParameter;

/// Source of win/loss sequences.
pub trait TradeOutcomeGenerator {
    /// Produces the outcomes for one run of `trades` trades.
    fn generate(&mut self, trades: usize) -> Vec<bool>;
}

/// Bernoulli process with a fixed win probability.
pub struct BernoulliOutcomes {
    dist: Bernoulli,
    rng: StdRng,
}

impl BernoulliOutcomes {
    /// Creates a generator seeded from OS entropy.
    pub fn new(win_probability: f64) -> Result<Self, InvalidParameter> {
        Self::build(win_probability, StdRng::from_os_rng())
    }

    /// Creates a generator with a fixed seed for reproducible sequences.
    pub fn seeded(win_probability: f64, seed: u64) -> Result<Self, InvalidParameter> {
        Self::build(win_probability, StdRng::seed_from_u64(seed))
    }

    fn build(win_probability: f64, rng: StdRng) -> Result<Self, InvalidParameter> {
        let dist = Bernoulli::new(win_probability)
            .map_err(|_| InvalidParameter::WinProbability(win_probability))?;
        Ok(Self { dist, rng })
    }
}

impl TradeOutcomeGenerator for BernoulliOutcomes {
    fn generate(&mut self, trades: usize) -> Vec<bool> {
        (0..trades).map(|_| self.dist.sample(&mut self.rng)).collect()
    }
}

/// Replays a preset sequence; deterministic driver for tests and
/// controlled comparisons.
pub struct FixedOutcomes {
    pub outcomes: Vec<bool>,
}

impl FixedOutcomes {
    #[must_use]
    pub fn new(outcomes: Vec<bool>) -> Self {
        Self { outcomes }
    }

    #[must_use]
    pub fn all_wins(trades: usize) -> Self {
        Self::new(vec![true; trades])
    }

    #[must_use]
    pub fn all_losses(trades: usize) -> Self {
        Self::new(vec![false; trades])
    }
}

impl TradeOutcomeGenerator for FixedOutcomes {
    fn generate(&mut self, _trades: usize) -> Vec<bool> {
        self.outcomes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bernoulli_rejects_invalid_probability() {
        assert!(BernoulliOutcomes::new(1.5).is_err());
        assert!(BernoulliOutcomes::new(-0.1).is_err());
        assert!(BernoulliOutcomes::new(f64::NAN).is_err());
    }

    #[test]
    fn test_bernoulli_degenerate_probabilities() {
        let mut always = BernoulliOutcomes::seeded(1.0, 7).unwrap();
        assert!(always.generate(100).iter().all(|&w| w));

        let mut never = BernoulliOutcomes::seeded(0.0, 7).unwrap();
        assert!(never.generate(100).iter().all(|&w| !w));
    }

    #[test]
    fn test_seeded_generators_are_deterministic() {
        let mut a = BernoulliOutcomes::seeded(0.57, 42).unwrap();
        let mut b = BernoulliOutcomes::seeded(0.57, 42).unwrap();
        assert_eq!(a.generate(500), b.generate(500));

        let mut c = BernoulliOutcomes::seeded(0.57, 43).unwrap();
        assert_ne!(a.generate(500), c.generate(500));
    }

    #[test]
    fn test_generate_is_restartable() {
        // Consecutive calls yield fresh sequences, not a replay.
        let mut generator = BernoulliOutcomes::seeded(0.5, 9).unwrap();
        let first = generator.generate(200);
        let second = generator.generate(200);
        assert_eq!(first.len(), 200);
        assert_ne!(first, second);
    }

    #[test]
    fn test_fixed_outcomes_replays_sequence() {
        let mut fixed = FixedOutcomes::new(vec![true, false, true]);
        assert_eq!(fixed.generate(3), vec![true, false, true]);
        assert_eq!(fixed.generate(3), vec![true, false, true]);

        let mut wins = FixedOutcomes::all_wins(4);
        assert_eq!(wins.generate(4), vec![true; 4]);
    }
}
