//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use sizer_simulation::prelude::*;
//! ```

// Comparative simulation
pub use crate::comparative::{ComparisonEntry, ComparisonReport, ComparisonRunner};

// Equity curves
pub use crate::equity::{EquityTrajectory, RUIN_EPSILON, simulate_equity};

// Outcome generators
pub use crate::outcomes::{BernoulliOutcomes, FixedOutcomes, TradeOutcomeGenerator};

// Reduction
pub use crate::reduce::{reduce_outcomes, reduce_trajectories, run_outcome};

// Runner
pub use crate::runner::MonteCarloRunner;

// Simulation parameters
pub use crate::state::SimulationParameters;
