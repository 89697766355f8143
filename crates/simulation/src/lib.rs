//! Monte Carlo simulation of fixed-fraction position sizing.
//!
//! This crate provides the simulation core:
//! - Bernoulli win/loss sequence generation with explicit seeding
//! - Compounding equity curve simulation with terminal ruin detection
//! - Reduction of many runs into per-size aggregate statistics
//! - Independent-sequence and shared-sequence Monte Carlo drivers

/// Prelude module for convenient imports.
pub mod prelude;

/// Shared-sequence comparison driver.
pub mod comparative;
/// Equity curve simulation.
pub mod equity;
/// Trade outcome generators.
pub mod outcomes;
/// Run statistics reduction.
pub mod reduce;
/// Independent-sequence Monte Carlo driver.
pub mod runner;
/// Simulation parameters.
pub mod state;
