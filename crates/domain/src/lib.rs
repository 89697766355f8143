//! Core domain types for Monte Carlo position sizing.
//!
//! This crate holds the pure building blocks shared by the simulation and
//! optimization crates:
//! - Value objects for position sizes, per-run outcomes, and aggregate statistics
//! - Selection criteria for ranking position sizes
//! - Parameter validation errors
//! - Stateless metric functions (descriptive statistics, drawdown, returns)

/// Selection criteria and other closed enumerations.
pub mod enums;
/// Parameter validation errors.
pub mod error;
/// Stateless metric functions over `f64` samples.
pub mod metrics;
/// Immutable result and configuration records.
pub mod value_objects;

pub use error::InvalidParameter;
