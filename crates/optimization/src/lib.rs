//! Position size sweep and selection.
//!
//! This crate searches a grid of candidate position sizes:
//! - Grid construction over a percentage range
//! - Parallel Monte Carlo evaluation of every candidate
//! - Selection of the best size under several criteria

/// Selection criteria scoring and eligibility.
pub mod criteria;
/// Candidate size grids.
pub mod grid;
/// Parallel sweep over a size grid.
pub mod sweep;
