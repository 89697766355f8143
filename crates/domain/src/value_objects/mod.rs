pub mod optimization_result;
pub mod position_size;
pub mod run_outcome;
pub mod statistics;

pub use optimization_result::{CriterionSelection, OptimizationResult};
pub use position_size::PositionSize;
pub use run_outcome::RunOutcome;
pub use statistics::PositionSizeStatistics;
