//! Parallel Monte Carlo sweep over a size grid.
//!
//! Each candidate size is evaluated with its own independent outcome
//! sequences. Candidates are simulated in parallel and the resulting
//! table is handed to the selection criteria.

use crate::criteria::select_optimal;
use crate::grid::SizeGrid;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sizer_domain::error::InvalidParameter;
use sizer_domain::value_objects::optimization_result::OptimizationResult;
use sizer_domain::value_objects::statistics::PositionSizeStatistics;
use sizer_simulation::runner::MonteCarloRunner;
use sizer_simulation::state::SimulationParameters;
use std::cmp::Ordering;
use tracing::{debug, info};

/// Full sweep output: the per-size table plus per-criterion selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub table: Vec<PositionSizeStatistics>,
    pub optimization: OptimizationResult,
}

/// Evaluates a grid of position sizes and selects the best entries.
pub struct SweepOptimizer {
    pub params: SimulationParameters,
    pub grid: SizeGrid,
    pub seed: Option<u64>,
}

impl SweepOptimizer {
    #[must_use]
    pub fn new(params: SimulationParameters, grid: SizeGrid) -> Self {
        Self {
            params,
            grid,
            seed: None,
        }
    }

    /// Fixes the base seed; each candidate derives its own from it.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn run(&self) -> Result<SweepReport, InvalidParameter> {
        self.params.validate()?;
        let sizes = self.grid.sizes()?;
        info!(
            candidates = sizes.len(),
            runs = self.params.runs,
            trades = self.params.trades,
            "Starting position size sweep"
        );

        let mut table: Vec<PositionSizeStatistics> = sizes
            .par_iter()
            .enumerate()
            .map(|(idx, &size)| {
                let runner = MonteCarloRunner::new(self.params, size);
                match self.seed {
                    Some(base) => runner.with_seed(base.wrapping_add(idx as u64)).run(),
                    None => runner.run(),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        table.sort_by(|a, b| {
            a.size
                .fraction()
                .partial_cmp(&b.size.fraction())
                .unwrap_or(Ordering::Equal)
        });

        let optimization = select_optimal(&table);
        debug!(entries = table.len(), "Sweep complete");
        Ok(SweepReport {
            table,
            optimization,
        })
    }
}
