//! Candidate position size grids.

use sizer_domain::error::InvalidParameter;
use sizer_domain::value_objects::position_size::PositionSize;

/// An inclusive percentage range with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeGrid {
    pub start_pct: f64,
    pub stop_pct: f64,
    pub step_pct: f64,
}

impl SizeGrid {
    #[must_use]
    pub fn new(start_pct: f64, stop_pct: f64, step_pct: f64) -> Self {
        Self {
            start_pct,
            stop_pct,
            step_pct,
        }
    }

    /// Materializes the grid as validated position sizes.
    ///
    /// Steps are computed from an integer index so accumulated float
    /// error cannot drop the final grid point.
    pub fn sizes(&self) -> Result<Vec<PositionSize>, InvalidParameter> {
        if !self.step_pct.is_finite() || self.step_pct <= 0.0 {
            return Err(InvalidParameter::GridStep(self.step_pct));
        }
        PositionSize::from_percent(self.start_pct).validate()?;
        PositionSize::from_percent(self.stop_pct).validate()?;
        if self.stop_pct < self.start_pct {
            return Err(InvalidParameter::EmptySizeGrid);
        }

        let count = ((self.stop_pct - self.start_pct) / self.step_pct + 1e-9).floor() as usize + 1;
        let sizes = (0..count)
            .map(|i| PositionSize::from_percent(self.start_pct + i as f64 * self.step_pct))
            .collect();
        Ok(sizes)
    }
}

impl Default for SizeGrid {
    /// 1% through 40% in half-percent steps.
    fn default() -> Self {
        Self::new(1.0, 40.0, 0.5)
    }
}
