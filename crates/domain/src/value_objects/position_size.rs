use crate::error::InvalidParameter;
use serde::{Deserialize, Serialize};

/// Fraction of current capital risked on each trade.
///
/// Stored as a fraction (0.05 = 5%); external interfaces speak percent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct PositionSize(pub f64);

impl PositionSize {
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        Self(fraction)
    }

    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        Self(percent / 100.0)
    }

    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    pub fn validate(&self) -> Result<(), InvalidParameter> {
        if !self.0.is_finite() || self.0 < 0.0 {
            return Err(InvalidParameter::PositionFraction(self.0));
        }
        Ok(())
    }
}
