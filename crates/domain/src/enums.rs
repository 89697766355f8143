use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionCriterion {
    GeometricMeanReturn,
    MedianReturn,
    MeanReturn,
    RiskAdjustedReturn,
    SafeGrowth,
    VerySafeGrowth,
}

impl SelectionCriterion {
    /// All criteria, in report order.
    pub const ALL: [SelectionCriterion; 6] = [
        SelectionCriterion::GeometricMeanReturn,
        SelectionCriterion::MedianReturn,
        SelectionCriterion::MeanReturn,
        SelectionCriterion::RiskAdjustedReturn,
        SelectionCriterion::SafeGrowth,
        SelectionCriterion::VerySafeGrowth,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SelectionCriterion::GeometricMeanReturn => "Best Geometric Mean Return",
            SelectionCriterion::MedianReturn => "Best Median Return",
            SelectionCriterion::MeanReturn => "Best Mean Return",
            SelectionCriterion::RiskAdjustedReturn => "Best Risk-Adjusted Return",
            SelectionCriterion::SafeGrowth => "Best Safe Growth",
            SelectionCriterion::VerySafeGrowth => "Best Very Safe Growth",
        }
    }

    /// Eligibility cap on mean max drawdown, where the criterion has one.
    #[must_use]
    pub fn mean_drawdown_cap_pct(&self) -> Option<f64> {
        match self {
            SelectionCriterion::SafeGrowth => Some(30.0),
            SelectionCriterion::VerySafeGrowth => Some(20.0),
            _ => None,
        }
    }
}
