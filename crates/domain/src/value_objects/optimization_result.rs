use crate::enums::SelectionCriterion;
use crate::value_objects::statistics::PositionSizeStatistics;
use serde::{Deserialize, Serialize};

/// The size chosen under one criterion, or `None` when no candidate qualified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionSelection {
    pub criterion: SelectionCriterion,
    pub selection: Option<PositionSizeStatistics>,
}

/// Per-criterion selections over a sweep's statistics table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub selections: Vec<CriterionSelection>,
}

impl OptimizationResult {
    /// Looks up the selected statistics for a criterion.
    #[must_use]
    pub fn selection_for(&self, criterion: SelectionCriterion) -> Option<&PositionSizeStatistics> {
        self.selections
            .iter()
            .find(|s| s.criterion == criterion)
            .and_then(|s| s.selection.as_ref())
    }
}
