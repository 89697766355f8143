//! Scoring and selection under the supported criteria.

use sizer_domain::enums::SelectionCriterion;
use sizer_domain::value_objects::optimization_result::{CriterionSelection, OptimizationResult};
use sizer_domain::value_objects::statistics::PositionSizeStatistics;
use std::cmp::Ordering;

/// The statistic a criterion maximizes.
#[must_use]
pub fn criterion_score(criterion: SelectionCriterion, stats: &PositionSizeStatistics) -> f64 {
    match criterion {
        SelectionCriterion::GeometricMeanReturn => stats.geometric_mean_return_pct,
        SelectionCriterion::MedianReturn => stats.median_return_pct,
        SelectionCriterion::MeanReturn
        | SelectionCriterion::SafeGrowth
        | SelectionCriterion::VerySafeGrowth => stats.mean_return_pct,
        SelectionCriterion::RiskAdjustedReturn => stats.risk_adjusted_score,
    }
}

/// Whether a candidate passes the criterion's drawdown cap, if any.
#[must_use]
pub fn is_eligible(criterion: SelectionCriterion, stats: &PositionSizeStatistics) -> bool {
    match criterion.mean_drawdown_cap_pct() {
        Some(cap) => stats.mean_max_drawdown_pct < cap,
        None => true,
    }
}

/// Picks the best candidate under one criterion.
///
/// Ties on the score go to the smallest position size. Returns `None`
/// when no candidate is eligible.
#[must_use]
pub fn select_by(
    table: &[PositionSizeStatistics],
    criterion: SelectionCriterion,
) -> Option<&PositionSizeStatistics> {
    let mut best: Option<&PositionSizeStatistics> = None;
    for candidate in table {
        if !is_eligible(criterion, candidate) {
            continue;
        }
        let Some(current) = best else {
            best = Some(candidate);
            continue;
        };
        match criterion_score(criterion, candidate)
            .partial_cmp(&criterion_score(criterion, current))
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Greater => best = Some(candidate),
            Ordering::Equal if candidate.size.fraction() < current.size.fraction() => {
                best = Some(candidate);
            }
            _ => {}
        }
    }
    best
}

/// Evaluates every supported criterion over the table.
#[must_use]
pub fn select_optimal(table: &[PositionSizeStatistics]) -> OptimizationResult {
    let selections = SelectionCriterion::ALL
        .iter()
        .map(|&criterion| CriterionSelection {
            criterion,
            selection: select_by(table, criterion).cloned(),
        })
        .collect();
    OptimizationResult { selections }
}
