/// Floor applied to per-run capital ratios before the log-space geometric
/// mean, so a ruined run contributes a near-zero factor instead of a domain
/// error.
pub const GEOMEAN_RATIO_FLOOR: f64 = 1e-4;

/// Return relative to initial capital, in percent.
pub fn percent_return(initial_capital: f64, final_capital: f64) -> f64 {
    if initial_capital <= 0.0 {
        return 0.0;
    }
    (final_capital / initial_capital - 1.0) * 100.0
}

/// Geometric mean return over per-run capital ratios (`final / initial`),
/// in percent.
///
/// Computed in log space; each ratio is floored at [`GEOMEAN_RATIO_FLOOR`],
/// so run sets containing ruined runs are pulled toward −100% rather than
/// producing NaN. Returns 0 for an empty slice.
pub fn geometric_mean_return_pct(capital_ratios: &[f64]) -> f64 {
    if capital_ratios.is_empty() {
        return 0.0;
    }
    let log_sum: f64 = capital_ratios
        .iter()
        .map(|&r| r.max(GEOMEAN_RATIO_FLOOR).ln())
        .sum();
    ((log_sum / capital_ratios.len() as f64).exp() - 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_return() {
        assert!((percent_return(10_000.0, 12_000.0) - 20.0).abs() < 1e-12);
        assert!((percent_return(10_000.0, 8_000.0) + 20.0).abs() < 1e-12);
        assert_eq!(percent_return(0.0, 12_000.0), 0.0);
    }

    #[test]
    fn test_geometric_mean_identical_ratios() {
        // Identical ratios: the geometric mean is the ratio itself.
        let ratios = [1.1, 1.1, 1.1];
        assert!((geometric_mean_return_pct(&ratios) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_geometric_mean_mixed_ratios() {
        // sqrt(2.0 * 0.5) = 1.0, so the mean return is 0%.
        let ratios = [2.0, 0.5];
        assert!(geometric_mean_return_pct(&ratios).abs() < 1e-9);
    }

    #[test]
    fn test_geometric_mean_floors_ruined_runs() {
        // A zero ratio is floored, not a log-domain error.
        let value = geometric_mean_return_pct(&[0.0, 1.0]);
        assert!(value.is_finite());
        assert!(value < 0.0);
    }

    #[test]
    fn test_geometric_mean_empty() {
        assert_eq!(geometric_mean_return_pct(&[]), 0.0);
    }
}
