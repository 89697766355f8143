/// Largest peak-to-any-later-point decline over an equity curve, in percent.
///
/// Tracks the running peak and measures each value against it; the result is
/// the worst such decline anywhere along the curve. Returns 0 for an empty or
/// monotonically rising curve.
pub fn max_drawdown_pct(equity: &[f64]) -> f64 {
    let Some(&first) = equity.first() else {
        return 0.0;
    };
    let mut peak = first;
    let mut max_dd = 0.0;
    for &value in equity {
        if value > peak {
            peak = value;
        } else if peak > 0.0 {
            let dd = (peak - value) / peak * 100.0;
            if dd > max_dd {
                max_dd = dd;
            }
        }
    }
    max_dd
}
