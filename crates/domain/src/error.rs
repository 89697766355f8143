/// Parameter validation errors.
///
/// Every driver validates its inputs before the first trade is simulated;
/// invalid values are rejected here rather than clamped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidParameter {
    /// Win probability outside the closed unit interval.
    #[error("win probability must be within [0, 1], got {0}")]
    WinProbability(f64),
    /// Risk/reward ratio is zero, negative, or not finite.
    #[error("risk/reward ratio must be positive and finite, got {0}")]
    RiskReward(f64),
    /// Trade count of zero.
    #[error("trade count must be at least 1")]
    TradeCount,
    /// Initial capital is zero, negative, or not finite.
    #[error("initial capital must be positive and finite, got {0}")]
    InitialCapital(f64),
    /// Monte Carlo run count of zero.
    #[error("run count must be at least 1")]
    RunCount,
    /// Position size fraction is negative or not finite.
    #[error("position size fraction must be non-negative and finite, got {0}")]
    PositionFraction(f64),
    /// Grid step is zero, negative, or not finite.
    #[error("grid step must be positive and finite, got {0}")]
    GridStep(f64),
    /// A size grid or comparison list that yields no candidates.
    #[error("position size grid is empty")]
    EmptySizeGrid,
}
