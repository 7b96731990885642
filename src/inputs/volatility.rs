use statrs::statistics::Statistics;

/// Settings for realised volatility estimation from daily closes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HistoricalVolConfig {
    /// Number of most recent closes considered
    pub lookback_days: usize,
    /// Lower clamp on the annualised estimate
    pub floor: f64,
    /// Upper clamp on the annualised estimate
    pub cap: f64,
    /// Returned when fewer than `min_returns` usable returns exist
    pub fallback: f64,
    pub min_returns: usize,
    /// Annualisation factor, applied as sqrt(trading_days_per_year)
    pub trading_days_per_year: f64,
}

impl Default for HistoricalVolConfig {
    fn default() -> Self {
        Self {
            lookback_days: 252,
            floor: 0.01,
            cap: 5.0,
            fallback: 0.20,
            min_returns: 10,
            trading_days_per_year: 252.0,
        }
    }
}

/// Annualised close-to-close volatility.
///
/// `closes` must be in ascending time order (oldest first). Only the last
/// `lookback_days` closes are used, and a return is taken only between two
/// consecutive positive closes. The sample standard deviation (n - 1) of
/// the log returns is scaled by `sqrt(trading_days_per_year)` and clamped
/// to `[floor, cap]`.
pub fn historical_volatility(closes: &[f64], config: &HistoricalVolConfig) -> f64 {
    let start = closes.len().saturating_sub(config.lookback_days);
    let window = &closes[start..];

    let returns: Vec<f64> = window
        .windows(2)
        .filter(|pair| pair[0] > 0.0 && pair[1] > 0.0)
        .map(|pair| (pair[1] / pair[0]).ln())
        .collect();

    if returns.len() < config.min_returns.max(2) {
        tracing::debug!(
            usable_returns = returns.len(),
            fallback = config.fallback,
            "too few returns for realised volatility, using fallback"
        );
        return config.fallback;
    }

    let sigma = returns.iter().std_dev() * config.trading_days_per_year.sqrt();
    if !sigma.is_finite() {
        return config.fallback;
    }
    sigma.clamp(config.floor, config.cap)
}
