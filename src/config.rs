use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::inputs::volatility::HistoricalVolConfig;
use crate::models::normal::CdfMethod;
use crate::quote::validation::InputBounds;

/// Environment variable consulted by [`PricerConfig::with_env_overrides`].
pub const RISK_FREE_RATE_ENV: &str = "RISK_FREE_RATE";

/// What the quote layer does when the engine returns NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Keep the values; they serialize to JSON as `null`
    #[default]
    PassThrough,
    /// Fail the quote with `QuoteError::NonFiniteResult`
    Reject,
}

/// Decimal places applied to quote outputs for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingConfig {
    #[serde(default = "default_price_decimals")]
    pub price_decimals: u32,

    #[serde(default = "default_greek_decimals")]
    pub greek_decimals: u32,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            price_decimals: default_price_decimals(),
            greek_decimals: default_greek_decimals(),
        }
    }
}

/// Main configuration for the quote pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricerConfig {
    /// Error function backing the normal CDF
    #[serde(default)]
    pub cdf_method: CdfMethod,

    /// Rate used when a request omits `riskFreeRate`
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    #[serde(default)]
    pub non_finite: NonFinitePolicy,

    #[serde(default)]
    pub rounding: RoundingConfig,

    /// Accepted input ranges
    #[serde(default)]
    pub bounds: InputBounds,

    /// Realised volatility settings for requests that send a close history
    #[serde(default)]
    pub historical_vol: HistoricalVolConfig,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            cdf_method: CdfMethod::default(),
            risk_free_rate: default_risk_free_rate(),
            non_finite: NonFinitePolicy::default(),
            rounding: RoundingConfig::default(),
            bounds: InputBounds::default(),
            historical_vol: HistoricalVolConfig::default(),
        }
    }
}

impl PricerConfig {
    /// Reference behaviour: approximate CDF, stored-run input ranges, 2/3 dp rounding
    pub fn standard() -> Self {
        Self::default()
    }

    /// Same as standard but with the double-precision error function
    pub fn exact() -> Self {
        Self {
            cdf_method: CdfMethod::Exact,
            ..Self::default()
        }
    }

    /// Only positivity checks on inputs; non-finite outputs pass through
    pub fn permissive() -> Self {
        Self {
            bounds: InputBounds::unbounded(),
            non_finite: NonFinitePolicy::PassThrough,
            ..Self::default()
        }
    }

    /// Standard ranges, and any non-finite output fails the quote
    pub fn strict() -> Self {
        Self {
            non_finite: NonFinitePolicy::Reject,
            ..Self::default()
        }
    }

    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse pricer config")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), cdf_method = ?config.cdf_method, "loaded pricer config");
        Ok(config)
    }

    /// Apply `RISK_FREE_RATE` from the environment when it is set.
    pub fn with_env_overrides(self) -> Result<Self> {
        match std::env::var(RISK_FREE_RATE_ENV) {
            Ok(raw) => self.with_risk_free_rate_str(&raw),
            Err(_) => Ok(self),
        }
    }

    fn with_risk_free_rate_str(mut self, raw: &str) -> Result<Self> {
        self.risk_free_rate = raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("{RISK_FREE_RATE_ENV}: not a number: {raw:?}"))?;
        Ok(self)
    }
}

fn default_risk_free_rate() -> f64 {
    0.045
}

fn default_price_decimals() -> u32 {
    2
}

fn default_greek_decimals() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let cfg = PricerConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, PricerConfig::default());
        assert_eq!(cfg.rounding.price_decimals, 2);
        assert_eq!(cfg.rounding.greek_decimals, 3);
        assert_eq!(cfg.risk_free_rate, 0.045);
        assert_eq!(cfg.cdf_method, CdfMethod::AbramowitzStegun);
    }

    #[test]
    fn test_partial_toml() {
        let cfg = PricerConfig::from_toml_str(
            r#"
            cdf_method = "exact"
            non_finite = "reject"

            [rounding]
            greek_decimals = 4

            [bounds]
            max_volatility = 2.5

            [historical_vol]
            lookback_days = 63
            "#,
        )
        .unwrap();
        assert_eq!(cfg.cdf_method, CdfMethod::Exact);
        assert_eq!(cfg.non_finite, NonFinitePolicy::Reject);
        assert_eq!(cfg.rounding.price_decimals, 2);
        assert_eq!(cfg.rounding.greek_decimals, 4);
        assert_eq!(cfg.bounds.max_volatility, 2.5);
        assert_eq!(cfg.bounds.max_time_to_expiry, 10.0);
        assert_eq!(cfg.historical_vol.lookback_days, 63);
        assert_eq!(cfg.historical_vol.cap, 5.0);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(PricerConfig::from_toml_str("cdf_method = \"bogus\"").is_err());
        assert!(PricerConfig::from_toml_str("risk_free_rate = \"high\"").is_err());
    }

    #[test]
    fn test_risk_free_rate_override() {
        let cfg = PricerConfig::standard()
            .with_risk_free_rate_str(" 0.05 ")
            .unwrap();
        assert_eq!(cfg.risk_free_rate, 0.05);
        assert!(PricerConfig::standard()
            .with_risk_free_rate_str("five percent")
            .is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(PricerConfig::exact().cdf_method, CdfMethod::Exact);
        assert_eq!(PricerConfig::strict().non_finite, NonFinitePolicy::Reject);
        assert!(PricerConfig::permissive().bounds.max_volatility.is_infinite());
    }
}
