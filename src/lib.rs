//! # Eurocalc-Lib: European Option Pricing and Greeks
//!
//! `eurocalc-lib` computes the Black-Scholes fair value of a European call or
//! put together with its five first-order sensitivities (delta, gamma, theta,
//! vega, rho) from six market inputs. Around that pure engine it provides the
//! pieces a pricing service needs: payload decoding, input validation,
//! display rounding and a handful of market-input helpers.
//!
//! ## Core Features
//!
//! - **Pricing Engine**: closed-form price and Greeks, no allocation, no I/O
//! - **Reference-compatible CDF**: Abramowitz-Stegun error function by default,
//!   platform `erf` on request
//! - **Quote Pipeline**: JSON request in, rounded quote out, with typed errors
//! - **Market Inputs**: Act/365 year fractions and realised volatility
//!
//! ## Quick Start
//!
//! ```rust
//! use eurocalc_lib::{evaluate, OptionVariant, PricingRequest};
//!
//! let request = PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionVariant::Call);
//! let result = evaluate(&request);
//!
//! assert!((result.price - 10.4506).abs() < 1e-4);
//! assert!((result.delta - 0.6368).abs() < 1e-4);
//! ```
//!
//! Quoting a client payload:
//!
//! ```rust
//! use eurocalc_lib::{default_configs, quote_json};
//!
//! let payload = r#"{"symbol": "AAPL", "spotPrice": "100", "strikePrice": "100",
//!     "timeToExpiry": "1", "riskFreeRate": "0.05", "volatility": "0.2",
//!     "optionType": "put"}"#;
//! let quote = quote_json(payload, &default_configs::standard())?;
//! assert_eq!(quote.price, 5.57);
//! # Ok::<(), eurocalc_lib::QuoteError>(())
//! ```
//!
//! ## Numeric Contract
//!
//! The engine performs no validation. Zero time to expiry or zero volatility
//! yields NaN or infinity in the outputs, never a panic. With the default
//! CDF, results are accurate to the error-function approximation
//! ([`ERF_MAX_ABS_ERROR`]), which is what existing reference values are
//! pinned to.

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod inputs;
pub mod models;
pub mod profile;
#[cfg(feature = "serde")]
pub mod quote;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Engine types and entry points
pub use models::bs::{d1_d2, evaluate, evaluate_with, OptionVariant, PricingRequest, PricingResult, D1D2};
pub use models::normal::{erf_approx, norm_cdf, norm_cdf_with, norm_pdf, CdfMethod, ERF_MAX_ABS_ERROR};

// Quote pipeline
#[cfg(feature = "serde")]
pub use config::{NonFinitePolicy, PricerConfig, RoundingConfig};
pub use error::{QuoteError, QuoteResult};
#[cfg(feature = "serde")]
pub use quote::{quote, quote_json, round_half_up, InputBounds, Quote, QuoteRequest};

// Market inputs and charting
pub use inputs::{historical_volatility, year_fraction, HistoricalVolConfig};
pub use profile::{spot_ladder, LadderPoint};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured quote pipeline settings.
///
/// - [`standard()`]: reference behaviour, matches existing stored results
/// - [`exact()`]: double-precision error function
/// - [`permissive()`]: positivity checks only
/// - [`strict()`]: non-finite outputs are errors
#[cfg(feature = "serde")]
pub mod default_configs {
    use crate::config::PricerConfig;

    /// Reference configuration.
    ///
    /// **Characteristics:**
    /// - Abramowitz-Stegun normal CDF
    /// - Price rounded to 2 dp, Greeks to 3 dp
    /// - T ≤ 10y, r in [0, 0.15], σ ≤ 1.0
    /// - Default risk-free rate 4.5% when a request omits it
    ///
    /// # Example
    ///
    /// ```rust
    /// use eurocalc_lib::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.rounding.price_decimals, 2);
    /// ```
    pub fn standard() -> PricerConfig {
        PricerConfig::standard()
    }

    /// Standard ranges with `libm::erf` behind the CDF. Outputs move in the
    /// 6th-7th decimal place relative to [`standard()`].
    pub fn exact() -> PricerConfig {
        PricerConfig::exact()
    }

    /// For research use: any positive, finite inputs are priced.
    pub fn permissive() -> PricerConfig {
        PricerConfig::permissive()
    }

    /// Standard ranges; a NaN or infinite output fails the quote.
    pub fn strict() -> PricerConfig {
        PricerConfig::strict()
    }
}

/// Greeks of `base` across a spot range with the reference CDF.
///
/// Convenience over [`profile::spot_ladder`] for charting.
///
/// # Example
///
/// ```rust
/// use eurocalc_lib::{greeks_ladder, OptionVariant, PricingRequest};
///
/// let base = PricingRequest::new(100.0, 100.0, 0.5, 0.03, 0.25, OptionVariant::Put);
/// let ladder = greeks_ladder(&base, 80.0, 120.0, 40);
/// assert_eq!(ladder.len(), 41);
/// assert!(ladder.iter().all(|p| p.result.delta < 0.0));
/// ```
pub fn greeks_ladder(
    base: &PricingRequest,
    spot_min: f64,
    spot_max: f64,
    steps: usize,
) -> Vec<LadderPoint> {
    spot_ladder(base, spot_min, spot_max, steps, CdfMethod::AbramowitzStegun)
}
