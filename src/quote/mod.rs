//! Request-to-quote pipeline around the pricing engine.
//!
//! The engine is a pure function of six numbers. This module does what a
//! calling service needs around it: decode the payload, resolve optional
//! inputs, validate ranges, evaluate, apply the non-finite policy and round
//! for display.

pub mod types;
pub mod validation;

pub use types::{NumericField, Quote, QuoteRequest};
pub use validation::{validate, validate_dividend_yield, InputBounds};

use crate::config::{NonFinitePolicy, PricerConfig};
use crate::error::{QuoteError, QuoteResult};
use crate::models::bs::evaluate_with;

/// Round half up (towards +inf) to `places` decimals.
///
/// `-2.5` rounds to `-2.0`, matching the display rounding of the existing
/// service. NaN and infinities are returned unchanged, as is any value too
/// large to scale by `10^places`. `places` is capped at `f64::MAX_10_EXP`.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = places.min(f64::MAX_10_EXP as u32);
    let scale = 10f64.powi(places as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    (scaled + 0.5).floor() / scale
}

/// Price a decoded request.
pub fn quote(request: &QuoteRequest, config: &PricerConfig) -> QuoteResult<Quote> {
    let pricing = request.to_pricing_request(config)?;
    if let Some(q) = request.dividend_yield()? {
        validate_dividend_yield(q, &config.bounds)?;
    }
    validate(&pricing, &config.bounds)?;

    tracing::debug!(
        symbol = ?request.symbol,
        variant = %pricing.variant,
        spot = pricing.spot,
        strike = pricing.strike,
        time_to_expiry = pricing.time_to_expiry,
        risk_free_rate = pricing.risk_free_rate,
        volatility = pricing.volatility,
        "pricing request"
    );

    let result = evaluate_with(&pricing, config.cdf_method);

    if let Some((field, value)) = result.fields().into_iter().find(|(_, v)| !v.is_finite()) {
        match config.non_finite {
            NonFinitePolicy::Reject => return Err(QuoteError::NonFiniteResult(field)),
            NonFinitePolicy::PassThrough => {
                tracing::warn!(field, value, symbol = ?request.symbol, "non-finite pricing output")
            }
        }
    }

    Ok(Quote::new(
        request.symbol.clone(),
        pricing,
        &result,
        config.rounding.price_decimals,
        config.rounding.greek_decimals,
    ))
}

/// Decode a JSON payload and price it.
pub fn quote_json(payload: &str, config: &PricerConfig) -> QuoteResult<Quote> {
    let request = QuoteRequest::from_json(payload)?;
    quote(&request, config)
}
