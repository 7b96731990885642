use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, QuoteResult};
use crate::models::bs::PricingRequest;

/// Accepted ranges for quote inputs.
///
/// Spot, strike, time to expiry and volatility must always be positive and
/// finite; these bounds are checked on top of that. The defaults match the
/// column constraints of stored pricing runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    /// Years
    pub max_time_to_expiry: f64,
    pub min_risk_free_rate: f64,
    pub max_risk_free_rate: f64,
    pub max_volatility: f64,
    pub min_dividend_yield: f64,
    pub max_dividend_yield: f64,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            max_time_to_expiry: 10.0,
            min_risk_free_rate: 0.0,
            max_risk_free_rate: 0.15,
            max_volatility: 1.0,
            min_dividend_yield: 0.0,
            max_dividend_yield: 0.10,
        }
    }
}

impl InputBounds {
    /// No range limits beyond positivity and finiteness.
    pub fn unbounded() -> Self {
        Self {
            max_time_to_expiry: f64::INFINITY,
            min_risk_free_rate: f64::NEG_INFINITY,
            max_risk_free_rate: f64::INFINITY,
            max_volatility: f64::INFINITY,
            min_dividend_yield: f64::NEG_INFINITY,
            max_dividend_yield: f64::INFINITY,
        }
    }
}

fn check_positive(field: &'static str, value: f64) -> QuoteResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(QuoteError::NonPositive { field, value })
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> QuoteResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(QuoteError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Reject inputs the engine would turn into NaN/infinity or that fall
/// outside `bounds`. Field names in errors are the payload names.
pub fn validate(request: &PricingRequest, bounds: &InputBounds) -> QuoteResult<()> {
    check_positive("spotPrice", request.spot)?;
    check_positive("strikePrice", request.strike)?;
    check_positive("timeToExpiry", request.time_to_expiry)?;
    check_positive("volatility", request.volatility)?;

    check_range(
        "timeToExpiry",
        request.time_to_expiry,
        0.0,
        bounds.max_time_to_expiry,
    )?;
    check_range(
        "riskFreeRate",
        request.risk_free_rate,
        bounds.min_risk_free_rate,
        bounds.max_risk_free_rate,
    )?;
    check_range("volatility", request.volatility, 0.0, bounds.max_volatility)
}

/// The engine ignores dividends, but a supplied yield must still be sane.
pub fn validate_dividend_yield(dividend_yield: f64, bounds: &InputBounds) -> QuoteResult<()> {
    check_range(
        "dividendYield",
        dividend_yield,
        bounds.min_dividend_yield,
        bounds.max_dividend_yield,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bs::OptionVariant;

    fn base() -> PricingRequest {
        PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionVariant::Call)
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate(&base(), &InputBounds::default()).is_ok());
    }

    #[test]
    fn test_positivity() {
        let bounds = InputBounds::unbounded();
        let cases = [
            (PricingRequest { spot: 0.0, ..base() }, "spotPrice"),
            (PricingRequest { strike: -1.0, ..base() }, "strikePrice"),
            (PricingRequest { time_to_expiry: 0.0, ..base() }, "timeToExpiry"),
            (PricingRequest { volatility: f64::NAN, ..base() }, "volatility"),
            (PricingRequest { spot: f64::INFINITY, ..base() }, "spotPrice"),
        ];
        for (req, expected) in cases {
            match validate(&req, &bounds) {
                Err(QuoteError::NonPositive { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected NonPositive for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_default_ranges() {
        let bounds = InputBounds::default();
        let too_long = PricingRequest { time_to_expiry: 10.5, ..base() };
        let high_rate = PricingRequest { risk_free_rate: 0.2, ..base() };
        let negative_rate = PricingRequest { risk_free_rate: -0.01, ..base() };
        let high_vol = PricingRequest { volatility: 1.2, ..base() };

        for (req, expected) in [
            (too_long, "timeToExpiry"),
            (high_rate, "riskFreeRate"),
            (negative_rate, "riskFreeRate"),
            (high_vol, "volatility"),
        ] {
            match validate(&req, &bounds) {
                Err(QuoteError::OutOfRange { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected OutOfRange for {expected}, got {other:?}"),
            }
            assert!(validate(&req, &InputBounds::unbounded()).is_ok());
        }

        // inclusive upper edges
        let edge = PricingRequest {
            time_to_expiry: 10.0,
            risk_free_rate: 0.15,
            volatility: 1.0,
            ..base()
        };
        assert!(validate(&edge, &bounds).is_ok());
    }

    #[test]
    fn test_dividend_yield_range() {
        let bounds = InputBounds::default();
        assert!(validate_dividend_yield(0.0, &bounds).is_ok());
        assert!(validate_dividend_yield(0.10, &bounds).is_ok());
        assert!(validate_dividend_yield(0.11, &bounds).is_err());
        assert!(validate_dividend_yield(-0.01, &bounds).is_err());
    }
}
