use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::PricerConfig;
use crate::error::{QuoteError, QuoteResult};
use crate::inputs::{historical_volatility, parse_iso_date, year_fraction};
use crate::models::bs::{OptionVariant, PricingRequest, PricingResult};

/// A numeric payload field sent either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    pub fn parse(&self, field: &'static str) -> QuoteResult<f64> {
        match self {
            NumericField::Number(v) => Ok(*v),
            NumericField::Text(s) => {
                s.trim()
                    .parse::<f64>()
                    .map_err(|_| QuoteError::InvalidNumber {
                        field,
                        value: s.clone(),
                    })
            }
        }
    }
}

impl From<f64> for NumericField {
    fn from(v: f64) -> Self {
        NumericField::Number(v)
    }
}

/// Incoming pricing request as sent by clients.
///
/// Every field is optional at the type level so that a missing field is
/// reported by name rather than as a generic decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Echoed back in the quote
    pub symbol: Option<String>,
    pub spot_price: Option<NumericField>,
    pub strike_price: Option<NumericField>,
    /// Years; takes precedence over `expiry`
    pub time_to_expiry: Option<NumericField>,
    /// Falls back to the configured rate when absent
    pub risk_free_rate: Option<NumericField>,
    /// Range-checked but not used by the pricing formula
    pub dividend_yield: Option<NumericField>,
    /// Takes precedence over `closes`
    pub volatility: Option<NumericField>,
    /// "call" or "put", case-insensitive
    pub option_type: Option<String>,
    /// ISO expiry date, used when `timeToExpiry` is absent
    pub expiry: Option<String>,
    /// ISO valuation date for `expiry`; defaults to today (UTC)
    pub as_of: Option<String>,
    /// Daily closes, oldest first, used when `volatility` is absent
    pub closes: Option<Vec<f64>>,
}

fn required(value: &Option<NumericField>, field: &'static str) -> QuoteResult<f64> {
    value
        .as_ref()
        .ok_or(QuoteError::MissingField(field))?
        .parse(field)
}

fn optional(value: &Option<NumericField>, field: &'static str) -> QuoteResult<Option<f64>> {
    value.as_ref().map(|v| v.parse(field)).transpose()
}

impl QuoteRequest {
    pub fn from_json(payload: &str) -> QuoteResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Request carrying exactly the engine inputs of `request`.
    pub fn from_pricing_request(request: &PricingRequest) -> Self {
        Self {
            spot_price: Some(request.spot.into()),
            strike_price: Some(request.strike.into()),
            time_to_expiry: Some(request.time_to_expiry.into()),
            risk_free_rate: Some(request.risk_free_rate.into()),
            volatility: Some(request.volatility.into()),
            option_type: Some(request.variant.to_string()),
            ..Self::default()
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn variant(&self) -> QuoteResult<OptionVariant> {
        let raw = self
            .option_type
            .as_deref()
            .ok_or(QuoteError::MissingField("optionType"))?;
        raw.parse()
            .map_err(|_| QuoteError::InvalidOptionType(raw.to_string()))
    }

    pub fn dividend_yield(&self) -> QuoteResult<Option<f64>> {
        optional(&self.dividend_yield, "dividendYield")
    }

    fn resolve_time_to_expiry(&self) -> QuoteResult<f64> {
        if let Some(t) = optional(&self.time_to_expiry, "timeToExpiry")? {
            return Ok(t);
        }
        let expiry = self
            .expiry
            .as_deref()
            .ok_or(QuoteError::MissingField("timeToExpiry"))?;
        let expiry = parse_iso_date("expiry", expiry)?;
        let as_of = match self.as_of.as_deref() {
            Some(raw) => parse_iso_date("asOf", raw)?,
            None => Utc::now().date_naive(),
        };
        year_fraction(as_of, expiry)
    }

    fn resolve_volatility(&self, config: &PricerConfig) -> QuoteResult<f64> {
        if let Some(sigma) = optional(&self.volatility, "volatility")? {
            return Ok(sigma);
        }
        let closes = self
            .closes
            .as_deref()
            .ok_or(QuoteError::MissingField("volatility"))?;
        Ok(historical_volatility(closes, &config.historical_vol))
    }

    /// Resolve the six engine inputs. Ranges are not checked here; see
    /// [`crate::quote::validation::validate`].
    pub fn to_pricing_request(&self, config: &PricerConfig) -> QuoteResult<PricingRequest> {
        let spot = required(&self.spot_price, "spotPrice")?;
        let strike = required(&self.strike_price, "strikePrice")?;
        let variant = self.variant()?;
        let time_to_expiry = self.resolve_time_to_expiry()?;
        let volatility = self.resolve_volatility(config)?;
        let risk_free_rate =
            optional(&self.risk_free_rate, "riskFreeRate")?.unwrap_or(config.risk_free_rate);

        Ok(PricingRequest::new(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            variant,
        ))
    }
}

/// Display-ready quote: price rounded to `price_decimals`, Greeks to
/// `greek_decimals`, plus the echoed symbol, variant and resolved inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
    pub symbol: Option<String>,
    pub option_type: OptionVariant,
    pub inputs: PricingRequest,
}

impl Quote {
    pub fn new(
        symbol: Option<String>,
        inputs: PricingRequest,
        result: &PricingResult,
        price_decimals: u32,
        greek_decimals: u32,
    ) -> Self {
        let greek = |v: f64| super::round_half_up(v, greek_decimals);
        Self {
            price: super::round_half_up(result.price, price_decimals),
            delta: greek(result.delta),
            gamma: greek(result.gamma),
            theta: greek(result.theta),
            vega: greek(result.vega),
            rho: greek(result.rho),
            symbol,
            option_type: inputs.variant,
            inputs,
        }
    }

    /// Non-finite values serialize as `null`.
    pub fn to_json(&self) -> QuoteResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
