// Closed-form Black-Scholes pricing and Greeks for European calls and puts.
// The engine validates nothing: degenerate inputs (T = 0, sigma = 0, S/K <= 0)
// surface as NaN or infinity in the returned values instead of an error.

use std::fmt;
use std::str::FromStr;

use crate::models::normal::{norm_cdf_with, norm_pdf, CdfMethod};

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionVariant {
    Call,
    Put,
}

impl OptionVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionVariant::Call => "call",
            OptionVariant::Put => "put",
        }
    }
}

impl fmt::Display for OptionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OptionVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionVariant::Call),
            "put" => Ok(OptionVariant::Put),
            other => Err(format!("Invalid option type: {}", other)),
        }
    }
}

/// The six market inputs of a single Black-Scholes evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PricingRequest {
    /// Spot price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub time_to_expiry: f64,
    /// Continuously compounded risk-free rate (decimal)
    pub risk_free_rate: f64,
    /// Annualised volatility (decimal)
    pub volatility: f64,
    pub variant: OptionVariant,
}

impl PricingRequest {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
        variant: OptionVariant,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            variant,
        }
    }

    /// Same inputs with the other option variant.
    pub fn with_variant(self, variant: OptionVariant) -> Self {
        Self { variant, ..self }
    }

    /// Same inputs with a different spot price.
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }
}

/// Fair value and Greeks, in full double precision.
///
/// Theta is per year and vega/rho are per unit (not per 1%) change.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

impl PricingResult {
    /// True when every field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_finite())
    }

    /// Field names paired with values, in output order.
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("price", self.price),
            ("delta", self.delta),
            ("gamma", self.gamma),
            ("theta", self.theta),
            ("vega", self.vega),
            ("rho", self.rho),
        ]
    }
}

/// Standardised log-moneyness terms shared by every formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D1D2 {
    pub d1: f64,
    pub d2: f64,
}

#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> D1D2 {
    let sigma_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / sigma_sqrt_t;
    D1D2 {
        d1,
        d2: d1 - sigma_sqrt_t,
    }
}

/// Price and Greeks with the Abramowitz-Stegun normal CDF.
pub fn evaluate(request: &PricingRequest) -> PricingResult {
    evaluate_with(request, CdfMethod::AbramowitzStegun)
}

/// Price and Greeks of a European option under Black-Scholes.
///
/// Gamma and vega do not depend on the variant and are computed once, so a
/// call and a put on the same inputs report bitwise identical values.
#[allow(non_snake_case)]
pub fn evaluate_with(request: &PricingRequest, method: CdfMethod) -> PricingResult {
    let S = request.spot;
    let K = request.strike;
    let T = request.time_to_expiry;
    let r = request.risk_free_rate;
    let sigma = request.volatility;

    let D1D2 { d1, d2 } = d1_d2(S, K, T, r, sigma);
    let sqrt_t = T.sqrt();
    let discount = (-r * T).exp();

    let n_d1 = norm_cdf_with(d1, method);
    let n_d2 = norm_cdf_with(d2, method);
    let pdf_d1 = norm_pdf(d1);

    let gamma = pdf_d1 / (S * sigma * sqrt_t);
    let vega = S * sqrt_t * pdf_d1;
    let time_decay = -S * pdf_d1 * sigma / (2.0 * sqrt_t);
    let rate_term = r * K * discount * n_d2;

    match request.variant {
        OptionVariant::Call => PricingResult {
            price: S * n_d1 - K * discount * n_d2,
            delta: n_d1,
            gamma,
            theta: time_decay - rate_term,
            vega,
            rho: K * T * discount * n_d2,
        },
        // Put theta adds the N(d2) rate term rather than using N(-d2).
        OptionVariant::Put => PricingResult {
            price: K * discount * (1.0 - n_d2) - S * (1.0 - n_d1),
            delta: n_d1 - 1.0,
            gamma,
            theta: time_decay + rate_term,
            vega,
            rho: -K * T * discount * norm_cdf_with(-d2, method),
        },
    }
}
