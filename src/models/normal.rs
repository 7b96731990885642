//! Standard normal distribution helpers used by the Black-Scholes engine.
//!
//! The cumulative distribution is built on the Abramowitz-Stegun 7.1.26
//! rational approximation of the error function. Reference outputs the
//! pricing engine is regression-tested against were produced with these
//! exact coefficients, so they must not be "improved" in place. Callers who
//! want the platform error function instead can select
//! [`CdfMethod::Exact`]; both agree to within [`ERF_MAX_ABS_ERROR`].

use std::f64::consts::{PI, SQRT_2};

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Maximum absolute error of [`erf_approx`] over the real line.
pub const ERF_MAX_ABS_ERROR: f64 = 1.5e-7;

/// Which error function backs the normal CDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CdfMethod {
    /// Abramowitz-Stegun rational approximation (reference behaviour)
    #[default]
    AbramowitzStegun,
    /// `libm::erf`, accurate to double precision
    Exact,
}

/// Error function approximation (Abramowitz-Stegun 7.1.26).
///
/// NaN propagates; `±inf` maps to `±1`.
pub fn erf_approx(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}

/// Error function using the selected method.
#[inline]
pub fn erf(x: f64, method: CdfMethod) -> f64 {
    match method {
        CdfMethod::AbramowitzStegun => erf_approx(x),
        CdfMethod::Exact => libm::erf(x),
    }
}

/// Standard normal cumulative distribution function (approximate erf).
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    norm_cdf_with(x, CdfMethod::AbramowitzStegun)
}

/// Standard normal CDF: 0.5 * [1 + erf(x / sqrt(2))]
#[inline]
pub fn norm_cdf_with(x: f64, method: CdfMethod) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2, method))
}

/// Standard normal probability density function.
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erf_approx_known_values() {
        // erf(0) is not exactly zero: the coefficients sum to 0.999999999
        assert!(erf_approx(0.0).abs() < 2e-9);
        assert!((erf_approx(1.0) - 0.8427007929497149).abs() < ERF_MAX_ABS_ERROR);
        assert!((erf_approx(-1.0) + 0.8427007929497149).abs() < ERF_MAX_ABS_ERROR);
        assert_eq!(erf_approx(f64::INFINITY), 1.0);
        assert_eq!(erf_approx(f64::NEG_INFINITY), -1.0);
        assert!(erf_approx(f64::NAN).is_nan());
    }

    #[test]
    fn test_erf_approx_is_odd() {
        for i in 1..200 {
            let x = i as f64 * 0.025;
            assert_eq!(erf_approx(-x), -erf_approx(x));
        }
    }

    #[test]
    fn test_methods_agree_within_tolerance() {
        for i in -400..=400 {
            let x = i as f64 * 0.01;
            let approx = erf(x, CdfMethod::AbramowitzStegun);
            let exact = erf(x, CdfMethod::Exact);
            assert!(
                (approx - exact).abs() <= ERF_MAX_ABS_ERROR,
                "x={x}: approx={approx} exact={exact}"
            );
        }
    }

    #[test]
    fn test_norm_cdf_symmetry_and_limits() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-9);
        assert!((norm_cdf(1.5) + norm_cdf(-1.5) - 1.0).abs() < 1e-12);
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
        assert!((norm_cdf_with(1.959963984540054, CdfMethod::Exact) - 0.975).abs() < 1e-12);
    }

    #[test]
    fn test_norm_pdf() {
        assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
        assert_eq!(norm_pdf(1.3), norm_pdf(-1.3));
        assert_eq!(norm_pdf(f64::INFINITY), 0.0);
    }
}
