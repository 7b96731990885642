//! Greeks across a range of spot prices, for charting how an option's
//! sensitivities change as the underlying moves.

use crate::models::bs::{evaluate_with, PricingRequest, PricingResult};
use crate::models::normal::CdfMethod;

/// One point of a spot ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LadderPoint {
    pub spot: f64,
    pub result: PricingResult,
}

/// Evaluate `base` at `steps + 1` evenly spaced spots in `[spot_min, spot_max]`.
///
/// All other inputs are taken from `base`. Returns a single point at
/// `spot_min` when `steps` is zero, and nothing when the range is empty or
/// not finite or when `steps + 1` overflows `usize`.
pub fn spot_ladder(
    base: &PricingRequest,
    spot_min: f64,
    spot_max: f64,
    steps: usize,
    method: CdfMethod,
) -> Vec<LadderPoint> {
    if !spot_min.is_finite() || !spot_max.is_finite() || spot_min > spot_max {
        return Vec::new();
    }
    let Some(count) = steps.checked_add(1) else {
        return Vec::new();
    };

    let mut points = Vec::with_capacity(count);
    for i in 0..=steps {
        let spot = if steps == 0 {
            spot_min
        } else {
            spot_min + (spot_max - spot_min) * (i as f64) / (steps as f64)
        };
        points.push(LadderPoint {
            spot,
            result: evaluate_with(&base.with_spot(spot), method),
        });
    }
    points
}
