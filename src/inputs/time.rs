use chrono::NaiveDate;

use crate::error::{QuoteError, QuoteResult};

const DAYS_PER_YEAR: f64 = 365.0;

/// Act/365 fixed year fraction between two dates.
///
/// Fails unless `expiry` is strictly after `as_of`.
pub fn year_fraction(as_of: NaiveDate, expiry: NaiveDate) -> QuoteResult<f64> {
    if expiry <= as_of {
        return Err(QuoteError::ExpiryNotAfterAsOf {
            as_of: as_of.to_string(),
            expiry: expiry.to_string(),
        });
    }
    Ok((expiry - as_of).num_days() as f64 / DAYS_PER_YEAR)
}

/// Parse a `YYYY-MM-DD` date, reporting the offending field on failure.
pub fn parse_iso_date(field: &'static str, value: &str) -> QuoteResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| QuoteError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
