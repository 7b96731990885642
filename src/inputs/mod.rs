//! Helpers that derive engine inputs from raw market observations: an
//! Act/365 year fraction from calendar dates and an annualised realised
//! volatility from a close history.

pub mod time;
pub mod volatility;

pub use time::{parse_iso_date, year_fraction};
pub use volatility::{historical_volatility, HistoricalVolConfig};
