/// Errors raised while turning a request payload into a quote.
///
/// The pricing engine itself never fails; everything here is detected
/// before (input validation) or after (result policy) the engine runs.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field {field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid option type: {0:?} (expected \"call\" or \"put\")")]
    InvalidOptionType(String),

    #[error("field {field} is not an ISO date: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("expiry {expiry} must be after as-of date {as_of}")]
    ExpiryNotAfterAsOf { as_of: String, expiry: String },

    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} = {value} outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("pricing produced a non-finite {0}")]
    NonFiniteResult(&'static str),

    #[cfg(feature = "serde")]
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type QuoteResult<T> = Result<T, QuoteError>;
