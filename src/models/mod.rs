pub mod bs;
pub mod normal;

pub use bs::{evaluate, evaluate_with, OptionVariant, PricingRequest, PricingResult};
pub use normal::CdfMethod;
