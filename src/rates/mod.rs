pub mod error;
pub mod lookup;

// Re-export commonly used types
pub use error::RateError;
pub use lookup::{BASE_CURRENCY, FallbackRates, RateLookup, StaticRates};
