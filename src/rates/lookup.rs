use async_trait::async_trait;

use super::error::RateError;

/// Currency all balances are stored in; conversion is display-only
pub const BASE_CURRENCY: &str = "INR";

/// Capability mapping a currency code to a conversion multiplier from the
/// base unit.
///
/// Injected into the read path so a live external source and the static
/// table are interchangeable. Never consulted inside a mutating unit of
/// work.
#[async_trait]
pub trait RateLookup: Send + Sync {
    /// Multiplier converting one base unit into `code`
    async fn rate(&self, code: &str) -> Result<f64, RateError>;
}

/// Static table of approximate multipliers, the default rate source.
///
/// Rates per one INR: USD 0.012, EUR 0.011, GBP 0.0095.
pub struct StaticRates;

const FALLBACK_RATES: &[(&str, f64)] = &[("USD", 0.012), ("EUR", 0.011), ("GBP", 0.0095)];

#[async_trait]
impl RateLookup for StaticRates {
    async fn rate(&self, code: &str) -> Result<f64, RateError> {
        if code == BASE_CURRENCY {
            return Ok(1.0);
        }

        FALLBACK_RATES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, rate)| *rate)
            .ok_or_else(|| RateError::UnsupportedCurrency(code.to_string()))
    }
}

/// Rate source that degrades to the static table when the primary source
/// is unavailable. Unsupported-currency errors are propagated, not masked.
pub struct FallbackRates<P> {
    primary: P,
    fallback: StaticRates,
}

impl<P: RateLookup> FallbackRates<P> {
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            fallback: StaticRates,
        }
    }
}

#[async_trait]
impl<P: RateLookup> RateLookup for FallbackRates<P> {
    async fn rate(&self, code: &str) -> Result<f64, RateError> {
        match self.primary.rate(code).await {
            Err(RateError::Unavailable) => self.fallback.rate(code).await,
            other => other,
        }
    }
}
