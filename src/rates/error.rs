use thiserror::Error;

/// Errors from the currency rate capability
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    #[error("Currency {0} not supported")]
    UnsupportedCurrency(String),

    #[error("Rate source unavailable")]
    Unavailable,
}
