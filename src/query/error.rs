use thiserror::Error;

use crate::domain::AccountId;
use crate::rates::RateError;
use crate::storage::StorageError;

/// Errors from the read-only statement and balance path
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Currency {0} not supported")]
    UnsupportedCurrency(String),

    #[error("Rate source unavailable")]
    RateUnavailable,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<RateError> for QueryError {
    fn from(err: RateError) -> Self {
        match err {
            RateError::UnsupportedCurrency(code) => QueryError::UnsupportedCurrency(code),
            RateError::Unavailable => QueryError::RateUnavailable,
        }
    }
}
