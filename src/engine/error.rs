use thiserror::Error;

use crate::domain::{AccountId, DomainError, ProductId};
use crate::storage::StorageError;

/// Engine-level errors for wallet units of work
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Account already exists: {0}")]
    AccountExists(AccountId),

    #[error("Recipient not found: {0}")]
    RecipientNotFound(AccountId),

    #[error("Cannot pay yourself")]
    SelfPayment,

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl EngineError {
    /// True when the failure means the requested amount exceeded the balance
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(
            self,
            EngineError::Domain(DomainError::InsufficientFunds)
                | EngineError::Storage(StorageError::Domain(DomainError::InsufficientFunds))
        )
    }
}
