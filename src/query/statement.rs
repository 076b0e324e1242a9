use std::sync::Arc;

use tracing::debug;

use super::error::QueryError;
use crate::domain::{AccountId, Amount, LedgerEntry, Purchase};
use crate::rates::{BASE_CURRENCY, RateLookup};
use crate::storage::{ConcurrentAccountStore, LedgerLog, PurchaseStore, StorageError};

/// A balance expressed in a display currency
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedBalance {
    pub currency: String,
    pub amount: f64,
}

/// Read-only queries over the account store and ledger log.
///
/// Never mutates state and never holds an account lock across the rate
/// lookup: the balance is read first, then converted.
pub struct StatementReader {
    accounts: Arc<ConcurrentAccountStore>,
    ledger: Arc<LedgerLog>,
    purchases: Arc<PurchaseStore>,
    rates: Arc<dyn RateLookup>,
}

impl StatementReader {
    pub fn new(
        accounts: Arc<ConcurrentAccountStore>,
        ledger: Arc<LedgerLog>,
        purchases: Arc<PurchaseStore>,
        rates: Arc<dyn RateLookup>,
    ) -> Self {
        Self {
            accounts,
            ledger,
            purchases,
            rates,
        }
    }

    /// Current balance in the base unit
    pub fn balance(&self, account: &AccountId) -> Result<Amount, QueryError> {
        self.accounts.balance(account).map_err(|e| match e {
            StorageError::NotFound => QueryError::AccountNotFound(account.clone()),
            other => QueryError::Storage(other),
        })
    }

    /// Current balance converted to a display currency.
    ///
    /// The base currency passes through exactly; anything else is
    /// multiplied by the looked-up rate and rounded to two decimal
    /// places, matching the stored precision.
    pub async fn balance_in(
        &self,
        account: &AccountId,
        currency: &str,
    ) -> Result<ConvertedBalance, QueryError> {
        let code = currency.trim().to_uppercase();
        let balance = self.balance(account)?;

        debug!(%account, currency = %code, "Converting balance");

        if code == BASE_CURRENCY {
            return Ok(ConvertedBalance {
                currency: code,
                amount: balance.to_f64(),
            });
        }

        let rate = self.rates.rate(&code).await?;
        let converted = (balance.to_f64() * rate * 100.0).round() / 100.0;

        Ok(ConvertedBalance {
            currency: code,
            amount: converted,
        })
    }

    /// All ledger entries affecting an account, ascending by timestamp
    /// (ties broken by insertion order)
    pub fn statement(&self, account: &AccountId) -> Result<Vec<LedgerEntry>, QueryError> {
        if !self.accounts.contains(account) {
            return Err(QueryError::AccountNotFound(account.clone()));
        }

        Ok(self.ledger.entries_for(account))
    }

    /// Purchase history for an account
    pub fn purchase_history(&self, account: &AccountId) -> Result<Vec<Purchase>, QueryError> {
        if !self.accounts.contains(account) {
            return Err(QueryError::AccountNotFound(account.clone()));
        }

        Ok(self.purchases.for_account(account))
    }
}
