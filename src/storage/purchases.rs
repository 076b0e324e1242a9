use std::sync::Mutex;

use chrono::Utc;

use crate::domain::{AccountId, Amount, ProductId, Purchase};

/// Append-only store of purchase records.
///
/// Records are created by the engine inside the same unit of work as
/// their debit ledger entry, while the buyer's account lock is held.
pub struct PurchaseStore {
    purchases: Mutex<Vec<Purchase>>,
}

impl PurchaseStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            purchases: Mutex::new(Vec::new()),
        }
    }

    /// Record a purchase, returning the stored copy with its id.
    ///
    /// Infallible for the same reason ledger appends are: a poisoned lock
    /// is recovered because a `Vec` push cannot be half-applied.
    pub fn record(
        &self,
        account: AccountId,
        product: ProductId,
        amount_paid: Amount,
        entry_seq: u64,
    ) -> Purchase {
        let mut purchases = self
            .purchases
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let purchase = Purchase {
            id: purchases.len() as u64 + 1,
            account,
            product,
            amount_paid,
            entry_seq,
            timestamp: Utc::now(),
        };

        purchases.push(purchase.clone());
        purchase
    }

    /// Purchase history for an account, in insertion order
    pub fn for_account(&self, account: &AccountId) -> Vec<Purchase> {
        self.purchases
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|p| &p.account == account)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.purchases
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PurchaseStore {
    fn default() -> Self {
        Self::new()
    }
}
