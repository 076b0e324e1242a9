use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use super::error::StorageError;
use crate::domain::{Account, AccountId, Amount, DomainError};

/// Concurrent in-memory account store.
///
/// Each account sits behind its own `Mutex`, so units of work touching
/// disjoint accounts proceed in parallel while anything touching the same
/// account is serialized. The map itself only mediates handle lookup;
/// accounts are never removed, so a cloned handle stays valid for the
/// store's lifetime.
pub struct ConcurrentAccountStore {
    accounts: DashMap<AccountId, Arc<Mutex<Account>>>,
}

impl ConcurrentAccountStore {
    /// Create a new empty account store
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Create an account with zero balance
    pub fn create(&self, id: AccountId) -> Result<(), StorageError> {
        use dashmap::mapref::entry::Entry;

        match self.accounts.entry(id.clone()) {
            Entry::Occupied(_) => Err(StorageError::AlreadyExists),
            Entry::Vacant(e) => {
                e.insert(Arc::new(Mutex::new(Account::new(id))));
                Ok(())
            }
        }
    }

    /// Check whether an account exists
    pub fn contains(&self, id: &AccountId) -> bool {
        self.accounts.contains_key(id)
    }

    /// Number of accounts in the store
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn handle(&self, id: &AccountId) -> Result<Arc<Mutex<Account>>, StorageError> {
        self.accounts
            .get(id)
            .map(|r| Arc::clone(r.value()))
            .ok_or(StorageError::NotFound)
    }

    /// Run a unit of work against a single account under its exclusive lock.
    ///
    /// The closure's failure leaves the account exactly as it found it
    /// (the domain operations validate before mutating).
    pub fn with_account<R, F>(&self, id: &AccountId, f: F) -> Result<R, StorageError>
    where
        F: FnOnce(&mut Account) -> Result<R, DomainError>,
    {
        let handle = self.handle(id)?;
        let mut account = handle.lock().map_err(|_| StorageError::Poisoned)?;
        f(&mut account).map_err(StorageError::from)
    }

    /// Run a unit of work against two distinct accounts under both locks.
    ///
    /// Locks are acquired in `AccountId` order regardless of argument
    /// order, so two opposing transfers cannot deadlock. The closure
    /// receives the accounts in caller order.
    pub fn with_pair<R, F>(
        &self,
        first: &AccountId,
        second: &AccountId,
        f: F,
    ) -> Result<R, StorageError>
    where
        F: FnOnce(&mut Account, &mut Account) -> Result<R, DomainError>,
    {
        // Distinct ids are the caller's contract; the engine rejects
        // self-transfers before reaching storage.
        assert_ne!(first, second, "with_pair requires distinct accounts");

        let first_handle = self.handle(first)?;
        let second_handle = self.handle(second)?;

        let (mut first_guard, mut second_guard) = if first < second {
            let a = first_handle.lock().map_err(|_| StorageError::Poisoned)?;
            let b = second_handle.lock().map_err(|_| StorageError::Poisoned)?;
            (a, b)
        } else {
            let b = second_handle.lock().map_err(|_| StorageError::Poisoned)?;
            let a = first_handle.lock().map_err(|_| StorageError::Poisoned)?;
            (a, b)
        };

        f(&mut first_guard, &mut second_guard).map_err(StorageError::from)
    }

    /// Read an account's current balance
    pub fn balance(&self, id: &AccountId) -> Result<Amount, StorageError> {
        let handle = self.handle(id)?;
        let account = handle.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(account.balance())
    }

    /// Snapshot of all balances, sorted by account id for stable output
    pub fn balances(&self) -> Vec<(AccountId, Amount)> {
        let mut snapshot: Vec<(AccountId, Amount)> = self
            .accounts
            .iter()
            .filter_map(|entry| {
                entry
                    .value()
                    .lock()
                    .ok()
                    .map(|account| (entry.key().clone(), account.balance()))
            })
            .collect();

        snapshot.sort_by(|a, b| a.0.cmp(&b.0));
        snapshot
    }
}

impl Default for ConcurrentAccountStore {
    fn default() -> Self {
        Self::new()
    }
}
