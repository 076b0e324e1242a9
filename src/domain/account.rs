use std::fmt;

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// Account identity, unique and immutable once created.
///
/// Identities are ordinary strings (usernames resolved by the auth
/// collaborator). The derived `Ord` is what the storage layer uses to
/// acquire multi-account locks in a consistent global order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Wallet account with a private balance enforcing the non-negative invariant
///
/// The balance is mutated only through the functions in
/// [`crate::domain::operations`], which the transfer engine invokes inside
/// a unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    balance: Amount,
}

impl Account {
    /// Create a new account with zero balance
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            balance: Amount::zero(),
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    // Internal mutation for use by the operations module only
    pub(crate) fn set_balance(&mut self, balance: Amount) {
        self.balance = balance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_has_zero_balance() {
        let account = Account::new(AccountId::from("alice"));

        assert_eq!(account.id().as_str(), "alice");
        assert_eq!(account.balance(), Amount::zero());
    }

    #[test]
    fn set_balance_updates_balance() {
        let mut account = Account::new(AccountId::from("alice"));
        account.set_balance(Amount::from_minor(1_000));

        assert_eq!(account.balance(), Amount::from_minor(1_000));
    }

    #[test]
    fn account_can_be_cloned() {
        let account = Account::new(AccountId::from("alice"));
        let cloned = account.clone();

        assert_eq!(account, cloned);
    }

    #[test]
    fn account_id_ordering_is_lexicographic() {
        assert!(AccountId::from("alice") < AccountId::from("bob"));
        assert!(AccountId::from("bob") < AccountId::from("carol"));
    }

    #[test]
    fn account_id_displays_as_plain_string() {
        assert_eq!(AccountId::from("alice").to_string(), "alice");
    }
}
