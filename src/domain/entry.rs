use std::fmt;

use chrono::{DateTime, Utc};

use super::account::AccountId;
use super::amount::Amount;

/// Direction of a ledger entry relative to its affected account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Credit,
    Debit,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of one balance-affecting event.
///
/// `to` is the affected account: a payment's debit entry carries the
/// sender in both `from` and `to`, while its credit entry carries the
/// recipient in `to`. `from` is `None` for external funding.
/// `balance_after` is the affected account's balance once this entry
/// committed; replaying an account's entries in `(timestamp, seq)` order
/// from zero reproduces its current balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub seq: u64,
    pub from: Option<AccountId>,
    pub to: AccountId,
    pub amount: Amount,
    pub kind: EntryKind,
    pub balance_after: Amount,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl LedgerEntry {
    /// Signed effect of this entry on its affected account's balance
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            EntryKind::Credit => self.amount.minor(),
            EntryKind::Debit => -self.amount.minor(),
        }
    }
}
