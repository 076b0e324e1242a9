use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::domain::{AccountId, Amount, EntryKind, LedgerEntry};

/// Entry data awaiting sequence assignment by the log
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub from: Option<AccountId>,
    pub to: AccountId,
    pub amount: Amount,
    pub kind: EntryKind,
    pub balance_after: Amount,
    pub description: String,
}

/// Append-only, immutable log of ledger entries.
///
/// Sequence numbers are assigned from insertion order under the log lock,
/// so they double as the tie-break for equal timestamps. Entries are
/// appended while the engine holds the affected account's lock, which is
/// what makes `balance_after` monotone per account. No entry is ever
/// mutated or removed.
pub struct LedgerLog {
    entries: Mutex<Vec<LedgerEntry>>,
}

impl LedgerLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Append one entry, returning the stored copy with its sequence number.
    ///
    /// Appending cannot fail: a poisoned lock is recovered because a `Vec`
    /// push is never observable half-applied.
    pub fn append(
        &self,
        from: Option<AccountId>,
        to: AccountId,
        amount: Amount,
        kind: EntryKind,
        balance_after: Amount,
        description: impl Into<String>,
    ) -> LedgerEntry {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        push_locked(
            &mut entries,
            EntryDraft {
                from,
                to,
                amount,
                kind,
                balance_after,
                description: description.into(),
            },
        )
    }

    /// Append two entries belonging to one logical operation.
    ///
    /// Both pushes happen under a single acquisition of the log lock, so
    /// no reader can observe the first entry without the second.
    pub fn append_pair(
        &self,
        first: EntryDraft,
        second: EntryDraft,
    ) -> (LedgerEntry, LedgerEntry) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let a = push_locked(&mut entries, first);
        let b = push_locked(&mut entries, second);
        (a, b)
    }

    /// All entries affecting an account, ascending by `(timestamp, seq)`
    pub fn entries_for(&self, account: &AccountId) -> Vec<LedgerEntry> {
        self.entries_between(account, None, None)
    }

    /// Entries affecting an account within an optional time window
    pub fn entries_between(
        &self,
        account: &AccountId,
        since: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
    ) -> Vec<LedgerEntry> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut matched: Vec<LedgerEntry> = entries
            .iter()
            .filter(|e| &e.to == account)
            .filter(|e| since.is_none_or(|t| e.timestamp >= t))
            .filter(|e| until.is_none_or(|t| e.timestamp <= t))
            .cloned()
            .collect();

        // Insertion order already breaks timestamp ties; the stable sort
        // preserves it.
        matched.sort_by_key(|e| e.timestamp);
        matched
    }

    /// Total number of entries in the log
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LedgerLog {
    fn default() -> Self {
        Self::new()
    }
}

fn push_locked(entries: &mut Vec<LedgerEntry>, draft: EntryDraft) -> LedgerEntry {
    let entry = LedgerEntry {
        seq: entries.len() as u64 + 1,
        from: draft.from,
        to: draft.to,
        amount: draft.amount,
        kind: draft.kind,
        balance_after: draft.balance_after,
        description: draft.description,
        timestamp: Utc::now(),
    };

    entries.push(entry.clone());
    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> AccountId {
        AccountId::from(s)
    }

    #[test]
    fn append_assigns_increasing_sequence_numbers() {
        let log = LedgerLog::new();

        let e1 = log.append(
            None,
            id("alice"),
            Amount::from_minor(100),
            EntryKind::Credit,
            Amount::from_minor(100),
            "Account funding",
        );
        let e2 = log.append(
            None,
            id("alice"),
            Amount::from_minor(50),
            EntryKind::Credit,
            Amount::from_minor(150),
            "Account funding",
        );

        assert_eq!(e1.seq, 1);
        assert_eq!(e2.seq, 2);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn entries_for_filters_by_affected_account() {
        let log = LedgerLog::new();

        log.append(
            None,
            id("alice"),
            Amount::from_minor(100),
            EntryKind::Credit,
            Amount::from_minor(100),
            "Account funding",
        );
        log.append(
            Some(id("alice")),
            id("bob"),
            Amount::from_minor(40),
            EntryKind::Credit,
            Amount::from_minor(40),
            "Payment from alice",
        );

        let alice_entries = log.entries_for(&id("alice"));
        assert_eq!(alice_entries.len(), 1);
        assert_eq!(alice_entries[0].to, id("alice"));

        let bob_entries = log.entries_for(&id("bob"));
        assert_eq!(bob_entries.len(), 1);
        assert_eq!(bob_entries[0].from, Some(id("alice")));
    }

    #[test]
    fn entries_for_unknown_account_is_empty() {
        let log = LedgerLog::new();
        assert!(log.entries_for(&id("ghost")).is_empty());
    }

    #[test]
    fn entries_preserve_chronological_order() {
        let log = LedgerLog::new();

        for i in 1..=5 {
            log.append(
                None,
                id("alice"),
                Amount::from_minor(100),
                EntryKind::Credit,
                Amount::from_minor(100 * i),
                "Account funding",
            );
        }

        let entries = log.entries_for(&id("alice"));
        let seqs: Vec<u64> = entries.iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3, 4, 5]);

        for pair in entries.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn entries_between_applies_time_window() {
        let log = LedgerLog::new();

        let e1 = log.append(
            None,
            id("alice"),
            Amount::from_minor(100),
            EntryKind::Credit,
            Amount::from_minor(100),
            "Account funding",
        );

        let all = log.entries_between(&id("alice"), None, None);
        assert_eq!(all.len(), 1);

        let before = log.entries_between(&id("alice"), None, Some(e1.timestamp));
        assert_eq!(before.len(), 1);

        let after = log.entries_between(
            &id("alice"),
            Some(e1.timestamp + chrono::Duration::seconds(1)),
            None,
        );
        assert!(after.is_empty());
    }

    #[test]
    fn append_pair_assigns_adjacent_sequence_numbers() {
        let log = LedgerLog::new();

        let (debit, credit) = log.append_pair(
            EntryDraft {
                from: Some(id("alice")),
                to: id("alice"),
                amount: Amount::from_minor(400),
                kind: EntryKind::Debit,
                balance_after: Amount::from_minor(600),
                description: "Payment to bob".to_string(),
            },
            EntryDraft {
                from: Some(id("alice")),
                to: id("bob"),
                amount: Amount::from_minor(400),
                kind: EntryKind::Credit,
                balance_after: Amount::from_minor(400),
                description: "Payment from alice".to_string(),
            },
        );

        assert_eq!(debit.seq, 1);
        assert_eq!(credit.seq, 2);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn readers_never_observe_half_of_a_pair() {
        use std::sync::Arc;
        use std::thread;

        let log = Arc::new(LedgerLog::new());

        // Seed a single entry so the count stays odd only if every pair
        // lands atomically.
        log.append(
            None,
            id("alice"),
            Amount::from_minor(10_000),
            EntryKind::Credit,
            Amount::from_minor(10_000),
            "Account funding",
        );

        let writer = {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for i in 0..2_000u64 {
                    log.append_pair(
                        EntryDraft {
                            from: Some(id("alice")),
                            to: id("alice"),
                            amount: Amount::from_minor(1),
                            kind: EntryKind::Debit,
                            balance_after: Amount::from_minor(10_000 - i as i64 - 1),
                            description: "Payment to bob".to_string(),
                        },
                        EntryDraft {
                            from: Some(id("alice")),
                            to: id("bob"),
                            amount: Amount::from_minor(1),
                            kind: EntryKind::Credit,
                            balance_after: Amount::from_minor(i as i64 + 1),
                            description: "Payment from alice".to_string(),
                        },
                    );
                }
            })
        };

        let reader = {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                while log.len() < 4_001 {
                    assert_eq!(log.len() % 2, 1, "observed a half-written pair");
                }
            })
        };

        writer.join().unwrap();
        reader.join().unwrap();
        assert_eq!(log.len(), 4_001);
    }

    #[test]
    fn balance_after_replays_from_zero() {
        let log = LedgerLog::new();

        log.append(
            None,
            id("alice"),
            Amount::from_minor(1_000),
            EntryKind::Credit,
            Amount::from_minor(1_000),
            "Account funding",
        );
        log.append(
            Some(id("alice")),
            id("alice"),
            Amount::from_minor(400),
            EntryKind::Debit,
            Amount::from_minor(600),
            "Payment to bob",
        );

        let mut replayed = 0i64;
        for entry in log.entries_for(&id("alice")) {
            replayed += entry.signed_amount();
            assert_eq!(replayed, entry.balance_after.minor());
        }
        assert_eq!(replayed, 600);
    }
}
