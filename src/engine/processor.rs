use std::sync::Arc;

use tracing::{debug, warn};

use super::error::EngineError;
use crate::domain::{
    AccountId, Amount, DomainError, EntryKind, ProductId, Purchase, WalletOp, apply_credit,
    apply_debit, apply_transfer,
};
use crate::storage::{
    ConcurrentAccountStore, ConcurrentCatalog, EntryDraft, LedgerLog, PurchaseStore, StorageError,
};

/// Transfer engine orchestrating wallet units of work.
///
/// Sole writer of account balances and sole creator of ledger entries and
/// purchases. Every mutating operation validates its preconditions, then
/// mutates balance and appends ledger entries while holding the affected
/// account lock(s), so a failure leaves every store untouched and no
/// reader ever observes a partially-applied unit.
pub struct TransferEngine {
    accounts: Arc<ConcurrentAccountStore>,
    ledger: Arc<LedgerLog>,
    catalog: Arc<ConcurrentCatalog>,
    purchases: Arc<PurchaseStore>,
}

impl TransferEngine {
    /// Create a new engine over the given stores
    pub fn new(
        accounts: Arc<ConcurrentAccountStore>,
        ledger: Arc<LedgerLog>,
        catalog: Arc<ConcurrentCatalog>,
        purchases: Arc<PurchaseStore>,
    ) -> Self {
        Self {
            accounts,
            ledger,
            catalog,
            purchases,
        }
    }

    pub fn accounts(&self) -> &Arc<ConcurrentAccountStore> {
        &self.accounts
    }

    pub fn ledger(&self) -> &Arc<LedgerLog> {
        &self.ledger
    }

    pub fn catalog(&self) -> &Arc<ConcurrentCatalog> {
        &self.catalog
    }

    pub fn purchases(&self) -> &Arc<PurchaseStore> {
        &self.purchases
    }

    /// Create a new account with zero balance
    pub fn register(&self, account: AccountId) -> Result<(), EngineError> {
        debug!(%account, "Registering account");

        self.accounts.create(account.clone()).map_err(|e| match e {
            StorageError::AlreadyExists => EngineError::AccountExists(account),
            other => EngineError::Storage(other),
        })
    }

    /// Fund an account from an external source.
    ///
    /// Credits the balance and appends a single credit entry with no
    /// originating account. Returns the new balance.
    pub fn fund(&self, account: &AccountId, amount: Amount) -> Result<Amount, EngineError> {
        debug!(%account, %amount, "Processing fund");

        if !amount.is_positive() {
            return Err(EngineError::Domain(DomainError::InvalidAmount));
        }

        if !self.accounts.contains(account) {
            return Err(EngineError::AccountNotFound(account.clone()));
        }

        let entry = self
            .accounts
            .with_account(account, |acc| {
                let new_balance = apply_credit(acc, amount)?;
                Ok(self.ledger.append(
                    None,
                    account.clone(),
                    amount,
                    EntryKind::Credit,
                    new_balance,
                    "Account funding",
                ))
            })
            .map_err(lift)?;

        Ok(entry.balance_after)
    }

    /// Pay another account.
    ///
    /// One atomic unit: debit sender, credit recipient, append exactly two
    /// entries (the sender's debit, then the recipient's credit) referencing
    /// the same logical payment. Self-payment is rejected rather than
    /// recorded as an offsetting pair. Returns the sender's new balance.
    pub fn pay(
        &self,
        sender: &AccountId,
        recipient: &AccountId,
        amount: Amount,
    ) -> Result<Amount, EngineError> {
        debug!(%sender, %recipient, %amount, "Processing payment");

        if !amount.is_positive() {
            return Err(EngineError::Domain(DomainError::InvalidAmount));
        }

        if sender == recipient {
            return Err(EngineError::SelfPayment);
        }

        if !self.accounts.contains(sender) {
            return Err(EngineError::AccountNotFound(sender.clone()));
        }

        if !self.accounts.contains(recipient) {
            warn!(%sender, %recipient, "Payment to unknown recipient");
            return Err(EngineError::RecipientNotFound(recipient.clone()));
        }

        self.accounts
            .with_pair(sender, recipient, |sender_acc, recipient_acc| {
                let (sender_bal, recipient_bal) =
                    apply_transfer(sender_acc, recipient_acc, amount)?;

                // One lock acquisition for both rows: a statement reader
                // must never see the debit without its credit.
                self.ledger.append_pair(
                    EntryDraft {
                        from: Some(sender.clone()),
                        to: sender.clone(),
                        amount,
                        kind: EntryKind::Debit,
                        balance_after: sender_bal,
                        description: format!("Payment to {recipient}"),
                    },
                    EntryDraft {
                        from: Some(sender.clone()),
                        to: recipient.clone(),
                        amount,
                        kind: EntryKind::Credit,
                        balance_after: recipient_bal,
                        description: format!("Payment from {sender}"),
                    },
                );

                Ok(sender_bal)
            })
            .map_err(lift)
    }

    /// Buy a product from wallet balance.
    ///
    /// The product's price is read once at the start of the unit of work
    /// and treated as a value snapshot. One atomic unit: debit the buyer,
    /// append one debit entry, record one purchase referencing it.
    pub fn purchase(
        &self,
        account: &AccountId,
        product_id: ProductId,
    ) -> Result<Purchase, EngineError> {
        debug!(%account, %product_id, "Processing purchase");

        let product = self
            .catalog
            .get(product_id)
            .ok_or(EngineError::ProductNotFound(product_id))?;

        if !self.accounts.contains(account) {
            return Err(EngineError::AccountNotFound(account.clone()));
        }

        self.accounts
            .with_account(account, |acc| {
                let new_balance = apply_debit(acc, product.price)?;

                let entry = self.ledger.append(
                    Some(account.clone()),
                    account.clone(),
                    product.price,
                    EntryKind::Debit,
                    new_balance,
                    format!("Purchase: {}", product.name),
                );

                Ok(self
                    .purchases
                    .record(account.clone(), product.id, product.price, entry.seq))
            })
            .map_err(lift)
    }

    /// Apply a single replayed operation
    pub fn apply(&self, op: WalletOp) -> Result<(), EngineError> {
        match op {
            WalletOp::Register { account } => self.register(account),
            WalletOp::Fund { account, amount } => self.fund(&account, amount).map(|_| ()),
            WalletOp::Pay {
                sender,
                recipient,
                amount,
            } => self.pay(&sender, &recipient, amount).map(|_| ()),
            WalletOp::AddProduct {
                name,
                price,
                description,
            } => self
                .catalog
                .add(name, price, description)
                .map(|_| ())
                .map_err(lift),
            WalletOp::Buy { account, product } => self.purchase(&account, product).map(|_| ()),
        }
    }
}

/// Unwrap domain errors that surfaced through the storage layer
fn lift(err: StorageError) -> EngineError {
    match err {
        StorageError::Domain(domain) => EngineError::Domain(domain),
        other => EngineError::Storage(other),
    }
}
