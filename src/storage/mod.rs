pub mod accounts;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod purchases;

// Re-export commonly used types
pub use accounts::ConcurrentAccountStore;
pub use catalog::ConcurrentCatalog;
pub use error::StorageError;
pub use ledger::{EntryDraft, LedgerLog};
pub use purchases::PurchaseStore;
