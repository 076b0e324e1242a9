pub mod account;
pub mod amount;
pub mod entry;
pub mod error;
pub mod operation;
pub mod operations;
pub mod product;

// Re-export commonly used types
pub use account::{Account, AccountId};
pub use amount::Amount;
pub use entry::{EntryKind, LedgerEntry};
pub use error::DomainError;
pub use operation::WalletOp;
pub use operations::{apply_credit, apply_debit, apply_transfer};
pub use product::{Product, ProductId, Purchase};
