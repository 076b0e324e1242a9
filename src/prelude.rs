//! Prelude module for convenient imports
//!
//! Import everything you need with: `use wallet::prelude::*;`

// Domain types
pub use crate::domain::{
    Account, AccountId, Amount, DomainError, EntryKind, LedgerEntry, Product, ProductId, Purchase,
    WalletOp,
};

// Storage types
pub use crate::storage::{
    ConcurrentAccountStore, ConcurrentCatalog, LedgerLog, PurchaseStore, StorageError,
};

// Engine types
pub use crate::engine::{EngineError, TransferEngine};

// Rate lookup types
pub use crate::rates::{BASE_CURRENCY, FallbackRates, RateError, RateLookup, StaticRates};

// Query types
pub use crate::query::{ConvertedBalance, QueryError, StatementReader};

// IO types
pub use crate::io::{CsvOpStream, IoError, RawOpRecord, write_snapshot};

// Streaming types
pub use crate::streaming::{AbortOnError, ErrorPolicy, ReplaySession, SilentSkip, SkipErrors};

// App types
pub use crate::app::{AppError, CliApp};
