pub mod error;
pub mod statement;

// Re-export commonly used types
pub use error::QueryError;
pub use statement::{ConvertedBalance, StatementReader};
