use std::io;
use thiserror::Error;

/// Errors from reading and parsing the CSV operation input
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Unknown operation: {0}")]
    UnknownOp(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid product id: {0}")]
    InvalidProductId(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
