use futures::{Stream, StreamExt};

use super::error::ErrorPolicy;
use crate::domain::WalletOp;
use crate::engine::TransferEngine;
use crate::io::IoError;

/// Single stream replay session
pub struct ReplaySession<P>
where
    P: ErrorPolicy,
{
    engine: TransferEngine,
    error_policy: P,
}

impl<P> ReplaySession<P>
where
    P: ErrorPolicy,
{
    /// Create a new replay session
    pub fn new(engine: TransferEngine, error_policy: P) -> Self {
        Self {
            engine,
            error_policy,
        }
    }

    /// Process a stream of operations
    /// Returns true if all operations were processed successfully (or skipped per policy)
    /// Returns false if processing was aborted due to error policy
    pub async fn process_stream<S>(&mut self, mut stream: S) -> bool
    where
        S: Stream<Item = Result<WalletOp, IoError>> + Unpin,
    {
        while let Some(result) = stream.next().await {
            match result {
                Ok(op) => {
                    if let Err(e) = self.engine.apply(op)
                        && !self.error_policy.handle_engine_error(e)
                    {
                        return false;
                    }
                }
                Err(e) => {
                    if !self.error_policy.handle_io_error(e) {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Get a reference to the underlying engine
    pub fn engine(&self) -> &TransferEngine {
        &self.engine
    }

    /// Consume the session and return the engine
    pub fn into_engine(self) -> TransferEngine {
        self.engine
    }
}
