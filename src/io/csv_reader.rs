use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio_util::compat::TokioAsyncReadCompatExt;

use super::error::IoError;
use super::parse::RawOpRecord;
use crate::domain::WalletOp;

/// Async stream of wallet operations from CSV input
pub struct CsvOpStream {
    inner: Pin<Box<dyn Stream<Item = Result<WalletOp, IoError>> + Send>>,
}

impl CsvOpStream {
    /// Create a new operation stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .flexible(true)
            .create_deserializer(reader);

        let stream = csv_reader
            .into_deserialize::<RawOpRecord>()
            .map(|result| result.map_err(IoError::from).and_then(|raw| raw.parse()));

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Create a new operation stream from a file path.
    ///
    /// Opens the file asynchronously and handles tokio-futures
    /// compatibility internally.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file.compat()))
    }
}

impl Stream for CsvOpStream {
    type Item = Result<WalletOp, IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
