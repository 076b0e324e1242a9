use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::IoError;
use crate::storage::ConcurrentAccountStore;

/// Write a CSV snapshot of all account balances, sorted by account id
pub async fn write_snapshot<W>(
    accounts: &ConcurrentAccountStore,
    mut writer: W,
) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    writer.write_all(b"account,balance\n").await?;

    for (id, balance) in accounts.balances() {
        let line = format!("{},{}\n", id, balance.to_decimal_string());
        writer.write_all(line.as_bytes()).await?;
    }

    writer.flush().await?;
    Ok(())
}
