use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;

use wallet::prelude::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    CliApp::new("wallet")
        .run(|writer| async move {
            let input_file = parse_args(std::env::args().collect())?;
            run_wallet(writer, input_file).await
        })
        .await
}

/// Parse and validate command-line arguments
fn parse_args(args: Vec<String>) -> Result<String, AppError> {
    if args.len() != 2 {
        return Err(AppError::InvalidArguments(
            "Usage: wallet <operations.csv>".to_string(),
        ));
    }
    Ok(args[1].clone())
}

/// Main application logic - replays operations and writes a balance snapshot
async fn run_wallet(
    mut writer: tokio::io::BufWriter<tokio::io::Stdout>,
    input_file: String,
) -> Result<(), AppError> {
    let op_stream = CsvOpStream::from_file(&input_file).await?;

    let accounts = Arc::new(ConcurrentAccountStore::new());
    let ledger = Arc::new(LedgerLog::new());
    let catalog = Arc::new(ConcurrentCatalog::new());
    let purchases = Arc::new(PurchaseStore::new());

    let engine = TransferEngine::new(accounts.clone(), ledger, catalog, purchases);

    // Malformed rows and rejected operations are reported on stderr and
    // skipped; the replay itself keeps going.
    let mut session = ReplaySession::new(engine, SkipErrors);
    session.process_stream(op_stream).await;

    write_snapshot(&accounts, &mut writer).await?;
    writer.flush().await?;

    Ok(())
}
