use std::future::Future;

use tokio::io::{BufWriter, Stdout};

use super::error::AppError;

/// Drives the binary's async entry point against a buffered stdout
/// writer, racing it with Unix signal delivery so an interrupted run
/// exits with the conventional 128+signal code.
pub struct CliApp {
    name: String,
}

impl CliApp {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Run `main_fn` to completion and exit the process.
    ///
    /// Exit codes: 0 on success, 1 on error, 130/143/129 when SIGINT,
    /// SIGTERM or SIGHUP arrives first. `main_fn` is responsible for
    /// flushing the writer before returning.
    pub async fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(BufWriter<Stdout>) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let writer = BufWriter::new(tokio::io::stdout());

        tokio::select! {
            result = main_fn(writer) => match result {
                Ok(()) => std::process::exit(0),
                Err(e) => {
                    eprintln!("{}: {}", self.name, e);
                    std::process::exit(1);
                }
            },
            code = wait_for_signal() => {
                eprintln!("{}: interrupted", self.name);
                std::process::exit(code);
            }
        }
    }
}

/// Wait for SIGINT, SIGTERM or SIGHUP (Ctrl+C off Unix) and map it to
/// the exit code callers expect
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate()).expect("Failed to setup SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt()).expect("Failed to setup SIGINT handler");
        let mut sighup = signal(SignalKind::hangup()).expect("Failed to setup SIGHUP handler");

        tokio::select! {
            _ = sigterm.recv() => 143, // 128 + 15
            _ = sigint.recv() => 130,  // 128 + 2
            _ = sighup.recv() => 129,  // 128 + 1
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to setup Ctrl+C handler");
        130
    }
}
