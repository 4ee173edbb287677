use std::process::Stdio;

use futures_util::StreamExt;
use stowage_fetch::{BodyStream, FetchError};
use stowage_platform::{Child, Command};
use tokio::io::AsyncWriteExt;
use tokio::process::ChildStdin;
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

use crate::error::{BackupError, Result};

/// Number of workers reporting into the completion channel.
const STAGE_WORKERS: usize = 2;

/// Stream `body` through `compressor` into `transfer`, concurrently.
///
/// The compressor reads the raw body on stdin and its stdout becomes the
/// transfer's stdin. One worker feeds the body and waits for the compressor,
/// another waits for the transfer. Both always report, and the first failure
/// received is returned once both have finished.
///
/// Standard error of both processes is inherited.
#[instrument(skip_all, fields(compressor = %compressor.command_line(), transfer = %transfer.command_line()))]
pub async fn run_stages(body: BodyStream, compressor: Command, transfer: Command) -> Result<()> {
    let mut compress = compressor
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(BackupError::Compression)?;

    let stdin = compress.take_stdin().map_err(BackupError::Compression)?;
    let piped = compress.pipe_stdout().map_err(BackupError::Compression)?;

    let transfer = match transfer.stdin(piped).stderr(Stdio::inherit()).spawn() {
        Ok(child) => child,
        Err(e) => {
            drop(stdin);
            if let Err(cleanup) = compress.wait().await {
                debug!(error = %cleanup, "compressor exit after failed transfer spawn");
            }
            return Err(BackupError::Transfer(e));
        }
    };

    let (tx, mut rx) = mpsc::channel::<Result<()>>(STAGE_WORKERS);

    let compress_tx = tx.clone();
    tokio::spawn(async move {
        let fed = feed(body, stdin).await;
        let exited = compress.wait().await.map_err(BackupError::Compression);
        let _ = compress_tx.send(exited.and(fed)).await;
    });

    tokio::spawn(async move {
        let _ = tx.send(wait_transfer(transfer).await).await;
    });

    let mut outcome = Ok(());
    for _ in 0..STAGE_WORKERS {
        match rx.recv().await {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                warn!(error = %e, "pipeline stage failed");
                if outcome.is_ok() {
                    outcome = Err(e);
                }
            }
            None => {
                if outcome.is_ok() {
                    outcome = Err(BackupError::WorkerLost);
                }
                break;
            }
        }
    }
    outcome
}

/// Copy the body into the compressor, closing its stdin on every path.
async fn feed(mut body: BodyStream, mut stdin: ChildStdin) -> Result<()> {
    let mut written = 0u64;
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| BackupError::Request(FetchError::Stream(e)))?;
        stdin
            .write_all(&chunk)
            .await
            .map_err(|e| BackupError::Compression(e.into()))?;
        written += chunk.len() as u64;
    }
    stdin.flush().await.map_err(|e| BackupError::Compression(e.into()))?;
    debug!(bytes = written, "backup stream drained");
    Ok(())
}

async fn wait_transfer(transfer: Child) -> Result<()> { transfer.wait().await.map_err(BackupError::Transfer) }
