//! Error types for stowage-pipeline.

use std::io;
use std::path::PathBuf;

use stowage_fetch::FetchError;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The single terminal outcome of a failed run, named after its stage.
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("getting backup: {0}")]
    Request(#[source] FetchError),

    #[error("compression failed: {0}")]
    Compression(#[source] stowage_platform::Error),

    #[error("transfer failed: {0}")]
    Transfer(#[source] stowage_platform::Error),

    #[error("backup was partially taken: {reason}")]
    Integrity { reason: String },

    #[error("upload failed: {0}")]
    Upload(#[source] BoxError),

    #[error("cloning failed: {0}")]
    Cloning(#[source] BoxError),

    #[error("renaming failed: {0}")]
    Finalize(#[source] BoxError),

    #[error("preparing staging artifact {}: {source}", path.display())]
    Staging { path: PathBuf, source: io::Error },

    #[error("pipeline worker exited without reporting")]
    WorkerLost,
}

pub type Result<T> = std::result::Result<T, BackupError>;
