//! Compress, stage, verify and promote database backups into object storage.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - `data` - destinations, tool invocations and run options
//! - `core` - pure transformations: address normalization and trailer checks
//! - `effects` - the two-process staging pipeline and remote promotion
//!
//! A run is driven by [`Backup::take`]:
//!
//! 1. open the backup stream from a [`BackupSource`](stowage_fetch::BackupSource)
//! 2. pipe it through the compressor into the remote client's `rcat`, which
//!    writes the local staging artifact; both processes run concurrently
//! 3. check the stream trailers, failing closed when the source did not
//!    report success
//! 4. promote: upload to `<dest>.tmp`, clone it to `latest.xbackup.gz`,
//!    then move it onto `<dest>`
//!
//! Every step is terminal on failure. Nothing is retried and nothing that
//! was already written remotely is cleaned up.

mod backup;
mod core;
mod data;
mod effects;
mod error;

pub use self::backup::Backup;
pub use self::core::{
    BACKUP_STATUS_TRAILER, BACKUP_SUCCESSFUL, check_backup_trailers, join_clean,
    normalize_bucket_uri,
};
pub use self::data::{
    BackupOptions, DEFAULT_STAGING_PATH, DestinationSet, LATEST_OBJECT, TEMP_SUFFIX, ToolSpec,
};
pub use self::effects::{Rclone, RemoteStore, promote, run_stages};
pub use self::error::{BackupError, BoxError, Result};
