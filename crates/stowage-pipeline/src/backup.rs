use std::path::Path;

use stowage_fetch::BackupSource;
use tracing::{debug, info, instrument, warn};

use crate::core::check_backup_trailers;
use crate::data::{BackupOptions, DestinationSet};
use crate::effects::{RemoteStore, promote, run_stages};
use crate::error::{BackupError, Result};

/// One backup run: source, staging pipeline, integrity gate, promotion.
///
/// # Examples
///
/// ```no_run
/// use stowage_fetch::{HttpSource, RequestOptions};
/// use stowage_pipeline::{Backup, BackupOptions, Rclone};
///
/// # async fn run() -> stowage_pipeline::Result<()> {
/// let backup = Backup::new(
///     HttpSource::new(RequestOptions::default()),
///     Rclone::default(),
///     BackupOptions::default(),
/// );
/// backup.take("db1", "s3://bucket/backups/db.gz").await?;
/// # Ok(())
/// # }
/// ```
pub struct Backup<S, R> {
    source:  S,
    remote:  R,
    options: BackupOptions,
}

impl<S: BackupSource, R: RemoteStore> Backup<S, R> {
    pub fn new(source: S, remote: R, options: BackupOptions) -> Self {
        Self {
            source,
            remote,
            options,
        }
    }

    pub fn remote(&self) -> &R { &self.remote }

    /// Back up `src_host` and publish it at `dest_uri`.
    ///
    /// Nothing is written remotely unless the local pipeline succeeded and
    /// the source reported success in its trailers.
    #[instrument(skip(self))]
    pub async fn take(&self, src_host: &str, dest_uri: &str) -> Result<()> {
        info!("take a backup");
        let dest = DestinationSet::new(dest_uri);
        let staging = self.options.staging_path.as_path();
        prepare_staging(staging).await?;

        let stream = self.source.open(src_host).await.map_err(BackupError::Request)?;
        let (body, trailers) = stream.into_parts();

        run_stages(
            body,
            self.options.compressor.command(),
            self.remote.receiver(staging),
        )
        .await?;

        let trailers = trailers.resolve();
        if let Err(e) = check_backup_trailers(trailers.as_ref()) {
            warn!(trailers = ?trailers, "backup was partially taken");
            return Err(e);
        }

        info!(staging = %staging.display(), "backup taken successfully, uploading");
        promote(&self.remote, staging, &dest).await
    }
}

async fn prepare_staging(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    debug!(dir = %parent.display(), "preparing staging directory");
    tokio::fs::create_dir_all(parent).await.map_err(|source| BackupError::Staging {
        path: path.to_path_buf(),
        source,
    })
}
