use std::path::Path;

use tracing::{info, instrument};

use super::RemoteStore;
use crate::data::DestinationSet;
use crate::error::{BackupError, Result};

/// Publish a verified staging artifact.
///
/// Uploads to the temporary object, clones it onto the latest alias and
/// finally moves it onto the target. The first failing step ends the run and
/// leaves whatever was already written in place.
#[instrument(skip(remote, dest), fields(dest = %dest.target()))]
pub async fn promote<R: RemoteStore>(remote: &R, staging: &Path, dest: &DestinationSet) -> Result<()> {
    remote
        .upload(staging, dest.temp())
        .await
        .map_err(|e| BackupError::Upload(Box::new(e)))?;

    info!(latest = %dest.latest(), "upload successful, cloning as latest");
    remote
        .copy(dest.temp(), dest.latest())
        .await
        .map_err(|e| BackupError::Cloning(Box::new(e)))?;

    info!(final_object = %dest.target(), "cloning successful, renaming final");
    remote
        .rename(dest.temp(), dest.target())
        .await
        .map_err(|e| BackupError::Finalize(Box::new(e)))?;

    info!("backup promoted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use stowage_platform::Command;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Upload(String, String),
        Copy(String, String),
        Rename(String, String),
    }

    #[derive(Default)]
    struct RecordingRemote {
        ops:     Mutex<Vec<Op>>,
        fail_on: Option<&'static str>,
    }

    impl RecordingRemote {
        fn failing(step: &'static str) -> Self {
            Self {
                fail_on: Some(step),
                ..Default::default()
            }
        }

        fn record(&self, step: &'static str, op: Op) -> io::Result<()> {
            self.ops.lock().unwrap().push(op);
            if self.fail_on == Some(step) {
                return Err(io::Error::other(format!("{step} refused")));
            }
            Ok(())
        }

        fn ops(&self) -> Vec<Op> { self.ops.lock().unwrap().clone() }
    }

    impl RemoteStore for RecordingRemote {
        type Error = io::Error;

        fn receiver(&self, _local: &Path) -> Command { Command::new("true") }

        async fn upload(&self, local: &Path, remote: &str) -> io::Result<()> {
            self.record("upload", Op::Upload(local.display().to_string(), remote.to_string()))
        }

        async fn copy(&self, from: &str, to: &str) -> io::Result<()> {
            self.record("copy", Op::Copy(from.to_string(), to.to_string()))
        }

        async fn rename(&self, from: &str, to: &str) -> io::Result<()> {
            self.record("rename", Op::Rename(from.to_string(), to.to_string()))
        }
    }

    fn dest() -> DestinationSet { DestinationSet::new("s3://bucket/backups/db.gz") }

    #[tokio::test]
    async fn promotes_in_order() {
        let remote = RecordingRemote::default();
        promote(&remote, Path::new("/tmp/backup.gz"), &dest()).await.unwrap();

        assert_eq!(remote.ops(), vec![
            Op::Upload("/tmp/backup.gz".into(), "s3:bucket/backups/db.gz.tmp".into()),
            Op::Copy("s3:bucket/backups/db.gz.tmp".into(), "s3:bucket/backups/latest.xbackup.gz".into()),
            Op::Rename("s3:bucket/backups/db.gz.tmp".into(), "s3:bucket/backups/db.gz".into()),
        ]);
    }

    #[tokio::test]
    async fn upload_failure_stops_everything() {
        let remote = RecordingRemote::failing("upload");
        let err = promote(&remote, Path::new("/tmp/backup.gz"), &dest()).await.unwrap_err();

        assert!(matches!(err, BackupError::Upload(_)));
        assert!(err.to_string().starts_with("upload failed"));
        assert_eq!(remote.ops().len(), 1);
    }

    #[tokio::test]
    async fn clone_failure_skips_rename() {
        let remote = RecordingRemote::failing("copy");
        let err = promote(&remote, Path::new("/tmp/backup.gz"), &dest()).await.unwrap_err();

        assert!(matches!(err, BackupError::Cloning(_)));
        assert_eq!(remote.ops().len(), 2);
    }

    #[tokio::test]
    async fn rename_failure_is_final() {
        let remote = RecordingRemote::failing("rename");
        let err = promote(&remote, Path::new("/tmp/backup.gz"), &dest()).await.unwrap_err();

        assert!(matches!(err, BackupError::Finalize(_)));
        assert!(err.to_string().starts_with("renaming failed"));
        assert_eq!(remote.ops().len(), 3);
    }
}
