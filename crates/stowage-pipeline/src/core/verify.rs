use http::HeaderMap;

use crate::error::{BackupError, Result};

/// Trailer carrying the source's own verdict on the backup it streamed.
pub const BACKUP_STATUS_TRAILER: &str = "x-backup-status";

/// The only status value that counts as a complete backup.
pub const BACKUP_SUCCESSFUL: &str = "Success";

/// Decide from the stream trailers whether the backup is complete.
///
/// Fails closed: trailers that were never delivered, an empty trailer
/// section, or a status that never says `Success` all mean the backup was
/// partially taken. A repeated status trailer passes when any of its values
/// is `Success`. Header names match case-insensitively, the value must match
/// exactly.
pub fn check_backup_trailers(trailers: Option<&HeaderMap>) -> Result<()> {
    let Some(trailers) = trailers else {
        return Err(partial("no trailers were received"));
    };

    let statuses = trailers.get_all(BACKUP_STATUS_TRAILER);
    if statuses.iter().any(|value| value == BACKUP_SUCCESSFUL) {
        return Ok(());
    }

    match statuses.iter().next() {
        Some(_) => Err(partial(format!(
            "{BACKUP_STATUS_TRAILER} is not {BACKUP_SUCCESSFUL}, trailers: {}",
            describe(trailers)
        ))),
        None => Err(partial(format!(
            "{BACKUP_STATUS_TRAILER} missing, trailers: {}",
            describe(trailers)
        ))),
    }
}

fn partial(reason: impl Into<String>) -> BackupError {
    BackupError::Integrity {
        reason: reason.into(),
    }
}

fn describe(trailers: &HeaderMap) -> String {
    if trailers.is_empty() {
        return "[]".to_string();
    }
    let pairs: Vec<String> = trailers
        .iter()
        .map(|(name, value)| format!("{name}={}", String::from_utf8_lossy(value.as_bytes())))
        .collect();
    format!("[{}]", pairs.join(", "))
}
