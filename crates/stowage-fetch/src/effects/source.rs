use std::future::Future;

use crate::data::BackupStream;
use crate::error::Result;

/// Something that can produce a live backup of a database host.
///
/// # Implementations
///
/// - [`HttpSource`](crate::HttpSource): production implementation using `reqwest`
/// - In-memory sources built on [`BackupStream::from_chunks`] for testing
pub trait BackupSource: Send + Sync {
    /// Ask `host` for a backup and return the open stream.
    ///
    /// # Errors
    ///
    /// Fails before any byte is read when the host cannot be reached or
    /// refuses the request. Failures while the body is being read surface
    /// through the body stream itself.
    fn open(&self, host: &str) -> impl Future<Output = Result<BackupStream>> + Send;
}
