//! I/O operations for backup requests.
//!
//! The pipeline only depends on [`BackupSource`]; [`HttpSource`] is the
//! production implementation talking to the database sidecar.

mod source;
#[cfg(feature = "reqwest")]
mod http;

pub use source::BackupSource;
#[cfg(feature = "reqwest")]
pub use self::http::HttpSource;
