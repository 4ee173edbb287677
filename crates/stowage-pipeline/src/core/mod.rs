//! Core layer: pure transformations with no I/O.

mod address;
mod verify;

pub use address::{join_clean, normalize_bucket_uri};
pub use verify::{BACKUP_STATUS_TRAILER, BACKUP_SUCCESSFUL, check_backup_trailers};
