//! Data layer: immutable descriptions of where and how a backup goes.

mod destination;
mod options;
mod tool;

pub use destination::{DestinationSet, LATEST_OBJECT, TEMP_SUFFIX};
pub use options::{BackupOptions, DEFAULT_STAGING_PATH};
pub use tool::ToolSpec;
