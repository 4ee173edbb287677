use std::path::PathBuf;

use super::ToolSpec;

/// Local file the transfer client writes the compressed stream into.
pub const DEFAULT_STAGING_PATH: &str = "/tmp/backup.gz";

/// Local settings of a backup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupOptions {
    /// Staging artifact, overwritten by every run.
    ///
    /// Default: `/tmp/backup.gz`
    pub staging_path: PathBuf,

    /// Compressor reading the raw stream on stdin.
    ///
    /// Default: `gzip -c`
    pub compressor: ToolSpec,
}

impl Default for BackupOptions {
    fn default() -> Self {
        Self {
            staging_path: PathBuf::from(DEFAULT_STAGING_PATH),
            compressor:   ToolSpec::gzip(),
        }
    }
}

impl BackupOptions {
    #[must_use]
    pub fn staging_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.staging_path = path.into();
        self
    }

    #[must_use]
    pub fn compressor(mut self, compressor: ToolSpec) -> Self {
        self.compressor = compressor;
        self
    }
}
