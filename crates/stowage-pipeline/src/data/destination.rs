use std::fmt;

use crate::core::{join_clean, normalize_bucket_uri};

/// Object name of the rolling alias, placed next to the final object.
pub const LATEST_OBJECT: &str = "latest.xbackup.gz";

/// Suffix of the in-flight copy that is later renamed onto the target.
pub const TEMP_SUFFIX: &str = ".tmp";

/// The three remote paths a single run writes to, derived from one
/// destination URI.
///
/// # Examples
///
/// ```
/// use stowage_pipeline::DestinationSet;
///
/// let dest = DestinationSet::new("s3://bucket/backups/db.gz");
/// assert_eq!(dest.target(), "s3:bucket/backups/db.gz");
/// assert_eq!(dest.temp(), "s3:bucket/backups/db.gz.tmp");
/// assert_eq!(dest.latest(), "s3:bucket/backups/latest.xbackup.gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationSet {
    target: String,
    temp:   String,
    latest: String,
}

impl DestinationSet {
    pub fn new(uri: &str) -> Self {
        let target = normalize_bucket_uri(uri);
        let temp = format!("{target}{TEMP_SUFFIX}");
        let latest = join_clean(&target, &format!("../{LATEST_OBJECT}"));
        Self {
            target,
            temp,
            latest,
        }
    }

    /// Where the backup ends up.
    pub fn target(&self) -> &str { &self.target }

    /// Upload location, removed by the final rename.
    pub fn temp(&self) -> &str { &self.temp }

    /// Rolling alias overwritten by every successful run in the directory.
    pub fn latest(&self) -> &str { &self.latest }
}

impl fmt::Display for DestinationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.target) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_all_paths() {
        let dest = DestinationSet::new("gs://archive/mysql/2024/db1.gz");
        assert_eq!(dest.target(), "gs:archive/mysql/2024/db1.gz");
        assert_eq!(dest.temp(), "gs:archive/mysql/2024/db1.gz.tmp");
        assert_eq!(dest.latest(), "gs:archive/mysql/2024/latest.xbackup.gz");
    }

    #[test]
    fn already_normalized_uri_is_accepted() {
        assert_eq!(
            DestinationSet::new("s3:bucket/db.gz"),
            DestinationSet::new("s3://bucket/db.gz")
        );
    }

    #[test]
    fn local_path_destination() {
        let dest = DestinationSet::new("/srv/backups/db.gz");
        assert_eq!(dest.target(), "/srv/backups/db.gz");
        assert_eq!(dest.latest(), "/srv/backups/latest.xbackup.gz");
    }

    #[test]
    fn bucket_root_object() {
        let dest = DestinationSet::new("s3://bucket/db.gz");
        assert_eq!(dest.latest(), "s3:bucket/latest.xbackup.gz");
        assert_eq!(dest.to_string(), "s3:bucket/db.gz");
    }
}
