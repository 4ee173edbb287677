/// Collapse the first `://` scheme delimiter into `:`.
///
/// Remote-copy clients address remotes as `name:path`, while users write
/// `scheme://bucket/path`. Inputs without the delimiter are returned as-is,
/// so a URI with at most one delimiter normalizes to a fixed point. Each
/// further `://` is consumed by one more call.
///
/// # Examples
///
/// ```
/// use stowage_pipeline::normalize_bucket_uri;
///
/// assert_eq!(normalize_bucket_uri("s3://bucket/backups/db.gz"), "s3:bucket/backups/db.gz");
/// assert_eq!(normalize_bucket_uri("gs:bucket/db.gz"), "gs:bucket/db.gz");
/// ```
pub fn normalize_bucket_uri(uri: &str) -> String { uri.replacen("://", ":", 1) }

/// Join `rel` onto `base` and clean the result lexically.
///
/// Empty and `.` segments are dropped and `..` removes the preceding
/// segment. A `..` that has nothing left to remove is kept, unless the path
/// is rooted, in which case it is dropped.
pub fn join_clean(base: &str, rel: &str) -> String {
    let rooted = base.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in base.split('/').chain(rel.split('/')) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            segment => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
