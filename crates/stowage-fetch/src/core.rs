//! Core layer: pure request preparation.

/// Port the backup server listens on when the host names none.
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Path that serves the backup stream.
pub const DEFAULT_BACKUP_ENDPOINT: &str = "/xbackup";

/// Build the backup URL for `host`.
///
/// `port` is appended only when `host` does not already carry one.
///
/// # Examples
///
/// ```
/// use stowage_fetch::prepare_url;
///
/// assert_eq!(prepare_url("db1", 8080, "/xbackup"), "http://db1:8080/xbackup");
/// assert_eq!(prepare_url("db1:9000", 8080, "/xbackup"), "http://db1:9000/xbackup");
/// ```
pub fn prepare_url(host: &str, port: u16, endpoint: &str) -> String {
    if host.contains(':') {
        format!("http://{host}{endpoint}")
    } else {
        format!("http://{host}:{port}{endpoint}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_url_appends_default_port() {
        assert_eq!(
            prepare_url("mysql-0.mysql", DEFAULT_SERVER_PORT, DEFAULT_BACKUP_ENDPOINT),
            "http://mysql-0.mysql:8080/xbackup"
        );
    }

    #[test]
    fn prepare_url_keeps_explicit_port() {
        assert_eq!(prepare_url("10.0.0.7:3307", 8080, "/xbackup"), "http://10.0.0.7:3307/xbackup");
    }

    #[test]
    fn prepare_url_uses_given_endpoint() {
        assert_eq!(prepare_url("db1", 80, "/dump"), "http://db1:80/dump");
    }
}
