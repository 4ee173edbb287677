use std::fmt;

use crate::core::{DEFAULT_BACKUP_ENDPOINT, DEFAULT_SERVER_PORT};

/// HTTP basic-auth credentials for the backup endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user:     String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user:     user.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Configuration for backup requests.
///
/// # Examples
///
/// ```
/// use stowage_fetch::{Credentials, RequestOptions};
///
/// let options = RequestOptions::default()
///     .port(9000)
///     .credentials(Credentials::new("backup", "secret"));
/// assert_eq!(options.endpoint, "/xbackup");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Port appended to hosts that do not name one.
    ///
    /// Default: 8080
    pub port: u16,

    /// Path of the backup endpoint, starting with `/`.
    ///
    /// Default: `/xbackup`
    pub endpoint: String,

    /// Basic-auth credentials sent with the request.
    ///
    /// Default: None
    pub credentials: Option<Credentials>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            port:        DEFAULT_SERVER_PORT,
            endpoint:    DEFAULT_BACKUP_ENDPOINT.to_string(),
            credentials: None,
        }
    }
}

impl RequestOptions {
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}
