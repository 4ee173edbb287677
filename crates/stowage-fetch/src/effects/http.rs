use http::StatusCode;
use tracing::{debug, info, instrument};

use crate::core::prepare_url;
use crate::data::{BackupStream, RequestOptions};
use crate::effects::BackupSource;
use crate::error::{FetchError, Result};

/// Production backup source using `reqwest`.
///
/// Issues `GET http://{host}:{port}{endpoint}` with optional basic auth and
/// hands back the body with its trailers still pending.
pub struct HttpSource {
    client:  reqwest::Client,
    options: RequestOptions,
}

impl HttpSource {
    pub fn new(options: RequestOptions) -> Self { Self::with_client(reqwest::Client::new(), options) }

    pub fn with_client(client: reqwest::Client, options: RequestOptions) -> Self { Self { client, options } }

    pub fn options(&self) -> &RequestOptions { &self.options }
}

impl BackupSource for HttpSource {
    #[instrument(skip(self), fields(endpoint = %self.options.endpoint))]
    async fn open(&self, host: &str) -> Result<BackupStream> {
        if host.trim().is_empty() {
            return Err(FetchError::InvalidHost(host.to_string()));
        }

        let url = prepare_url(host, self.options.port, &self.options.endpoint);
        info!(%url, "initialize a backup");

        let mut request = self.client.get(&url);
        if let Some(credentials) = &self.options.credentials {
            request = request.basic_auth(&credentials.user, Some(&credentials.password));
        }

        let response = request.send().await.map_err(|e| FetchError::Network {
            url:     url.clone(),
            message: e.to_string(),
        })?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::HttpStatus {
                url,
                status: response.status(),
            });
        }

        debug!(%url, "backup stream opened");
        let response: http::Response<reqwest::Body> = response.into();
        Ok(BackupStream::from_body(response.into_body()))
    }
}
