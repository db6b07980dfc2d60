//! Raw HTTP layer: one authenticated JSON round trip per call.

use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::credentials::ApiKey;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::Response;

/// HTTP client for the lemlist API.
///
/// Sends exactly one request per [`execute`](Self::execute) call. There is
/// no retry and no timeout beyond what [`ClientConfig`] sets.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        builder = builder
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed);

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send `request` to `url` with the lemlist headers attached.
    pub async fn execute(&self, url: &str, request: &RequestBuilder, key: &ApiKey) -> Result<Response> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::AUTHORIZATION, key.basic_auth_header());

        if let Some(ref body) = request.body {
            let payload = serde_json::to_vec(body)
                .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))?;
            req = req.body(payload);
        }

        if self.config.enable_tracing {
            debug!(method = %request.method, path = %request.path, "Sending request");
        }

        let response = Response::read(req.send().await?).await?;

        if self.config.enable_tracing {
            let status = response.status();
            let content_length = response.body().len();
            if response.is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        Ok(response)
    }
}
