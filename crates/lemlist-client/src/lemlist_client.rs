//! High-level lemlist client: the typed request executor.
//!
//! ## Security
//!
//! - The API key is redacted in Debug output
//! - Request bodies and the key are skipped in tracing spans

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::credentials::ApiKey;
use crate::error::Result;
use crate::request::{RequestBuilder, RequestMethod};
use crate::validate::{SerdeValidator, Validator};

/// lemlist API client.
///
/// Holds the API key, the base URL and an HTTP client. It has no mutable
/// state, so clones and concurrent calls are cheap and safe.
///
/// # Example
///
/// ```rust,ignore
/// use lemlist_client::{LemlistClient, RequestMethod};
///
/// let client = LemlistClient::new("my-api-key")?;
/// let team: serde_json::Value = client
///     .request(RequestMethod::Get, "/team", None::<&()>)
///     .await?;
/// ```
#[derive(Clone)]
pub struct LemlistClient {
    http: HttpClient,
    base_url: String,
    api_key: ApiKey,
}

impl std::fmt::Debug for LemlistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemlistClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl LemlistClient {
    /// Create a client for the default lemlist host.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Self::from_key(ApiKey::new(api_key)?, config)
    }

    /// Create a client from an existing [`ApiKey`].
    pub fn from_key(api_key: ApiKey, config: ClientConfig) -> Result<Self> {
        let base_url = config.normalized_base_url()?;
        let http = HttpClient::new(config)?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Create a client from `LEMLIST_API_KEY` and `LEMLIST_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_key(ApiKey::from_env()?, ClientConfig::from_env())
    }

    /// Get the base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Build the full URL for a path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Prepare an identifier for interpolation into a path.
    ///
    /// Verbatim unless path encoding is enabled in the config.
    pub fn segment<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.config().encode_path_segments {
            urlencoding::encode(raw)
        } else {
            Cow::Borrowed(raw)
        }
    }

    /// Perform one call and validate the response with `T`'s `Deserialize`
    /// implementation.
    pub async fn request<T, B>(&self, method: RequestMethod, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_with(method, path, body, &SerdeValidator::<T>::new())
            .await
    }

    /// Perform one call and validate the response with `validator`.
    ///
    /// Transport, HTTP status, JSON decode and validation failures all come
    /// back as `Err`; nothing is retried.
    #[instrument(skip(self, body, validator), fields(method = %method, path = %path))]
    pub async fn request_with<T, B, V>(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<&B>,
        validator: &V,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        V: Validator<T> + ?Sized,
    {
        let mut request = RequestBuilder::new(method, path);
        if let Some(body) = body {
            request = request.json(body)?;
        }

        let response = self
            .http
            .execute(&self.url(path), &request, &self.api_key)
            .await?
            .error_for_status(self.api_key.expose())?;

        let value = response.json_value()?;
        validator.validate(value).map_err(Into::into)
    }

    /// GET with a typed response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(RequestMethod::Get, path, None::<&()>).await
    }

    /// POST with an optional body and a typed response.
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(RequestMethod::Post, path, body).await
    }

    /// PATCH with a body and a typed response.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(RequestMethod::Patch, path, Some(body)).await
    }

    /// PUT without body and with a typed response.
    pub async fn put<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(RequestMethod::Put, path, None::<&()>).await
    }

    /// DELETE with a typed response.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(RequestMethod::Delete, path, None::<&()>).await
    }
}
