//! API key credential.
//!
//! The key is redacted in Debug output.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, ErrorKind, Result};

/// Environment variable read by [`ApiKey::from_env`].
pub const API_KEY_ENV: &str = "LEMLIST_API_KEY";

/// A lemlist API key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

impl ApiKey {
    /// Wrap a key. Empty or whitespace-only keys are rejected.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "API key must not be empty".to_string(),
            )));
        }
        Ok(Self(key))
    }

    /// Load the key from `LEMLIST_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV).map_err(|_| {
            Error::new(ErrorKind::Config(format!(
                "environment variable not set: {}",
                API_KEY_ENV
            )))
        })?;
        Self::new(key)
    }

    /// The raw key.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value: Basic auth with an empty username and
    /// the key as password.
    pub fn basic_auth_header(&self) -> String {
        format!("Basic {}", STANDARD.encode(format!(":{}", self.0)))
    }
}
