//! HTTP response handling.

use std::time::Duration;

use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

/// A fully-read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    content_type: Option<String>,
    retry_after: Option<Duration>,
    body: Vec<u8>,
}

impl Response {
    /// Read the status, the headers we care about and the whole body.
    pub(crate) async fn read(inner: reqwest::Response) -> Result<Self> {
        let status = inner.status().as_u16();
        let headers = inner.headers();
        let content_type = headers
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let retry_after = headers
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after);
        let body = inner.bytes().await?.to_vec();

        Ok(Self {
            status,
            content_type,
            retry_after,
            body,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: None,
            retry_after: None,
            body: body.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Get the Retry-After header as a Duration.
    pub fn retry_after(&self) -> Option<Duration> {
        self.retry_after
    }

    /// Raw response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decode the body as JSON. The error names the Content-Type when the
    /// server sent one, since a non-JSON body is the usual cause.
    pub fn json_value(&self) -> Result<Value> {
        serde_json::from_slice(&self.body).map_err(|e| {
            let message = match self.content_type() {
                Some(content_type) => format!("{e} (content-type: {content_type})"),
                None => e.to_string(),
            };
            Error::with_source(ErrorKind::Decode(message), e)
        })
    }

    /// Map non-2xx responses to an error; `secret` is redacted from the
    /// message.
    pub fn error_for_status(self, secret: &str) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(self.into_error(secret))
    }

    fn into_error(self, secret: &str) -> Error {
        if self.status == 429 {
            return Error::new(ErrorKind::RateLimited {
                retry_after: self.retry_after,
            });
        }

        let text = String::from_utf8_lossy(&self.body);
        let message = sanitize_error_message(&extract_message(&text), secret);
        let kind = match self.status {
            401 => ErrorKind::Authentication(message),
            403 => ErrorKind::Authorization(message),
            404 => ErrorKind::NotFound(message),
            status => ErrorKind::Http { status, message },
        };
        Error::new(kind)
    }
}

fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}

/// Pull a human-readable message out of an error body.
///
/// lemlist answers errors either as plain text or as a JSON object carrying
/// `message` or `error`.
fn extract_message(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(Value::String(msg)) = map.get(key) {
                return msg.clone();
            }
        }
    }
    body.trim().to_string()
}

/// Redact the API key and cap the message length.
fn sanitize_error_message(message: &str, secret: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = if secret.is_empty() {
        message.to_string()
    } else {
        message.replace(secret, "[REDACTED]")
    };

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
