//! Query-string construction for resource methods.

use std::fmt::Display;

use chrono::{DateTime, Utc};

/// Insertion-ordered query parameters.
///
/// Values are encoded as `application/x-www-form-urlencoded`. [`opt`](Self::opt)
/// skips `None`, so absent parameters never appear in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn set(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.pairs.push((name.into(), value.to_string()));
        self
    }

    /// Add a parameter if `value` is present.
    pub fn opt(self, name: impl Into<String>, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    /// Add a timestamp parameter in ISO8601 UTC form.
    pub fn date(self, name: impl Into<String>, value: &DateTime<Utc>) -> Self {
        let formatted = crate::iso8601::format(value);
        self.set(name, formatted)
    }

    /// Add a comma-joined list parameter.
    pub fn list<I, S>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.set(name, joined)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// The raw (unencoded) pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Encoded query string without the leading `?`.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Append the encoded query to `path`; `path` is returned unchanged when
    /// there are no parameters.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.encode())
        }
    }
}
