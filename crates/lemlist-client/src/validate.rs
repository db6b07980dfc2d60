//! Response validation.
//!
//! A [`Validator`] turns a decoded JSON value into a typed value or a
//! [`ValidationError`]. The executor only depends on this trait, so the
//! mechanism behind it can be swapped. [`SerdeValidator`] is the default and
//! enforces the contract expressed by a type's `Deserialize` impl: required
//! fields present, JSON types matching, enum values restricted to their
//! declared variants, date fields parsed from ISO8601.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A decoded value did not conform to the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create a validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The validation failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Converts a decoded JSON value into `T`.
pub trait Validator<T> {
    /// Validate `value`, producing the typed output or the first violation found.
    fn validate(&self, value: Value) -> Result<T, ValidationError>;
}

impl<T, F> Validator<T> for F
where
    F: Fn(Value) -> Result<T, ValidationError>,
{
    fn validate(&self, value: Value) -> Result<T, ValidationError> {
        self(value)
    }
}

/// Validator backed by `T`'s `serde::Deserialize` implementation.
pub struct SerdeValidator<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeValidator<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SerdeValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeValidator<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for SerdeValidator<T> {}

impl<T> fmt::Debug for SerdeValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerdeValidator")
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: DeserializeOwned> Validator<T> for SerdeValidator<T> {
    fn validate(&self, value: Value) -> Result<T, ValidationError> {
        serde_json::from_value(value).map_err(ValidationError::from)
    }
}
