//! # lemlist-client
//!
//! Core HTTP infrastructure for the lemlist API.
//!
//! This crate provides the typed request executor every resource method goes
//! through:
//! - Basic authentication with the API key as password
//! - JSON request bodies
//! - JSON decoding and schema validation of responses
//! - A single error channel for transport, status, decode and validation
//!   failures
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (lemlist-rest: campaigns, team, users, webhooks, leads)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     LemlistClient                           │
//! │  - Holds API key + base URL + HTTP client                   │
//! │  - request / request_with: decode + validate                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HttpClient                             │
//! │  - One reqwest round trip, auth + content-type headers      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use lemlist_client::{LemlistClient, RequestMethod};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lemlist_client::Error> {
//!     let client = LemlistClient::from_env()?;
//!
//!     let team: serde_json::Value = client.get("/team").await?;
//!
//!     let paused: serde_json::Value = client
//!         .request(RequestMethod::Post, "/campaigns/cam_123/pause", None::<&()>)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod credentials;
mod error;
pub mod iso8601;
mod lemlist_client;
pub mod optional;
mod query;
mod request;
mod response;
mod validate;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use credentials::{ApiKey, API_KEY_ENV};
pub use error::{Error, ErrorKind, Result};
pub use lemlist_client::LemlistClient;
pub use query::QueryParams;
pub use request::{RequestBuilder, RequestMethod};
pub use response::Response;
pub use validate::{SerdeValidator, ValidationError, Validator};

/// Default lemlist API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.lemlist.com/api";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("lemlist-api/", env!("CARGO_PKG_VERSION"));
