//! # lemlist-api
//!
//! A typed lemlist API client library for Rust.
//!
//! Every call builds an authenticated request, sends it once, decodes the
//! JSON answer and validates it against a typed schema before handing it
//! back as a `Result`.
//!
//! ## Security
//!
//! - The API key is redacted in Debug output
//! - Tracing spans skip the key and request bodies
//! - Error messages have the key removed and are length-capped
//!
//! ## Crates
//!
//! - **lemlist-client** - Request executor: Basic auth, JSON decoding, validation, errors
//! - **lemlist-rest** - Resource methods: campaigns, team, users, webhooks, leads
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lemlist_api::{CampaignStatus, GetCampaignsParams, LemlistRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads LEMLIST_API_KEY (and LEMLIST_BASE_URL if set)
//!     let client = LemlistRestClient::from_env()?;
//!
//!     let running = client
//!         .get_campaigns(Some(&GetCampaignsParams {
//!             status: Some(CampaignStatus::Running),
//!             limit: Some(10),
//!             ..Default::default()
//!         }))
//!         .await?;
//!
//!     for campaign in running {
//!         println!("{} ({})", campaign.name, campaign.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use lemlist_client as client;
#[cfg(feature = "rest")]
pub use lemlist_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use lemlist_client::{ApiKey, ClientConfig, Error, ErrorKind, LemlistClient, Result};
#[cfg(feature = "rest")]
pub use lemlist_rest::{CampaignStatus, GetCampaignsParams, LemlistRestClient};
