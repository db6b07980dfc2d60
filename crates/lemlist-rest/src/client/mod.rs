//! lemlist REST API client.
//!
//! This client wraps `LemlistClient` from `lemlist-client` and provides one
//! typed method per endpoint.

use lemlist_client::{ClientConfig, LemlistClient, Result};

mod campaigns;
mod leads;
mod team;
mod users;
mod webhooks;

/// lemlist REST API client.
///
/// Provides typed methods for:
/// - Campaigns, statistics, exports and reports
/// - Team settings, senders and credits
/// - Users
/// - Webhooks
/// - Lead lookup and pausing
///
/// # Example
///
/// ```rust,ignore
/// use lemlist_rest::{CampaignStatus, GetCampaignsParams, LemlistRestClient};
///
/// let client = LemlistRestClient::new("my-api-key")?;
///
/// let running = client
///     .get_campaigns(Some(&GetCampaignsParams {
///         status: Some(CampaignStatus::Running),
///         ..Default::default()
///     }))
///     .await?;
///
/// client.pause_campaign(&running[0].id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LemlistRestClient {
    client: LemlistClient,
}

impl LemlistRestClient {
    /// Create a new REST client for the default lemlist host.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = LemlistClient::new(api_key)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = LemlistClient::with_config(api_key, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from an existing LemlistClient.
    pub fn from_client(client: LemlistClient) -> Self {
        Self { client }
    }

    /// Create a REST client from `LEMLIST_API_KEY` and `LEMLIST_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client: LemlistClient::from_env()?,
        })
    }

    /// Get the underlying LemlistClient.
    pub fn inner(&self) -> &LemlistClient {
        &self.client
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}
