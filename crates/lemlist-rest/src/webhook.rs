//! Webhook types.

use serde::{Deserialize, Serialize};

/// Event a webhook subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WebhookEventType {
    // Activity
    Contacted,
    Hooked,
    Attracted,
    Warmed,
    Interested,
    Skipped,
    NotInterested,
    // Email
    EmailsSent,
    EmailsOpened,
    EmailsClicked,
    EmailsReplied,
    EmailsBounced,
    EmailsSendFailed,
    EmailsFailed,
    EmailsUnsubscribed,
    EmailsInterested,
    EmailsNotInterested,
    // LinkedIn
    LinkedinInterested,
    LinkedinNotInterested,
    LinkedinSent,
    LinkedinReplied,
    LinkedinInviteAccepted,
    // Operational alerts
    CustomDomainErrors,
    ConnectionIssue,
    SendLimitReached,
    LemwarmPaused,
    CampaignComplete,
}

/// Registered webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    #[serde(rename = "_id")]
    pub id: String,
    pub target_url: String,
    /// `None` means the webhook receives every event.
    #[serde(
        rename = "type",
        default,
        with = "lemlist_client::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_type: Option<WebhookEventType>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    pub created_at: String,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub zap_id: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub is_first: Option<bool>,
}

/// Query parameters for creating a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateWebhookParams {
    pub campaign_id: Option<String>,
    pub is_first: Option<bool>,
    pub zap_id: Option<String>,
}

/// Body for creating a webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookRequest {
    pub target_url: String,
    #[serde(
        rename = "type",
        default,
        with = "lemlist_client::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_type: Option<WebhookEventType>,
}

impl CreateWebhookRequest {
    /// Webhook receiving every event.
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            event_type: None,
        }
    }

    /// Restrict the webhook to one event type.
    pub fn with_event_type(mut self, event_type: WebhookEventType) -> Self {
        self.event_type = Some(event_type);
        self
    }
}

/// Webhook creation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub target_url: String,
    pub created_at: String,
    #[serde(
        rename = "type",
        default,
        with = "lemlist_client::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_type: Option<WebhookEventType>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub zap_id: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub is_first: Option<bool>,
}

/// Webhook deletion response. The API answers with an object whose content
/// is not relied upon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteWebhookResponse {}
