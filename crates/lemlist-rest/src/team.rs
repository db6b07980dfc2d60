//! Team types: team settings, senders and credits.

use serde::{Deserialize, Serialize};

/// Webhook as listed in team settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamHook {
    #[serde(rename = "_id")]
    pub id: String,
    pub target_url: String,
    #[serde(rename = "type")]
    pub hook_type: String,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    pub created_at: String,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub zap_id: Option<String>,
}

/// Slack webhook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackWebhook {
    pub url: String,
    pub fail_counter: f64,
}

/// Pending team invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitedUser {
    pub email: String,
    pub role: String,
    pub invited_by: String,
    pub invited_at: String,
}

/// Team information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub user_ids: Vec<String>,
    pub created_by: String,
    pub created_at: String,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub hooks: Option<Vec<TeamHook>>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub slack_webhook: Option<SlackWebhook>,
    pub beta: Vec<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub picture_id: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub invited_users: Option<Vec<InvitedUser>>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
}

/// Campaign a sender is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderCampaign {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub status: String,
    pub sending_channels: Vec<String>,
}

/// Team member and the campaigns they send for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSender {
    pub user_id: String,
    pub campaigns: Vec<SenderCampaign>,
}

/// Remaining credits by source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RemainingCredits {
    pub total: f64,
    pub freemium: f64,
    pub subscription: f64,
    pub gifted: f64,
    pub paid: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditsDetails {
    pub remaining: RemainingCredits,
}

/// Team credit balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamCredits {
    pub credits: f64,
    pub details: CreditsDetails,
}
