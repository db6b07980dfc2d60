//! # lemlist-rest
//!
//! Typed client for the lemlist REST API.
//!
//! ## Features
//!
//! - **Campaigns** - List, read, create, update and pause campaigns
//! - **Statistics & reports** - Per-campaign stats over a date range and
//!   multi-campaign reports
//! - **Exports** - Asynchronous campaign exports and JSON lead exports
//! - **Team** - Team settings, senders and credits
//! - **Users** - User details with mailboxes
//! - **Webhooks** - List, register and delete webhooks
//! - **Leads** - Look up and pause leads
//!
//! Every method returns [`Result`]: `Ok` holds the validated payload, `Err`
//! holds the transport, HTTP, decode or validation failure.
//!
//! ## Example
//!
//! ```rust,ignore
//! use chrono::{Duration, Utc};
//! use lemlist_rest::{GetCampaignStatsParams, LemlistRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lemlist_rest::Error> {
//!     let client = LemlistRestClient::from_env()?;
//!
//!     let campaigns = client.get_campaigns(None).await?;
//!
//!     let now = Utc::now();
//!     let stats = client
//!         .get_campaign_stats(
//!             &campaigns[0].id,
//!             &GetCampaignStatsParams::new(now - Duration::days(30), now),
//!         )
//!         .await?;
//!     println!("{} leads reached", stats.nb_leads_reached);
//!
//!     Ok(())
//! }
//! ```

pub mod campaign;
mod client;
pub mod lead;
pub mod team;
pub mod user;
pub mod webhook;

// Main client
pub use client::LemlistRestClient;

// Campaigns
pub use campaign::{
    AbVariant, Campaign, CampaignCreator, CampaignExportStatus, CampaignReport, CampaignStats,
    CampaignStatsStep, CampaignStatus, CampaignsVersion, CreateCampaignRequest,
    CreateCampaignResponse, ExportCampaignLeadsParams, ExportJob, ExportLeadState, ExportStatus,
    ExportedLead, GetCampaignReportsParams, GetCampaignStatsParams, GetCampaignsParams,
    MinimalCampaign, PauseCampaignData, SetExportEmailResponse, SortBy, SortOrder,
    StartCampaignExportResponse, UpdateCampaignData,
};

// Leads
pub use lead::{GetLeadParams, LeadCampaign, LeadItem, LeadVariables, PausedLead, SendingUser};

// Team
pub use team::{
    CreditsDetails, InvitedUser, RemainingCredits, SenderCampaign, SlackWebhook, Team, TeamCredits,
    TeamHook, TeamSender,
};

// Users
pub use user::{LemlistEmailSettings, LemwarmSettings, LinkedIn, Mailbox, MailboxStatus, User};

// Webhooks
pub use webhook::{
    CreateWebhookParams, CreateWebhookRequest, CreateWebhookResponse, DeleteWebhookResponse,
    Webhook, WebhookEventType,
};

// Re-export the shared client types
pub use lemlist_client::{ClientConfig, ClientConfigBuilder, Error, ErrorKind, Result};
