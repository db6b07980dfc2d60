//! Campaign types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Campaign status filter for listing campaigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Running,
    Draft,
    Archived,
    Paused,
    Ended,
    Errors,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Draft => "draft",
            Self::Archived => "archived",
            Self::Paused => "paused",
            Self::Ended => "ended",
            Self::Errors => "errors",
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response format version for the campaign list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignsVersion {
    V2,
}

impl std::fmt::Display for CampaignsVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("v2")
    }
}

/// Sort key for the campaign list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortBy {
    #[serde(rename = "createdAt")]
    CreatedAt,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("createdAt")
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Query parameters for listing campaigns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCampaignsParams {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub version: Option<CampaignsVersion>,
    pub page: Option<u32>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub status: Option<CampaignStatus>,
}

/// Campaign creator information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignCreator {
    pub user_id: String,
    pub user_email: String,
}

/// Detailed campaign information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub labels: Vec<String>,
    pub created_at: String,
    pub created_by: String,
    pub status: String,
    /// Declared numeric by the API, unlike the string ID returned on creation.
    pub sequence_id: f64,
    pub schedule_ids: Vec<String>,
    pub team_id: String,
    pub has_error: bool,
    pub errors: Vec<String>,
    pub creator: CampaignCreator,
}

/// Campaign entry in list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalCampaign {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub created_by: String,
    pub status: String,
}

/// Body for creating a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCampaignRequest {
    pub name: String,
}

impl CreateCampaignRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Campaign creation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub sequence_id: String,
    pub schedule_ids: Vec<String>,
    pub team_id: String,
    pub created_by: String,
    pub created_at: String,
    pub state: String,
    pub scanned_count: f64,
    pub reviewed_count: f64,
    pub in_sequence_lead_count: f64,
    // The API does not document the element shape of these three lists.
    pub variable_keys: Vec<serde_json::Value>,
    pub senders: Vec<serde_json::Value>,
    pub send_users: Vec<serde_json::Value>,
    pub displayed_variable_keys: Vec<String>,
    pub emoji: String,
    pub stop_on_email_replied: bool,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub crm_opportunities_on_task: Option<bool>,
    pub unsubscribe: String,
    pub name: String,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub crm: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub crm_user_id: Option<String>,
}

/// Campaign settings update. Also the shape of the update response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignData {
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub stop_on_email_replied: Option<bool>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub stop_on_meeting_booked: Option<bool>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub stop_on_link_clicked: Option<bool>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub leads_paused_by_interest: Option<bool>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub opportunity_replied: Option<bool>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub opportunity_clicked: Option<bool>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub auto_lead_interest: Option<bool>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub disable_track_open: Option<bool>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub disable_track_click: Option<bool>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub disable_track_reply: Option<bool>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub stop_on_link_clicked_filter: Option<String>,
}

/// Pause confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseCampaignData {
    #[serde(rename = "_id")]
    pub id: String,
    pub state: String,
}

/// A/B variant filter for campaign statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbVariant {
    A,
    B,
}

impl std::fmt::Display for AbVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::A => "A",
            Self::B => "B",
        })
    }
}

/// Query parameters for campaign statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCampaignStatsParams {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub send_user: Option<String>,
    pub ab_selected: Option<AbVariant>,
    pub channels: Option<String>,
}

impl GetCampaignStatsParams {
    /// Statistics between `start_date` and `end_date`, no filters.
    pub fn new(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            end_date,
            send_user: None,
            ab_selected: None,
            channels: None,
        }
    }
}

/// Per-step campaign statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStatsStep {
    pub index: f64,
    pub sequence_id: String,
    pub sequence_step: f64,
    pub task_type: String,
    pub invited: f64,
    pub sent: f64,
    pub delivered: f64,
    pub opened: f64,
    pub clicked: f64,
    pub replied: f64,
    pub not_delivered: f64,
    pub bounced: f64,
    pub unsubscribed: f64,
}

/// Campaign statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStats {
    pub nb_leads: f64,
    pub nb_leads_launched: f64,
    pub nb_leads_reached: f64,
    pub nb_leads_opened: f64,
    pub nb_leads_interacted: f64,
    pub nb_leads_answered: f64,
    pub nb_leads_interested: f64,
    pub nb_leads_not_interested: f64,
    pub nb_leads_unsubscribed: f64,
    pub nb_leads_interrupted: f64,
    pub messages_sent: f64,
    pub messages_not_sent: f64,
    pub messages_bounced: f64,
    pub delivered: f64,
    pub opened: f64,
    pub clicked: f64,
    pub replied: f64,
    pub invitation_accepted: f64,
    pub meeting_booked: f64,
    pub steps: Vec<CampaignStatsStep>,
}

/// Lead state filter for lead exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportLeadState {
    All,
    Imported,
    Scanned,
    Skipped,
    Reviewed,
    Contacted,
    Hooked,
    Attracted,
    Warmed,
    Interested,
    NotInterested,
    EmailsBounced,
    EmailsUnsubscribed,
    Failed,
    MeetingBooked,
    Paused,
    EmailsSent,
    EmailsOpened,
    EmailsClicked,
    EmailsReplied,
    EmailsInterested,
    EmailsNotInterested,
    EmailsFailed,
    LinkedinVisitDone,
    LinkedinInviteDone,
    LinkedinInviteAccepted,
    LinkedinSent,
    LinkedinOpened,
    LinkedinReplied,
    LinkedinInterested,
    LinkedinNotInterested,
}

impl ExportLeadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Imported => "imported",
            Self::Scanned => "scanned",
            Self::Skipped => "skipped",
            Self::Reviewed => "reviewed",
            Self::Contacted => "contacted",
            Self::Hooked => "hooked",
            Self::Attracted => "attracted",
            Self::Warmed => "warmed",
            Self::Interested => "interested",
            Self::NotInterested => "notInterested",
            Self::EmailsBounced => "emailsBounced",
            Self::EmailsUnsubscribed => "emailsUnsubscribed",
            Self::Failed => "failed",
            Self::MeetingBooked => "meetingBooked",
            Self::Paused => "paused",
            Self::EmailsSent => "emailsSent",
            Self::EmailsOpened => "emailsOpened",
            Self::EmailsClicked => "emailsClicked",
            Self::EmailsReplied => "emailsReplied",
            Self::EmailsInterested => "emailsInterested",
            Self::EmailsNotInterested => "emailsNotInterested",
            Self::EmailsFailed => "emailsFailed",
            Self::LinkedinVisitDone => "linkedinVisitDone",
            Self::LinkedinInviteDone => "linkedinInviteDone",
            Self::LinkedinInviteAccepted => "linkedinInviteAccepted",
            Self::LinkedinSent => "linkedinSent",
            Self::LinkedinOpened => "linkedinOpened",
            Self::LinkedinReplied => "linkedinReplied",
            Self::LinkedinInterested => "linkedinInterested",
            Self::LinkedinNotInterested => "linkedinNotInterested",
        }
    }
}

impl std::fmt::Display for ExportLeadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for exporting campaign leads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportCampaignLeadsParams {
    pub state: Option<ExportLeadState>,
}

/// Lead row in a campaign lead export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedLead {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub email_status: Option<String>,
    pub email: String,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_domain: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub icebreaker: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub last_state: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Status of an asynchronous campaign export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
    Pending,
    Done,
    Error,
}

/// Response to starting a campaign export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCampaignExportResponse {
    #[serde(rename = "_id")]
    pub object_id: String,
    /// Export ID used by the status and email endpoints.
    pub id: String,
    pub team_id: String,
    pub campaign_id: String,
    pub campaign_name: String,
    pub status: ExportStatus,
    pub started_at: String,
    pub progress_index: f64,
    pub progress_time: f64,
    pub progress_last_step_duration: f64,
    pub progress_type: String,
    pub progress: f64,
    pub total: f64,
}

/// Export job as reported by the status and email endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportJob {
    #[serde(rename = "_id")]
    pub object_id: String,
    pub id: String,
    pub team_id: String,
    pub campaign_id: String,
    pub campaign_name: String,
    pub status: ExportStatus,
    pub started_at: String,
    pub progress_index: f64,
    pub progress_time: f64,
    pub progress_last_step_duration: f64,
    pub progress_type: String,
    pub file_size: f64,
    pub progress: f64,
    pub total: f64,
    #[serde(
        default,
        with = "lemlist_client::iso8601::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ended_at: Option<DateTime<Utc>>,
    /// Download URL once the export is done.
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ExportJob {
    pub fn is_done(&self) -> bool {
        self.status == ExportStatus::Done
    }
}

/// Export status response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignExportStatus {
    pub ok: bool,
    pub status: ExportJob,
}

/// Response to setting the export notification email.
pub type SetExportEmailResponse = CampaignExportStatus;

/// Query parameters for campaign reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCampaignReportsParams {
    pub campaign_ids: Vec<String>,
}

impl GetCampaignReportsParams {
    pub fn new<I, S>(campaign_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            campaign_ids: campaign_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Aggregated report for one campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignReport {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub creator: String,
    #[serde(with = "lemlist_client::iso8601")]
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub labels: String,
    pub state: String,
    pub status: String,
    pub sender_names: String,
    pub senders_users: String,
    pub total_count: f64,
    pub reviewed_count: f64,
    pub in_sequence_lead_count: f64,
    pub reviewed: f64,
    pub emails_sent: f64,
    pub emails_sent_not_bounced: f64,
    pub emails_opened: f64,
    pub emails_clicked: f64,
    pub emails_replied: f64,
    pub emails_done: f64,
    pub emails_ignored: f64,
    pub emails_bounced: f64,
    pub emails_failed: f64,
    pub emails_send_failed: f64,
    pub emails_unsubscribed: f64,
    pub emails_interested: f64,
    pub emails_not_interested: f64,
    pub opportunities_done: f64,
    pub opportunities_snoozed: f64,
    pub snoozed: f64,
    pub opportunities_note: f64,
    pub annotated: f64,
    pub aircall_done: f64,
    pub aircall_ignored: f64,
    pub aircall_created: f64,
    pub aircall_ended: f64,
    pub aircall_interested: f64,
    pub aircall_not_interested: f64,
    pub api_done: f64,
    pub api_ignored: f64,
    pub api_called_not_bounced: f64,
    pub api_interested: f64,
    pub api_not_interested: f64,
    pub api_failed: f64,
    pub api_unsubscribed: f64,
    pub linkedin_visit_done: f64,
    pub linkedin_visit_failed: f64,
    pub linkedin_invite_done: f64,
    pub linkedin_sent: f64,
    pub linkedin_sent_and_invited: f64,
    pub linkedin_all_action: f64,
    pub linkedin_opened: f64,
    pub linkedin_compound: f64,
    pub linkedin_invite_accepted: f64,
    pub linkedin_invite_failed: f64,
    pub linkedin_send_failed: f64,
    pub linkedin_voice_note_done: f64,
    pub linkedin_voice_note_failed: f64,
    pub linkedin_voice_note_replied: f64,
    pub whatsapp_message_sent: f64,
    pub whatsapp_message_delivered: f64,
    pub whatsapp_message_opened: f64,
    pub whatsapp_replied: f64,
    pub whatsapp_message_failed: f64,
    pub whatsapp_done: f64,
    pub whatsapp_ignored: f64,
    pub sms_sent: f64,
    pub sms_delivered: f64,
    pub sms_replied: f64,
    pub sms_ignored: f64,
    pub sms_failed: f64,
    pub ai_variable_done: f64,
    pub ai_variable_failed: f64,
    pub linkedin_replied: f64,
    pub linkedin_interested: f64,
    pub linkedin_not_interested: f64,
    pub linkedin_done: f64,
    pub linkedin_ignored: f64,
    pub manual_done: f64,
    pub manual_ignored: f64,
    pub manual_interested: f64,
    pub manual_not_interested: f64,
    pub manual_unsubscribed: f64,
    pub lead_paused: f64,
    pub paused: f64,
    pub lead_resumed: f64,
    pub resumed: f64,
    pub interested: f64,
    pub opportunity_interested: f64,
    pub not_interested: f64,
    pub opportunity_not_interested: f64,
    pub campaigns_started: f64,
    pub campaigns_paused: f64,
    pub skipped: f64,
    pub campaign_imported: f64,
    pub meeting_booked: f64,
    pub condition_chosen: f64,
    pub send_to_another_campaign: f64,
    pub manual_email_queued: f64,
    pub manual_linkedin_send_queued: f64,
    pub manual_linkedin_voice_note_queued: f64,
    pub manual_linkedin_invite_queued: f64,
    pub manual_whatsapp_message_queued: f64,
    pub out_of_office: f64,
    pub entity_unsubscribed: f64,
    pub variable_unsubscribed: f64,
    pub entity_subscribed: f64,
    pub variable_subscribed: f64,
    pub linkedin_send_and_bounced: f64,
}
