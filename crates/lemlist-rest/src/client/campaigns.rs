use tracing::instrument;

use lemlist_client::{QueryParams, Result};

use crate::campaign::{
    Campaign, CampaignExportStatus, CampaignReport, CampaignStats, CreateCampaignRequest,
    CreateCampaignResponse, ExportCampaignLeadsParams, ExportedLead, GetCampaignReportsParams,
    GetCampaignStatsParams, GetCampaignsParams, MinimalCampaign, PauseCampaignData,
    SetExportEmailResponse, StartCampaignExportResponse, UpdateCampaignData,
};

impl super::LemlistRestClient {
    /// List campaigns, optionally filtered and paginated.
    #[instrument(skip(self))]
    pub async fn get_campaigns(
        &self,
        params: Option<&GetCampaignsParams>,
    ) -> Result<Vec<MinimalCampaign>> {
        let mut query = QueryParams::new();
        if let Some(p) = params {
            query = query
                .opt("offset", p.offset)
                .opt("limit", p.limit)
                .opt("version", p.version)
                .opt("page", p.page)
                .opt("sortby", p.sort_by)
                .opt("sortOrder", p.sort_order)
                .opt("status", p.status);
        }
        self.client.get(&query.append_to("/campaigns")).await
    }

    /// Get one campaign.
    #[instrument(skip(self))]
    pub async fn get_campaign(&self, campaign_id: &str) -> Result<Campaign> {
        let path = format!("/campaigns/{}", self.client.segment(campaign_id));
        self.client.get(&path).await
    }

    /// Update campaign settings. The API echoes the applied settings.
    #[instrument(skip(self, data))]
    pub async fn update_campaign(
        &self,
        campaign_id: &str,
        data: &UpdateCampaignData,
    ) -> Result<UpdateCampaignData> {
        let path = format!("/campaigns/{}", self.client.segment(campaign_id));
        self.client.patch(&path, data).await
    }

    /// Pause a running campaign. Scheduled leads are left untouched.
    #[instrument(skip(self))]
    pub async fn pause_campaign(&self, campaign_id: &str) -> Result<PauseCampaignData> {
        let path = format!("/campaigns/{}/pause", self.client.segment(campaign_id));
        self.client.post(&path, None::<&()>).await
    }

    /// Create a campaign.
    #[instrument(skip(self, request))]
    pub async fn create_campaign(
        &self,
        request: &CreateCampaignRequest,
    ) -> Result<CreateCampaignResponse> {
        self.client.post("/campaigns", Some(request)).await
    }

    /// Get campaign statistics for a date range.
    #[instrument(skip(self))]
    pub async fn get_campaign_stats(
        &self,
        campaign_id: &str,
        params: &GetCampaignStatsParams,
    ) -> Result<CampaignStats> {
        let query = QueryParams::new()
            .date("startDate", &params.start_date)
            .date("endDate", &params.end_date)
            .opt("sendUser", params.send_user.as_deref())
            .opt("ABSelected", params.ab_selected)
            .opt("channels", params.channels.as_deref());
        let path = format!("/v2/campaigns/{}/stats", self.client.segment(campaign_id));
        self.client.get(&query.append_to(&path)).await
    }

    /// Start an asynchronous export of a campaign.
    #[instrument(skip(self))]
    pub async fn start_campaign_export(
        &self,
        campaign_id: &str,
    ) -> Result<StartCampaignExportResponse> {
        let path = format!("/campaigns/{}/export/start", self.client.segment(campaign_id));
        self.client.get(&path).await
    }

    /// Poll the status of a campaign export.
    #[instrument(skip(self))]
    pub async fn get_campaign_export_status(
        &self,
        campaign_id: &str,
        export_id: &str,
    ) -> Result<CampaignExportStatus> {
        let path = format!(
            "/campaigns/{}/export/{}/status",
            self.client.segment(campaign_id),
            self.client.segment(export_id)
        );
        self.client.get(&path).await
    }

    /// Set the address notified when an export completes.
    #[instrument(skip(self))]
    pub async fn set_export_email(
        &self,
        campaign_id: &str,
        export_id: &str,
        email: &str,
    ) -> Result<SetExportEmailResponse> {
        let path = format!(
            "/campaigns/{}/export/{}/email/{}",
            self.client.segment(campaign_id),
            self.client.segment(export_id),
            self.client.segment(email)
        );
        self.client.put(&path).await
    }

    /// Get aggregated reports for several campaigns.
    #[instrument(skip(self))]
    pub async fn get_campaign_reports(
        &self,
        params: &GetCampaignReportsParams,
    ) -> Result<Vec<CampaignReport>> {
        let query = QueryParams::new().list("campaignIds", &params.campaign_ids);
        self.client.get(&query.append_to("/campaigns/reports")).await
    }

    /// Export campaign leads synchronously as JSON.
    #[instrument(skip(self))]
    pub async fn export_campaign_leads(
        &self,
        campaign_id: &str,
        params: Option<&ExportCampaignLeadsParams>,
    ) -> Result<Vec<ExportedLead>> {
        let query = QueryParams::new()
            .opt("state", params.and_then(|p| p.state))
            .set("format", "json");
        let path = format!("/campaigns/{}/export/leads", self.client.segment(campaign_id));
        self.client.get(&query.append_to(&path)).await
    }
}
