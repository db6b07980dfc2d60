use tracing::instrument;

use lemlist_client::{QueryParams, Result};

use crate::lead::{GetLeadParams, LeadItem, PausedLead};

impl super::LemlistRestClient {
    /// Look a lead up by email or ID.
    #[instrument(skip(self))]
    pub async fn get_lead(&self, params: &GetLeadParams) -> Result<Vec<LeadItem>> {
        let (name, value) = params.as_query();
        let query = QueryParams::new().set(name, value);
        self.client.get(&query.append_to("/leads")).await
    }

    /// Pause a lead in every campaign, or only in `campaign_id`.
    #[instrument(skip(self))]
    pub async fn pause_lead(
        &self,
        lead_id_or_email: &str,
        campaign_id: Option<&str>,
    ) -> Result<Vec<PausedLead>> {
        let query = QueryParams::new().opt("campaignId", campaign_id);
        let path = format!("/leads/pause/{}", self.client.segment(lead_id_or_email));
        self.client
            .post(&query.append_to(&path), None::<&()>)
            .await
    }
}
