use tracing::instrument;

use lemlist_client::{QueryParams, Result};

use crate::webhook::{
    CreateWebhookParams, CreateWebhookRequest, CreateWebhookResponse, DeleteWebhookResponse,
    Webhook,
};

impl super::LemlistRestClient {
    /// List the team's webhooks.
    #[instrument(skip(self))]
    pub async fn get_webhooks(&self) -> Result<Vec<Webhook>> {
        self.client.get("/hooks").await
    }

    /// Register a webhook, optionally scoped to a campaign.
    #[instrument(skip(self, request))]
    pub async fn create_webhook(
        &self,
        request: &CreateWebhookRequest,
        params: Option<&CreateWebhookParams>,
    ) -> Result<CreateWebhookResponse> {
        let mut query = QueryParams::new();
        if let Some(p) = params {
            query = query
                .opt("campaignId", p.campaign_id.as_deref())
                .opt("isFirst", p.is_first)
                .opt("zapId", p.zap_id.as_deref());
        }
        self.client
            .post(&query.append_to("/hooks"), Some(request))
            .await
    }

    /// Delete a webhook.
    #[instrument(skip(self))]
    pub async fn delete_webhook(&self, hook_id: &str) -> Result<DeleteWebhookResponse> {
        let path = format!("/hooks/{}", self.client.segment(hook_id));
        self.client.delete(&path).await
    }
}
