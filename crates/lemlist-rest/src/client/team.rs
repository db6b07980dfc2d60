use tracing::instrument;

use lemlist_client::Result;

use crate::team::{Team, TeamCredits, TeamSender};

impl super::LemlistRestClient {
    /// Get team information.
    #[instrument(skip(self))]
    pub async fn get_team(&self) -> Result<Team> {
        self.client.get("/team").await
    }

    /// List team members and the campaigns they send for.
    #[instrument(skip(self))]
    pub async fn get_team_senders(&self) -> Result<Vec<TeamSender>> {
        self.client.get("/team/senders").await
    }

    /// Get the remaining credit balance.
    #[instrument(skip(self))]
    pub async fn get_team_credits(&self) -> Result<TeamCredits> {
        self.client.get("/team/credits").await
    }
}
