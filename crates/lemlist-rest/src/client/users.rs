use tracing::instrument;

use lemlist_client::Result;

use crate::user::User;

impl super::LemlistRestClient {
    /// Get a user with their LinkedIn settings and mailboxes.
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        let path = format!("/users/{}", self.client.segment(user_id));
        self.client.get(&path).await
    }
}
