//! User types.

use serde::{Deserialize, Serialize};

/// LinkedIn integration limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedIn {
    pub status: bool,
    pub invite_limit: f64,
    pub send_limit: f64,
    pub visit_limit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LemlistEmailSettings {
    pub email_limit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemwarmSettings {
    pub active: bool,
}

/// Connection state of a mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MailboxStatus {
    Connected,
    Error,
    Disconnected,
}

/// Sending mailbox attached to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mailbox {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub provider: String,
    pub status: MailboxStatus,
    pub lemlist: LemlistEmailSettings,
    pub lemwarm: LemwarmSettings,
}

/// User information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<LinkedIn>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub mailboxes: Option<Vec<Mailbox>>,
}

impl User {
    /// Mailboxes currently able to send.
    pub fn connected_mailboxes(&self) -> impl Iterator<Item = &Mailbox> {
        self.mailboxes
            .iter()
            .flatten()
            .filter(|m| m.status == MailboxStatus::Connected)
    }
}
