//! Lead types.

use serde::{Deserialize, Serialize};

/// Lead lookup key. The API accepts an email or a lead ID, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetLeadParams {
    Email(String),
    Id(String),
}

impl GetLeadParams {
    pub fn email(email: impl Into<String>) -> Self {
        Self::Email(email.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Query parameter name and value.
    pub fn as_query(&self) -> (&'static str, &str) {
        match self {
            Self::Email(email) => ("email", email),
            Self::Id(id) => ("id", id),
        }
    }
}

/// Campaign a lead belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCampaign {
    pub id: String,
    pub name: String,
    pub status: String,
}

/// Sender assigned to a lead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendingUser {
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Personalisation variables of a lead. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadVariables {
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_employees_on_linkedin: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_founded_on: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_industry: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_linkedin_url: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_picture: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_tagline: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub join_company_in: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Lead as returned by the lead lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub updated_at: String,
    pub is_paused: bool,
    pub state: String,
    pub status: String,
    pub personalized: bool,
    pub source: String,
    pub variables: LeadVariables,
    pub contact_id: String,
    pub enrichment: serde_json::Map<String, serde_json::Value>,
    pub campaign: LeadCampaign,
    pub sending_user: SendingUser,
}

/// Lead returned by the pause endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PausedLead {
    #[serde(rename = "_id")]
    pub id: String,
    pub is_paused: bool,
    pub campaign_id: String,
    pub contact_id: String,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_founded_on: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_industry: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_linkedin_url: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_picture: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, with = "lemlist_client::optional", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
