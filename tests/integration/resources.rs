use chrono::{TimeZone, Utc};
use lemlist_api::rest::{
    CreateWebhookParams, CreateWebhookRequest, GetCampaignReportsParams, GetLeadParams,
    MailboxStatus, WebhookEventType,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{last_query, setup};

#[tokio::test]
async fn team_endpoints() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/team"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "tea_1",
            "name": "Growth",
            "userIds": ["usr_1"],
            "createdBy": "usr_1",
            "createdAt": "2023-02-10T09:00:00.000Z",
            "beta": [],
            "invitedUsers": [{
                "email": "new@acme.io",
                "role": "member",
                "invitedBy": "usr_1",
                "invitedAt": "2024-04-01T00:00:00.000Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/team/credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credits": 300,
            "details": {"remaining": {"total": 300, "freemium": 0, "subscription": 250, "gifted": 50, "paid": 0}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let team = client.get_team().await.unwrap();
    assert_eq!(team.invited_users.unwrap()[0].email, "new@acme.io");

    let credits = client.get_team_credits().await.unwrap();
    assert_eq!(credits.credits, 300.0);
    assert_eq!(credits.details.remaining.subscription, 250.0);
}

#[tokio::test]
async fn user_lookup() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/users/usr_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "usr_1",
            "email": "jane@acme.io",
            "role": "admin",
            "linkedIn": {"status": false, "inviteLimit": 0, "sendLimit": 0, "visitLimit": 0},
            "mailboxes": [{
                "_id": "mbx_1", "email": "jane@acme.io", "provider": "outlook",
                "status": "CONNECTED", "lemlist": {"emailLimit": 150}, "lemwarm": {"active": true}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client.get_user("usr_1").await.unwrap();
    let mailboxes = user.mailboxes.unwrap();
    assert_eq!(mailboxes[0].status, MailboxStatus::Connected);
    assert_eq!(mailboxes[0].lemlist.email_limit, 150.0);
}

#[tokio::test]
async fn webhook_lifecycle() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/hooks"))
        .and(query_param("zapId", "zap_7"))
        .and(body_json(json!({"targetUrl": "https://hooks.acme.io/lemlist"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "hoo_7",
            "targetUrl": "https://hooks.acme.io/lemlist",
            "createdAt": "2024-06-01T00:00:00.000Z",
            "zapId": "zap_7"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/hooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "_id": "hoo_7",
            "targetUrl": "https://hooks.acme.io/lemlist",
            "type": "campaignComplete",
            "createdAt": "2024-06-01T00:00:00.000Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/hooks/hoo_7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let params = CreateWebhookParams {
        zap_id: Some("zap_7".to_string()),
        ..Default::default()
    };
    let created = client
        .create_webhook(&CreateWebhookRequest::new("https://hooks.acme.io/lemlist"), Some(&params))
        .await
        .unwrap();
    assert_eq!(created.zap_id.as_deref(), Some("zap_7"));
    assert_eq!(last_query(&server).await.as_deref(), Some("zapId=zap_7"));

    let hooks = client.get_webhooks().await.unwrap();
    assert_eq!(hooks[0].event_type, Some(WebhookEventType::CampaignComplete));

    client.delete_webhook(&created.id).await.unwrap();
}

#[tokio::test]
async fn lead_lookup_and_pause() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/leads"))
        .and(query_param("id", "lea_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "_id": "lea_1",
            "updatedAt": "2024-03-03T12:00:00.000Z",
            "isPaused": false,
            "state": "emailsOpened",
            "status": "active",
            "personalized": false,
            "source": "csv",
            "variables": {"email": "jane@acme.io"},
            "contactId": "ctc_1",
            "enrichment": {"provider": "lemlist"},
            "campaign": {"id": "cam_1", "name": "Outreach", "status": "running"},
            "sendingUser": {"email": "sales@acme.io", "fullName": "Sales Team"}
        }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/leads/pause/jane@acme.io"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "lea_1", "isPaused": true, "campaignId": "cam_1", "contactId": "ctc_1"},
            {"_id": "lea_2", "isPaused": true, "campaignId": "cam_2", "contactId": "ctc_1"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let leads = client.get_lead(&GetLeadParams::id("lea_1")).await.unwrap();
    assert_eq!(leads[0].enrichment["provider"], "lemlist");
    assert_eq!(leads[0].sending_user.full_name.as_deref(), Some("Sales Team"));

    let paused = client.pause_lead("jane@acme.io", None).await.unwrap();
    assert_eq!(paused.len(), 2);
    assert!(paused.iter().all(|lead| lead.is_paused));
}

#[tokio::test]
async fn campaign_reports_parse_created_at() {
    let (server, client) = setup().await;

    let mut report = json!({
        "_id": "cam_1",
        "name": "Outreach",
        "creator": "Jane",
        "createdAt": "2024-02-14T08:30:00.000Z",
        "createdBy": "usr_1",
        "labels": "q1,inbound",
        "state": "running",
        "status": "running",
        "senderNames": "Jane",
        "sendersUsers": "usr_1"
    });
    for name in REPORT_COUNTERS {
        report[*name] = json!(0.0);
    }
    report["emailsSent"] = json!(42.0);

    Mock::given(method("GET"))
        .and(path("/api/campaigns/reports"))
        .and(query_param("campaignIds", "cam_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([report.clone()])))
        .expect(1)
        .mount(&server)
        .await;

    let reports = client
        .get_campaign_reports(&GetCampaignReportsParams::new(["cam_1"]))
        .await
        .unwrap();
    assert_eq!(
        reports[0].created_at,
        Utc.with_ymd_and_hms(2024, 2, 14, 8, 30, 0).unwrap()
    );
    assert_eq!(reports[0].emails_sent, 42.0);

    // Serializing back yields the same wire shape.
    assert_eq!(serde_json::to_value(&reports[0]).unwrap(), report);
}

/// Counter fields of a campaign report.
const REPORT_COUNTERS: &[&str] = &[
    "totalCount", "reviewedCount", "inSequenceLeadCount", "reviewed", "emailsSent",
    "emailsSentNotBounced", "emailsOpened", "emailsClicked", "emailsReplied", "emailsDone",
    "emailsIgnored", "emailsBounced", "emailsFailed", "emailsSendFailed", "emailsUnsubscribed",
    "emailsInterested", "emailsNotInterested", "opportunitiesDone", "opportunitiesSnoozed",
    "snoozed", "opportunitiesNote", "annotated", "aircallDone", "aircallIgnored",
    "aircallCreated", "aircallEnded", "aircallInterested", "aircallNotInterested", "apiDone",
    "apiIgnored", "apiCalledNotBounced", "apiInterested", "apiNotInterested", "apiFailed",
    "apiUnsubscribed", "linkedinVisitDone", "linkedinVisitFailed", "linkedinInviteDone",
    "linkedinSent", "linkedinSentAndInvited", "linkedinAllAction", "linkedinOpened",
    "linkedinCompound", "linkedinInviteAccepted", "linkedinInviteFailed", "linkedinSendFailed",
    "linkedinVoiceNoteDone", "linkedinVoiceNoteFailed", "linkedinVoiceNoteReplied",
    "whatsappMessageSent", "whatsappMessageDelivered", "whatsappMessageOpened",
    "whatsappReplied", "whatsappMessageFailed", "whatsappDone", "whatsappIgnored", "smsSent",
    "smsDelivered", "smsReplied", "smsIgnored", "smsFailed", "aiVariableDone",
    "aiVariableFailed", "linkedinReplied", "linkedinInterested", "linkedinNotInterested",
    "linkedinDone", "linkedinIgnored", "manualDone", "manualIgnored", "manualInterested",
    "manualNotInterested", "manualUnsubscribed", "leadPaused", "paused", "leadResumed",
    "resumed", "interested", "opportunityInterested", "notInterested",
    "opportunityNotInterested", "campaignsStarted", "campaignsPaused", "skipped",
    "campaignImported", "meetingBooked", "conditionChosen", "sendToAnotherCampaign",
    "manualEmailQueued", "manualLinkedinSendQueued", "manualLinkedinVoiceNoteQueued",
    "manualLinkedinInviteQueued", "manualWhatsappMessageQueued", "outOfOffice",
    "entityUnsubscribed", "variableUnsubscribed", "entitySubscribed", "variableSubscribed",
    "linkedinSendAndBounced",
];
