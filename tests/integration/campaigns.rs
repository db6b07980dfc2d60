use chrono::{TimeZone, Utc};
use lemlist_api::rest::{
    CampaignStatus, ExportStatus, GetCampaignStatsParams, GetCampaignsParams, SortOrder,
    UpdateCampaignData,
};
use lemlist_api::{ClientConfig, LemlistRestClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{expected_auth_header, last_query, setup, API_KEY};

fn stats_body() -> serde_json::Value {
    json!({
        "nbLeads": 120, "nbLeadsLaunched": 100, "nbLeadsReached": 95,
        "nbLeadsOpened": 60, "nbLeadsInteracted": 30, "nbLeadsAnswered": 12,
        "nbLeadsInterested": 5, "nbLeadsNotInterested": 2,
        "nbLeadsUnsubscribed": 1, "nbLeadsInterrupted": 3,
        "messagesSent": 240, "messagesNotSent": 4, "messagesBounced": 6,
        "delivered": 234, "opened": 110, "clicked": 40, "replied": 14,
        "invitationAccepted": 9, "meetingBooked": 2,
        "steps": [{
            "index": 0, "sequenceId": "seq_1", "sequenceStep": 1, "taskType": "email",
            "invited": 0, "sent": 100, "delivered": 98, "opened": 60, "clicked": 20,
            "replied": 8, "notDelivered": 2, "bounced": 2, "unsubscribed": 1
        }]
    })
}

#[tokio::test]
async fn list_running_campaigns() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/campaigns"))
        .and(header("Authorization", expected_auth_header().as_str()))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "_id": "c1",
            "name": "X",
            "createdAt": "2024-01-01",
            "createdBy": "u1",
            "status": "running"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let campaigns = client
        .get_campaigns(Some(&GetCampaignsParams {
            status: Some(CampaignStatus::Running),
            limit: Some(10),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert_eq!(campaigns.len(), 1);
    assert_eq!(campaigns[0].id, "c1");
    assert_eq!(campaigns[0].name, "X");
    assert_eq!(last_query(&server).await.as_deref(), Some("limit=10&status=running"));
}

#[tokio::test]
async fn list_campaigns_full_query_order() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let params = GetCampaignsParams {
        offset: Some(20),
        limit: Some(10),
        version: Some(lemlist_api::rest::CampaignsVersion::V2),
        page: Some(3),
        sort_by: Some(lemlist_api::rest::SortBy::CreatedAt),
        sort_order: Some(SortOrder::Desc),
        status: Some(CampaignStatus::Paused),
    };
    client.get_campaigns(Some(&params)).await.unwrap();

    assert_eq!(
        last_query(&server).await.as_deref(),
        Some("offset=20&limit=10&version=v2&page=3&sortby=createdAt&sortOrder=desc&status=paused")
    );
}

#[tokio::test]
async fn pause_campaign_without_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/campaigns/cam_123/pause"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"_id": "cam_123", "state": "paused"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let paused = client.pause_campaign("cam_123").await.unwrap();
    assert_eq!(paused.id, "cam_123");
    assert_eq!(paused.state, "paused");

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn stats_dates_sent_as_iso8601_utc() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/campaigns/cam_1/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = GetCampaignStatsParams::new(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
    );
    params.send_user = Some("usr_1".to_string());
    params.channels = Some("email".to_string());

    let stats = client.get_campaign_stats("cam_1", &params).await.unwrap();
    assert_eq!(stats.steps.len(), 1);
    assert_eq!(stats.steps[0].task_type, "email");

    let received = server.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = received[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("startDate".to_string(), "2024-01-01T00:00:00.000Z".to_string()),
            ("endDate".to_string(), "2024-02-01T00:00:00.000Z".to_string()),
            ("sendUser".to_string(), "usr_1".to_string()),
            ("channels".to_string(), "email".to_string()),
        ]
    );
}

#[tokio::test]
async fn update_round_trips_through_validator() {
    let (server, client) = setup().await;

    let data = UpdateCampaignData {
        name: Some("Renamed".to_string()),
        opportunity_clicked: Some(false),
        disable_track_reply: Some(true),
        ..Default::default()
    };
    let wire = serde_json::to_value(&data).unwrap();

    Mock::given(method("PATCH"))
        .and(path("/api/campaigns/cam_1"))
        .and(body_json(wire.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(wire))
        .expect(1)
        .mount(&server)
        .await;

    let echoed = client.update_campaign("cam_1", &data).await.unwrap();
    assert_eq!(echoed, data);
}

#[tokio::test]
async fn export_status_lifecycle() {
    let (server, client) = setup().await;

    let job = |status: &str| {
        json!({
            "_id": "obj_1", "id": "exp_1", "teamId": "tea_1", "campaignId": "cam_1",
            "campaignName": "Outreach", "status": status,
            "startedAt": "2024-05-01T10:00:00.000Z", "progressIndex": 1,
            "progressTime": 30.5, "progressLastStepDuration": 2.25,
            "progressType": "leads", "fileSize": 0, "progress": 40, "total": 250
        })
    };

    Mock::given(method("GET"))
        .and(path("/api/campaigns/cam_1/export/exp_1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "status": job("pending")})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/campaigns/cam_1/export/exp_1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "status": job("error")})))
        .mount(&server)
        .await;

    let first = client.get_campaign_export_status("cam_1", "exp_1").await.unwrap();
    assert_eq!(first.status.status, ExportStatus::Pending);
    assert_eq!(first.status.progress_time, 30.5);

    let second = client.get_campaign_export_status("cam_1", "exp_1").await.unwrap();
    assert_eq!(second.status.status, ExportStatus::Error);
    assert!(!second.status.is_done());
}

#[tokio::test]
async fn path_identifiers_verbatim_unless_encoding_enabled() {
    let server = MockServer::start().await;

    let job = json!({
        "_id": "obj_1", "id": "exp_1", "teamId": "tea_1", "campaignId": "cam_1",
        "campaignName": "Outreach", "status": "pending",
        "startedAt": "2024-05-01T10:00:00.000Z", "progressIndex": 0,
        "progressTime": 0, "progressLastStepDuration": 0, "progressType": "leads",
        "fileSize": 0, "progress": 0, "total": 1, "email": "ops+exports@acme.io"
    });

    Mock::given(method("PUT"))
        .and(path("/campaigns/cam_1/export/exp_1/email/ops+exports@acme.io"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "status": job.clone()})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/campaigns/cam_1/export/exp_1/email/ops%2Bexports%40acme.io"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "status": job})))
        .expect(1)
        .mount(&server)
        .await;

    let verbatim = LemlistRestClient::with_config(
        API_KEY,
        ClientConfig::builder().with_base_url(server.uri()).build(),
    )
    .unwrap();
    verbatim
        .set_export_email("cam_1", "exp_1", "ops+exports@acme.io")
        .await
        .unwrap();

    let encoding = LemlistRestClient::with_config(
        API_KEY,
        ClientConfig::builder()
            .with_base_url(server.uri())
            .with_path_encoding(true)
            .build(),
    )
    .unwrap();
    encoding
        .set_export_email("cam_1", "exp_1", "ops+exports@acme.io")
        .await
        .unwrap();
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/campaigns/cam_1/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .expect(8)
        .mount(&server)
        .await;

    let params = GetCampaignStatsParams::new(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            let params = params.clone();
            tokio::spawn(async move { client.get_campaign_stats("cam_1", &params).await })
        })
        .collect();

    for handle in handles {
        let stats = handle.await.unwrap().unwrap();
        assert_eq!(stats.nb_leads, 120.0);
    }
}
