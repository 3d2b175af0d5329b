//! API Integration Tests
//!
//! Each test spins up a full server against a throwaway SQLite database in
//! a temp directory; no external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Report Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_report() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = ReportPayload::unique();

    let response = server.post("/api/v1/reports", &payload).await.unwrap();
    let created: ReportBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.reporter, payload.reporter);
    assert_eq!(created.date_time, payload.date_time);
    // A three-day ban issued in 2024 has long expired
    assert_eq!(created.ban_status, "Expired");

    let response = server
        .get(&format!("/api/v1/reports/{}", created.id))
        .await
        .unwrap();
    let fetched: ReportBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.reportee, payload.reportee);
}

#[tokio::test]
async fn test_create_report_rejects_bad_date() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut payload = ReportPayload::unique();
    payload.date_time = "15/03/2024 18:45".to_string();

    let response = server.post("/api/v1/reports", &payload).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_create_report_rejects_empty_reporter() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/reports",
            &json!({
                "date_time": "2024-03-15T18:45",
                "reporter": "",
                "reportee": "Bob",
                "report_reason": {"tags": ["RDM"]},
                "punishment": "warning"
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_report_reason_other_text_round_trips() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = ReportPayload {
        report_reason: ReasonBody {
            tags: vec!["Spam".to_string()],
            other_text: Some("spawn camping, then evading".to_string()),
        },
        ..ReportPayload::unique()
    };

    let response = server.post("/api/v1/reports", &payload).await.unwrap();
    let created: ReportBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The Other tag is forced last on encode and recovered on decode
    assert_eq!(created.report_reason.tags, vec!["Spam", "Other"]);
    assert_eq!(
        created.report_reason.other_text.as_deref(),
        Some("spawn camping, then evading")
    );

    let response = server
        .get(&format!("/api/v1/reports/{}", created.id))
        .await
        .unwrap();
    let fetched: ReportBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.report_reason, created.report_reason);
}

#[tokio::test]
async fn test_create_report_rejects_empty_reason() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = ReportPayload {
        report_reason: ReasonBody::tags(&[]),
        ..ReportPayload::unique()
    };

    let response = server.post("/api/v1/reports", &payload).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_report_evidence_is_classified() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut payload = ReportPayload::unique();
    payload.evidence = "https://example.com/clip.mp4, screenshots/proof.png".to_string();

    let response = server.post("/api/v1/reports", &payload).await.unwrap();
    let created: ReportBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.evidence.len(), 2);
    assert_eq!(created.evidence[0].kind, "link");
    assert_eq!(created.evidence[1].kind, "file");
    assert_eq!(created.evidence[1].value, "screenshots/proof.png");
}

#[tokio::test]
async fn test_update_report() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = ReportPayload::unique();

    let response = server.post("/api/v1/reports", &payload).await.unwrap();
    let created: ReportBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut updated = payload.clone();
    updated.punishment = "verbal warning".to_string();
    let response = server
        .put(&format!("/api/v1/reports/{}", created.id), &updated)
        .await
        .unwrap();
    let body: ReportBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.punishment, "verbal warning");
    assert_eq!(body.ban_status, "N/A");
}

#[tokio::test]
async fn test_update_missing_report_is_404() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .put("/api/v1/reports/9999", &ReportPayload::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_report() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = ReportPayload::unique();

    let response = server.post("/api/v1/reports", &payload).await.unwrap();
    let created: ReportBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/reports/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/reports/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Report Search and Sort Tests
// ============================================================================

#[tokio::test]
async fn test_search_by_reporter() {
    let server = TestServer::start().await.expect("Failed to start server");

    let alice = ReportPayload {
        reporter: "Alice".to_string(),
        ..ReportPayload::unique()
    };
    let bob = ReportPayload {
        reporter: "Bob".to_string(),
        ..ReportPayload::unique()
    };
    server.post("/api/v1/reports", &alice).await.unwrap();
    server.post("/api/v1/reports", &bob).await.unwrap();

    let response = server
        .get("/api/v1/reports?search_query=Alice&search_field=reporter")
        .await
        .unwrap();
    let reports: Vec<ReportBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].reporter, "Alice");
}

#[tokio::test]
async fn test_search_all_matches_date() {
    let server = TestServer::start().await.expect("Failed to start server");

    let march = ReportPayload {
        date_time: "2024-03-15T10:00".to_string(),
        ..ReportPayload::unique()
    };
    let june = ReportPayload {
        date_time: "2024-06-01T10:00".to_string(),
        ..ReportPayload::unique()
    };
    server.post("/api/v1/reports", &march).await.unwrap();
    server.post("/api/v1/reports", &june).await.unwrap();

    let response = server
        .get("/api/v1/reports?search_query=2024-03-15&search_field=all")
        .await
        .unwrap();
    let reports: Vec<ReportBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(reports.len(), 1);
    assert!(reports[0].date_time.starts_with("2024-03-15"));
}

#[tokio::test]
async fn test_search_malformed_date_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/reports?search_query=March+15&search_field=date")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_sort_injection_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/reports?sort_by=id;DROP+TABLE+reports")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_default_sort_is_newest_first() {
    let server = TestServer::start().await.expect("Failed to start server");

    let older = ReportPayload {
        date_time: "2024-01-01T08:00".to_string(),
        ..ReportPayload::unique()
    };
    let newer = ReportPayload {
        date_time: "2024-05-01T08:00".to_string(),
        ..ReportPayload::unique()
    };
    server.post("/api/v1/reports", &older).await.unwrap();
    server.post("/api/v1/reports", &newer).await.unwrap();

    let response = server.get("/api/v1/reports").await.unwrap();
    let reports: Vec<ReportBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports[0].date_time > reports[1].date_time);
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_report_stats() {
    let server = TestServer::start().await.expect("Failed to start server");

    for _ in 0..2 {
        let payload = ReportPayload {
            reporter: "Alice".to_string(),
            date_time: "2024-03-10T09:00".to_string(),
            ..ReportPayload::unique()
        };
        server.post("/api/v1/reports", &payload).await.unwrap();
    }

    let response = server.get("/api/v1/reports/stats").await.unwrap();
    let stats: StatsBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stats.total_reports, 2);
    assert_eq!(stats.by_reporter.len(), 1);
    assert_eq!(stats.by_reporter[0].label, "Alice");
    assert_eq!(stats.by_reporter[0].value, 2);
    assert_eq!(stats.by_month[0].label, "2024-03");
    assert_eq!(stats.by_month[0].value, 2);
    assert!(!stats.by_reportee.is_empty());
    assert!(!stats.by_reason.is_empty());
}

// ============================================================================
// Ban Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_bans() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = BanPayload::unique();

    let response = server.post("/api/v1/bans", &payload).await.unwrap();
    let created: BanBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.player_steam_id, payload.player_steam_id);

    let response = server.get("/api/v1/bans").await.unwrap();
    let bans: Vec<BanBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(bans.len(), 1);
}

#[tokio::test]
async fn test_ban_display_name_strips_annotation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = BanPayload {
        player_name: "Griefer99 (second offense)".to_string(),
        ..BanPayload::unique()
    };

    let response = server.post("/api/v1/bans", &payload).await.unwrap();
    let created: BanBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.player_display_name, "Griefer99");
}

#[tokio::test]
async fn test_delete_ban() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = BanPayload::unique();

    let response = server.post("/api/v1/bans", &payload).await.unwrap();
    let created: BanBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/bans/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/bans/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_scrape_with_unreachable_listing_imports_nothing() {
    // The test config points the scraper at a closed port; every page fetch
    // fails, which must not fail the request as a whole.
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/bans/scrape", &json!({"admin_steam_id": "STEAM_0:0:42"}))
        .await
        .unwrap();
    let body: ScrapeBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.started);
    assert_eq!(body.imported, 0);
}

#[tokio::test]
async fn test_scrape_rejects_empty_admin_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/bans/scrape", &json!({"admin_steam_id": ""}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Settings Tests
// ============================================================================

#[tokio::test]
async fn test_settings_roundtrip() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/settings").await.unwrap();
    let initial: SettingsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!initial.evidence_dir.is_empty());

    let sub = server.evidence_dir().join("sub");
    std::fs::create_dir_all(&sub).unwrap();
    let update = SettingsBody {
        evidence_dir: sub.display().to_string(),
    };
    let response = server.put("/api/v1/settings", &update).await.unwrap();
    let updated: SettingsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.evidence_dir, update.evidence_dir);

    let response = server.get("/api/v1/settings").await.unwrap();
    let fetched: SettingsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.evidence_dir, update.evidence_dir);
}

#[tokio::test]
async fn test_settings_rejects_missing_directory() {
    let server = TestServer::start().await.expect("Failed to start server");

    let update = SettingsBody {
        evidence_dir: server.evidence_dir().join("does-not-exist").display().to_string(),
    };
    let response = server.put("/api/v1/settings", &update).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Evidence Tests
// ============================================================================

#[tokio::test]
async fn test_evidence_download() {
    let server = TestServer::start().await.expect("Failed to start server");

    let file_path = server.evidence_dir().join("clip.txt");
    std::fs::write(&file_path, b"demo footage placeholder").unwrap();

    let response = server.get("/api/v1/evidence/clip.txt").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("clip.txt"));

    let body = response.bytes().await.unwrap();
    assert_eq!(&body[..], b"demo footage placeholder");
}

#[tokio::test]
async fn test_missing_evidence_is_404() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/evidence/nope.mp4").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
