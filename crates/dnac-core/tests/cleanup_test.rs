#![allow(clippy::unwrap_used)]
// End-to-end cleanup runs against a wiremock controller.

use std::time::Duration;

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dnac_core::{
    Cleanup, CleanupConfig, CleanupEvent, CoreError, DeletionStatus, Family, FamilyStatus, Mode,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn config_for(server: &MockServer) -> CleanupConfig {
    CleanupConfig::new(
        Url::parse(&server.uri()).unwrap(),
        "admin",
        SecretString::from("C1sco12345".to_string()),
    )
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/dna/system/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Token": "tok" })))
        .mount(server)
        .await;
}

async fn mount_list(server: &MockServer, list_path: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(list_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": body })))
        .mount(server)
        .await;
}

async fn mount_inventory(server: &MockServer) {
    mount_list(
        server,
        "/dna/intent/api/v1/reserve-ip-subpool",
        json!([{ "id": "sp1", "groupName": "Data" }]),
    )
    .await;
    mount_list(
        server,
        "/dna/intent/api/v1/global-pool",
        json!([{ "id": "gp1", "ipPoolName": "Global-10" }]),
    )
    .await;
    mount_list(
        server,
        "/dna/intent/api/v1/sites",
        json!([
            { "id": "global", "name": "Global", "type": "area" },
            { "id": "a1", "name": "Area1", "nameHierarchy": "Global/Area1", "type": "area" },
            { "id": "b1", "name": "B1", "nameHierarchy": "Global/Area1/Area2/B1", "type": "building" },
            { "id": "a2", "name": "Area2", "nameHierarchy": "Global/Area1/Area2", "type": "area" },
            { "id": "f1", "name": "F1", "nameHierarchy": "Global/Area1/Area2/B1/F1", "type": "floor" }
        ]),
    )
    .await;
}

async fn mount_deletes(server: &MockServer, status: u16) {
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/dna/intent/api/v[12]/.+$"))
        .respond_with(ResponseTemplate::new(status).set_body_string("{}"))
        .mount(server)
        .await;
}

async fn delete_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.method.to_string() == "DELETE")
        .map(|r| r.url.path().to_owned())
        .collect()
}

// ── Full runs ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_full_run_deletes_in_dependency_order() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_inventory(&server).await;
    mount_deletes(&server, 202).await;

    let report = Cleanup::new(config_for(&server)).run().await.unwrap();

    assert_eq!(
        delete_paths(&server).await,
        vec![
            "/dna/intent/api/v1/reserve-ip-subpool/sp1",
            "/dna/intent/api/v1/global-pool/gp1",
            "/dna/intent/api/v2/floors/f1",
            "/dna/intent/api/v2/buildings/b1",
            "/dna/intent/api/v1/areas/a2",
            "/dna/intent/api/v1/areas/a1",
        ]
    );
    assert_eq!(report.mode, Mode::Execute);
    assert_eq!(report.total_deleted(), 6);
    assert_eq!(report.total_failed(), 0);
    assert!(!report.has_failures());

    let sites = report.family(Family::Sites).unwrap();
    assert_eq!(sites.status, FamilyStatus::Completed);
    assert_eq!(sites.planned, 4);
}

#[tokio::test]
async fn test_events_follow_run_order() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_inventory(&server).await;
    mount_deletes(&server, 202).await;

    let mut events = Vec::new();
    Cleanup::new(config_for(&server))
        .run_with(|e| events.push(e.clone()))
        .await
        .unwrap();

    assert_eq!(events[0], CleanupEvent::Authenticated);
    assert_eq!(
        events[1],
        CleanupEvent::Listing {
            family: Family::Pools
        }
    );
    assert_eq!(
        events[2],
        CleanupEvent::Planned {
            family: Family::Pools,
            count: 2
        }
    );
    let outcomes = events
        .iter()
        .filter(|e| matches!(e, CleanupEvent::Outcome(_)))
        .count();
    assert_eq!(outcomes, 6);
}

// ── Dry run ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_dry_run_sends_no_requests() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_inventory(&server).await;
    mount_deletes(&server, 202).await;

    let config = config_for(&server).with_mode(Mode::DryRun);
    let report = Cleanup::new(config).run().await.unwrap();

    assert!(server.received_requests().await.unwrap().is_empty());
    assert_eq!(report.mode, Mode::DryRun);
    assert_eq!(report.families.len(), 2);
    assert!(
        report
            .families
            .iter()
            .all(|f| f.status == FamilyStatus::Skipped)
    );
    assert!(!report.has_failures());
}

// ── Failure handling ────────────────────────────────────────────────

#[tokio::test]
async fn test_auth_failure_aborts_before_listing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dna/system/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;
    mount_inventory(&server).await;

    let err = Cleanup::new(config_for(&server)).run().await.unwrap_err();

    assert!(matches!(err, CoreError::AuthenticationFailed { .. }), "got: {err:?}");
    assert!(err.is_auth());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_controller_is_connection_failure() {
    let config = CleanupConfig::new(
        Url::parse("http://127.0.0.1:9").unwrap(),
        "admin",
        SecretString::from("pw".to_string()),
    );

    let err = Cleanup::new(config).run().await.unwrap_err();

    match err {
        CoreError::ConnectionFailed { url, .. } => assert!(url.starts_with("http://127.0.0.1:9")),
        other => panic!("expected ConnectionFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_pool_listing_failure_does_not_block_sites() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/reserve-ip-subpool"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;
    mount_list(&server, "/dna/intent/api/v1/global-pool", json!([{ "id": "gp1" }])).await;
    mount_list(
        &server,
        "/dna/intent/api/v1/sites",
        json!([{ "id": "a1", "nameHierarchy": "Global/A1", "type": "area" }]),
    )
    .await;
    mount_deletes(&server, 202).await;

    let report = Cleanup::new(config_for(&server)).run().await.unwrap();

    let pools = report.family(Family::Pools).unwrap();
    match &pools.status {
        FamilyStatus::Aborted { reason } => assert!(reason.contains("500"), "{reason}"),
        other => panic!("expected pools to abort, got: {other:?}"),
    }
    assert!(pools.outcomes.is_empty());

    assert_eq!(delete_paths(&server).await, vec!["/dna/intent/api/v1/areas/a1"]);
    assert!(report.has_failures());
}

#[tokio::test]
async fn test_missing_resources_yield_failed_outcomes_and_run_completes() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_inventory(&server).await;
    mount_deletes(&server, 404).await;

    let report = Cleanup::new(config_for(&server)).run().await.unwrap();

    assert_eq!(report.total_deleted(), 0);
    assert_eq!(report.total_failed(), 6);
    assert!(report.outcomes().all(|o| o.status == DeletionStatus::Failed));
    assert!(
        report
            .outcomes()
            .all(|o| o.detail.starts_with("Status Code: 404"))
    );
    assert!(
        report
            .families
            .iter()
            .all(|f| f.status == FamilyStatus::Completed)
    );
}

#[tokio::test]
async fn test_rejected_delete_does_not_stop_the_group() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_inventory(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/dna/intent/api/v2/floors/f1"))
        .respond_with(ResponseTemplate::new(400).set_body_string("floor has devices"))
        .mount(&server)
        .await;
    mount_deletes(&server, 202).await;

    let report = Cleanup::new(config_for(&server)).run().await.unwrap();

    let sites = report.family(Family::Sites).unwrap();
    assert_eq!(sites.failed(), 1);
    assert_eq!(sites.deleted(), 3);
    assert_eq!(
        sites.outcomes[0].detail,
        "Status Code: 400, Response: floor has devices"
    );
    assert_eq!(delete_paths(&server).await.len(), 6);
}

#[tokio::test]
async fn test_unaddressable_id_fails_only_that_resource() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_list(
        &server,
        "/dna/intent/api/v1/reserve-ip-subpool",
        json!([{ "id": ".." }, { "id": "sp1" }]),
    )
    .await;
    mount_list(&server, "/dna/intent/api/v1/global-pool", json!([{ "id": "gp1" }])).await;
    mount_list(&server, "/dna/intent/api/v1/sites", json!([])).await;
    mount_deletes(&server, 202).await;

    let report = Cleanup::new(config_for(&server)).run().await.unwrap();

    let pools = report.family(Family::Pools).unwrap();
    assert_eq!(pools.status, FamilyStatus::Completed);
    assert_eq!(pools.failed(), 1);
    assert_eq!(pools.deleted(), 2);
    assert_eq!(
        delete_paths(&server).await,
        vec![
            "/dna/intent/api/v1/reserve-ip-subpool/sp1",
            "/dna/intent/api/v1/global-pool/gp1",
        ]
    );
}

#[tokio::test]
async fn test_transport_failure_mid_family_aborts_only_that_family() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_list(
        &server,
        "/dna/intent/api/v1/reserve-ip-subpool",
        json!([{ "id": "slow" }, { "id": "never" }]),
    )
    .await;
    mount_list(&server, "/dna/intent/api/v1/global-pool", json!([{ "id": "gp1" }])).await;
    mount_list(
        &server,
        "/dna/intent/api/v1/sites",
        json!([{ "id": "a1", "nameHierarchy": "Global/A1", "type": "area" }]),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path("/dna/intent/api/v1/reserve-ip-subpool/slow"))
        .respond_with(ResponseTemplate::new(202).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;
    mount_deletes(&server, 202).await;

    let config = config_for(&server).with_timeout(Duration::from_millis(300));
    let report = Cleanup::new(config).run().await.unwrap();

    let pools = report.family(Family::Pools).unwrap();
    assert!(pools.is_aborted());
    assert_eq!(pools.outcomes.len(), 1);
    assert_eq!(pools.outcomes[0].resource.id, "slow");
    assert_eq!(pools.outcomes[0].status, DeletionStatus::Failed);

    let deletes = delete_paths(&server).await;
    assert!(!deletes.iter().any(|p| p.ends_with("/never")));
    assert!(!deletes.iter().any(|p| p.ends_with("/gp1")));
    assert!(deletes.iter().any(|p| p.ends_with("/areas/a1")));

    let sites = report.family(Family::Sites).unwrap();
    assert_eq!(sites.status, FamilyStatus::Completed);
}
