//! Contract violations surfaced through the fake service.
//!
//! Each test overrides one endpoint of the happy lifecycle and asserts
//! that exactly the affected scenario fails with a useful reason.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use restcanary_core::config::SEED_FIXTURE_PRESENCE;
use restcanary_core::report::{ScenarioKind, Verdict};
use restcanary_lifecycle::{HttpObjectsApi, LifecycleRunner, catalog};

use crate::helpers::{fake_service, payloads};

const OBJECT_ID: &str = "af3c";

async fn drifted_seed_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "1", "name": "Google Pixel 7 Pro", "data": { "color": "Obsidian" } },
        ])))
        .mount(&server)
        .await;
    fake_service::mount_happy_lifecycle(&server, OBJECT_ID).await;
    server
}

#[tokio::test]
async fn server_error_on_list_fails_only_that_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "internal" })))
        .mount(&server)
        .await;
    fake_service::mount_happy_lifecycle(&server, OBJECT_ID).await;

    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.passed, 5);
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 0);
    match &report.scenarios[0].verdict {
        Verdict::Failed(reason) => {
            assert!(reason.contains("expected status 200"));
            assert!(reason.contains("500"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn seed_drift_fails_in_strict_mode() {
    let server = drifted_seed_server().await;

    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.passed, 5);
    assert_eq!(report.failed, 1);
    match &report.scenarios[0].verdict {
        Verdict::Failed(reason) => assert!(reason.contains("field 'name'")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn seed_drift_passes_in_presence_mode() {
    let server = drifted_seed_server().await;

    let mut config = fake_service::config_for(&server);
    config.lifecycle.seed_fixture = SEED_FIXTURE_PRESENCE.to_owned();
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.passed, 6);
    assert_eq!(report.failed, 0);
}

#[tokio::test]
async fn create_without_created_at_skips_downstream_scenarios() {
    let server = MockServer::start().await;

    let draft = catalog::create_draft();
    Mock::given(method("POST"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": OBJECT_ID,
            "name": draft.name,
            "data": draft.data,
        })))
        .mount(&server)
        .await;
    fake_service::mount_happy_lifecycle(&server, OBJECT_ID).await;

    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 4);
    match &report.scenarios[1].verdict {
        Verdict::Failed(reason) => assert!(reason.contains("createdAt")),
        other => panic!("expected Failed, got {other:?}"),
    }
    for scenario in &report.scenarios[2..] {
        assert!(scenario.verdict.is_skipped());
    }
}

#[tokio::test]
async fn create_name_echo_mismatch_is_a_contract_failure() {
    let server = MockServer::start().await;

    let draft = catalog::create_draft();
    Mock::given(method("POST"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": OBJECT_ID,
            "name": "Apple MacBook Pro 17",
            "data": draft.data,
            "createdAt": "2024-11-29T21:57:28.721Z",
        })))
        .mount(&server)
        .await;
    fake_service::mount_happy_lifecycle(&server, OBJECT_ID).await;

    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 4);
    match &report.scenarios[1].verdict {
        Verdict::Failed(reason) => assert!(reason.contains("field 'name'")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_deletion_message_fails_delete_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/objects/{OBJECT_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "gone" })))
        .mount(&server)
        .await;
    fake_service::mount_happy_lifecycle(&server, OBJECT_ID).await;

    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.passed, 5);
    assert_eq!(report.failed, 1);
    let delete = report.scenarios.last().unwrap();
    assert_eq!(delete.scenario, ScenarioKind::DeleteObject);
    match &delete.verdict {
        Verdict::Failed(reason) => assert!(reason.contains("field 'message'")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn object_retrievable_after_delete_fails_the_run() {
    let server = MockServer::start().await;
    // GET by id always answers 200, so the delete verification sees a
    // live object instead of a 404.
    Mock::given(method("GET"))
        .and(path(format!("/objects/{OBJECT_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::read_body(OBJECT_ID)))
        .mount(&server)
        .await;
    fake_service::mount_happy_lifecycle(&server, OBJECT_ID).await;

    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.passed, 5);
    assert_eq!(report.failed, 1);
    match &report.scenarios[5].verdict {
        Verdict::Failed(reason) => assert!(reason.contains("still retrievable")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_object_list_is_a_contract_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    fake_service::mount_happy_lifecycle(&server, OBJECT_ID).await;

    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.passed, 5);
    assert_eq!(report.failed, 1);
    match &report.scenarios[0].verdict {
        Verdict::Failed(reason) => assert!(reason.contains("non-empty collection")),
        other => panic!("expected Failed, got {other:?}"),
    }
}
