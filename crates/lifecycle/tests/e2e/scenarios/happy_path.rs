//! Full lifecycle happy path against the fake service.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use restcanary_core::report::{SCENARIO_ORDER, ScenarioKind, Verdict};
use restcanary_lifecycle::{
    CreatedObject, HttpObjectsApi, LifecycleRunner, catalog, check_amend_object,
    check_create_object, check_list_objects,
};

use crate::helpers::{fake_service, payloads};

const OBJECT_ID: &str = "ff8081818a4bbfe2018a4c8bcbd50017";

#[tokio::test]
async fn full_lifecycle_passes_against_fake_service() {
    let server = MockServer::start().await;
    fake_service::mount_happy_lifecycle(&server, OBJECT_ID).await;

    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.passed, 6, "overall: {}", report.overall());
    assert_eq!(report.failed, 0);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.overall(), Verdict::Passed);

    let kinds: Vec<ScenarioKind> = report.scenarios.iter().map(|s| s.scenario).collect();
    assert_eq!(kinds, SCENARIO_ORDER);
}

#[tokio::test]
async fn create_detail_reports_assigned_id() {
    let server = MockServer::start().await;
    fake_service::mount_happy_lifecycle(&server, OBJECT_ID).await;

    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    let create = &report.scenarios[1];
    assert_eq!(create.scenario, ScenarioKind::CreateObject);
    assert!(create.verdict.is_passed());
    assert!(create.detail.as_deref().unwrap().contains(OBJECT_ID));
}

#[tokio::test]
async fn requests_carry_configured_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/objects"))
        .and(header("user-agent", "restcanary-e2e/0.0-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::seed_list_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = fake_service::config_for(&server);
    config.service.user_agent = "restcanary-e2e/0.0-test".to_owned();
    let api = HttpObjectsApi::from_config(&config.service).unwrap();

    check_list_objects(&api, true).await.unwrap();
}

#[tokio::test]
async fn create_posts_the_canonical_payload() {
    let server = MockServer::start().await;

    // Only the exact canonical body matches; anything else would 404.
    Mock::given(method("POST"))
        .and(path("/objects"))
        .and(body_json(catalog::create_draft()))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::created_body("13")))
        .expect(1)
        .mount(&server)
        .await;

    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();

    let created = check_create_object(&api).await.unwrap();
    assert_eq!(created.id, "13");
}

#[tokio::test]
async fn amend_sends_only_the_name_field() {
    let server = MockServer::start().await;

    // Exact body match proves the patch carries no data key.
    Mock::given(method("PATCH"))
        .and(path("/objects/13"))
        .and(body_json(json!({ "name": catalog::AMEND_NAME })))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::amended_body("13")))
        .expect(1)
        .mount(&server)
        .await;

    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let created = CreatedObject {
        id: "13".to_owned(),
    };

    check_amend_object(&api, &created).await.unwrap();
}
