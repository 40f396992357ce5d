//! Transport-level failures: unreachable service, unreadable bodies,
//! and endpoints that vanish mid-run.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use restcanary_core::config::{CanaryConfig, ServiceConfig};
use restcanary_core::report::Verdict;
use restcanary_lifecycle::{HttpObjectsApi, LifecycleRunner, check_list_objects};

use crate::helpers::{fake_service, payloads};

#[tokio::test]
async fn unreachable_service_fails_list_and_create() {
    // Port 9 (discard) refuses connections immediately.
    let config = CanaryConfig {
        service: ServiceConfig {
            base_url: "http://127.0.0.1:9/".to_owned(),
            timeout_secs: 2,
            ..ServiceConfig::default()
        },
        ..CanaryConfig::default()
    };
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.passed, 0);
    assert_eq!(report.failed, 2);
    assert_eq!(report.skipped, 4);
    match &report.scenarios[0].verdict {
        Verdict::Failed(reason) => assert!(reason.contains("transport error")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();

    let err = check_list_objects(&api, true).await.unwrap_err();
    assert!(err.to_string().contains("unreadable body"));
}

#[tokio::test]
async fn missing_endpoints_fail_individually_without_halting() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::seed_list_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::created_body("77")))
        .mount(&server)
        .await;

    // Everything after create hits unmatched routes and gets wiremock's
    // bare 404, which the checks report as an unexpected status.
    let config = fake_service::config_for(&server);
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.passed, 2);
    assert_eq!(report.failed, 4);
    assert_eq!(report.skipped, 0);
}

#[tokio::test]
async fn fail_fast_stops_before_create_reaches_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "internal" })))
        .mount(&server)
        .await;
    // The runner must never POST once the first failure halts the run.
    Mock::given(method("POST"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::created_body("9")))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = fake_service::config_for(&server);
    config.lifecycle.fail_fast = true;
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.passed, 0);
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 5);
}
