//! Wiremock-backed fake of the objects service.
//!
//! [`mount_happy_lifecycle`] wires every endpoint a clean run touches.
//! The GET-by-id mock serves a single response and then stops matching,
//! so the delete verification falls through to the 404 mounted last.

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use restcanary_core::config::{CanaryConfig, ServiceConfig};
use restcanary_lifecycle::catalog;

use super::payloads;

/// Builds a config pointing the runner at the mock server.
pub fn config_for(server: &MockServer) -> CanaryConfig {
    CanaryConfig {
        service: ServiceConfig {
            base_url: server.uri(),
            timeout_secs: 5,
            ..ServiceConfig::default()
        },
        ..CanaryConfig::default()
    }
}

/// Mounts the full happy-path lifecycle for one object id.
///
/// Overrides must be mounted before calling this: wiremock gives
/// precedence to the mock mounted first among those that match.
pub async fn mount_happy_lifecycle(server: &MockServer, id: &str) {
    let object_path = format!("/objects/{id}");

    Mock::given(method("GET"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::seed_list_body()))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/objects"))
        .and(body_json(catalog::create_draft()))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::created_body(id)))
        .mount(server)
        .await;

    // Serves the read scenario once, then the 404 below takes over.
    Mock::given(method("GET"))
        .and(path(object_path.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::read_body(id)))
        .up_to_n_times(1)
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path(object_path.clone()))
        .and(body_json(catalog::replacement_draft()))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::replaced_body(id)))
        .mount(server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(object_path.clone()))
        .and(body_json(catalog::rename_patch()))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::amended_body(id)))
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(object_path.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(payloads::delete_body(id)))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(object_path))
        .respond_with(ResponseTemplate::new(404).set_body_json(payloads::not_found_body(id)))
        .mount(server)
        .await;
}
