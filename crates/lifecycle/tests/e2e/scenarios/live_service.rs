//! Scenarios against the real deployment.
//!
//! Ignored by default so the suite stays hermetic; run with:
//!
//! ```bash
//! cargo test -p restcanary-lifecycle --test e2e -- --ignored
//! ```
//!
//! Each run creates and deletes one object, so repeated runs leave no
//! residue on the service.

use restcanary_core::config::CanaryConfig;
use restcanary_core::report::Verdict;
use restcanary_lifecycle::{HttpObjectsApi, LifecycleRunner, check_list_objects};

#[tokio::test]
#[ignore = "requires network access to restful-api.dev"]
async fn full_lifecycle_against_live_service() {
    let config = CanaryConfig::default();
    let api = HttpObjectsApi::from_config(&config.service).unwrap();
    let report = LifecycleRunner::new(api, &config).run().await;

    assert_eq!(report.overall(), Verdict::Passed, "report: {report:?}");
    assert_eq!(report.passed, 6);
}

#[tokio::test]
#[ignore = "requires network access to restful-api.dev"]
async fn live_seed_list_satisfies_presence_checks() {
    let config = CanaryConfig::default();
    let api = HttpObjectsApi::from_config(&config.service).unwrap();

    check_list_objects(&api, false).await.unwrap();
}
