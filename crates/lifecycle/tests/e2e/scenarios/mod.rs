//! E2E test scenarios.
//!
//! Each module drives the runner against the wiremock fake, except
//! `live_service` which talks to the real deployment and is ignored by
//! default.

mod contract_violations;
mod happy_path;
mod live_service;
mod service_failures;
