//! Shared E2E test helpers.
//!
//! Provides a wiremock-backed fake of the objects service and the
//! canonical response payloads each scenario expects.

pub mod fake_service;
pub mod payloads;
