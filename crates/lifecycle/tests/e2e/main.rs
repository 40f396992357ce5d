//! E2E integration tests for restcanary-lifecycle.
//!
//! These tests drive the full lifecycle runner against a wiremock fake
//! of the objects service, covering the happy path, contract violations,
//! and transport failures. The `live_service` scenarios talk to the real
//! deployment and are ignored by default.
//!
//! # Test Structure
//!
//! - `helpers/` -- Shared test utilities (fake service setup, response payloads)
//! - `scenarios/` -- Test files organized by scenario
//!
//! # Running
//!
//! ```bash
//! cargo test -p restcanary-lifecycle --test e2e
//! ```

mod helpers;
mod scenarios;
