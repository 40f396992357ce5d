#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`api`]: Objects API abstraction (`ObjectsApi` trait, `HttpObjectsApi`)
//! - [`catalog`]: Canonical request payloads and seed fixture constants
//! - [`contract`]: Response expectation helpers shared by all checks
//! - [`checks`]: One check per CRUD scenario (`CreatedObject` handle)
//! - [`runner`]: Sequential scenario execution (`LifecycleRunner`)
//!
//! # Architecture
//!
//! ```text
//! LifecycleRunner.run()
//!        |
//!   checks::check_* (one per scenario, in fixed order)
//!        |
//!   contract::expect_* (status / field assertions)
//!        |
//!   ObjectsApi trait ---- HttpObjectsApi --> remote service
//!        |
//!   RunReport (per-scenario verdicts + aggregate)
//! ```

pub mod api;
pub mod catalog;
pub mod checks;
pub mod contract;
pub mod runner;

// --- Public API Re-exports ---

// Runner (main orchestrator)
pub use runner::LifecycleRunner;

// Objects API
pub use api::{HttpObjectsApi, ObjectsApi};

// Scenario checks
pub use checks::{
    CreatedObject, check_amend_object, check_create_object, check_delete_object,
    check_list_objects, check_read_object, check_replace_object,
};
