#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod report;
pub mod types;

// --- 주요 타입 re-export ---
// 각 모듈의 핵심 타입을 크레이트 루트에서 바로 사용할 수 있도록 합니다.

// 에러
pub use error::{CanaryError, ConfigError, ContractError, TransportError};

// 설정
pub use config::CanaryConfig;

// 리포트
pub use report::{RunReport, SCENARIO_ORDER, ScenarioKind, ScenarioReport, Verdict};

// 도메인 타입
pub use types::{
    ApiObject, ApiResponse, DeleteReceipt, ObjectDraft, ObjectPatch, STATUS_CODE_NOT_FOUND,
    STATUS_CODE_SUCCESS,
};
