//! 설정 관리 -- restcanary.toml 파싱 및 런타임 설정
//!
//! [`CanaryConfig`]가 세 섹션(`[general]`/`[service]`/`[lifecycle]`)을
//! 모두 담습니다. 값의 우선순위는 CLI 플래그 > 환경변수 > 설정 파일 >
//! 기본값 순이며, 이 모듈은 파일과 환경변수 계층을 담당합니다.
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), restcanary_core::error::CanaryError> {
//! use restcanary_core::config::CanaryConfig;
//!
//! // 파일 로드 + RESTCANARY_* 환경변수 오버라이드 + 검증
//! let config = CanaryConfig::load("restcanary.toml").await?;
//! assert!(config.service.timeout_secs > 0);
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CanaryError, ConfigError};

/// 시드 픽스처 검증 모드 값
pub const SEED_FIXTURE_STRICT: &str = "strict";
/// 시드 픽스처를 필드 존재 여부만 확인하는 모드 값
pub const SEED_FIXTURE_PRESENCE: &str = "presence";

/// validate()가 허용하는 로그 레벨
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
/// validate()가 허용하는 로그 형식
const LOG_FORMATS: [&str; 2] = ["json", "pretty"];

/// Restcanary 통합 설정
///
/// `restcanary.toml` 파일의 최상위 구조를 나타냅니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanaryConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 대상 서비스 설정
    #[serde(default)]
    pub service: ServiceConfig,
    /// 라이프사이클 실행 설정
    #[serde(default)]
    pub lifecycle: LifecycleConfig,
}

impl CanaryConfig {
    /// TOML 파일을 읽고 환경변수 오버라이드와 검증까지 마친 설정을 반환합니다.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CanaryError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 파일에서 설정을 읽습니다. 환경변수 오버라이드는 적용하지 않습니다.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, CanaryError> {
        let path = path.as_ref();
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            Err(e) => return Err(CanaryError::Io(e)),
        };

        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열을 설정으로 역직렬화합니다.
    pub fn parse(toml_str: &str) -> Result<Self, CanaryError> {
        toml::from_str(toml_str).map_err(|e| {
            CanaryError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// `RESTCANARY_{SECTION}_{FIELD}` 환경변수로 설정값을 덮어씁니다.
    ///
    /// 예: `RESTCANARY_SERVICE_BASE_URL=http://localhost:8080/`
    /// 해석할 수 없는 값은 경고 로그를 남기고 무시합니다.
    pub fn apply_env_overrides(&mut self) {
        env_override(&mut self.general.log_level, "RESTCANARY_GENERAL_LOG_LEVEL");
        env_override(&mut self.general.log_format, "RESTCANARY_GENERAL_LOG_FORMAT");

        env_override(&mut self.service.base_url, "RESTCANARY_SERVICE_BASE_URL");
        env_override(&mut self.service.user_agent, "RESTCANARY_SERVICE_USER_AGENT");
        env_override_parsed(
            &mut self.service.timeout_secs,
            "RESTCANARY_SERVICE_TIMEOUT_SECS",
        );
        env_override_parsed(&mut self.service.log_bodies, "RESTCANARY_SERVICE_LOG_BODIES");

        env_override(
            &mut self.lifecycle.seed_fixture,
            "RESTCANARY_LIFECYCLE_SEED_FIXTURE",
        );
        env_override_parsed(
            &mut self.lifecycle.fail_fast,
            "RESTCANARY_LIFECYCLE_FAIL_FAST",
        );
    }

    /// 설정값이 허용 범위 안인지 확인합니다.
    ///
    /// 파일 로드 직후와 환경변수/CLI 오버라이드 이후 양쪽에서 호출됩니다.
    pub fn validate(&self) -> Result<(), CanaryError> {
        if !LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(invalid_value(
                "general.log_level",
                format!("expected one of: {}", LOG_LEVELS.join(", ")),
            ));
        }
        if !LOG_FORMATS.contains(&self.general.log_format.as_str()) {
            return Err(invalid_value(
                "general.log_format",
                format!("expected one of: {}", LOG_FORMATS.join(", ")),
            ));
        }

        if self.service.base_url.is_empty() {
            return Err(invalid_value("service.base_url", "must not be empty"));
        }
        if !self.service.base_url.starts_with("http://")
            && !self.service.base_url.starts_with("https://")
        {
            return Err(invalid_value(
                "service.base_url",
                "must start with http:// or https://",
            ));
        }

        if self.service.timeout_secs == 0 {
            return Err(invalid_value(
                "service.timeout_secs",
                "must be greater than zero",
            ));
        }

        if self.lifecycle.seed_fixture != SEED_FIXTURE_STRICT
            && self.lifecycle.seed_fixture != SEED_FIXTURE_PRESENCE
        {
            return Err(invalid_value(
                "lifecycle.seed_fixture",
                format!("expected one of: {SEED_FIXTURE_STRICT}, {SEED_FIXTURE_PRESENCE}"),
            ));
        }

        Ok(())
    }
}

fn invalid_value(field: &str, reason: impl Into<String>) -> CanaryError {
    ConfigError::InvalidValue {
        field: field.to_owned(),
        reason: reason.into(),
    }
    .into()
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨: trace, debug, info, warn, error 중 하나
    pub log_level: String,
    /// 로그 출력 형식: json 또는 pretty
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "json".to_owned(),
        }
    }
}

/// 대상 서비스 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// 서비스 베이스 URL
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
    /// User-Agent 헤더 값
    pub user_agent: String,
    /// 응답 본문을 로그에 포함할지 여부 (진단용)
    pub log_bodies: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://restful-api.dev/".to_owned(),
            timeout_secs: 30,
            user_agent: concat!("restcanary/", env!("CARGO_PKG_VERSION")).to_owned(),
            log_bodies: false,
        }
    }
}

/// 라이프사이클 실행 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// 시드 픽스처 검증 모드 (strict, presence)
    ///
    /// strict는 목록 첫 오브젝트의 id/name/data를 리터럴 비교하고,
    /// presence는 세 필드의 존재만 확인합니다.
    pub seed_fixture: String,
    /// 첫 실패 시 나머지 시나리오를 건너뛸지 여부
    pub fail_fast: bool,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            seed_fixture: SEED_FIXTURE_STRICT.to_owned(),
            fail_fast: false,
        }
    }
}

// 환경변수 오버라이드 헬퍼

/// 환경변수가 있으면 문자열 값을 그대로 덮어씁니다.
fn env_override(target: &mut String, key: &str) {
    if let Ok(value) = std::env::var(key) {
        *target = value;
    }
}

/// 환경변수가 있으면 `FromStr`로 해석해 덮어씁니다. 해석 실패는 무시합니다.
fn env_override_parsed<T: FromStr>(target: &mut T, key: &str) {
    let Ok(raw) = std::env::var(key) else {
        return;
    };
    match raw.parse::<T>() {
        Ok(value) => *target = value,
        Err(_) => {
            warn!(key, raw = raw.as_str(), "unparseable env override, keeping configured value");
        }
    }
}
