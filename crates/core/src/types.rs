//! 도메인 타입 -- 원격 API 오브젝트의 와이어 모델
//!
//! 대상 서비스가 주고받는 리소스 오브젝트와 요청/응답 본문을 정의합니다.
//! 라이프사이클 체크와 CLI가 이 타입들로 데이터를 교환합니다.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// --- 상태 코드 상수 ---

/// 모든 CRUD 작업이 성공 시 반환하는 상태 코드
pub const STATUS_CODE_SUCCESS: u16 = 200;
/// 존재하지 않는 오브젝트 조회 시 반환되는 상태 코드
pub const STATUS_CODE_NOT_FOUND: u16 = 404;

/// 리소스 오브젝트
///
/// 서비스가 반환하는 오브젝트의 와이어 형식입니다.
/// `data`는 서비스의 시드 레코드 일부가 `null`을 반환하므로 Option입니다.
/// 타임스탬프는 서버가 생성/수정 시에만 채우므로 Option이며,
/// 계약 검증은 값이 아니라 존재 여부만 확인합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiObject {
    /// 서버가 할당한 식별자
    pub id: String,
    /// 오브젝트 이름
    pub name: String,
    /// 임의 키-값 속성 (없으면 null)
    #[serde(default)]
    pub data: Option<serde_json::Map<String, Value>>,
    /// 생성 시각 (POST 응답에만 존재)
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// 수정 시각 (PUT/PATCH 응답에만 존재)
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ApiObject {
    /// data 맵에서 특정 키의 값을 조회합니다.
    pub fn data_field(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|d| d.get(key))
    }
}

impl fmt::Display for ApiObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id={}) data_fields={}",
            self.name,
            self.id,
            self.data.as_ref().map_or(0, serde_json::Map::len),
        )
    }
}

/// 오브젝트 생성/교체 요청 본문
///
/// POST(생성)와 PUT(전체 교체)이 같은 형식을 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDraft {
    /// 오브젝트 이름
    pub name: String,
    /// 임의 키-값 속성
    pub data: serde_json::Map<String, Value>,
}

impl ObjectDraft {
    /// 이름과 속성 맵으로 새 요청 본문을 생성합니다.
    pub fn new(name: impl Into<String>, data: serde_json::Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

impl fmt::Display for ObjectDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} data_fields={}", self.name, self.data.len())
    }
}

/// 오브젝트 부분 수정 요청 본문 (PATCH)
///
/// 존재하는 필드만 직렬화하여 전송합니다.
/// 전송하지 않은 필드는 서버에서 변경되지 않아야 합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectPatch {
    /// 변경할 이름 (없으면 유지)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 변경할 속성 맵 (없으면 유지)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Map<String, Value>>,
}

impl ObjectPatch {
    /// 이름만 변경하는 패치를 생성합니다.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            data: None,
        }
    }
}

/// 삭제 응답 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteReceipt {
    /// 서버의 삭제 확인 메시지
    pub message: String,
}

impl fmt::Display for DeleteReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// 단일 API 호출의 결과
///
/// 전송 계층은 상태 코드와 본문을 그대로 전달하고,
/// 기대 상태와의 비교는 계약 검증 계층이 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP 상태 코드
    pub status: u16,
    /// JSON 응답 본문 (본문이 없으면 null)
    pub body: Value,
}

impl ApiResponse {
    /// 상태 코드와 본문으로 응답을 생성합니다.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)
    }
}
