//! 에러 타입 -- 도메인별 에러 정의

/// Restcanary 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum CanaryError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP 전송 에러
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// API 계약 위반
    #[error("contract violation: {0}")]
    Contract(#[from] ContractError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// HTTP 전송 에러
///
/// 원격 서비스에 도달하지 못했거나 응답 본문을 읽지 못한 경우입니다.
/// HTTP 에러 상태 코드(4xx/5xx)는 전송 에러가 아니라 계약 검증 대상입니다.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP 클라이언트 생성 실패
    #[error("http client build failed: {0}")]
    ClientBuild(String),

    /// 유효하지 않은 URL
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// 요청 전송 실패 (연결 거부, 타임아웃 등)
    #[error("{method} {url} failed: {reason}")]
    RequestFailed {
        method: String,
        url: String,
        reason: String,
    },

    /// 응답 본문 디코딩 실패
    #[error("{method} {url} returned an unreadable body: {reason}")]
    BodyDecode {
        method: String,
        url: String,
        reason: String,
    },
}

/// API 계약 위반 에러
///
/// 각 variant는 시나리오명과 기대/실제 값을 함께 담아
/// 한 줄 진단 메시지로 출력할 수 있습니다.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// 기대하지 않은 HTTP 상태 코드
    #[error("{scenario}: expected status {expected}, got {actual}")]
    UnexpectedStatus {
        scenario: String,
        expected: u16,
        actual: u16,
    },

    /// 응답 본문에 필수 필드가 없음
    #[error("{scenario}: response body is missing field '{field}'")]
    MissingField { scenario: String, field: String },

    /// 응답 본문의 필드 값이 기대와 다름
    #[error("{scenario}: field '{field}' expected {expected}, got {actual}")]
    FieldMismatch {
        scenario: String,
        field: String,
        expected: String,
        actual: String,
    },

    /// 비어 있으면 안 되는 컬렉션이 비어 있음
    #[error("{scenario}: expected a non-empty collection")]
    EmptyCollection { scenario: String },

    /// 삭제된 리소스가 여전히 조회됨
    #[error("object {id} is still retrievable after deletion (status {status})")]
    StillRetrievable { id: String, status: u16 },
}
