//! 실행 리포트 -- 시나리오별 판정과 런 단위 집계
//!
//! 러너는 시나리오마다 [`ScenarioReport`]를 생성하고,
//! [`RunReport`]가 전체 런의 집계(통과/실패/건너뜀 수, 종합 판정)를 담습니다.
//! 종합 판정은 최악값 규칙을 따릅니다: 하나라도 실패하면 런 전체가 실패입니다.

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// 라이프사이클 시나리오 종류
///
/// 배열 순서가 곧 실행 순서입니다. Create 이후의 시나리오는
/// Create가 반환한 오브젝트 id에 의존합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    /// GET /objects -- 시드 오브젝트 목록 조회
    ListObjects,
    /// POST /objects -- 오브젝트 생성
    CreateObject,
    /// GET /objects/{id} -- 생성된 오브젝트 조회
    ReadObject,
    /// PUT /objects/{id} -- 전체 교체
    ReplaceObject,
    /// PATCH /objects/{id} -- 부분 수정
    AmendObject,
    /// DELETE /objects/{id} + 삭제 확인 조회
    DeleteObject,
}

/// 시나리오 실행 순서
pub const SCENARIO_ORDER: [ScenarioKind; 6] = [
    ScenarioKind::ListObjects,
    ScenarioKind::CreateObject,
    ScenarioKind::ReadObject,
    ScenarioKind::ReplaceObject,
    ScenarioKind::AmendObject,
    ScenarioKind::DeleteObject,
];

impl ScenarioKind {
    /// 로그와 리포트에 쓰이는 시나리오 이름
    pub const fn name(self) -> &'static str {
        match self {
            Self::ListObjects => "list-objects",
            Self::CreateObject => "create-object",
            Self::ReadObject => "read-object",
            Self::ReplaceObject => "replace-object",
            Self::AmendObject => "amend-object",
            Self::DeleteObject => "delete-object",
        }
    }

    /// Create가 만든 오브젝트 id를 필요로 하는 시나리오인지 여부
    ///
    /// Create가 실패하면 이 시나리오들은 실행할 수 없어 건너뜁니다.
    pub const fn requires_created_object(self) -> bool {
        matches!(
            self,
            Self::ReadObject | Self::ReplaceObject | Self::AmendObject | Self::DeleteObject
        )
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 시나리오 판정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// 모든 검증 통과
    Passed,
    /// 계약 위반 또는 전송 실패
    Failed(String),
    /// 선행 시나리오 실패로 실행하지 못함
    Skipped(String),
}

impl Verdict {
    /// 통과 여부
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// 실패 여부
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// 건너뜀 여부
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "PASS"),
            Self::Failed(reason) => write!(f, "FAIL ({reason})"),
            Self::Skipped(reason) => write!(f, "SKIP ({reason})"),
        }
    }
}

/// 단일 시나리오의 실행 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// 시나리오 종류
    pub scenario: ScenarioKind,
    /// 판정
    pub verdict: Verdict,
    /// 실행 소요 시간 (밀리초)
    pub duration_ms: u64,
    /// 추가 정보 (생성된 id 등)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.scenario, self.verdict)
    }
}

/// 전체 런의 집계 리포트
///
/// 런마다 UUID v4 run_id가 부여되어 로그와 리포트를 연결합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// 런 고유 ID (UUID v4)
    pub run_id: String,
    /// 대상 서비스 베이스 URL
    pub base_url: String,
    /// 런 시작 시각
    pub started_at: SystemTime,
    /// 전체 소요 시간 (밀리초)
    pub duration_ms: u64,
    /// 시나리오별 결과 (실행 순서대로)
    pub scenarios: Vec<ScenarioReport>,
    /// 통과한 시나리오 수
    pub passed: usize,
    /// 실패한 시나리오 수
    pub failed: usize,
    /// 건너뛴 시나리오 수
    pub skipped: usize,
}

impl RunReport {
    /// 빈 리포트를 생성합니다. 시나리오 결과는 [`push`](Self::push)로 추가합니다.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            base_url: base_url.into(),
            started_at: SystemTime::now(),
            duration_ms: 0,
            scenarios: Vec::new(),
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }

    /// 시나리오 결과를 추가하고 카운터를 갱신합니다.
    pub fn push(&mut self, report: ScenarioReport) {
        match report.verdict {
            Verdict::Passed => self.passed += 1,
            Verdict::Failed(_) => self.failed += 1,
            Verdict::Skipped(_) => self.skipped += 1,
        }
        self.scenarios.push(report);
    }

    /// 런 전체의 종합 판정
    pub fn overall(&self) -> Verdict {
        aggregate_verdict(&self.scenarios)
    }

    /// 실패한 시나리오가 하나도 없는지 여부
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// 시나리오 결과들을 최악값 규칙으로 집계합니다.
///
/// 하나라도 Failed면 전체가 Failed이며, 실패 사유를 모두 이어 붙입니다.
/// 실패 없이 Skipped만 있는 경우는 발생하지 않지만 방어적으로 Skipped를 반환합니다.
pub fn aggregate_verdict(scenarios: &[ScenarioReport]) -> Verdict {
    let mut reasons = Vec::new();
    let mut any_skipped = false;

    for report in scenarios {
        match &report.verdict {
            Verdict::Passed => {}
            Verdict::Failed(reason) => {
                reasons.push(format!("{}: {}", report.scenario, reason));
            }
            Verdict::Skipped(_) => {
                any_skipped = true;
            }
        }
    }

    if !reasons.is_empty() {
        Verdict::Failed(reasons.join("; "))
    } else if any_skipped {
        Verdict::Skipped("some scenarios were skipped".to_owned())
    } else {
        Verdict::Passed
    }
}
