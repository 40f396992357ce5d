//! 라이프사이클 러너 -- 여섯 시나리오의 순차 실행과 런 집계
//!
//! [`LifecycleRunner`]는 [`SCENARIO_ORDER`]의 고정 순서로 시나리오를
//! 실행하고 [`RunReport`]를 돌려줍니다. 시나리오 간에 흐르는 상태는
//! Create가 반환한 [`CreatedObject`] 핸들 하나뿐입니다.
//!
//! 실행 규칙:
//! - List 실패는 Create를 막지 않습니다 (서로 독립적인 시나리오).
//! - Create가 id를 만들지 못하면 id가 필요한 시나리오는 모두 건너뜁니다.
//! - fail_fast가 켜지면 첫 실패 이후의 모든 시나리오를 건너뜁니다.
//! - 재시도는 없습니다. 각 시나리오는 정확히 한 번 실행됩니다.

use std::future::Future;
use std::time::Instant;

use tracing::{error, info, warn};

use restcanary_core::config::{CanaryConfig, SEED_FIXTURE_STRICT};
use restcanary_core::error::CanaryError;
use restcanary_core::report::{RunReport, SCENARIO_ORDER, ScenarioKind, ScenarioReport, Verdict};

use crate::api::ObjectsApi;
use crate::checks::{self, CreatedObject};

/// 건너뜀 사유: fail_fast 중단
const SKIP_REASON_HALTED: &str = "halted after first failure";
/// 건너뜀 사유: Create가 오브젝트 id를 만들지 못함
const SKIP_REASON_NO_OBJECT: &str = "create did not produce an object id";

/// CRUD 라이프사이클 러너
///
/// 하나의 [`ObjectsApi`] 구현 위에서 여섯 시나리오를 순서대로 실행합니다.
/// [`run`](Self::run)은 에러를 반환하지 않습니다. 전송 실패를 포함한
/// 모든 실패는 해당 시나리오의 Failed 판정으로 리포트에 기록됩니다.
pub struct LifecycleRunner<A: ObjectsApi> {
    api: A,
    base_url: String,
    strict_seed: bool,
    fail_fast: bool,
}

impl<A: ObjectsApi> LifecycleRunner<A> {
    /// 설정으로부터 러너를 생성합니다.
    pub fn new(api: A, config: &CanaryConfig) -> Self {
        Self {
            api,
            base_url: config.service.base_url.clone(),
            strict_seed: config.lifecycle.seed_fixture == SEED_FIXTURE_STRICT,
            fail_fast: config.lifecycle.fail_fast,
        }
    }

    /// 여섯 시나리오를 순서대로 실행하고 집계 리포트를 반환합니다.
    pub async fn run(&self) -> RunReport {
        let run_started = Instant::now();
        let mut report = RunReport::new(self.base_url.clone());
        let mut halted = false;

        info!(
            run_id = %report.run_id,
            base_url = %self.base_url,
            strict_seed = self.strict_seed,
            fail_fast = self.fail_fast,
            "lifecycle run started"
        );

        self.run_step(
            &mut report,
            &mut halted,
            ScenarioKind::ListObjects,
            checks::check_list_objects(&self.api, self.strict_seed),
        )
        .await;

        let halted_before_create = halted;
        let created = self.run_create_step(&mut report, &mut halted).await;

        match &created {
            Some(object) => {
                self.run_step(
                    &mut report,
                    &mut halted,
                    ScenarioKind::ReadObject,
                    checks::check_read_object(&self.api, object),
                )
                .await;
                self.run_step(
                    &mut report,
                    &mut halted,
                    ScenarioKind::ReplaceObject,
                    checks::check_replace_object(&self.api, object),
                )
                .await;
                self.run_step(
                    &mut report,
                    &mut halted,
                    ScenarioKind::AmendObject,
                    checks::check_amend_object(&self.api, object),
                )
                .await;
                self.run_step(
                    &mut report,
                    &mut halted,
                    ScenarioKind::DeleteObject,
                    checks::check_delete_object(&self.api, object),
                )
                .await;
            }
            None => {
                let reason = if halted_before_create {
                    SKIP_REASON_HALTED
                } else {
                    SKIP_REASON_NO_OBJECT
                };
                for kind in SCENARIO_ORDER {
                    if kind.requires_created_object() {
                        report.push(Self::skipped_report(kind, reason));
                    }
                }
            }
        }

        report.duration_ms = Self::elapsed_ms(run_started);
        info!(
            run_id = %report.run_id,
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped,
            duration_ms = report.duration_ms,
            verdict = %report.overall(),
            "lifecycle run finished"
        );

        report
    }

    /// 단일 시나리오를 실행하고 결과를 리포트에 추가합니다.
    ///
    /// 이미 중단된 상태면 실행하지 않고 건너뜀으로 기록합니다.
    async fn run_step<F>(
        &self,
        report: &mut RunReport,
        halted: &mut bool,
        kind: ScenarioKind,
        check: F,
    ) where
        F: Future<Output = Result<(), CanaryError>>,
    {
        if *halted {
            report.push(Self::skipped_report(kind, SKIP_REASON_HALTED));
            return;
        }

        let started = Instant::now();
        match check.await {
            Ok(()) => {
                let duration_ms = Self::elapsed_ms(started);
                info!(scenario = %kind, duration_ms, "scenario passed");
                report.push(ScenarioReport {
                    scenario: kind,
                    verdict: Verdict::Passed,
                    duration_ms,
                    detail: None,
                });
            }
            Err(e) => {
                let duration_ms = Self::elapsed_ms(started);
                error!(scenario = %kind, duration_ms, error = %e, "scenario failed");
                if self.fail_fast {
                    *halted = true;
                }
                report.push(ScenarioReport {
                    scenario: kind,
                    verdict: Verdict::Failed(e.to_string()),
                    duration_ms,
                    detail: None,
                });
            }
        }
    }

    /// Create 시나리오를 실행하고 생성된 오브젝트 핸들을 반환합니다.
    ///
    /// 다른 시나리오와 달리 성공 시 detail에 오브젝트 id를 기록합니다.
    async fn run_create_step(
        &self,
        report: &mut RunReport,
        halted: &mut bool,
    ) -> Option<CreatedObject> {
        let kind = ScenarioKind::CreateObject;
        if *halted {
            report.push(Self::skipped_report(kind, SKIP_REASON_HALTED));
            return None;
        }

        let started = Instant::now();
        match checks::check_create_object(&self.api).await {
            Ok(object) => {
                let duration_ms = Self::elapsed_ms(started);
                info!(scenario = %kind, duration_ms, object_id = %object.id, "scenario passed");
                report.push(ScenarioReport {
                    scenario: kind,
                    verdict: Verdict::Passed,
                    duration_ms,
                    detail: Some(format!("object id {}", object.id)),
                });
                Some(object)
            }
            Err(e) => {
                let duration_ms = Self::elapsed_ms(started);
                error!(scenario = %kind, duration_ms, error = %e, "scenario failed");
                if self.fail_fast {
                    *halted = true;
                }
                report.push(ScenarioReport {
                    scenario: kind,
                    verdict: Verdict::Failed(e.to_string()),
                    duration_ms,
                    detail: None,
                });
                None
            }
        }
    }

    fn skipped_report(kind: ScenarioKind, reason: &str) -> ScenarioReport {
        warn!(scenario = %kind, reason, "scenario skipped");
        ScenarioReport {
            scenario: kind,
            verdict: Verdict::Skipped(reason.to_owned()),
            duration_ms: 0,
            detail: None,
        }
    }

    fn elapsed_ms(started: Instant) -> u64 {
        u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
