// 목적:
// - 갱신 주기 하나를 실행하는 핵심 스케줄러를 제공한다.
//
// 설명:
// - 카탈로그 스냅샷 조회 -> 레코드별 기한 판정 -> 갱신 호출 -> 결과 보고 순서로 처리한다.
// - 카탈로그 조회 실패만 호출자에게 전파하고, 레코드 단위 실패는 경계 함수에서
//   RefreshOutcome으로 변환해 다음 레코드로 진행한다.
// - 레코드는 한 번에 하나씩 순차 처리한다(하위 시스템 부하 제한).
//
// 디자인 패턴:
// - 파이프라인(Pipeline) + 결과 변환 경계(Outcome Boundary).
//
// 참조:
// - src_rs/core/due_policy.rs
// - src_rs/core/collaborators.rs
// - src_rs/core/event_reporter.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::collaborators::{EventReporter, KnowledgeBaseCatalog, KnowledgeBaseRefresher};
use crate::core::due_policy::{due_status, DueStatus, SkipReason};
use crate::core::errors::CoreResult;
use crate::core::event_reporter::{
    failure_properties, format_refresh_timestamp, success_properties, REFRESH_FAILURE_EVENT,
    REFRESH_SUCCESS_EVENT,
};
use crate::core::record::{KnowledgeBaseField, KnowledgeBaseRecord};

/// 레코드 하나에 대한 갱신 시도 결과다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Success { refreshed_at: DateTime<Utc> },
    Failure { message: String },
}

/// 한 주기의 처리 집계다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub total: usize,
    pub skipped: usize,
    pub succeeded: usize,
    pub failed: usize,
}

pub struct RefreshScheduler {
    catalog: Arc<dyn KnowledgeBaseCatalog>,
    refresher: Arc<dyn KnowledgeBaseRefresher>,
    reporter: Arc<dyn EventReporter>,
}

impl RefreshScheduler {
    pub fn new(
        catalog: Arc<dyn KnowledgeBaseCatalog>,
        refresher: Arc<dyn KnowledgeBaseRefresher>,
        reporter: Arc<dyn EventReporter>,
    ) -> Self {
        Self {
            catalog,
            refresher,
            reporter,
        }
    }

    /// 현재 UTC 시각 기준으로 갱신 주기를 한 번 실행한다.
    pub async fn run_refresh_cycle(&self) -> CoreResult<CycleSummary> {
        self.run_refresh_cycle_at(Utc::now()).await
    }

    /// 주어진 시각 기준으로 갱신 주기를 한 번 실행한다.
    pub async fn run_refresh_cycle_at(&self, now: DateTime<Utc>) -> CoreResult<CycleSummary> {
        self.reporter.log_info("전체 지식 베이스 갱신을 시작합니다");

        let records = self
            .catalog
            .fetch_all(&KnowledgeBaseField::REFRESH_PROJECTION)
            .await?;
        self.reporter
            .log_info(&format!("설정된 지식 베이스 {}개를 찾았습니다", records.len()));

        let mut summary = CycleSummary {
            total: records.len(),
            ..CycleSummary::default()
        };

        for record in &records {
            if let DueStatus::Skip(reason) = due_status(record, now) {
                self.reporter.log_info(&skip_message(record, reason));
                summary.skipped += 1;
                continue;
            }

            match self.refresh_one(record).await {
                RefreshOutcome::Success { .. } => {
                    self.reporter
                        .log_event(REFRESH_SUCCESS_EVENT, &success_properties(&record.kb_id));
                    summary.succeeded += 1;
                }
                RefreshOutcome::Failure { message } => {
                    self.reporter.log_event(
                        REFRESH_FAILURE_EVENT,
                        &failure_properties(&record.kb_id, record.last_refresh_at, &message),
                    );
                    self.reporter.log_warning(
                        &format!("지식 베이스 {} 갱신 실패: {}", record.kb_id, message),
                        &message,
                    );
                    summary.failed += 1;
                }
            }
        }

        self.reporter.log_info(&format!(
            "갱신 주기 완료: total={}, skipped={}, succeeded={}, failed={}",
            summary.total, summary.skipped, summary.succeeded, summary.failed
        ));
        Ok(summary)
    }

    /// 레코드 하나를 갱신하고 모든 오류와 패닉을 RefreshOutcome으로 변환한다.
    pub async fn refresh_one(&self, record: &KnowledgeBaseRecord) -> RefreshOutcome {
        let refresher = Arc::clone(&self.refresher);
        let owned_record = record.clone();
        let joined =
            tokio::spawn(async move { refresher.refresh(&owned_record).await }).await;

        let receipt = match joined {
            Ok(Ok(receipt)) => receipt,
            Ok(Err(error)) => {
                return RefreshOutcome::Failure {
                    message: error.to_string(),
                }
            }
            Err(error) => {
                return RefreshOutcome::Failure {
                    message: format!("갱신 작업 조인 실패: {}", error),
                }
            }
        };

        // 카탈로그 기록은 스케줄러만 수행한다.
        if let Err(error) = self
            .catalog
            .record_refresh(&record.kb_id, receipt.refreshed_at)
            .await
        {
            return RefreshOutcome::Failure {
                message: error.to_string(),
            };
        }

        RefreshOutcome::Success {
            refreshed_at: receipt.refreshed_at,
        }
    }
}

fn skip_message(record: &KnowledgeBaseRecord, reason: SkipReason) -> String {
    match reason {
        SkipReason::NeverRefreshed => format!(
            "{} 갱신을 건너뜁니다: 아직 한 번도 갱신되지 않았습니다",
            record.kb_id
        ),
        SkipReason::Disabled => format!(
            "{} 갱신을 건너뜁니다: 자동 갱신이 비활성화되어 있습니다",
            record.kb_id
        ),
        SkipReason::NotYetDue { next_due_at } => format!(
            "{} 갱신을 건너뜁니다: {}시간 이내에 갱신되었습니다 (다음 기한 {})",
            record.kb_id,
            record.refresh_frequency_hours,
            format_refresh_timestamp(next_due_at)
        ),
    }
}
