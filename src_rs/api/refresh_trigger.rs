// 목적:
// - 관리용 트리거 한 번으로 갱신 주기 하나를 실행한다.
//
// 설명:
// - JSON 설정 페이로드로 Postgres 카탈로그/HTTP 갱신기/tracing 보고자를 구성한 뒤
//   스케줄러를 실행한다.
// - 레코드별 결과는 보고자로만 드러나고, 트리거는 카탈로그 실패 시에만 오류를 반환한다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/refresh_scheduler.rs
// - src_rs/index/postgres_catalog.rs

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::errors::{CoreError, CoreResult};
use crate::core::event_reporter::TracingEventReporter;
use crate::core::refresh_http::{HttpKnowledgeBaseRefresher, RefreshHttpConfigPayload};
use crate::core::refresh_scheduler::RefreshScheduler;
use crate::index::postgres_catalog::{PostgresConfigPayload, PostgresKnowledgeBaseCatalog};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequestPayload {
    pub postgres: PostgresConfigPayload,
    pub refresh_http: RefreshHttpConfigPayload,
}

/// JSON 문자열을 트리거 페이로드로 해석한다.
pub fn parse_payload(payload_json: &str) -> CoreResult<RefreshRequestPayload> {
    serde_json::from_str(payload_json).map_err(|error| {
        CoreError::Serialization(format!("갱신 페이로드 JSON 파싱에 실패했습니다: {}", error))
    })
}

/// 갱신 주기를 한 번 실행한다.
pub async fn run_refresh_trigger(payload: RefreshRequestPayload) -> CoreResult<()> {
    validate_payload(&payload)?;

    let refresher = HttpKnowledgeBaseRefresher::new(payload.refresh_http.clone())?;
    let catalog = PostgresKnowledgeBaseCatalog::new(&payload.postgres).await?;

    let scheduler = RefreshScheduler::new(
        Arc::new(catalog),
        Arc::new(refresher),
        Arc::new(TracingEventReporter),
    );
    scheduler.run_refresh_cycle().await?;
    Ok(())
}

fn validate_payload(payload: &RefreshRequestPayload) -> CoreResult<()> {
    if payload.postgres.pool_max == 0 {
        return Err(CoreError::InvalidConfig(
            "postgres.pool_max는 1 이상이어야 합니다".to_string(),
        ));
    }

    if payload.postgres.pool_min > payload.postgres.pool_max {
        return Err(CoreError::InvalidConfig(format!(
            "postgres.pool_min({})은 pool_max({})보다 클 수 없습니다",
            payload.postgres.pool_min, payload.postgres.pool_max
        )));
    }

    Ok(())
}
